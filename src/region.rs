use crate::foundation::error::{PinscrubError, PinscrubResult};

/// One scroll-pinned animation zone.
///
/// Offsets are in whatever scroll units the host supplies (pixels, lines);
/// the region only ever compares and divides them, so the unit cancels out.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PinRegion {
    /// Scroll offset at which pinning begins.
    pub trigger_start: f64,
    /// Scroll distance consumed while pinned, mapped onto the [0,1]
    /// progress domain.
    pub scrub_length: f64,
}

impl PinRegion {
    /// Viewport heights of scroll the authored region consumes while pinned.
    pub const DEFAULT_SCRUB_VIEWPORTS: f64 = 4.0;

    pub fn new(trigger_start: f64, scrub_length: f64) -> PinscrubResult<Self> {
        let region = Self {
            trigger_start,
            scrub_length,
        };
        region.validate()?;
        Ok(region)
    }

    /// The authored region: pinning starts when the section top hits the top
    /// of the viewport and runs for four viewport heights of scroll.
    pub fn for_viewport(section_top: f64, viewport_height: f64) -> PinscrubResult<Self> {
        Self::new(section_top, Self::DEFAULT_SCRUB_VIEWPORTS * viewport_height)
    }

    pub fn validate(&self) -> PinscrubResult<()> {
        if !self.trigger_start.is_finite() {
            return Err(PinscrubError::validation("trigger_start must be finite"));
        }
        if !self.scrub_length.is_finite() || self.scrub_length <= 0.0 {
            return Err(PinscrubError::validation("scrub_length must be > 0"));
        }
        Ok(())
    }

    pub fn trigger_end(&self) -> f64 {
        self.trigger_start + self.scrub_length
    }

    /// True while the given scroll offset lies inside the pinned range.
    pub fn contains(&self, scroll_offset: f64) -> bool {
        scroll_offset >= self.trigger_start && scroll_offset <= self.trigger_end()
    }
}

/// Viewport-relative trigger line for the playback visibility signal.
///
/// The media region counts as "in view" once its top edge crosses a line
/// placed at `start_fraction` of the viewport height, measured from the top.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ViewportTrigger {
    pub start_fraction: f64,
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        // The authored trigger: "in view" once the top reaches 80% down
        // the viewport.
        Self {
            start_fraction: 0.8,
        }
    }
}

impl ViewportTrigger {
    pub fn new(start_fraction: f64) -> PinscrubResult<Self> {
        let trigger = Self { start_fraction };
        trigger.validate()?;
        Ok(trigger)
    }

    pub fn validate(&self) -> PinscrubResult<()> {
        if !self.start_fraction.is_finite()
            || self.start_fraction <= 0.0
            || self.start_fraction > 1.0
        {
            return Err(PinscrubError::validation(
                "start_fraction must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Reduce a measured section-top position to the boolean intersection
    /// signal the dispatcher consumes. Direction-independent.
    pub fn is_intersecting(&self, section_top: f64, viewport_height: f64) -> bool {
        section_top <= viewport_height * self.start_fraction
    }
}
