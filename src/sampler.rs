use crate::{
    foundation::error::{PinscrubError, PinscrubResult},
    foundation::math::clamp01,
    region::PinRegion,
};

/// Maps raw scroll offsets inside a [`PinRegion`] to normalized progress.
///
/// Sampling is a pure function of the offset: no accumulation, no drift,
/// so scrubbing back and forth reproduces identical values.
#[derive(Clone, Copy, Debug)]
pub struct ProgressSampler {
    region: PinRegion,
}

impl ProgressSampler {
    /// Degenerate regions (`scrub_length <= 0`) are rejected here, at setup,
    /// never at sample time.
    pub fn new(region: PinRegion) -> PinscrubResult<Self> {
        region.validate()?;
        Ok(Self { region })
    }

    pub fn region(&self) -> &PinRegion {
        &self.region
    }

    /// Normalized progress in [0,1] for the given scroll offset.
    /// Monotonic in the offset and idempotent for repeated calls.
    pub fn sample(&self, scroll_offset: f64) -> f64 {
        clamp01((scroll_offset - self.region.trigger_start) / self.region.scrub_length)
    }
}

/// Optional scrub smoothing: painted progress exponentially catches up to
/// the sampled target instead of jumping, like a scrubbed timeline with a
/// lag factor.
///
/// This is the one deliberately stateful piece of the progress path, so it
/// lives outside [`ProgressSampler`] and is off by default. It never
/// overshoots and snaps to the target once the gap is below resolution.
#[derive(Clone, Copy, Debug)]
pub struct ScrubLag {
    factor: f64,
    painted: Option<f64>,
}

impl ScrubLag {
    const SNAP_EPS: f64 = 1e-4;

    /// `factor` is the per-event catch-up fraction in (0, 1].
    pub fn new(factor: f64) -> PinscrubResult<Self> {
        if !factor.is_finite() || factor <= 0.0 || factor > 1.0 {
            return Err(PinscrubError::validation(
                "scrub lag factor must be in (0, 1]",
            ));
        }
        Ok(Self {
            factor,
            painted: None,
        })
    }

    /// Advance toward `target` and return the painted progress.
    /// The first sample after construction or [`reset`](Self::reset) starts
    /// exactly at the target.
    pub fn advance(&mut self, target: f64) -> f64 {
        let target = clamp01(target);
        let painted = match self.painted {
            None => target,
            Some(prev) => {
                let next = prev + (target - prev) * self.factor;
                if (target - next).abs() < Self::SNAP_EPS {
                    target
                } else {
                    next
                }
            }
        };
        self.painted = Some(painted);
        painted
    }

    pub fn reset(&mut self) {
        self.painted = None;
    }
}
