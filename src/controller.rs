use crate::{
    foundation::error::PinscrubResult,
    phase::{Phase, PhaseTable},
    playback::{MediaPlaybackState, MediaPlayer, PlaybackDispatcher},
    region::PinRegion,
    sampler::{ProgressSampler, ScrubLag},
    vector::{AnimatedStateVector, interpolate},
};

/// Receives each computed state vector. The controller has no opinion on
/// how (or whether) the vector is painted.
pub trait FrameSink {
    fn apply(&mut self, vector: &AnimatedStateVector);
}

/// A sink that keeps every applied vector, for replay dumps and tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<AnimatedStateVector>,
}

impl FrameSink for RecordingSink {
    fn apply(&mut self, vector: &AnimatedStateVector) {
        self.frames.push(*vector);
    }
}

/// Load-time configuration for one controller.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ControllerConfig {
    pub region: PinRegion,
    #[serde(default)]
    pub phases: PhaseTable,
    /// Optional scrub-lag catch-up fraction in (0, 1]. Absent means painted
    /// progress tracks sampled progress exactly.
    #[serde(default)]
    pub scrub_lag: Option<f64>,
}

impl ControllerConfig {
    pub fn new(region: PinRegion) -> Self {
        Self {
            region,
            phases: PhaseTable::default(),
            scrub_lag: None,
        }
    }
}

/// One scroll or combined scroll+visibility event.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    pub offset: f64,
    /// Intersection signal for the same event, if the source measured one.
    #[serde(default)]
    pub intersecting: Option<bool>,
}

/// What one update produced, in the order it was produced.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameUpdate {
    pub pinned: bool,
    pub progress: f64,
    pub phase: Phase,
    pub phase_local: f64,
    pub vector: AnimatedStateVector,
    pub playback: MediaPlaybackState,
}

/// Owns the pinned region's lifecycle: sampling, phase resolution,
/// interpolation, sink application, and playback dispatch, in that order.
///
/// Every update recomputes the whole vector from one progress sample, so a
/// frame can never mix values from two samples, and scrolling back and
/// forth reproduces identical vectors for identical offsets (the scrub-lag
/// smoother is the documented, opt-in exception on the painted path).
pub struct PinController {
    sampler: ProgressSampler,
    phases: PhaseTable,
    scrub_lag: Option<ScrubLag>,
    dispatcher: PlaybackDispatcher,
    sink: Box<dyn FrameSink>,
    pinned: bool,
    torn_down: bool,
}

impl PinController {
    /// Validates all configuration up front; a controller that constructs
    /// will never fail on a scroll event. Applies the resting-state vector
    /// to the sink before any event arrives.
    pub fn new(
        config: ControllerConfig,
        player: Box<dyn MediaPlayer>,
        mut sink: Box<dyn FrameSink>,
    ) -> PinscrubResult<Self> {
        let sampler = ProgressSampler::new(config.region)?;
        config.phases.validate()?;
        let scrub_lag = config.scrub_lag.map(ScrubLag::new).transpose()?;

        sink.apply(&AnimatedStateVector::initial());

        Ok(Self {
            sampler,
            phases: config.phases,
            scrub_lag,
            dispatcher: PlaybackDispatcher::new(player),
            sink,
            pinned: false,
            torn_down: false,
        })
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn playback(&self) -> MediaPlaybackState {
        self.dispatcher.state()
    }

    /// Process one event: recompute and apply the state vector first, then
    /// evaluate any side-effect dispatch carried by the same event. Returns
    /// `None` once torn down.
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn update(&mut self, sample: ScrollSample) -> Option<FrameUpdate> {
        if self.torn_down {
            return None;
        }

        let progress = self.sampler.sample(sample.offset);
        let pinned = self.sampler.region().contains(sample.offset);
        if pinned != self.pinned {
            tracing::debug!(pinned, progress, "pin state changed");
            self.pinned = pinned;
        }

        let painted = match self.scrub_lag.as_mut() {
            Some(lag) => lag.advance(progress),
            None => progress,
        };

        let pp = self.phases.resolve(painted);
        let vector = interpolate(pp);
        self.sink.apply(&vector);

        // Visual state is applied above before playback is touched, so a
        // frame never pairs a stale opacity with a new playback state.
        if let Some(intersecting) = sample.intersecting {
            self.dispatcher.on_intersection(intersecting);
        }

        Some(FrameUpdate {
            pinned,
            progress,
            phase: pp.phase,
            phase_local: pp.local,
            vector,
            playback: self.dispatcher.state(),
        })
    }

    /// Scroll-only event.
    pub fn on_scroll(&mut self, offset: f64) -> Option<FrameUpdate> {
        self.update(ScrollSample {
            offset,
            intersecting: None,
        })
    }

    /// Visibility-only event; leaves the animated state untouched.
    pub fn on_intersection(&mut self, intersecting: bool) {
        if self.torn_down {
            return;
        }
        self.dispatcher.on_intersection(intersecting);
    }

    /// Release everything: pauses playback, clears the intersection level,
    /// and makes every later event inert, so a completion arriving after
    /// teardown cannot re-trigger state changes.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        tracing::debug!("controller teardown");
        self.dispatcher.teardown();
        if let Some(lag) = self.scrub_lag.as_mut() {
            lag.reset();
        }
        self.pinned = false;
        self.torn_down = true;
    }
}

impl std::fmt::Debug for PinController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinController")
            .field("region", self.sampler.region())
            .field("phases", &self.phases)
            .field("pinned", &self.pinned)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}
