//! Pinscrub is a scroll-position-driven animation controller.
//!
//! It pins a media region to the viewport, maps scroll distance consumed
//! inside the pinned range to normalized progress, and drives a multi-channel
//! visual state (size, corner radius, overlay opacities, media scale) as a
//! pure function of that progress, while playback side effects are keyed to
//! a separate viewport-visibility signal.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `scroll offset + PinRegion -> progress in [0,1]`
//! 2. **Resolve**: `progress -> (Phase, phase-local progress)`
//! 3. **Interpolate**: `(Phase, local) -> AnimatedStateVector`
//! 4. **Apply**: the vector goes to a [`FrameSink`] (the rendering collaborator)
//! 5. **Dispatch**: viewport entry/exit flips [`MediaPlaybackState`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: sampling, resolution, and interpolation
//!   are pure; identical inputs always produce identical vectors, so
//!   scrubbing back and forth cannot drift.
//! - **Atomic updates**: each event produces the whole vector from one
//!   progress sample before anything is applied or dispatched.
//! - **Fatal-at-init validation**: a controller that constructs will not
//!   fail on a scroll event; playback rejections are logged and swallowed.
#![forbid(unsafe_code)]

mod foundation;

pub mod controller;
pub mod phase;
pub mod playback;
pub mod region;
pub mod sampler;
pub mod vector;

pub use controller::{
    ControllerConfig, FrameSink, FrameUpdate, PinController, RecordingSink, ScrollSample,
};
pub use foundation::error::{PinscrubError, PinscrubResult};
pub use foundation::math::{clamp01, lerp};
pub use phase::{Phase, PhaseProgress, PhaseTable};
pub use playback::{MediaPlaybackState, MediaPlayer, NoopPlayer, PlaybackDispatcher, PlaybackError};
pub use region::{PinRegion, ViewportTrigger};
pub use sampler::{ProgressSampler, ScrubLag};
pub use vector::{AnimatedStateVector, interpolate};
