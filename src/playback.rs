use crate::foundation::error::PinscrubError;

/// Why a playback start was rejected (autoplay policy, decode failure).
/// Never escalated by the dispatcher; carried only for logging.
#[derive(thiserror::Error, Debug)]
#[error("playback start rejected: {reason}")]
pub struct PlaybackError {
    pub reason: String,
}

impl PlaybackError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<PlaybackError> for PinscrubError {
    fn from(e: PlaybackError) -> Self {
        PinscrubError::playback(e.reason)
    }
}

/// The media playback primitive. The controller only ever starts and stops
/// it; playback position is the player's own business.
pub trait MediaPlayer {
    /// Best-effort start. Rejections are the caller's to swallow.
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
}

/// A player that accepts every request and does nothing. Useful for replay
/// tooling and tests that only care about the animation path.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPlayer;

impl MediaPlayer for NoopPlayer {
    fn play(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn pause(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MediaPlaybackState {
    Paused,
    Playing,
}

/// Turns the boolean viewport-intersection signal into play/pause calls.
///
/// Driven purely by visibility, never by scroll phase: re-entering from
/// either direction resumes playback, leaving in either direction pauses.
/// A rejected `play()` leaves the state `Paused` and is logged, nothing
/// more; the animation path must never stall on it.
pub struct PlaybackDispatcher {
    player: Box<dyn MediaPlayer>,
    state: MediaPlaybackState,
    intersecting: bool,
}

impl PlaybackDispatcher {
    pub fn new(player: Box<dyn MediaPlayer>) -> Self {
        Self {
            player,
            state: MediaPlaybackState::Paused,
            intersecting: false,
        }
    }

    pub fn state(&self) -> MediaPlaybackState {
        self.state
    }

    pub fn is_intersecting(&self) -> bool {
        self.intersecting
    }

    /// Feed the current intersection signal. Level-triggered input, edge-
    /// triggered effects: repeating the same level is a no-op.
    pub fn on_intersection(&mut self, intersecting: bool) {
        if intersecting == self.intersecting {
            return;
        }
        self.intersecting = intersecting;

        if intersecting {
            match self.player.play() {
                Ok(()) => self.state = MediaPlaybackState::Playing,
                Err(e) => {
                    tracing::warn!(error = %e, "playback start rejected; staying paused");
                }
            }
        } else {
            self.player.pause();
            self.state = MediaPlaybackState::Paused;
        }
    }

    /// Pause and forget the intersection level, so no late completion can
    /// flip the state after the owner is gone.
    pub fn teardown(&mut self) {
        if self.state == MediaPlaybackState::Playing {
            self.player.pause();
        }
        self.state = MediaPlaybackState::Paused;
        self.intersecting = false;
    }
}

impl std::fmt::Debug for PlaybackDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackDispatcher")
            .field("state", &self.state)
            .field("intersecting", &self.intersecting)
            .finish_non_exhaustive()
    }
}
