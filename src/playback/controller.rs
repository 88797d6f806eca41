//! Playback controller
//!
//! Owns the single audio session. At most one episode plays at a time:
//! starting a new one stops the current one first, and the stop completes
//! before the new start is attempted. A failed start leaves the controller
//! with no session, and the error goes back to the caller so the UI can show
//! it instead of failing silently.

use thiserror::Error;

use crate::models::Episode;

/// Errors from starting audio playback
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Audio player '{0}' not found. Install it first.")]
    PlayerNotFound(String),

    #[error("Failed to start audio player: {0}")]
    StartFailed(#[from] std::io::Error),
}

/// The seam between the controller and whatever actually makes sound.
///
/// `start` begins playing a stream URL; `stop` halts the current stream and
/// is expected to have taken effect by the time it returns. Stop failures
/// have no caller-side recovery, so implementations log and swallow them.
pub trait AudioOutput: Send {
    fn start(&mut self, url: &str) -> Result<(), PlaybackError>;
    fn stop(&mut self);
}

/// Single-session playback controller
pub struct PlaybackController {
    output: Box<dyn AudioOutput>,
    current: Option<Episode>,
}

impl PlaybackController {
    pub fn new(output: Box<dyn AudioOutput>) -> Self {
        Self {
            output,
            current: None,
        }
    }

    /// Play `episode`, stopping any active session first.
    ///
    /// On error the previous session is already stopped and no new one
    /// exists; [`current_episode`](Self::current_episode) returns `None`.
    pub fn play(&mut self, episode: &Episode) -> Result<(), PlaybackError> {
        if self.current.take().is_some() {
            self.output.stop();
        }

        self.output.start(&episode.file)?;
        self.current = Some(episode.clone());

        tracing::info!(episode = %episode.title, "playback started");
        Ok(())
    }

    /// Stop the active session, if any. A no-op when idle.
    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            self.output.stop();
            tracing::info!("playback stopped");
        }
    }

    /// The episode currently playing, if any.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.current.as_ref()
    }
}
