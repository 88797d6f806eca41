//! mpv audio output
//!
//! Plays episode audio through an external mpv process, audio only and fully
//! detached from the terminal so the TUI keeps the screen. The process is
//! killed on stop and on drop.

use std::process::Stdio;

use tokio::process::{Child, Command};

use crate::playback::controller::{AudioOutput, PlaybackError};

/// External-process audio output (mpv by default, any mpv-compatible
/// command via config)
pub struct MpvAudioOutput {
    command: String,
    child: Option<Child>,
}

impl MpvAudioOutput {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            child: None,
        }
    }

    /// Block until the player process exits. CLI playback uses this; the TUI
    /// never does.
    pub async fn wait(&mut self) -> Result<(), PlaybackError> {
        if let Some(child) = self.child.as_mut() {
            let _ = child.wait().await;
            self.child = None;
        }
        Ok(())
    }
}

impl AudioOutput for MpvAudioOutput {
    fn start(&mut self, url: &str) -> Result<(), PlaybackError> {
        // Clear out any leftover process before spawning a fresh one.
        self.stop();

        let mut cmd = Command::new(&self.command);
        cmd.arg("--no-video")
            .arg("--really-quiet")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlaybackError::PlayerNotFound(self.command.clone())
            } else {
                PlaybackError::StartFailed(e)
            }
        })?;

        tracing::debug!(player = %self.command, url, "spawned audio process");
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            // The process may have exited on its own already.
            if let Err(e) = child.start_kill() {
                tracing::debug!(error = %e, "audio process was already gone");
            }
        }
    }
}
