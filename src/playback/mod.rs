//! Audio playback
//!
//! - PlaybackController: single-flight session control (stop before start)
//! - AudioOutput: the seam between the controller and the actual player
//! - MpvAudioOutput: production output backed by an external mpv process

pub mod controller;
pub mod mpv;

pub use controller::{AudioOutput, PlaybackController, PlaybackError};
pub use mpv::MpvAudioOutput;
