//! Interactive capture flows.
//!
//! Two session types: picking a hotzone point by clicking a full-screen
//! overlay, and recording a replacement keyboard shortcut. Both are pure
//! state machines; the platform layer owns the windows and event monitors
//! that feed them.

pub mod hotzone;
pub mod shortcut;

pub use hotzone::{CaptureError, CaptureOutcome, HotzoneCapture};
pub use shortcut::{ShortcutRecorder, RECORDER_PLACEHOLDER};
