//! Jump the mouse cursor to a saved screen position with a global hotkey.
//!
//! The crate splits into a pure core (domain model, capture state
//! machines, hotkey registration, the settings store) and a thin macOS
//! layer under `platform` that owns every FFI call. Keep this file free
//! of FFI so the core tests run as normal integration tests on any
//! platform.

pub mod capture;
pub mod config;
pub mod cursor;
pub mod events;
pub mod hotkey;
pub mod model;
pub mod platform;
pub mod store;

pub use capture::{CaptureError, CaptureOutcome, HotzoneCapture, ShortcutRecorder};
pub use cursor::{CursorDispatcher, CursorHost};
pub use events::AppEvent;
pub use hotkey::{HotkeyError, HotkeyManager, RegistrationState};
pub use model::{DisplayBounds, HotkeySettings, HotzonePoint, Modifiers, ShortcutDefinition};
pub use store::{SettingsChange, SettingsStore};

/// Convert a y coordinate from AppKit's bottom-left-origin screen space to
/// the top-left-origin global space shared with CoreGraphics, given the
/// primary display height.
pub fn flip_screen_y(y: f64, primary_height: f64) -> f64 {
    primary_height - y
}
