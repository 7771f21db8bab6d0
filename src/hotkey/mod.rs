//! Global hotkey support: shortcut encoding and OS registration.

pub mod codec;
pub mod manager;

pub use manager::{HotkeyBackend, HotkeyError, HotkeyManager, RegistrationState};
