//! Input handling: the Carbon hotkey backend, recorder event monitors and
//! system observers.

pub mod hotkeys;
pub mod monitors;
pub mod observers;

pub use hotkeys::CarbonHotkeyBackend;
pub use monitors::{install_recorder_monitors, remove_recorder_monitors, RecorderMonitors};
pub use observers::{
    install_termination_observer, install_wakeup_space_observers, start_registration_keepalive,
};
