//! AppKit user interface: status bar menu, capture overlays, recorder panel.

pub mod capture_overlay;
pub mod recorder_panel;
pub mod status_bar;

pub use capture_overlay::{dismiss_capture_overlays, present_capture_overlays, OverlayWindows};
pub use recorder_panel::{
    dismiss_recorder_panel, present_recorder_panel, set_recorder_text, RecorderPanel,
};
pub use status_bar::{install_status_bar, refresh_status_menu};

/// Window level slightly above context menus and the Dock.
pub fn nspop_up_menu_window_level() -> i64 {
    201
}

/// Level for the capture overlays and the recorder panel.
pub fn overlay_window_level() -> i64 {
    nspop_up_menu_window_level() + 1
}
