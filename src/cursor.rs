//! Cursor warping on hotkey activation.

use crate::model::{DisplayBounds, HotkeySettings, HotzonePoint};

/// Host surface the dispatcher warps through. The macOS implementation
/// drives CoreGraphics; tests substitute a recorder.
pub trait CursorHost {
    /// Move the cursor to `point` without generating movement events.
    fn warp_to(&mut self, point: HotzonePoint);

    /// Bounds of the primary display, if one is connected.
    fn primary_display(&self) -> Option<DisplayBounds>;
}

/// Turns a hotkey activation into a cursor warp.
pub struct CursorDispatcher<H: CursorHost> {
    host: H,
}

impl<H: CursorHost> CursorDispatcher<H> {
    pub fn new(host: H) -> CursorDispatcher<H> {
        CursorDispatcher { host }
    }

    /// Handle one activation against the current settings. Returns the
    /// point warped to, or None when the jump was ruled out.
    pub fn activate(&mut self, settings: &HotkeySettings) -> Option<HotzonePoint> {
        if !settings.enabled {
            log::debug!("hotkey fired while disabled, ignoring");
            return None;
        }

        let target = match settings.hotzone {
            Some(point) => point,
            None => match self.host.primary_display() {
                Some(display) => display.center(),
                None => {
                    log::warn!("no hotzone saved and no display to center on");
                    return None;
                }
            },
        };

        self.host.warp_to(target);
        log::debug!("warped cursor to {}", target.label());
        Some(target)
    }
}
