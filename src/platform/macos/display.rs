//! Display geometry and cursor warping via CoreGraphics.
//!
//! The crate's global coordinate space is CoreGraphics space: top-left
//! origin on the primary display, y growing downward. AppKit hands out
//! bottom-left-origin points, so clicks are flipped here before they
//! reach the core.

use core_graphics::display::CGDisplay;
use core_graphics::geometry::CGPoint;

use crate::cursor::CursorHost;
use crate::flip_screen_y;
use crate::model::{DisplayBounds, HotzonePoint};

/// Bounds of every active display. Returns an empty list when enumeration
/// fails; the capture flow treats that as "no screens".
pub fn connected_displays() -> Vec<DisplayBounds> {
    let ids = match CGDisplay::active_displays() {
        Ok(ids) => ids,
        Err(status) => {
            log::error!("display enumeration failed: {status}");
            return Vec::new();
        }
    };
    ids.iter()
        .map(|&display_id| {
            let bounds = CGDisplay::new(display_id).bounds();
            DisplayBounds::new(
                bounds.origin.x,
                bounds.origin.y,
                bounds.size.width,
                bounds.size.height,
            )
        })
        .collect()
}

/// Bounds of the primary display.
pub fn primary_display() -> DisplayBounds {
    let bounds = CGDisplay::main().bounds();
    DisplayBounds::new(
        bounds.origin.x,
        bounds.origin.y,
        bounds.size.width,
        bounds.size.height,
    )
}

/// Convert an AppKit screen point (bottom-left origin) to the global
/// space.
pub fn to_global_point(x: f64, cocoa_y: f64) -> HotzonePoint {
    HotzonePoint::new(x, flip_screen_y(cocoa_y, primary_display().height))
}

/// `CursorHost` implementation that moves the real cursor.
pub struct SystemCursorHost;

impl CursorHost for SystemCursorHost {
    fn warp_to(&mut self, point: HotzonePoint) {
        let status = unsafe { CGWarpMouseCursorPosition(CGPoint::new(point.x, point.y)) };
        if status != 0 {
            log::error!("cursor warp failed: {status}");
            return;
        }
        // A warp suppresses physical mouse input for a fraction of a
        // second unless the cursor is explicitly re-associated.
        unsafe {
            let _ = CGAssociateMouseAndMouseCursorPosition(1);
        }
    }

    fn primary_display(&self) -> Option<DisplayBounds> {
        Some(primary_display())
    }
}

// FFI declarations for cursor control
#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGWarpMouseCursorPosition(newCursorPosition: CGPoint) -> i32;
    fn CGAssociateMouseAndMouseCursorPosition(connected: u32) -> i32;
}
