//! Screen positions and display geometry.
//!
//! Coordinates throughout the crate are in the global display space used by
//! CoreGraphics: origin at the top-left corner of the primary display, y
//! growing downward. AppKit points (bottom-left origin) are flipped at the
//! platform boundary before they reach this module.

/// A saved click target in global display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotzonePoint {
    pub x: f64,
    pub y: f64,
}

impl HotzonePoint {
    pub fn new(x: f64, y: f64) -> HotzonePoint {
        HotzonePoint { x, y }
    }

    /// Human-readable form shown in the status menu, e.g. "812, 413".
    pub fn label(&self) -> String {
        format!("{:.0}, {:.0}", self.x, self.y)
    }
}

/// Frame of one connected display in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> DisplayBounds {
        DisplayBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the display.
    pub fn center(&self) -> HotzonePoint {
        HotzonePoint {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Whether `point` falls inside this display. Edges on the right and
    /// bottom belong to the neighbouring display, matching how the OS
    /// assigns pixels to screens.
    pub fn contains(&self, point: &HotzonePoint) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}
