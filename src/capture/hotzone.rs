//! Hotzone capture session.
//!
//! Pure state machine behind the full-screen "click a point" flow. The
//! platform layer opens one overlay window per display and forwards clicks
//! and Escape presses here; the machine guarantees a single outcome per
//! session no matter how the events race.

use crate::model::{DisplayBounds, HotzonePoint};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// No displays are connected, so there is nothing to present on.
    #[error("no screens available for hotzone capture")]
    NoScreensAvailable,
}

/// How a capture session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureOutcome {
    /// The user clicked this point (global display coordinates).
    PointSelected(HotzonePoint),
    /// The user backed out without choosing a point.
    Cancelled,
}

/// One in-flight capture session.
#[derive(Debug)]
pub struct HotzoneCapture {
    surfaces: Vec<DisplayBounds>,
    finished: bool,
}

impl HotzoneCapture {
    /// Start a session covering every connected display.
    pub fn begin(displays: &[DisplayBounds]) -> Result<HotzoneCapture, CaptureError> {
        if displays.is_empty() {
            return Err(CaptureError::NoScreensAvailable);
        }
        Ok(HotzoneCapture {
            surfaces: displays.to_vec(),
            finished: false,
        })
    }

    /// Number of capture surfaces still presented.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// A click landed on one of the surfaces. The first click wins; any
    /// event arriving after the session finished returns None.
    pub fn click(&mut self, point: HotzonePoint) -> Option<CaptureOutcome> {
        if self.finished {
            return None;
        }
        self.finished = true;
        self.surfaces.clear();
        Some(CaptureOutcome::PointSelected(point))
    }

    /// Escape was pressed on one of the surfaces.
    pub fn escape(&mut self) -> Option<CaptureOutcome> {
        if self.finished {
            return None;
        }
        self.finished = true;
        self.surfaces.clear();
        Some(CaptureOutcome::Cancelled)
    }
}
