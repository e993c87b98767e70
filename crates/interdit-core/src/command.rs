use std::fmt;

use crate::geometry::{Point, ViewRect};
use crate::slice::Orientation;
use crate::viewport::WindowLevel;

/// A typed mutation of one viewer's [`ViewportState`](crate::viewport::ViewportState).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Shift the view by image pixels, per axis, only where it stays in bounds.
    PanBy { dx: f32, dy: f32 },
    SetViewRect(ViewRect),
    /// Back to the full slice extent.
    ResetView,
    SetWindowLevel(WindowLevel),
    SetOrientation(Orientation),
    /// Absolute index, clamped by the receiving viewer.
    SetSlice(usize),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PanBy { dx, dy } => write!(f, "pan by ({dx:.1}, {dy:.1})"),
            Self::SetViewRect(r) => write!(
                f,
                "view x {:.1}..{:.1}, y {:.1}..{:.1}",
                r.x_min, r.x_max, r.y_min, r.y_max
            ),
            Self::ResetView => write!(f, "reset view"),
            Self::SetWindowLevel(w) => write!(f, "window {}..{}", w.lo, w.hi),
            Self::SetOrientation(o) => write!(f, "orientation {o}"),
            Self::SetSlice(i) => write!(f, "slice {i}"),
        }
    }
}

/// Who caused a change.
///
/// `External` changes come from the user and are broadcast when the matching
/// sync flag is on. `Internal` changes are applied by the broadcaster itself
/// and are never broadcast again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    External,
    Internal,
}

/// Raw pointer input in display-surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}
