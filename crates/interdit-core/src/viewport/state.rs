use tracing::debug;

use crate::consts::{DISPLAY_MAX, FLAT_VOLUME_WINDOW};
use crate::geometry::ViewRect;
use crate::slice::Orientation;
use crate::volume::Volume;

/// Intensity range mapped linearly onto 0..=255.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowLevel {
    pub lo: f32,
    pub hi: f32,
}

impl WindowLevel {
    pub fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Window spanning the volume's full value range.
    pub fn from_volume(volume: &Volume) -> Self {
        let (min, max) = volume.value_range();
        if max > min {
            Self::new(min, max)
        } else {
            Self::new(min, min + FLAT_VOLUME_WINDOW)
        }
    }

    /// Rendering is only defined for `hi > lo` (false for NaN bounds too).
    pub fn is_valid(&self) -> bool {
        self.hi > self.lo
    }

    /// Parse the two free-text fields. `None` on malformed input.
    pub fn parse(lo: &str, hi: &str) -> Option<Self> {
        match (lo.trim().parse::<f32>(), hi.trim().parse::<f32>()) {
            (Ok(lo), Ok(hi)) => Some(Self::new(lo, hi)),
            _ => {
                debug!(lo, hi, "discarding malformed window level text");
                None
            }
        }
    }

    /// `clip((v - lo) / (hi - lo), 0, 1) * 255`, truncated.
    ///
    /// Callers must check [`is_valid`](Self::is_valid) first.
    pub fn normalize(&self, v: f32) -> u8 {
        (((v - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0) * DISPLAY_MAX) as u8
    }
}

/// Everything that determines what one viewer shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    pub orientation: Orientation,
    pub slice_index: usize,
    /// `None` means "full slice extent", resolved on the next render.
    pub view_rect: Option<ViewRect>,
    pub window_level: WindowLevel,
}

impl ViewportState {
    /// Slice 0, full extent, window over the volume's value range.
    pub fn new(volume: &Volume, orientation: Orientation) -> Self {
        Self {
            orientation,
            slice_index: 0,
            view_rect: None,
            window_level: WindowLevel::from_volume(volume),
        }
    }

    pub fn max_slice_index(&self, volume: &Volume) -> usize {
        self.orientation.max_index(volume)
    }

    /// `(width, height)` of the current slice.
    pub fn slice_size(&self, volume: &Volume) -> (usize, usize) {
        self.orientation.plane_size(volume)
    }

    /// The visible rect, with "unset" resolved to the full slice.
    pub fn resolved_view_rect(&self, volume: &Volume) -> ViewRect {
        self.view_rect.unwrap_or_else(|| {
            let (w, h) = self.slice_size(volume);
            ViewRect::full(w, h)
        })
    }

    /// Switch plane, re-clamp the slice index and reset the view.
    ///
    /// Returns `false` (and keeps the view) if the orientation is unchanged.
    pub fn set_orientation(&mut self, volume: &Volume, orientation: Orientation) -> bool {
        if orientation == self.orientation {
            return false;
        }
        self.orientation = orientation;
        self.slice_index = self.slice_index.min(self.max_slice_index(volume));
        self.view_rect = None;
        true
    }

    /// Set the slice index, clamped into range. Returns whether it changed.
    pub fn set_slice(&mut self, volume: &Volume, index: usize) -> bool {
        let max = self.max_slice_index(volume);
        if index > max {
            debug!(index, max, "clamping slice index");
        }
        let clamped = index.min(max);
        let changed = clamped != self.slice_index;
        self.slice_index = clamped;
        changed
    }

    /// Set the view rect after clamping it to the slice. Degenerate results
    /// are discarded.
    pub fn set_view_rect(&mut self, volume: &Volume, rect: ViewRect) -> bool {
        let (w, h) = self.slice_size(volume);
        let clamped = rect.clamped(w, h);
        if clamped.is_degenerate() {
            debug!(?rect, "discarding degenerate view rect");
            return false;
        }
        let changed = self.view_rect != Some(clamped);
        self.view_rect = Some(clamped);
        changed
    }

    /// Shift the view by `(dx, dy)` image pixels.
    ///
    /// Each axis moves only if both of its shifted bounds stay inside the
    /// slice; otherwise that axis keeps its current bounds.
    pub fn pan_by(&mut self, volume: &Volume, dx: f32, dy: f32) -> bool {
        let (w, h) = self.slice_size(volume);
        let current = self.resolved_view_rect(volume);
        let mut next = current;

        if let Some((lo, hi)) = shift_axis(current.x_min, current.x_max, dx, w as f32) {
            next.x_min = lo;
            next.x_max = hi;
        } else {
            debug!(dx, "pan leaves x axis unchanged");
        }
        if let Some((lo, hi)) = shift_axis(current.y_min, current.y_max, dy, h as f32) {
            next.y_min = lo;
            next.y_max = hi;
        } else {
            debug!(dy, "pan leaves y axis unchanged");
        }

        let changed = next != current;
        if changed {
            self.view_rect = Some(next);
        }
        changed
    }

    pub fn set_window_level(&mut self, window_level: WindowLevel) -> bool {
        let changed = self.window_level != window_level;
        self.window_level = window_level;
        changed
    }

    /// Back to the full slice extent. Returns whether a crop was active.
    pub fn reset_view(&mut self) -> bool {
        self.view_rect.take().is_some()
    }
}

fn shift_axis(lo: f32, hi: f32, delta: f32, extent: f32) -> Option<(f32, f32)> {
    let (lo, hi) = (lo + delta, hi + delta);
    (lo >= 0.0 && hi <= extent).then_some((lo, hi))
}
