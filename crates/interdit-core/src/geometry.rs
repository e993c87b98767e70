//! Plain 2D value types shared by the viewport, mapper and interaction code.
//!
//! Display-surface coordinates and image coordinates both use [`Point`];
//! which space a value lives in is decided by the API that produced it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle stored as origin + size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect spanning two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Visible crop of the current slice, in image pixel coordinates.
///
/// Always kept non-degenerate and inside `[0, width] x [0, height]` of the
/// slice it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewRect {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl ViewRect {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The whole slice.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0.0, width as f32, 0.0, height as f32)
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Clamp both axes into `[0, width] x [0, height]`.
    pub fn clamped(&self, width: usize, height: usize) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self::new(
            self.x_min.clamp(0.0, w),
            self.x_max.clamp(0.0, w),
            self.y_min.clamp(0.0, h),
            self.y_max.clamp(0.0, h),
        )
    }

    /// Fractions of the given slice size: `[x_min, x_max, y_min, y_max]`.
    pub fn to_relative(&self, width: usize, height: usize) -> [f32; 4] {
        let (w, h) = (width as f32, height as f32);
        [
            self.x_min / w,
            self.x_max / w,
            self.y_min / h,
            self.y_max / h,
        ]
    }

    /// Inverse of [`to_relative`](Self::to_relative) against another slice size.
    pub fn from_relative(rel: [f32; 4], width: usize, height: usize) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self::new(rel[0] * w, rel[1] * w, rel[2] * h, rel[3] * h)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let r = Rect::from_corners(Point::new(10.0, 2.0), Point::new(4.0, 8.0));
        assert_eq!(r, Rect::new(4.0, 2.0, 6.0, 6.0));
    }

    #[test]
    fn test_relative_roundtrip_other_size() {
        let v = ViewRect::new(25.0, 75.0, 0.0, 50.0);
        let rel = v.to_relative(100, 50);
        assert_eq!(rel, [0.25, 0.75, 0.0, 1.0]);
        assert_eq!(
            ViewRect::from_relative(rel, 200, 80),
            ViewRect::new(50.0, 150.0, 0.0, 80.0)
        );
    }

    #[test]
    fn test_degenerate() {
        assert!(ViewRect::new(3.0, 3.0, 0.0, 5.0).is_degenerate());
        assert!(!ViewRect::full(1, 1).is_degenerate());
    }
}
