use crate::geometry::{Point, Rect};

/// Where the last frame landed on the display surface and which part of
/// the slice it showed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderGeometry {
    /// Pixel rect covered by the bitmap on the display surface.
    pub display_rect: Rect,
    /// Image-coordinate rect (the view rect) the bitmap represents.
    pub image_rect: Rect,
}

impl RenderGeometry {
    pub fn to_image(&self, p: Point) -> Point {
        let (d, i) = (&self.display_rect, &self.image_rect);
        Point::new(
            (p.x - d.x) * (i.width / d.width) + i.x,
            (p.y - d.y) * (i.height / d.height) + i.y,
        )
    }

    pub fn from_image(&self, p: Point) -> Point {
        let (d, i) = (&self.display_rect, &self.image_rect);
        Point::new(
            (p.x - i.x) * (d.width / i.width) + d.x,
            (p.y - i.y) * (d.height / i.height) + d.y,
        )
    }
}

/// Display <-> image conversion against the most recent render.
///
/// Before the first render there is no geometry and both directions
/// return [`Point::ZERO`].
#[derive(Clone, Debug, Default)]
pub struct CoordinateMapper {
    geometry: Option<RenderGeometry>,
}

impl CoordinateMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(&self) -> Option<&RenderGeometry> {
        self.geometry.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn record(&mut self, geometry: RenderGeometry) {
        self.geometry = Some(geometry);
    }

    pub fn to_image(&self, p: Point) -> Point {
        self.geometry.map_or(Point::ZERO, |g| g.to_image(p))
    }

    pub fn from_image(&self, p: Point) -> Point {
        self.geometry.map_or(Point::ZERO, |g| g.from_image(p))
    }

    /// Whether `p` lies on the rendered bitmap.
    pub fn contains_display(&self, p: Point) -> bool {
        self.geometry.is_some_and(|g| g.display_rect.contains(p))
    }
}
