use interdit_core::geometry::{Point, Rect};
use image::GrayImage;

/// Convert a rendered 8-bit slice into an egui ColorImage.
pub fn raster_to_color_image(raster: &GrayImage) -> egui::ColorImage {
    let size = [raster.width() as usize, raster.height() as usize];
    egui::ColorImage::from_gray(size, raster.as_raw())
}

/// The core works in physical pixels so that rasters match the surface
/// exactly; egui positions are logical points scaled by `pixels_per_point`.
pub fn to_point(pos: egui::Pos2, pixels_per_point: f32) -> Point {
    Point::new(pos.x * pixels_per_point, pos.y * pixels_per_point)
}

pub fn to_core_rect(rect: egui::Rect, pixels_per_point: f32) -> Rect {
    Rect::new(
        rect.min.x * pixels_per_point,
        rect.min.y * pixels_per_point,
        rect.width() * pixels_per_point,
        rect.height() * pixels_per_point,
    )
}

pub fn to_egui_rect(rect: Rect, pixels_per_point: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y) / pixels_per_point,
        egui::vec2(rect.width, rect.height) / pixels_per_point,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_rect_is_in_physical_pixels() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 150.0));
        let core = to_core_rect(rect, 2.0);
        assert_eq!(core, Rect::new(20.0, 40.0, 400.0, 300.0));
        assert_eq!(to_egui_rect(core, 2.0), rect);
    }

    #[test]
    fn test_point_scales_with_display() {
        let p = to_point(egui::pos2(3.0, 4.5), 1.5);
        assert_eq!((p.x, p.y), (4.5, 6.75));
        assert_eq!(to_point(egui::pos2(3.0, 4.5), 1.0), Point::new(3.0, 4.5));
    }

    #[test]
    fn test_gray_raster_keeps_size() {
        let raster = GrayImage::new(7, 3);
        assert_eq!(raster_to_color_image(&raster).size, [7, 3]);
    }
}
