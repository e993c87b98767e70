mod common;

use approx::assert_abs_diff_eq;
use interdit_core::geometry::{Point, Rect, ViewRect};
use interdit_core::render::render_slice;
use interdit_core::slice::Orientation;
use interdit_core::viewport::{CoordinateMapper, RenderGeometry, ViewportState};

use common::ramp_volume;

fn geometry() -> RenderGeometry {
    RenderGeometry {
        display_rect: Rect::new(40.0, 30.0, 200.0, 100.0),
        image_rect: Rect::new(10.0, 5.0, 50.0, 25.0),
    }
}

#[test]
fn test_unrendered_mapper_returns_zero() {
    let mapper = CoordinateMapper::new();
    assert!(!mapper.is_ready());
    assert_eq!(mapper.to_image(Point::new(12.0, 34.0)), Point::ZERO);
    assert_eq!(mapper.from_image(Point::new(12.0, 34.0)), Point::ZERO);
    assert!(!mapper.contains_display(Point::new(0.0, 0.0)));
}

#[test]
fn test_corners_map_to_view_bounds() {
    let g = geometry();
    assert_eq!(g.to_image(Point::new(40.0, 30.0)), Point::new(10.0, 5.0));
    assert_eq!(g.to_image(Point::new(240.0, 130.0)), Point::new(60.0, 30.0));
}

#[test]
fn test_round_trip_with_offset_display() {
    let mut mapper = CoordinateMapper::new();
    mapper.record(geometry());

    for &(x, y) in &[(40.0, 30.0), (41.5, 99.0), (123.0, 77.7), (239.0, 129.0)] {
        let p = Point::new(x, y);
        let back = mapper.from_image(mapper.to_image(p));
        assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-3);
        assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-3);
    }

    for &(x, y) in &[(10.0, 5.0), (33.3, 12.5), (60.0, 30.0)] {
        let p = Point::new(x, y);
        let back = mapper.to_image(mapper.from_image(p));
        assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-3);
        assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-3);
    }
}

#[test]
fn test_contains_display() {
    let mut mapper = CoordinateMapper::new();
    mapper.record(geometry());
    assert!(mapper.contains_display(Point::new(100.0, 50.0)));
    assert!(!mapper.contains_display(Point::new(39.0, 50.0)));
    assert!(!mapper.contains_display(Point::new(100.0, 131.0)));
}

#[test]
fn test_geometry_from_render() {
    let v = ramp_volume(20, 10, 1);
    let mut state = ViewportState::new(&v, Orientation::Axial);
    state.set_view_rect(&v, ViewRect::new(5.0, 15.0, 2.0, 7.0));

    let display = Rect::new(15.0, 7.0, 100.0, 50.0);
    let frame = render_slice(&v, &mut state, display).unwrap().unwrap();
    assert_eq!(frame.geometry.display_rect, display);
    assert_eq!(frame.geometry.image_rect, Rect::new(5.0, 2.0, 10.0, 5.0));

    let mut mapper = CoordinateMapper::new();
    mapper.record(frame.geometry);
    let p = mapper.to_image(Point::new(65.0, 32.0));
    assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-4);
    assert_abs_diff_eq!(p.y, 4.5, epsilon = 1e-4);
}
