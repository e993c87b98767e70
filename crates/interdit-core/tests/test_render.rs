mod common;

use interdit_core::command::{Command, Origin};
use interdit_core::geometry::{Rect, ViewRect};
use interdit_core::render::render_slice;
use interdit_core::slice::Orientation;
use interdit_core::viewport::{ViewportState, WindowLevel};
use interdit_core::volume::Volume;

use common::{display, ramp_volume, rendered_group};

fn row_volume(values: &[f32]) -> Volume {
    Volume::from_vec(values.len(), 1, 1, values.to_vec()).unwrap()
}

#[test]
fn test_raster_matches_display_size() {
    let v = ramp_volume(8, 6, 2);
    let mut state = ViewportState::new(&v, Orientation::Axial);
    let frame = render_slice(&v, &mut state, Rect::new(3.0, 4.0, 100.4, 49.6))
        .unwrap()
        .unwrap();
    assert_eq!(frame.raster.dimensions(), (100, 50));
}

#[test]
fn test_unset_view_resolves_to_full_slice() {
    let v = ramp_volume(8, 6, 2);
    let mut state = ViewportState::new(&v, Orientation::Coronal);
    assert_eq!(state.view_rect, None);
    render_slice(&v, &mut state, display(16.0, 4.0)).unwrap();
    assert_eq!(state.view_rect, Some(ViewRect::full(8, 2)));
}

#[test]
fn test_window_normalization() {
    let v = row_volume(&[-50.0, 0.0, 100.0, 200.0, 300.0]);
    let mut state = ViewportState::new(&v, Orientation::Axial);
    state.set_window_level(WindowLevel::new(0.0, 200.0));

    let frame = render_slice(&v, &mut state, display(5.0, 1.0)).unwrap().unwrap();
    let pixels: Vec<u8> = frame.raster.pixels().map(|p| p.0[0]).collect();
    assert_eq!(pixels, vec![0, 0, 127, 255, 255]);
}

#[test]
fn test_invalid_window_skips_render() {
    let v = ramp_volume(4, 4, 1);
    let mut state = ViewportState::new(&v, Orientation::Axial);
    state.set_window_level(WindowLevel::new(5.0, 5.0));
    assert!(render_slice(&v, &mut state, display(4.0, 4.0)).unwrap().is_none());

    state.set_window_level(WindowLevel::new(9.0, 1.0));
    assert!(render_slice(&v, &mut state, display(4.0, 4.0)).unwrap().is_none());
}

#[test]
fn test_empty_display_skips_render() {
    let v = ramp_volume(4, 4, 1);
    let mut state = ViewportState::new(&v, Orientation::Axial);
    assert!(render_slice(&v, &mut state, display(0.3, 10.0)).unwrap().is_none());
}

#[test]
fn test_crop_and_nearest_stretch() {
    let v = row_volume(&[0.0, 25.0, 50.0, 100.0]);
    let mut state = ViewportState::new(&v, Orientation::Axial);
    state.set_view_rect(&v, ViewRect::new(2.0, 4.0, 0.0, 1.0));

    let frame = render_slice(&v, &mut state, display(4.0, 1.0)).unwrap().unwrap();
    let pixels: Vec<u8> = frame.raster.pixels().map(|p| p.0[0]).collect();
    assert_eq!(pixels, vec![127, 127, 255, 255]);
}

#[test]
fn test_stretch_ignores_aspect_ratio() {
    // 2x2 slice into a 4x1 surface: every column doubles, rows collapse to the first.
    let v = Volume::from_vec(2, 2, 1, vec![0.0, 25.0, 50.0, 100.0]).unwrap();
    let mut state = ViewportState::new(&v, Orientation::Axial);

    let frame = render_slice(&v, &mut state, display(4.0, 1.0)).unwrap().unwrap();
    let pixels: Vec<u8> = frame.raster.pixels().map(|p| p.0[0]).collect();
    assert_eq!(pixels, vec![0, 0, 63, 63]);
}

#[test]
fn test_viewer_keeps_last_frame_on_invalid_window() {
    let (mut group, ids) = rendered_group(vec![ramp_volume(8, 8, 1)], display(32.0, 32.0));
    let id = ids[0];
    let before = group.viewer(id).unwrap();
    assert_eq!(before.generation(), 1);
    let frame = before.frame().cloned().unwrap();

    let changed = group.dispatch(id, Command::SetWindowLevel(WindowLevel::new(5.0, 5.0)), Origin::External);
    assert!(changed);

    let after = group.viewer(id).unwrap();
    assert_eq!(after.state().window_level, WindowLevel::new(5.0, 5.0));
    assert_eq!(after.generation(), 1);
    assert_eq!(after.frame(), Some(&frame));
}

#[test]
fn test_viewer_renders_on_change_only() {
    let (mut group, ids) = rendered_group(vec![ramp_volume(8, 8, 4)], display(32.0, 32.0));
    let id = ids[0];

    assert!(group.dispatch(id, Command::SetSlice(2), Origin::External));
    assert_eq!(group.viewer(id).unwrap().generation(), 2);

    assert!(!group.dispatch(id, Command::SetSlice(2), Origin::External));
    assert_eq!(group.viewer(id).unwrap().generation(), 2);

    // Same surface again is not a resize.
    assert!(!group.resize(id, display(32.0, 32.0)));
    assert!(group.resize(id, display(64.0, 32.0)));
    assert_eq!(group.viewer(id).unwrap().frame().unwrap().dimensions(), (64, 32));
}
