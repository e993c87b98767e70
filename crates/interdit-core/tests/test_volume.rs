mod common;

use interdit_core::error::InterditError;
use interdit_core::viewport::WindowLevel;
use interdit_core::volume::Volume;
use ndarray::Array3;

use common::{constant_volume, ramp_volume};

#[test]
fn test_dims_and_z_major_layout() {
    let v = ramp_volume(4, 3, 2);
    assert_eq!(v.dims(), (4, 3, 2));
    assert_eq!(v.len(), 24);
    assert_eq!(v.at(2, 1, 1), Some(112.0));
    assert_eq!(v.at(3, 2, 0), Some(23.0));
    assert_eq!(v.at(4, 0, 0), None);
}

#[test]
fn test_from_vec_layout_matches_file_order() {
    // Outer z, then y, then x.
    let samples: Vec<f32> = (0..12).map(|i| i as f32).collect();
    let v = Volume::from_vec(3, 2, 2, samples).unwrap();
    assert_eq!(v.at(0, 0, 0), Some(0.0));
    assert_eq!(v.at(2, 0, 0), Some(2.0));
    assert_eq!(v.at(0, 1, 0), Some(3.0));
    assert_eq!(v.at(0, 0, 1), Some(6.0));
}

#[test]
fn test_from_vec_wrong_length() {
    let err = Volume::from_vec(2, 3, 4, vec![0.0; 23]).unwrap_err();
    assert!(matches!(
        err,
        InterditError::VolumeSizeMismatch {
            expected: 24,
            actual: 23
        }
    ));
}

#[test]
fn test_zero_extent_rejected() {
    let err = Volume::from_vec(4, 0, 2, Vec::new()).unwrap_err();
    assert!(matches!(err, InterditError::InvalidDimensions { ny: 0, .. }));

    let err = Volume::from_array(Array3::<f32>::zeros((0, 2, 2))).unwrap_err();
    assert!(matches!(err, InterditError::InvalidDimensions { nz: 0, .. }));
}

#[test]
fn test_value_range() {
    let v = ramp_volume(4, 3, 2);
    assert_eq!(v.value_range(), (0.0, 123.0));
}

#[test]
fn test_default_window_spans_value_range() {
    let v = ramp_volume(4, 3, 2);
    assert_eq!(WindowLevel::from_volume(&v), WindowLevel::new(0.0, 123.0));
}

#[test]
fn test_constant_volume_window_is_renderable() {
    let v = constant_volume(2, 2, 2, 7.0);
    let window = WindowLevel::from_volume(&v);
    assert!(window.is_valid());
    assert_eq!(window.lo, 7.0);
    assert_eq!(window.hi, 8.0);
}
