mod common;

use interdit_core::error::InterditError;
use interdit_core::slice::{extract_slice, Orientation};

use common::ramp_volume;

#[test]
fn test_axial_slice() {
    let v = ramp_volume(5, 4, 3);
    let s = extract_slice(&v, Orientation::Axial, 2).unwrap();
    assert_eq!((s.width(), s.height()), (5, 4));
    // row = y, col = x
    assert_eq!(s.get(3, 1), Some(231.0));
}

#[test]
fn test_coronal_slice() {
    let v = ramp_volume(5, 4, 3);
    let s = extract_slice(&v, Orientation::Coronal, 1).unwrap();
    assert_eq!((s.width(), s.height()), (5, 3));
    // row = z, col = x
    assert_eq!(s.get(2, 4), Some(214.0));
}

#[test]
fn test_sagittal_slice() {
    let v = ramp_volume(5, 4, 3);
    let s = extract_slice(&v, Orientation::Sagittal, 3).unwrap();
    assert_eq!((s.width(), s.height()), (4, 3));
    // row = z, col = y
    assert_eq!(s.get(1, 2), Some(123.0));
}

#[test]
fn test_depth_and_plane_size() {
    let v = ramp_volume(5, 4, 3);
    assert_eq!(Orientation::Axial.depth(&v), 3);
    assert_eq!(Orientation::Coronal.depth(&v), 4);
    assert_eq!(Orientation::Sagittal.depth(&v), 5);
    assert_eq!(Orientation::Axial.max_index(&v), 2);
    assert_eq!(Orientation::Sagittal.plane_size(&v), (4, 3));
}

#[test]
fn test_out_of_range() {
    let v = ramp_volume(5, 4, 3);
    let err = extract_slice(&v, Orientation::Axial, 3).unwrap_err();
    assert!(matches!(
        err,
        InterditError::SliceOutOfRange { index: 3, max: 2 }
    ));
    assert!(extract_slice(&v, Orientation::Sagittal, 4).is_ok());
}

#[test]
fn test_slice_is_a_view() {
    let v = ramp_volume(5, 4, 3);
    let s = extract_slice(&v, Orientation::Axial, 0).unwrap();
    let first = s.data.as_ptr();
    assert_eq!(first, v.data().as_ptr());
}
