mod common;

use interdit_core::error::InterditError;
use interdit_core::io::raw::{load_raw_volume, save_raw_volume};

use common::{ramp_volume, write_raw_file};

#[test]
fn test_load_raw_volume() {
    let dir = tempfile::tempdir().unwrap();
    let samples: Vec<f32> = (0..24).map(|i| i as f32 * 0.5).collect();
    let path = write_raw_file(dir.path(), "vol.raw", &samples);

    let v = load_raw_volume(&path, 4, 3, 2).unwrap();
    assert_eq!(v.dims(), (4, 3, 2));
    assert_eq!(v.at(1, 0, 0), Some(0.5));
    assert_eq!(v.at(0, 1, 0), Some(2.0));
    assert_eq!(v.at(0, 0, 1), Some(6.0));
    assert_eq!(v.value_range(), (0.0, 11.5));
}

#[test]
fn test_size_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_raw_file(dir.path(), "short.raw", &[0.0; 23]);

    let err = load_raw_volume(&path, 2, 3, 4).unwrap_err();
    assert!(matches!(
        err,
        InterditError::VolumeSizeMismatch {
            expected: 24,
            actual: 23
        }
    ));
}

#[test]
fn test_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_raw_file(dir.path(), "empty.raw", &[]);
    assert!(load_raw_volume(&path, 2, 2, 2).is_err());
}

#[test]
fn test_zero_dimension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_raw_file(dir.path(), "vol.raw", &[1.0; 4]);
    let err = load_raw_volume(&path, 4, 1, 0).unwrap_err();
    assert!(matches!(err, InterditError::InvalidDimensions { .. }));
}

#[test]
fn test_byte_length_overflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_raw_file(dir.path(), "vol.raw", &[1.0; 4]);
    // The sample count fits in usize but its byte length does not.
    let n = 1usize << 21;
    let err = load_raw_volume(&path, n, n, n).unwrap_err();
    assert!(matches!(err, InterditError::InvalidDimensions { .. }));
}

#[test]
fn test_missing_file() {
    let err = load_raw_volume(std::path::Path::new("/nonexistent/vol.raw"), 1, 1, 1).unwrap_err();
    assert!(matches!(err, InterditError::Io(_)));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.raw");
    let original = ramp_volume(6, 5, 4);

    save_raw_volume(&original, &path).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 6 * 5 * 4 * 4);

    let loaded = load_raw_volume(&path, 6, 5, 4).unwrap();
    assert_eq!(loaded.data(), original.data());
}
