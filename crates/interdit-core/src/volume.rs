use ndarray::Array3;

use crate::error::{InterditError, Result};

/// An immutable 3D grid of scalar samples.
///
/// Stored z-major: `data[[z, y, x]]`, shape = (nz, ny, nx).
#[derive(Clone, Debug)]
pub struct Volume {
    data: Array3<f32>,
    min: f32,
    max: f32,
}

impl Volume {
    /// Wrap an existing array. Every extent must be non-zero.
    pub fn from_array(data: Array3<f32>) -> Result<Self> {
        let (nz, ny, nx) = data.dim();
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(InterditError::InvalidDimensions { nx, ny, nz });
        }
        let (min, max) = finite_range(&data);
        Ok(Self { data, min, max })
    }

    /// Build a volume from a flat z-major buffer of exactly `nx * ny * nz` samples.
    pub fn from_vec(nx: usize, ny: usize, nz: usize, samples: Vec<f32>) -> Result<Self> {
        let expected = checked_len(nx, ny, nz)?;
        if samples.len() != expected {
            return Err(InterditError::VolumeSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        let data = Array3::from_shape_vec((nz, ny, nx), samples)
            .map_err(|_| InterditError::InvalidDimensions { nx, ny, nz })?;
        Self::from_array(data)
    }

    pub fn nx(&self) -> usize {
        self.data.dim().2
    }

    pub fn ny(&self) -> usize {
        self.data.dim().1
    }

    pub fn nz(&self) -> usize {
        self.data.dim().0
    }

    /// `(nx, ny, nz)`.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.nx(), self.ny(), self.nz())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// Global `(min, max)` over the finite samples.
    pub fn value_range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn at(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        self.data.get([z, y, x]).copied()
    }
}

/// `nx * ny * nz`, rejecting zero extents and overflow.
pub(crate) fn checked_len(nx: usize, ny: usize, nz: usize) -> Result<usize> {
    nx.checked_mul(ny)
        .and_then(|n| n.checked_mul(nz))
        .filter(|&n| n > 0)
        .ok_or(InterditError::InvalidDimensions { nx, ny, nz })
}

fn finite_range(data: &Array3<f32>) -> (f32, f32) {
    let (min, max) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        // No finite samples at all.
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_len_rejects_zero() {
        assert!(checked_len(4, 0, 2).is_err());
        assert_eq!(checked_len(4, 3, 2).unwrap(), 24);
    }

    #[test]
    fn test_range_ignores_nan() {
        let v = Volume::from_vec(3, 1, 1, vec![f32::NAN, -2.0, 7.5]).unwrap();
        assert_eq!(v.value_range(), (-2.0, 7.5));
    }

    #[test]
    fn test_all_nan_range() {
        let v = Volume::from_vec(2, 1, 1, vec![f32::NAN, f32::NAN]).unwrap();
        assert_eq!(v.value_range(), (0.0, 0.0));
    }
}
