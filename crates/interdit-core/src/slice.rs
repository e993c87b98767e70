use std::fmt;

use ndarray::{ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{InterditError, Result};
use crate::volume::Volume;

/// Slicing plane. Determines which axis the slice index walks and the
/// `(width, height)` of the resulting image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Index walks z; plane is x (columns) by y (rows).
    #[default]
    Axial,
    /// Index walks y; plane is x (columns) by z (rows).
    Coronal,
    /// Index walks x; plane is y (columns) by z (rows).
    Sagittal,
}

impl Orientation {
    pub const ALL: &[Self] = &[Self::Axial, Self::Coronal, Self::Sagittal];

    /// Number of slices along this orientation's axis.
    pub fn depth(self, volume: &Volume) -> usize {
        let (nx, ny, nz) = volume.dims();
        match self {
            Self::Axial => nz,
            Self::Coronal => ny,
            Self::Sagittal => nx,
        }
    }

    /// `(width, height)` of one slice.
    pub fn plane_size(self, volume: &Volume) -> (usize, usize) {
        let (nx, ny, nz) = volume.dims();
        match self {
            Self::Axial => (nx, ny),
            Self::Coronal => (nx, nz),
            Self::Sagittal => (ny, nz),
        }
    }

    /// Largest valid slice index.
    pub fn max_index(self, volume: &Volume) -> usize {
        self.depth(volume) - 1
    }

    /// Index of the array axis the slice index walks (array is z, y, x).
    fn array_axis(self) -> Axis {
        match self {
            Self::Axial => Axis(0),
            Self::Coronal => Axis(1),
            Self::Sagittal => Axis(2),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axial => write!(f, "Axial"),
            Self::Coronal => write!(f, "Coronal"),
            Self::Sagittal => write!(f, "Sagittal"),
        }
    }
}

/// Borrowed 2D view of one slice, addressed as `(row, col)`.
#[derive(Clone, Debug)]
pub struct SliceView<'a> {
    pub data: ArrayView2<'a, f32>,
    pub orientation: Orientation,
    pub index: usize,
}

impl SliceView<'_> {
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.data.get([row, col]).copied()
    }
}

/// Extract a slice without copying.
///
/// Removing one axis of the (z, y, x) array leaves the remaining two in
/// order, which is already `(row, col)` for every orientation.
pub fn extract_slice(
    volume: &Volume,
    orientation: Orientation,
    index: usize,
) -> Result<SliceView<'_>> {
    let max = orientation.max_index(volume);
    if index > max {
        return Err(InterditError::SliceOutOfRange { index, max });
    }
    Ok(SliceView {
        data: volume.data().index_axis(orientation.array_axis(), index),
        orientation,
        index,
    })
}
