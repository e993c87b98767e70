use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{InterditError, Result};
use crate::io::image_io::load_image_volume;
use crate::io::raw::load_raw_volume;
use crate::volume::Volume;

/// Where a viewer's volume comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum VolumeSource {
    /// Headerless little-endian f32 file with explicit extents.
    Raw {
        path: PathBuf,
        nx: usize,
        ny: usize,
        nz: usize,
    },
    /// 2D image decoded as a single slice.
    Image { path: PathBuf, format: ImageFormat },
}

impl VolumeSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::Raw { path, .. } | Self::Image { path, .. } => path,
        }
    }

    pub fn load(&self) -> Result<Volume> {
        match self {
            Self::Raw { path, nx, ny, nz } => load_raw_volume(path, *nx, *ny, *nz),
            Self::Image { path, format } => load_image_volume(path, Some(*format)),
        }
    }
}

/// Parse `path nx ny nz` groups.
pub fn parse_quadruples(args: &[String]) -> Result<Vec<VolumeSource>> {
    if args.len() % 4 != 0 {
        return Err(InterditError::InvalidArguments(format!(
            "expected groups of 4 arguments (file nx ny nz), got {}",
            args.len()
        )));
    }

    args.chunks_exact(4)
        .enumerate()
        .map(|(i, group)| {
            let dim = |s: &str, name: &str| {
                s.trim().parse::<usize>().map_err(|_| {
                    InterditError::InvalidArguments(format!(
                        "volume {}: {name} must be a non-negative integer, got '{s}'",
                        i + 1
                    ))
                })
            };
            Ok(VolumeSource::Raw {
                path: PathBuf::from(&group[0]),
                nx: dim(&group[1], "nx")?,
                ny: dim(&group[2], "ny")?,
                nz: dim(&group[3], "nz")?,
            })
        })
        .collect()
}

/// Pair image paths with format tags (`png`, `tiff`, `jpg`, ...).
pub fn parse_tagged(paths: &[PathBuf], tags: &[String]) -> Result<Vec<VolumeSource>> {
    if paths.len() != tags.len() {
        return Err(InterditError::MismatchedFormatTags {
            paths: paths.len(),
            tags: tags.len(),
        });
    }

    paths
        .iter()
        .zip(tags)
        .map(|(path, tag)| {
            let format = ImageFormat::from_extension(tag.trim().to_ascii_lowercase())
                .ok_or_else(|| InterditError::UnknownFormat(tag.clone()))?;
            Ok(VolumeSource::Image {
                path: path.clone(),
                format,
            })
        })
        .collect()
}
