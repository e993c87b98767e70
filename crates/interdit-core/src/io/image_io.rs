use std::path::Path;

use image::{GrayImage, ImageFormat, ImageReader};
use ndarray::Array3;
use tracing::info;

use crate::error::Result;
use crate::volume::Volume;

/// Load a 2D image as a single-slice volume (`nz = 1`).
///
/// Pixels are converted to 16-bit luminance and scaled to [0.0, 1.0].
/// `format` overrides extension-based detection when given.
pub fn load_image_volume(path: &Path, format: Option<ImageFormat>) -> Result<Volume> {
    let mut reader = ImageReader::open(path)?;
    match format {
        Some(f) => reader.set_format(f),
        None => reader = reader.with_guessed_format()?,
    }
    let gray = reader.decode()?.to_luma16();
    let (w, h) = gray.dimensions();

    let mut data = Array3::<f32>::zeros((1, h as usize, w as usize));
    for (col, row, pixel) in gray.enumerate_pixels() {
        data[[0, row as usize, col as usize]] = pixel.0[0] as f32 / 65535.0;
    }

    let volume = Volume::from_array(data)?;
    info!(path = %path.display(), width = w, height = h, "loaded image as single-slice volume");
    Ok(volume)
}

/// Save a rendered 8-bit frame as PNG.
pub fn save_raster(raster: &GrayImage, path: &Path) -> Result<()> {
    raster.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
