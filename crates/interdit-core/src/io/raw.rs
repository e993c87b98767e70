use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use memmap2::Mmap;
use tracing::info;

use crate::consts::SAMPLE_BYTES;
use crate::error::{InterditError, Result};
use crate::volume::{checked_len, Volume};

/// Load a headerless little-endian `f32` volume stored z-major
/// (outer z, then y, then x).
///
/// The file must hold exactly `nx * ny * nz` samples.
pub fn load_raw_volume(path: &Path, nx: usize, ny: usize, nz: usize) -> Result<Volume> {
    let expected = checked_len(nx, ny, nz)?;
    let expected_bytes = expected
        .checked_mul(SAMPLE_BYTES)
        .and_then(|n| u64::try_from(n).ok())
        .ok_or(InterditError::InvalidDimensions { nx, ny, nz })?;
    let file = File::open(path)?;

    // Check the size before mapping; mapping an empty file fails on some platforms.
    let actual_bytes = file.metadata()?.len();
    if actual_bytes != expected_bytes {
        return Err(InterditError::VolumeSizeMismatch {
            expected,
            actual: usize::try_from(actual_bytes / SAMPLE_BYTES as u64).unwrap_or(usize::MAX),
        });
    }

    let mmap = unsafe { Mmap::map(&file)? };
    let mut samples = vec![0.0f32; expected];
    std::io::Cursor::new(&mmap[..]).read_f32_into::<LittleEndian>(&mut samples)?;

    let volume = Volume::from_vec(nx, ny, nz, samples)?;
    let (min, max) = volume.value_range();
    info!(
        path = %path.display(),
        nx, ny, nz, min, max,
        "loaded raw volume"
    );
    Ok(volume)
}

/// Write a volume in the layout [`load_raw_volume`] reads.
pub fn save_raw_volume(volume: &Volume, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    // Standard-layout iteration over (z, y, x) is already z-major.
    for &v in volume.data().iter() {
        writer.write_f32::<LittleEndian>(v)?;
    }
    writer.flush()?;
    Ok(())
}
