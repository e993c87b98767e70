use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use interdit_core::io::raw::save_raw_volume;
use interdit_core::volume::Volume;
use ndarray::Array3;

#[derive(Args)]
pub struct PhantomArgs {
    /// Output raw f32 file
    pub file: PathBuf,
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

/// Write a synthetic volume: a z gradient with a large centred sphere and a
/// small off-centre one, so each orientation looks different.
pub fn run(args: &PhantomArgs) -> Result<()> {
    let (nx, ny, nz) = (args.nx, args.ny, args.nz);
    let (fx, fy, fz) = (nx as f32, ny as f32, nz as f32);
    let radius = 0.35 * fx.min(fy).min(fz);
    let small = 0.12 * fx.min(fy).min(fz);

    let data = Array3::from_shape_fn((nz, ny, nx), |(z, y, x)| {
        let (x, y, z) = (x as f32 + 0.5, y as f32 + 0.5, z as f32 + 0.5);
        let mut v = 100.0 * z / fz;
        if dist(x, y, z, fx / 2.0, fy / 2.0, fz / 2.0) < radius {
            v += 500.0;
        }
        if dist(x, y, z, fx * 0.75, fy * 0.3, fz * 0.6) < small {
            v += 1000.0;
        }
        v
    });

    let volume = Volume::from_array(data)?;
    save_raw_volume(&volume, &args.file)?;
    println!("Wrote {nx}x{ny}x{nz} phantom to {}", args.file.display());
    Ok(())
}

fn dist(x: f32, y: f32, z: f32, cx: f32, cy: f32, cz: f32) -> f32 {
    ((x - cx).powi(2) + (y - cy).powi(2) + (z - cz).powi(2)).sqrt()
}
