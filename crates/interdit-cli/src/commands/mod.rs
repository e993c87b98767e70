pub mod config;
pub mod info;
pub mod phantom;
pub mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use interdit_core::io::source::{parse_quadruples, parse_tagged, VolumeSource};
use interdit_core::slice::Orientation;

/// Volumes as `path nx ny nz` groups and/or format-tagged images.
#[derive(Args)]
pub struct SourceArgs {
    /// Raw f32 volumes as groups of: file nx ny nz
    #[arg(value_name = "FILE NX NY NZ")]
    pub volumes: Vec<String>,

    /// 2D image loaded as a single-slice volume (repeatable)
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,

    /// Format tag for each --image, in order (png, tiff, jpg, ...)
    #[arg(long = "format")]
    pub formats: Vec<String>,
}

impl SourceArgs {
    pub fn sources(&self) -> Result<Vec<VolumeSource>> {
        let mut sources = parse_quadruples(&self.volumes).context("Invalid volume arguments")?;
        sources.extend(parse_tagged(&self.images, &self.formats).context("Invalid image arguments")?);
        if sources.is_empty() {
            anyhow::bail!("No volumes given (expected FILE NX NY NZ groups or --image/--format pairs)");
        }
        Ok(sources)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Axial,
    Coronal,
    Sagittal,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Axial => Orientation::Axial,
            OrientationArg::Coronal => Orientation::Coronal,
            OrientationArg::Sagittal => Orientation::Sagittal,
        }
    }
}

/// Parse a comma-separated list of exactly `n` floats.
pub fn parse_floats(s: &str, n: usize, what: &str) -> Result<Vec<f32>> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("Invalid {what} '{s}'"))?;
    if parts.len() != n {
        anyhow::bail!("{what} requires exactly {n} comma-separated values, got {}", parts.len());
    }
    Ok(parts)
}
