use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use interdit_core::geometry::{Rect, ViewRect};
use interdit_core::io::image_io::save_raster;
use interdit_core::render::render_slice;
use interdit_core::viewport::{ViewportState, WindowLevel};
use tracing::debug;

use super::{parse_floats, OrientationArg, SourceArgs};

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Slicing plane
    #[arg(long, value_enum, default_value = "axial")]
    pub orientation: OrientationArg,

    /// Slice index (defaults to the middle slice; clamped into range)
    #[arg(long)]
    pub slice: Option<usize>,

    /// Intensity window: "lo,hi" (defaults to the volume's value range)
    #[arg(long)]
    pub window: Option<String>,

    /// Visible crop in image pixels: "x_min,x_max,y_min,y_max"
    #[arg(long)]
    pub view: Option<String>,

    /// Output raster size: "WIDTHxHEIGHT"
    #[arg(long, default_value = "512x512")]
    pub size: String,

    /// Output PNG path
    #[arg(short, long, default_value = "slice.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let sources = args.source.sources()?;
    if sources.len() != 1 {
        anyhow::bail!("render takes exactly one volume, got {}", sources.len());
    }
    let source = &sources[0];
    let volume = source
        .load()
        .with_context(|| format!("Failed to load {}", source.path().display()))?;

    let orientation = args.orientation.into();
    let mut state = ViewportState::new(&volume, orientation);
    let slice = args.slice.unwrap_or(orientation.depth(&volume) / 2);
    state.set_slice(&volume, slice);

    if let Some(ref window_str) = args.window {
        let parts = parse_floats(window_str, 2, "window")?;
        state.set_window_level(WindowLevel::new(parts[0], parts[1]));
    }
    if !state.window_level.is_valid() {
        anyhow::bail!(
            "Window hi ({}) must be greater than lo ({})",
            state.window_level.hi,
            state.window_level.lo
        );
    }

    if let Some(ref view_str) = args.view {
        let v = parse_floats(view_str, 4, "view")?;
        state.set_view_rect(&volume, ViewRect::new(v[0], v[1], v[2], v[3]));
        if state.view_rect.is_none() {
            anyhow::bail!("View '{view_str}' is empty after clamping to the slice");
        }
    }

    let (w, h) = parse_size(&args.size)?;
    debug!(
        orientation = %state.orientation,
        slice = state.slice_index,
        lo = state.window_level.lo,
        hi = state.window_level.hi,
        "rendering {w}x{h}"
    );
    let frame = render_slice(&volume, &mut state, Rect::new(0.0, 0.0, w as f32, h as f32))?
        .context("Nothing rendered")?;

    save_raster(&frame.raster, &args.output)?;
    println!(
        "Rendered {} slice {} ({}x{}) to {}",
        state.orientation,
        state.slice_index,
        w,
        h,
        args.output.display()
    );
    Ok(())
}

fn parse_size(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("Invalid size '{s}' (expected WIDTHxHEIGHT)"))?;
    let w: u32 = w.trim().parse().with_context(|| format!("Invalid width in '{s}'"))?;
    let h: u32 = h.trim().parse().with_context(|| format!("Invalid height in '{s}'"))?;
    if w == 0 || h == 0 {
        anyhow::bail!("Size must be non-zero, got {w}x{h}");
    }
    Ok((w, h))
}
