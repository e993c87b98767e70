mod app;
mod convert;
mod messages;
mod panels;
mod states;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use interdit_core::config::ViewerConfig;
use interdit_core::io::source::{parse_quadruples, parse_tagged};
use interdit_core::sync::ViewerGroup;

#[derive(Parser)]
#[command(name = "interdit-gui", about = "Side-by-side slice viewer for 3D volumes")]
#[command(version)]
struct Args {
    /// Raw f32 volumes as groups of: file nx ny nz
    #[arg(value_name = "FILE NX NY NZ")]
    volumes: Vec<String>,

    /// 2D image opened as a single-slice volume (repeatable)
    #[arg(long = "image")]
    images: Vec<PathBuf>,

    /// Format tag for each --image, in order
    #[arg(long = "format")]
    formats: Vec<String>,

    /// Viewer configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with intensity windows linked
    #[arg(long)]
    sync_intensity: bool,

    /// Start with views (pan/zoom) linked
    #[arg(long)]
    sync_view: bool,

    /// Start with slice and orientation linked
    #[arg(long)]
    sync_slice: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    config.sync.sync_intensity |= args.sync_intensity;
    config.sync.sync_view |= args.sync_view;
    config.sync.sync_slice_and_orientation |= args.sync_slice;

    let mut sources = parse_quadruples(&args.volumes).context("Invalid volume arguments")?;
    sources.extend(parse_tagged(&args.images, &args.formats).context("Invalid image arguments")?);
    if sources.is_empty() {
        anyhow::bail!("No volumes given (expected FILE NX NY NZ groups or --image/--format pairs)");
    }

    let mut volumes = Vec::with_capacity(sources.len());
    let mut names = Vec::with_capacity(sources.len());
    for source in &sources {
        let volume = source
            .load()
            .with_context(|| format!("Failed to load {}", source.path().display()))?;
        volumes.push(Arc::new(volume));
        names.push(
            source
                .path()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.path().display().to_string()),
        );
    }

    let window_size = config.window_size;
    let group = ViewerGroup::with_volumes(volumes, config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size([640.0, 480.0])
            .with_title("Interdit"),
        ..Default::default()
    };

    eframe::run_native(
        "Interdit",
        options,
        Box::new(move |cc| Ok(Box::new(app::InterditApp::new(&cc.egui_ctx, group, names)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
