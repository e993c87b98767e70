use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use super::SourceArgs;
use crate::summary::print_volume_summary;

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let sources = args.source.sources()?;

    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Loading [{bar:40}] {pos}/{len} {msg}")?,
    );

    let mut loaded = Vec::with_capacity(sources.len());
    for source in &sources {
        pb.set_message(source.path().display().to_string());
        let volume = source
            .load()
            .with_context(|| format!("Failed to load {}", source.path().display()))?;
        loaded.push((source.path().to_path_buf(), volume));
        pb.inc(1);
    }
    pb.finish_and_clear();

    for (path, volume) in &loaded {
        print_volume_summary(path, volume);
    }
    Ok(())
}
