mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "interdit", about = "Inspect and render slices of 3D scalar volumes")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show volume dimensions and value range
    Info(commands::info::InfoArgs),
    /// Render one slice to a PNG
    Render(commands::render::RenderArgs),
    /// Write a synthetic test volume
    Phantom(commands::phantom::PhantomArgs),
    /// Print or save the default viewer configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Phantom(args) => commands::phantom::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
