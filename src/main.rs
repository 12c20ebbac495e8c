mod config;
mod error;
mod export;
mod icon;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use config::ExportConfig;
use export::ExportSummary;

#[derive(Parser)]
#[command(
    name = "home-sound-icon",
    about = "Generate the home-sound-out application icon (PNG + multi-resolution ICO)"
)]
struct Cli {
    /// TOML file with export settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory that relative output paths are resolved against
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Output path of the PNG icon
    #[arg(long, value_name = "PATH")]
    png: Option<PathBuf>,

    /// Output path of the ICO icon
    #[arg(long, value_name = "PATH")]
    ico: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(summary) => {
            println!("\n{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error creating icon: {}", e);
            eprintln!("{}", failure_report(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExportSummary> {
    let mut config = match &cli.config {
        Some(path) => ExportConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExportConfig::default(),
    };
    if let Some(png) = cli.png {
        config.png_path = png;
    }
    if let Some(ico) = cli.ico {
        config.ico_path = ico;
    }
    if let Some(dir) = &cli.out_dir {
        config = config.rooted_at(dir);
    }

    info!(
        "Exporting {} and {}",
        config.png_path.display(),
        config.ico_path.display()
    );
    export::export_all(&config).context("Icon export failed")
}

/// Cause chain, plus a backtrace when RUST_BACKTRACE is set.
fn failure_report(err: &anyhow::Error) -> String {
    format!("{:?}", err)
}
