//! Render command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use grenrc_core::{ChangelogRenderer, read_releases, write_changelog, write_output};
use tracing::info;

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON file holding the releases to render, newest first
    #[arg(short, long)]
    pub input: PathBuf,

    /// Configuration file (default: search upwards from the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (default: `changelogFilename` next to the configuration)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the changelog instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

/// Runs the render command.
pub fn run(args: RenderArgs) -> Result<()> {
    let loaded = super::load(args.config.as_deref())?;
    let releases = read_releases(&args.input)
        .with_context(|| format!("failed to read releases from {}", args.input.display()))?;

    info!(count = releases.len(), "rendering releases");
    let changelog = ChangelogRenderer::new(&loaded.config).render(&releases);

    if args.stdout {
        println!("{changelog}");
        return Ok(());
    }

    let path = match args.output {
        Some(path) => {
            write_output(&path, &changelog)
                .with_context(|| format!("failed to write {}", path.display()))?;
            path
        }
        None => write_changelog(loaded.root(), &loaded.config, &changelog)
            .context("failed to write changelog")?,
    };

    println!("Wrote {}", path.display());
    Ok(())
}
