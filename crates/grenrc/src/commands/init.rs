//! Initialize command.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use grenrc_config::{CONFIG_FILE_NAMES, Config, Format, serialize_config};
use tracing::info;

/// Configuration file format argument.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FormatArg {
    /// `.grenrc.json`
    #[default]
    Json,
    /// `.grenrc.yml`
    Yaml,
    /// `.grenrc.toml`
    Toml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Yaml => Format::Yaml,
            FormatArg::Toml => Format::Toml,
        }
    }
}

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Repository owner
    #[arg(short, long)]
    pub username: String,

    /// Repository name
    #[arg(short, long)]
    pub repo: String,

    /// Configuration file format
    #[arg(long, value_enum, default_value_t)]
    pub format: FormatArg,

    /// Directory to write the configuration into (default: current directory)
    #[arg(short = 'C', long)]
    pub dir: Option<PathBuf>,

    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
pub fn run(args: InitArgs) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => env::current_dir().context("failed to read current directory")?,
    };

    if !args.force
        && let Some(existing) = CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    {
        bail!(
            "configuration already exists at {} (use --force to overwrite)",
            existing.display()
        );
    }

    let format = Format::from(args.format);
    let config = Config::new(args.username, args.repo);
    let content = serialize_config(&config, format)?;

    let path = dir.join(format.file_name());
    fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), repo = %config.slug(), "created configuration");
    println!("Created {}", path.display());
    Ok(())
}
