//! CLI commands.

pub mod check;
pub mod init;
pub mod render;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grenrc_config::{Config, find_config_from, load_config};

/// A loaded configuration and the file it came from.
pub(crate) struct Loaded {
    pub path: PathBuf,
    pub config: Config,
}

impl Loaded {
    /// Directory that relative output paths are resolved against.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Loads the configuration from an explicit path, or searches upwards from
/// the current directory.
pub(crate) fn load(path: Option<&Path>) -> Result<Loaded> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = env::current_dir().context("failed to read current directory")?;
            find_config_from(&cwd).context("failed to find configuration")?
        }
    };

    let config = load_config(&path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    Ok(Loaded { path, config })
}
