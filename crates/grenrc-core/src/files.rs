//! Release input and changelog output.

use std::fs;
use std::path::{Path, PathBuf};

use grenrc_config::Config;
use grenrc_entry::Release;
use tracing::{debug, info};

use crate::CoreResult;

/// Parses a JSON array of releases.
///
/// # Errors
///
/// Returns an error if the content is not a valid release list.
pub fn parse_releases(content: &str) -> CoreResult<Vec<Release>> {
    Ok(serde_json::from_str(content)?)
}

/// Reads a JSON array of releases from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_releases(path: impl AsRef<Path>) -> CoreResult<Vec<Release>> {
    let path = path.as_ref();
    debug!(?path, "reading releases");
    let content = fs::read_to_string(path)?;
    parse_releases(&content)
}

/// Returns where the changelog is written, relative to `root`.
#[must_use]
pub fn changelog_path(root: impl AsRef<Path>, config: &Config) -> PathBuf {
    root.as_ref().join(&config.changelog_filename)
}

/// Writes the changelog to `changelogFilename` under `root`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file or its parent directories cannot be written.
pub fn write_changelog(
    root: impl AsRef<Path>,
    config: &Config,
    content: &str,
) -> CoreResult<PathBuf> {
    let path = changelog_path(root, config);
    write_output(&path, content)?;
    Ok(path)
}

/// Writes rendered output to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file or its parent directories cannot be written.
pub fn write_output(path: impl AsRef<Path>, content: &str) -> CoreResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    info!(path = %path.display(), bytes = content.len(), "wrote changelog");
    Ok(())
}
