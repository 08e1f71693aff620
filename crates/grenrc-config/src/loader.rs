//! Configuration loader.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 5] = [
    ".grenrc",
    ".grenrc.json",
    ".grenrc.yml",
    ".grenrc.yaml",
    ".grenrc.toml",
];

/// Script-based configuration file that cannot be evaluated.
const SCRIPT_FILE_NAME: &str = ".grenrc.js";

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON (also used for the extension-less `.grenrc`).
    Json,
    /// YAML.
    Yaml,
    /// TOML.
    Toml,
}

impl Format {
    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            None | Some("json") => Ok(Self::Json),
            Some("yml" | "yaml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            Some(_) => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Returns the conventional file name for this format.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Json => ".grenrc.json",
            Self::Yaml => ".grenrc.yml",
            Self::Toml => ".grenrc.toml",
        }
    }
}

/// Parses and validates configuration content.
///
/// # Errors
///
/// Returns an error if the content cannot be parsed or fails validation.
pub fn parse_config(content: &str, format: Format) -> ConfigResult<Config> {
    let config: Config = match format {
        Format::Json => serde_json::from_str(content)?,
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
    };

    config.validate()?;
    Ok(config)
}

/// Serializes configuration in the given format.
///
/// # Errors
///
/// Returns an error if the configuration cannot be represented in the format.
pub fn serialize_config(config: &Config, format: Format) -> ConfigResult<String> {
    let mut content = match format {
        Format::Json => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        Format::Yaml => {
            serde_yaml::to_string(config).map_err(|e| ConfigError::Serialize(e.to_string()))?
        }
        Format::Toml => {
            toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))?
        }
    };

    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_config(&content, format)
}

/// Finds and loads configuration from the current directory or parents.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be loaded.
pub fn find_and_load_config() -> ConfigResult<Config> {
    let current_dir = std::env::current_dir()?;
    find_and_load_config_from(&current_dir)
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be loaded.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = find_config_from(start_dir)?;
    load_config(path)
}

/// Finds the configuration file starting from the given directory.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if no directory up the tree has one, or
/// [`ConfigError::UnsupportedFormat`] if the nearest one is a script.
pub fn find_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<PathBuf> {
    let start_dir = start_dir.as_ref();
    let mut dir = start_dir;

    loop {
        if let Some(path) = CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
        {
            debug!(?path, "found configuration");
            return Ok(path);
        }

        let script = dir.join(SCRIPT_FILE_NAME);
        if script.is_file() {
            return Err(ConfigError::UnsupportedFormat(script));
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAMES[1])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GroupBy, Section};
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{ "username": "weaveworks", "repo": "ignite" }"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(".grenrc").unwrap(), Format::Json);
        assert_eq!(Format::from_path(".grenrc.json").unwrap(), Format::Json);
        assert_eq!(Format::from_path(".grenrc.yml").unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(".grenrc.yaml").unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(".grenrc.toml").unwrap(), Format::Toml);
        assert!(matches!(
            Format::from_path(".grenrc.js"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_file_names_are_discoverable() {
        for format in [Format::Json, Format::Yaml, Format::Toml] {
            assert!(CONFIG_FILE_NAMES.contains(&format.file_name()));
            assert_eq!(Format::from_path(format.file_name()).unwrap(), format);
        }
    }

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/.grenrc.json");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert!(path.to_string_lossy().contains(".grenrc.json"));
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_config_valid() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".grenrc.json");
        fs::write(&config_path, MINIMAL).unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.username, "weaveworks");
        assert_eq!(config.repo, "ignite");
    }

    #[test]
    fn test_load_config_extensionless_is_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".grenrc");
        fs::write(&config_path, MINIMAL).unwrap();

        assert!(load_config(&config_path).is_ok());
    }

    #[test]
    fn test_load_config_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".grenrc.json");
        fs::write(&config_path, "{ not json").unwrap();

        assert!(matches!(
            load_config(&config_path),
            Err(ConfigError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".grenrc.yml");
        fs::write(&config_path, "username: [unclosed").unwrap();

        assert!(matches!(
            load_config(&config_path),
            Err(ConfigError::InvalidYaml(_))
        ));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".grenrc.toml");
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        assert!(matches!(
            load_config(&config_path),
            Err(ConfigError::InvalidToml(_))
        ));
    }

    #[test]
    fn test_load_config_runs_validation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".grenrc.json");
        fs::write(
            &config_path,
            r#"{ "username": "u", "repo": "r", "groupBy": { "Empty": [] } }"#,
        )
        .unwrap();

        assert!(matches!(
            load_config(&config_path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_config_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".grenrc.yaml");
        fs::write(
            &config_path,
            "username: weaveworks\nrepo: ignite\ndataSource: prs\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.data_source, crate::DataSource::Prs);
    }

    #[test]
    fn test_parse_config_unknown_data_source() {
        let result = parse_config(
            r#"{ "username": "u", "repo": "r", "dataSource": "releases" }"#,
            Format::Json,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("unknown variant `releases`"));
    }

    #[test]
    fn test_serialize_roundtrip_all_formats() {
        let mut config = Config::new("weaveworks", "ignite");
        config.group_by = GroupBy::Sections(vec![
            Section::new("Zeta", ["z"]),
            Section::new("Alpha", ["a", "b"]),
            Section::new("Mid", ["m"]),
        ]);
        for format in [Format::Json, Format::Yaml, Format::Toml] {
            let content = serialize_config(&config, format).unwrap();
            assert!(content.ends_with('\n'));
            let back = parse_config(&content, format).unwrap();
            assert_eq!(back, config, "round-trip through {format:?}");
        }
    }

    #[test]
    fn test_find_and_load_config_in_temp_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".grenrc.json"), MINIMAL).unwrap();

        let config = find_and_load_config_from(temp_dir.path()).unwrap();
        assert_eq!(config.repo, "ignite");
    }

    #[test]
    fn test_find_and_load_config_in_parent() {
        let parent_dir = TempDir::new().unwrap();
        fs::write(
            parent_dir.path().join(".grenrc.yml"),
            "username: parent\nrepo: repo\n",
        )
        .unwrap();

        let child_dir = parent_dir.path().join("subdir");
        fs::create_dir(&child_dir).unwrap();

        let config = find_and_load_config_from(&child_dir).unwrap();
        assert_eq!(config.username, "parent");
    }

    #[test]
    fn test_find_config_prefers_lookup_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".grenrc.toml"), "").unwrap();
        fs::write(temp_dir.path().join(".grenrc.json"), MINIMAL).unwrap();

        let path = find_config_from(temp_dir.path()).unwrap();
        assert!(path.ends_with(".grenrc.json"));
    }

    #[test]
    fn test_find_config_script_is_unsupported() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".grenrc.js"), "module.exports = {}").unwrap();

        assert!(matches!(
            find_config_from(temp_dir.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
