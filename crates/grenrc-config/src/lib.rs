//! Configuration management for grenrc.
//!
//! This crate handles loading and validating the `.grenrc` dotfile that
//! drives changelog generation: data source, label grouping, output path
//! and rendering templates.

mod error;
mod group;
mod loader;
mod schema;
mod validate;

pub use error::{ConfigError, ConfigResult};
pub use group::{CATCH_ALL_LABEL, GroupBy, Section};
pub use loader::{
    CONFIG_FILE_NAMES, Format, find_and_load_config, find_and_load_config_from, find_config_from,
    load_config, parse_config, serialize_config,
};
pub use schema::{Config, DataSource, Templates};
pub use validate::ConfigWarning;
