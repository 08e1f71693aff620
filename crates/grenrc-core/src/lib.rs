//! Core library for grenrc.
//!
//! This crate turns releases into changelog text using a loaded
//! configuration: it selects the entries the data source asks for, routes
//! them into sections and renders everything through the template slots.

mod error;
mod files;
mod grouping;
mod render;
mod select;

pub use error::{CoreError, CoreResult};
pub use files::{changelog_path, parse_releases, read_releases, write_changelog, write_output};
pub use grouping::{Group, group_entries};
pub use render::{ChangelogRenderer, DATE_FORMAT};
pub use select::select_entries;
