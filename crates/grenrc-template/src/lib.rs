//! Templates for grenrc.
//!
//! This crate provides the rendering primitives used by template slots:
//! - [`Template`]: A string with `{{placeholder}}` markers
//! - [`Builtin`]: A named, pure formatting function
//! - [`Slot`]: Either of the above, as configured for one kind of entry
//! - [`Placeholders`]: Anything that can supply placeholder values

mod builtin;
mod error;
mod placeholders;
mod slot;
mod template;

pub use builtin::Builtin;
pub use error::{TemplateError, TemplateResult};
pub use placeholders::{Placeholders, Values};
pub use slot::Slot;
pub use template::Template;
