//! Built-in formatting functions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Placeholders, TemplateError};

/// A named formatting function that a slot can use instead of a template string.
///
/// Built-ins are pure: the same placeholder values always render the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Builtin {
    /// `- [message](url) - @author`, falling back to `- [message](url) - name`
    /// when the author login is absent or empty.
    AuthorOrName,
}

impl Builtin {
    /// All built-in formatters.
    pub const ALL: [Self; 1] = [Self::AuthorOrName];

    /// Returns the configuration name of this built-in.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AuthorOrName => "author-or-name",
        }
    }

    /// Returns the placeholders this built-in reads.
    #[must_use]
    pub fn placeholders(self) -> &'static [&'static str] {
        match self {
            Self::AuthorOrName => &["message", "url", "author", "name"],
        }
    }

    /// Renders the built-in against the given values.
    pub fn render<P: Placeholders + ?Sized>(self, values: &P) -> String {
        match self {
            Self::AuthorOrName => {
                let message = values.placeholder("message").unwrap_or_default();
                let url = values.placeholder("url").unwrap_or_default();
                match values.placeholder("author").filter(|author| !author.is_empty()) {
                    Some(author) => format!("- [{message}]({url}) - @{author}"),
                    None => {
                        let name = values.placeholder("name").unwrap_or_default();
                        format!("- [{message}]({url}) - {name}")
                    }
                }
            }
        }
    }
}

impl FromStr for Builtin {
    type Err = TemplateError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|builtin| builtin.name() == name)
            .ok_or_else(|| TemplateError::UnknownBuiltin(name.to_string()))
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
