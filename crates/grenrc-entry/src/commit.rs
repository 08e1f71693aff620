//! Commit record.

use std::borrow::Cow;

use grenrc_template::Placeholders;
use serde::{Deserialize, Serialize};

/// A commit as handed to the `commit` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit hash (SHA).
    #[serde(default)]
    pub sha: String,

    /// The commit subject.
    pub message: String,

    /// Link to the commit.
    pub url: String,

    /// The author's login on the forge, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// The author's display name.
    #[serde(default)]
    pub name: String,
}

impl CommitRecord {
    /// Creates a new commit record without an author login.
    #[must_use]
    pub fn new(message: impl Into<String>, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sha: String::new(),
            message: message.into(),
            url: url.into(),
            author: None,
            name: name.into(),
        }
    }

    /// Sets the author login.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the commit hash.
    #[must_use]
    pub fn with_sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = sha.into();
        self
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_sha(&self) -> &str {
        self.sha
            .char_indices()
            .nth(7)
            .map_or(&self.sha[..], |(i, _)| &self.sha[..i])
    }
}

impl Placeholders for CommitRecord {
    fn placeholder(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "message" => Some(Cow::Borrowed(&self.message)),
            "url" => Some(Cow::Borrowed(&self.url)),
            "author" => self.author.as_deref().map(Cow::Borrowed),
            "name" => Some(Cow::Borrowed(&self.name)),
            "sha" => Some(Cow::Borrowed(self.short_sha())),
            _ => None,
        }
    }
}
