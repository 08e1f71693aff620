//! Issue and pull request records.

use std::borrow::Cow;

use grenrc_template::Placeholders;
use serde::{Deserialize, Serialize};

/// Whether an entry is an issue or a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A closed issue.
    #[default]
    Issue,
    /// A merged pull request.
    PullRequest,
}

/// An issue or pull request as handed to the `issue` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The issue or pull request number.
    pub number: u64,

    /// The title.
    pub title: String,

    /// Link to the issue or pull request.
    pub url: String,

    /// Issue or pull request.
    #[serde(default)]
    pub kind: EntryKind,

    /// Label names, in the order the forge reports them.
    #[serde(default)]
    pub labels: Vec<String>,

    /// Login of the user who opened it.
    #[serde(default)]
    pub user_login: String,

    /// Profile link of the user who opened it.
    #[serde(default)]
    pub user_url: String,

    /// Title of the milestone it belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
}

impl Entry {
    /// Creates a new entry builder.
    #[must_use]
    pub fn builder(number: u64, title: impl Into<String>) -> EntryBuilder {
        EntryBuilder::new(number, title)
    }

    /// Returns true if the entry carries the given label.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Returns true if this is a pull request.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.kind == EntryKind::PullRequest
    }

    /// Returns the `#number` reference text.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("#{}", self.number)
    }
}

impl Placeholders for Entry {
    fn placeholder(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "name" => Some(Cow::Borrowed(&self.title)),
            "text" => Some(Cow::Owned(self.reference())),
            "url" => Some(Cow::Borrowed(&self.url)),
            "user_login" => Some(Cow::Borrowed(&self.user_login)),
            "user_url" => Some(Cow::Borrowed(&self.user_url)),
            _ => None,
        }
    }
}

/// Builder for [`Entry`].
#[derive(Debug)]
pub struct EntryBuilder {
    number: u64,
    title: String,
    url: String,
    kind: EntryKind,
    labels: Vec<String>,
    user_login: String,
    user_url: String,
    milestone: Option<String>,
}

impl EntryBuilder {
    fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            url: String::new(),
            kind: EntryKind::Issue,
            labels: Vec::new(),
            user_login: String::new(),
            user_url: String::new(),
            milestone: None,
        }
    }

    /// Sets the URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Marks the entry as a pull request.
    #[must_use]
    pub fn pull_request(mut self) -> Self {
        self.kind = EntryKind::PullRequest;
        self
    }

    /// Adds a label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Sets the opening user.
    #[must_use]
    pub fn user(mut self, login: impl Into<String>, url: impl Into<String>) -> Self {
        self.user_login = login.into();
        self.user_url = url.into();
        self
    }

    /// Sets the milestone.
    #[must_use]
    pub fn milestone(mut self, milestone: impl Into<String>) -> Self {
        self.milestone = Some(milestone.into());
        self
    }

    /// Builds the [`Entry`].
    #[must_use]
    pub fn build(self) -> Entry {
        Entry {
            number: self.number,
            title: self.title,
            url: self.url,
            kind: self.kind,
            labels: self.labels,
            user_login: self.user_login,
            user_url: self.user_url,
            milestone: self.milestone,
        }
    }
}
