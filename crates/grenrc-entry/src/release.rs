//! Release record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CommitRecord, Entry};

/// A release boundary and everything that went into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// The release tag (e.g. `v0.8.0`).
    pub name: String,

    /// The release date.
    pub date: NaiveDate,

    /// Issues and pull requests closed in this release.
    #[serde(default)]
    pub entries: Vec<Entry>,

    /// Commits in this release.
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
}

impl Release {
    /// Creates a new release with no entries.
    #[must_use]
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            entries: Vec::new(),
            commits: Vec::new(),
        }
    }

    /// Sets the entries.
    #[must_use]
    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    /// Sets the commits.
    #[must_use]
    pub fn with_commits(mut self, commits: Vec<CommitRecord>) -> Self {
        self.commits = commits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 2, 1).unwrap()
    }

    #[test]
    fn test_new() {
        let release = Release::new("v0.8.0", date());
        assert_eq!(release.name, "v0.8.0");
        assert!(release.entries.is_empty());
        assert!(release.commits.is_empty());
    }

    #[test]
    fn test_with_entries_and_commits() {
        let release = Release::new("v0.8.0", date())
            .with_entries(vec![Entry::builder(1, "one").build()])
            .with_commits(vec![CommitRecord::new("m", "u", "n")]);
        assert_eq!(release.entries.len(), 1);
        assert_eq!(release.commits.len(), 1);
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "name": "v0.8.0",
            "date": "2020-02-01",
            "entries": [{ "number": 1, "title": "one", "url": "http://x/1", "labels": ["kind/bug"] }]
        }"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.date, date());
        assert_eq!(release.entries[0].labels, vec!["kind/bug"]);
        assert!(release.commits.is_empty());
    }
}
