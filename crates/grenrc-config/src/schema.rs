//! Configuration schema.

use grenrc_template::{Builtin, Slot};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::GroupBy;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where changelog entries come from.
    #[serde(default)]
    pub data_source: DataSource,

    /// Prefix of release tags (e.g. `v`).
    #[serde(default)]
    pub prefix: String,

    /// Only include entries that belong to a milestone.
    #[serde(default)]
    pub only_milestones: bool,

    /// Owner of the remote repository.
    pub username: String,

    /// Name of the remote repository.
    pub repo: String,

    /// Section grouping rules.
    #[serde(default)]
    pub group_by: GroupBy,

    /// Output file path.
    #[serde(default = "default_changelog_filename")]
    pub changelog_filename: String,

    /// Entries carrying any of these labels are left out.
    #[serde(default, alias = "ignore-labels")]
    pub ignore_labels: IndexSet<String>,

    /// Rendering templates.
    #[serde(default)]
    pub template: Templates,
}

fn default_changelog_filename() -> String {
    "CHANGELOG.md".to_string()
}

impl Config {
    /// Creates a configuration for the given repository with default options.
    #[must_use]
    pub fn new(username: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            data_source: DataSource::default(),
            prefix: String::new(),
            only_milestones: false,
            username: username.into(),
            repo: repo.into(),
            group_by: GroupBy::default(),
            changelog_filename: default_changelog_filename(),
            ignore_labels: IndexSet::new(),
            template: Templates::default(),
        }
    }

    /// Returns the release tag for a version.
    #[must_use]
    pub fn tag_for(&self, version: &str) -> String {
        format!("{}{version}", self.prefix)
    }

    /// Returns the version part of a release tag, or `None` if the tag lacks the prefix.
    #[must_use]
    pub fn version_of<'a>(&self, tag: &'a str) -> Option<&'a str> {
        tag.strip_prefix(self.prefix.as_str())
    }

    /// Returns true if any of the labels is ignored.
    #[must_use]
    pub fn is_ignored(&self, labels: &[String]) -> bool {
        labels.iter().any(|label| self.ignore_labels.contains(label))
    }

    /// Returns the `owner/name` slug of the remote repository.
    #[must_use]
    pub fn slug(&self) -> String {
        format!("{}/{}", self.username, self.repo)
    }
}

/// Upstream feed for changelog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Closed issues.
    #[default]
    Issues,

    /// Merged pull requests.
    Prs,

    /// Commits between release tags.
    Commits,

    /// Issues attached to the milestone named after the release.
    Milestones,
}

impl DataSource {
    /// Returns the configuration name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Issues => "issues",
            Self::Prs => "prs",
            Self::Commits => "commits",
            Self::Milestones => "milestones",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Templates {
    /// Renders one commit.
    pub commit: Slot,

    /// Renders one issue or pull request.
    pub issue: Slot,

    /// Renders one label inside `{{labels}}`.
    pub label: Slot,

    /// Label given to entries that have none.
    pub no_label: String,

    /// Renders a section heading.
    pub group: Slot,

    /// Text placed before the first release.
    pub changelog_title: String,

    /// Renders a release header and body.
    pub release: Slot,

    /// Text placed between releases.
    pub release_separator: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            commit: Slot::builtin(Builtin::AuthorOrName),
            issue: default_slot("- {{labels}} {{name}} [{{text}}]({{url}})"),
            label: default_slot("[**{{label}}**]"),
            no_label: "closed".to_string(),
            group: default_slot("\n#### {{heading}}\n"),
            changelog_title: "# Changelog\n\n".to_string(),
            release: default_slot("## {{release}} ({{date}})\n{{body}}"),
            release_separator: "\n---\n\n".to_string(),
        }
    }
}

fn default_slot(source: &'static str) -> Slot {
    Slot::text(source).expect("invalid default template")
}

const COMMIT_PLACEHOLDERS: &[&str] = &["message", "url", "author", "name", "sha"];
const ISSUE_PLACEHOLDERS: &[&str] = &["labels", "name", "text", "url", "user_login", "user_url"];
const LABEL_PLACEHOLDERS: &[&str] = &["label"];
const GROUP_PLACEHOLDERS: &[&str] = &["heading"];
const RELEASE_PLACEHOLDERS: &[&str] = &["release", "date", "body"];

impl Templates {
    /// Returns every placeholder-driven slot with its name and the placeholders it is given.
    #[must_use]
    pub fn slots(&self) -> [(&'static str, &Slot, &'static [&'static str]); 5] {
        [
            ("commit", &self.commit, COMMIT_PLACEHOLDERS),
            ("issue", &self.issue, ISSUE_PLACEHOLDERS),
            ("label", &self.label, LABEL_PLACEHOLDERS),
            ("group", &self.group, GROUP_PLACEHOLDERS),
            ("release", &self.release, RELEASE_PLACEHOLDERS),
        ]
    }
}
