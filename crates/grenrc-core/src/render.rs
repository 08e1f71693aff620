//! Changelog rendering.

use std::borrow::Cow;

use grenrc_config::{Config, DataSource};
use grenrc_entry::{Entry, Release};
use grenrc_template::{Placeholders, Values};
use tracing::debug;

use crate::{Group, group_entries, select_entries};

/// Format of the `{{date}}` placeholder in release headers.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Renders releases into changelog text using a configuration.
#[derive(Debug, Clone, Copy)]
pub struct ChangelogRenderer<'a> {
    config: &'a Config,
}

impl<'a> ChangelogRenderer<'a> {
    /// Creates a renderer for the given configuration.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Renders a full changelog: the title followed by every release.
    #[must_use]
    pub fn render(&self, releases: &[Release]) -> String {
        let templates = &self.config.template;
        let body = releases
            .iter()
            .map(|release| self.render_release(release))
            .collect::<Vec<_>>()
            .join(&templates.release_separator);

        format!("{}{body}", templates.changelog_title)
    }

    /// Renders one release through the `release` slot.
    #[must_use]
    pub fn render_release(&self, release: &Release) -> String {
        let values = Values::new()
            .with("release", release.name.as_str())
            .with("date", release.date.format(DATE_FORMAT).to_string())
            .with("body", self.render_body(release));
        self.config.template.release.render(&values)
    }

    /// Renders the body of a release: commit lines or grouped entries.
    #[must_use]
    pub fn render_body(&self, release: &Release) -> String {
        if self.config.data_source == DataSource::Commits {
            debug!(release = %release.name, count = release.commits.len(), "rendering commits");
            return release
                .commits
                .iter()
                .map(|commit| self.config.template.commit.render(commit))
                .collect::<Vec<_>>()
                .join("\n");
        }

        let entries = select_entries(self.config, release);
        let groups = group_entries(&self.config.group_by, &entries);
        groups
            .iter()
            .map(|group| self.render_group(group))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders one group: its heading (if any) followed by its entries.
    #[must_use]
    pub fn render_group(&self, group: &Group<'_>) -> String {
        let lines = group
            .entries
            .iter()
            .map(|entry| self.render_entry(entry))
            .collect::<Vec<_>>()
            .join("\n");

        match &group.heading {
            Some(heading) => {
                let values = Values::new().with("heading", heading.as_str());
                format!("{}\n{lines}", self.config.template.group.render(&values))
            }
            None => lines,
        }
    }

    /// Renders one issue or pull request through the `issue` slot.
    #[must_use]
    pub fn render_entry(&self, entry: &Entry) -> String {
        let values = EntryValues {
            entry,
            labels: self.render_labels(&entry.labels),
        };
        self.config.template.issue.render(&values)
    }

    /// Renders labels through the `label` slot and concatenates them.
    #[must_use]
    pub fn render_labels(&self, labels: &[String]) -> String {
        labels
            .iter()
            .map(|label| {
                let values = Values::new().with("label", label.as_str());
                self.config.template.label.render(&values)
            })
            .collect()
    }
}

struct EntryValues<'e> {
    entry: &'e Entry,
    labels: String,
}

impl Placeholders for EntryValues<'_> {
    fn placeholder(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "labels" => Some(Cow::Borrowed(&self.labels)),
            _ => self.entry.placeholder(key),
        }
    }
}
