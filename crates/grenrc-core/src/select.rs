//! Entry selection.

use grenrc_config::{Config, DataSource};
use grenrc_entry::{Entry, Release};
use tracing::debug;

/// Returns the entries of a release that belong in its changelog.
///
/// Entries are kept when they match the data source, carry a milestone if
/// `onlyMilestones` is set, and carry no ignored label. Unlabelled entries
/// are given the `noLabel` label. The `commits` data source selects no
/// entries; commits are rendered on their own.
#[must_use]
pub fn select_entries(config: &Config, release: &Release) -> Vec<Entry> {
    let selected: Vec<Entry> = release
        .entries
        .iter()
        .filter(|entry| matches_source(config, release, entry))
        .filter(|entry| !config.only_milestones || entry.milestone.is_some())
        .map(|entry| with_fallback_label(config, entry))
        .filter(|entry| !config.is_ignored(&entry.labels))
        .collect();

    debug!(
        release = %release.name,
        total = release.entries.len(),
        selected = selected.len(),
        "selected entries"
    );

    selected
}

fn matches_source(config: &Config, release: &Release, entry: &Entry) -> bool {
    match config.data_source {
        DataSource::Issues => !entry.is_pull_request(),
        DataSource::Prs => entry.is_pull_request(),
        DataSource::Milestones => {
            !entry.is_pull_request()
                && entry.milestone.as_deref().is_some_and(|milestone| {
                    milestone == release.name
                        || config.version_of(&release.name) == Some(milestone)
                })
        }
        DataSource::Commits => false,
    }
}

fn with_fallback_label(config: &Config, entry: &Entry) -> Entry {
    let mut entry = entry.clone();
    if entry.labels.is_empty() && !config.template.no_label.is_empty() {
        entry.labels.push(config.template.no_label.clone());
    }
    entry
}
