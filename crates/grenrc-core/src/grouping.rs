//! Routing entries into sections.

use grenrc_config::GroupBy;
use grenrc_entry::Entry;
use tracing::debug;

/// Entries sharing one section of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'e> {
    /// Section heading, or `None` when grouping is disabled.
    pub heading: Option<String>,

    /// Entries in their original order.
    pub entries: Vec<&'e Entry>,
}

impl<'e> Group<'e> {
    fn new(heading: Option<String>) -> Self {
        Self {
            heading,
            entries: Vec::new(),
        }
    }
}

/// Groups entries according to the grouping rules.
///
/// - Disabled: a single untitled group.
/// - By label: one group per first label, in order of first appearance.
/// - Sections: groups in declaration order; each entry goes to the first
///   section that claims one of its labels, then to a catch-all section.
///   Entries no section claims are dropped.
///
/// Empty groups are never returned.
#[must_use]
pub fn group_entries<'e>(group_by: &GroupBy, entries: &'e [Entry]) -> Vec<Group<'e>> {
    if entries.is_empty() {
        return Vec::new();
    }

    match group_by {
        GroupBy::Disabled => vec![Group {
            heading: None,
            entries: entries.iter().collect(),
        }],
        GroupBy::Label => group_by_first_label(entries),
        GroupBy::Sections(sections) => {
            let mut groups: Vec<Group<'e>> = sections
                .iter()
                .map(|section| Group::new(Some(section.heading.clone())))
                .collect();

            for entry in entries {
                let Some(section) = group_by.resolve(&entry.labels) else {
                    debug!(
                        number = entry.number,
                        labels = ?entry.labels,
                        "no section claims entry, skipping"
                    );
                    continue;
                };
                if let Some(group) = groups
                    .iter_mut()
                    .find(|g| g.heading.as_deref() == Some(section.heading.as_str()))
                {
                    group.entries.push(entry);
                }
            }

            groups.retain(|g| !g.entries.is_empty());
            groups
        }
    }
}

fn group_by_first_label(entries: &[Entry]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();

    for entry in entries {
        let Some(label) = entry.labels.first() else {
            debug!(number = entry.number, "entry has no label, skipping");
            continue;
        };
        match groups
            .iter_mut()
            .find(|g| g.heading.as_deref() == Some(label.as_str()))
        {
            Some(group) => group.entries.push(entry),
            None => groups.push(Group {
                heading: Some(label.clone()),
                entries: vec![entry],
            }),
        }
    }

    groups
}
