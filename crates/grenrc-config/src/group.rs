//! Label grouping rules.

use std::fmt;

use indexmap::IndexSet;
use serde::de::{self, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label that turns a section into a catch-all for otherwise unclaimed entries.
pub const CATCH_ALL_LABEL: &str = "...";

const LABEL_MODE: &str = "label";

/// How entries are grouped into changelog sections.
///
/// Accepted shapes in configuration files:
/// - `false`: no grouping
/// - `"label"`: one section per first label
/// - an object mapping section headings to label lists, kept in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupBy {
    /// Entries are listed without sections.
    #[default]
    Disabled,

    /// Entries are grouped under their first label.
    Label,

    /// Entries are grouped into explicit sections.
    Sections(Vec<Section>),
}

impl GroupBy {
    /// Returns the explicit sections, or an empty slice for other modes.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        match self {
            Self::Sections(sections) => sections,
            Self::Disabled | Self::Label => &[],
        }
    }

    /// Finds a section by heading.
    #[must_use]
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections().iter().find(|s| s.heading == heading)
    }

    /// Returns the section headings in declaration order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections().iter().map(|s| s.heading.as_str())
    }

    /// Returns the first section (in declaration order) claiming any of the labels.
    ///
    /// Catch-all sections are only returned when no other section matches.
    #[must_use]
    pub fn resolve(&self, labels: &[String]) -> Option<&Section> {
        let sections = self.sections();
        sections
            .iter()
            .find(|s| s.matches(labels))
            .or_else(|| sections.iter().find(|s| s.is_catch_all()))
    }
}

/// One changelog section and the labels that route entries into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading rendered verbatim through the `group` slot.
    pub heading: String,

    /// Labels claimed by this section.
    pub labels: IndexSet<String>,
}

impl Section {
    /// Creates a new section.
    #[must_use]
    pub fn new<I, S>(heading: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heading: heading.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if any of the given labels belongs to this section.
    #[must_use]
    pub fn matches(&self, labels: &[String]) -> bool {
        labels.iter().any(|label| self.labels.contains(label))
    }

    /// Returns true if this section collects entries no other section claims.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.labels.contains(CATCH_ALL_LABEL)
    }
}

impl Serialize for GroupBy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Label => serializer.serialize_str(LABEL_MODE),
            Self::Sections(sections) => {
                serializer.collect_map(sections.iter().map(|s| (&s.heading, &s.labels)))
            }
        }
    }
}

impl<'de> Deserialize<'de> for GroupBy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GroupByVisitor)
    }
}

struct GroupByVisitor;

impl<'de> Visitor<'de> for GroupByVisitor {
    type Value = GroupBy;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("false, \"label\", or a map of section headings to label lists")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<GroupBy, E> {
        if value {
            Err(E::invalid_value(Unexpected::Bool(true), &self))
        } else {
            Ok(GroupBy::Disabled)
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<GroupBy, E> {
        if value == LABEL_MODE {
            Ok(GroupBy::Label)
        } else {
            Err(E::invalid_value(Unexpected::Str(value), &self))
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<GroupBy, A::Error> {
        let mut sections: Vec<Section> = Vec::new();
        while let Some((heading, labels)) = map.next_entry::<String, Vec<String>>()? {
            if sections.iter().any(|s| s.heading == heading) {
                return Err(de::Error::custom(format!(
                    "duplicate section heading `{heading}`"
                )));
            }
            sections.push(Section::new(heading, labels));
        }
        Ok(GroupBy::Sections(sections))
    }
}
