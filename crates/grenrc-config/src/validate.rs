//! Configuration validation.

use std::fmt;

use tracing::warn;

use crate::{Config, ConfigError, ConfigResult, GroupBy};

/// A suspicious but loadable configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A template uses a placeholder its slot is never given; it renders verbatim.
    UnknownPlaceholder {
        /// Slot name.
        slot: &'static str,
        /// Placeholder name.
        placeholder: String,
    },

    /// A section lists a label that is also ignored, so the label never routes there.
    IgnoredLabelGrouped {
        /// The ignored label.
        label: String,
        /// The section listing it.
        heading: String,
    },

    /// A label is listed by several sections; the first declared one wins.
    SharedLabel {
        /// The shared label.
        label: String,
        /// Section that claims the label.
        first: String,
        /// Section that never receives it.
        shadowed: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlaceholder { slot, placeholder } => write!(
                f,
                "template `{slot}` uses unknown placeholder `{{{{{placeholder}}}}}`"
            ),
            Self::IgnoredLabelGrouped { label, heading } => write!(
                f,
                "label `{label}` in section `{heading}` is ignored and will never be grouped"
            ),
            Self::SharedLabel {
                label,
                first,
                shadowed,
            } => write!(
                f,
                "label `{label}` is claimed by `{first}` before `{shadowed}`"
            ),
        }
    }
}

impl Config {
    /// Checks that the configuration can be used, logging any warnings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a required value is empty or a
    /// section is malformed.
    pub fn validate(&self) -> ConfigResult<()> {
        require_non_empty("username", &self.username)?;
        require_non_empty("repo", &self.repo)?;
        require_non_empty("changelogFilename", &self.changelog_filename)?;

        if let GroupBy::Sections(sections) = &self.group_by {
            for (index, section) in sections.iter().enumerate() {
                if section.heading.trim().is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "groupBy section #{} has an empty heading",
                        index + 1
                    )));
                }
                if section.labels.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "groupBy section `{}` has no labels",
                        section.heading
                    )));
                }
                if section.labels.iter().any(|label| label.is_empty()) {
                    return Err(ConfigError::Invalid(format!(
                        "groupBy section `{}` has an empty label",
                        section.heading
                    )));
                }
                if sections[..index]
                    .iter()
                    .any(|earlier| earlier.heading == section.heading)
                {
                    return Err(ConfigError::Invalid(format!(
                        "duplicate groupBy section `{}`",
                        section.heading
                    )));
                }
            }
        }

        for warning in self.lint() {
            warn!("{warning}");
        }

        Ok(())
    }

    /// Collects non-fatal problems with the configuration.
    #[must_use]
    pub fn lint(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for (slot, template, known) in self.template.slots() {
            for placeholder in template.placeholders() {
                if !known.contains(&placeholder) {
                    warnings.push(ConfigWarning::UnknownPlaceholder {
                        slot,
                        placeholder: placeholder.to_string(),
                    });
                }
            }
        }

        let sections = self.group_by.sections();
        for (index, section) in sections.iter().enumerate() {
            for label in &section.labels {
                if self.ignore_labels.contains(label) {
                    warnings.push(ConfigWarning::IgnoredLabelGrouped {
                        label: label.clone(),
                        heading: section.heading.clone(),
                    });
                }
                if let Some(first) = sections[..index]
                    .iter()
                    .find(|earlier| earlier.labels.contains(label))
                {
                    warnings.push(ConfigWarning::SharedLabel {
                        label: label.clone(),
                        first: first.heading.clone(),
                        shadowed: section.heading.clone(),
                    });
                }
            }
        }

        warnings
    }
}

fn require_non_empty(field: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must not be empty")));
    }
    Ok(())
}
