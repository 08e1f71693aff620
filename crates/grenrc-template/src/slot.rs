//! Template slots.

use serde::{Deserialize, Serialize};

use crate::{Builtin, Placeholders, Template, TemplateError, TemplateResult};

/// How one kind of entry is rendered: a template string or a built-in function.
///
/// In configuration files a slot is either a plain string or an object naming
/// a built-in:
///
/// ```json
/// { "issue": "- {{name}} [{{text}}]({{url}})", "commit": { "builtin": "author-or-name" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawSlot")]
pub enum Slot {
    /// A built-in formatting function.
    Builtin {
        /// The function to call.
        builtin: Builtin,
    },
    /// A placeholder template.
    Text(Template),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSlot {
    Builtin { builtin: String },
    Text(String),
}

impl TryFrom<RawSlot> for Slot {
    type Error = TemplateError;

    fn try_from(raw: RawSlot) -> TemplateResult<Self> {
        match raw {
            RawSlot::Builtin { builtin } => Ok(Self::Builtin {
                builtin: builtin.parse()?,
            }),
            RawSlot::Text(source) => Ok(Self::Text(Template::parse(source)?)),
        }
    }
}

impl Slot {
    /// Parses a template string into a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed.
    pub fn text(source: impl Into<String>) -> TemplateResult<Self> {
        Template::parse(source).map(Self::Text)
    }

    /// Creates a slot backed by a built-in.
    #[must_use]
    pub fn builtin(builtin: Builtin) -> Self {
        Self::Builtin { builtin }
    }

    /// Returns the placeholders this slot reads.
    pub fn placeholders(&self) -> Vec<&str> {
        match self {
            Self::Builtin { builtin } => builtin.placeholders().to_vec(),
            Self::Text(template) => template.placeholders().collect(),
        }
    }

    /// Returns true if the slot renders to nothing regardless of input.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(template) if template.as_str().is_empty())
    }

    /// Renders the slot.
    pub fn render<P: Placeholders + ?Sized>(&self, values: &P) -> String {
        match self {
            Self::Builtin { builtin } => builtin.render(values),
            Self::Text(template) => template.render(values),
        }
    }
}

impl From<Template> for Slot {
    fn from(template: Template) -> Self {
        Self::Text(template)
    }
}

impl From<Builtin> for Slot {
    fn from(builtin: Builtin) -> Self {
        Self::builtin(builtin)
    }
}
