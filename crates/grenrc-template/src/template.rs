//! Placeholder templates.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Placeholders, TemplateError, TemplateResult};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("invalid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A template string with `{{placeholder}}` markers.
///
/// Templates are parsed once, when constructed. Rendering replaces every
/// marker with the value supplied for it; markers without a value are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Unterminated`] if a `{{` is never closed.
    pub fn parse(source: impl Into<String>) -> TemplateResult<Self> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut last = 0;

        for marker in PLACEHOLDER_RE.find_iter(&source) {
            push_literal(&mut segments, &source, last, marker.start())?;
            let key = &source[marker.start() + 2..marker.end() - 2];
            segments.push(Segment::Placeholder(key.to_string()));
            last = marker.end();
        }
        push_literal(&mut segments, &source, last, source.len())?;

        Ok(Self { source, segments })
    }

    /// Returns the original template source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the placeholder names used by this template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(key) => Some(key.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Renders the template.
    pub fn render<P: Placeholders + ?Sized>(&self, values: &P) -> String {
        let mut output = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(key) => match values.placeholder(key) {
                    Some(value) => output.push_str(&value),
                    None => {
                        output.push_str("{{");
                        output.push_str(key);
                        output.push_str("}}");
                    }
                },
            }
        }
        output
    }
}

fn push_literal(
    segments: &mut Vec<Segment>,
    source: &str,
    start: usize,
    end: usize,
) -> TemplateResult<()> {
    let text = &source[start..end];
    if text.is_empty() {
        return Ok(());
    }

    if let Some(open) = text.find("{{")
        && !text[open..].contains("}}")
    {
        return Err(TemplateError::Unterminated {
            template: source.to_string(),
            position: start + open,
        });
    }

    segments.push(Segment::Literal(text.to_string()));
    Ok(())
}

impl TryFrom<String> for Template {
    type Error = TemplateError;

    fn try_from(source: String) -> TemplateResult<Self> {
        Self::parse(source)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
