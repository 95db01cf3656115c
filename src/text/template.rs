//! Templates with named placeholders, parsed once and rendered in a single pass.
//!
//! Supported placeholders are `{input}` (the user's guess) and `{answer}`.
//! Substituted values are never re-scanned, so a guess containing `{answer}`
//! renders literally.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named field a template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{input}`: the raw guess.
    Input,
    /// `{answer}`: the raw target answer.
    Answer,
}

impl Placeholder {
    /// Placeholder name as written between braces.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Input => "input",
            Placeholder::Answer => "answer",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "input" => Some(Placeholder::Input),
            "answer" => Some(Placeholder::Answer),
            _ => None,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Template parse/validation errors.
pub enum TemplateError {
    /// A `{name}` placeholder that is not `input` or `answer`.
    #[error("unknown placeholder '{{{name}}}' in template '{template}'")]
    UnknownPlaceholder { name: String, template: String },

    /// A `{` with no closing `}`.
    #[error("unterminated placeholder in template '{template}'")]
    Unterminated { template: String },

    /// A required placeholder is absent.
    #[error("template '{template}' is missing required placeholder {placeholder}")]
    MissingPlaceholder {
        placeholder: Placeholder,
        template: String,
    },

    /// A placeholder that is not allowed in this template kind.
    #[error("template '{template}' must not use placeholder {placeholder}")]
    ForbiddenPlaceholder {
        placeholder: Placeholder,
        template: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

/// Values substituted into a [`Template`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateFields<'a> {
    pub input: &'a str,
    pub answer: &'a str,
}

impl<'a> TemplateFields<'a> {
    pub fn new(input: &'a str, answer: &'a str) -> Self {
        Self { input, answer }
    }

    /// Fields for hint templates, which only ever see the guess.
    pub fn input_only(input: &'a str) -> Self {
        Self { input, answer: "" }
    }

    fn get(&self, placeholder: Placeholder) -> &'a str {
        match placeholder {
            Placeholder::Input => self.input,
            Placeholder::Answer => self.answer,
        }
    }
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source`, rejecting unknown or unterminated placeholders.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let (template, error) = Self::scan(source);
        match error {
            Some(error) => Err(error),
            None => Ok(template),
        }
    }

    /// Parses `source`, keeping unknown or unterminated placeholders as
    /// literal text.
    pub fn parse_lenient(source: &str) -> Self {
        Self::scan(source).0
    }

    /// Splits `source` into segments, reporting the first malformed placeholder.
    fn scan(source: &str) -> (Self, Option<TemplateError>) {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut error = None;
        let mut rest = source;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                error.get_or_insert(TemplateError::Unterminated {
                    template: source.to_string(),
                });
                literal.push('{');
                rest = after;
                break;
            };

            let name = &after[..close];
            match Placeholder::from_name(name) {
                Some(placeholder) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(placeholder));
                }
                None => {
                    error.get_or_insert(TemplateError::UnknownPlaceholder {
                        name: name.to_string(),
                        template: source.to_string(),
                    });
                    literal.push_str(&rest[open..open + close + 2]);
                }
            }
            rest = &after[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let template = Self {
            source: source.to_string(),
            segments,
        };
        (template, error)
    }

    /// Returns `true` if the template references `placeholder`.
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Field(p) if *p == placeholder))
    }

    /// Fails unless every placeholder in `required` is present.
    pub fn require(&self, required: &[Placeholder]) -> Result<(), TemplateError> {
        match required.iter().find(|p| !self.contains(**p)) {
            Some(&placeholder) => Err(TemplateError::MissingPlaceholder {
                placeholder,
                template: self.source.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Fails if any placeholder in `forbidden` is present.
    pub fn forbid(&self, forbidden: &[Placeholder]) -> Result<(), TemplateError> {
        match forbidden.iter().find(|p| self.contains(**p)) {
            Some(&placeholder) => Err(TemplateError::ForbiddenPlaceholder {
                placeholder,
                template: self.source.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Renders the template with `fields`.
    pub fn render(&self, fields: &TemplateFields<'_>) -> String {
        let mut out = String::with_capacity(self.source.len() + fields.input.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(p) => out.push_str(fields.get(*p)),
            }
        }
        out
    }

    /// The original template text.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl TryFrom<String> for Template {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Template::parse(&value)
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
