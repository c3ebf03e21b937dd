//! Validation rule model.
//!
//! Rules arrive inside an input's props:
//!
//! ```text
//! "rules": [
//!   { "component": "required", "message": "" },
//!   { "component": "minlength", "params": { "min": 8 } }
//! ]
//! ```
//!
//! Evaluation lives in the engine. This module only describes rules and
//! the aggregated outcome.

use crate::constants::PROP_RULES;
use crate::props::{PropValue, Props};
use serde::{Deserialize, Serialize};

/// Rule kind. Matching is case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Value must not be blank.
    Required,
    /// Value must look like an email address.
    Email,
    /// Value must have at least `params.min` characters.
    MinLength,
    /// Value must be a valid CPF (national tax id).
    Cpf,
    /// Value must equal the value of `params.targetId`.
    Match,
    /// Value must fully match `params.pattern`.
    Regex,
    /// Unrecognized rule; never fails.
    Unknown(String),
}

impl RuleKind {
    /// Parses a rule name.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "required" => Self::Required,
            "email" => Self::Email,
            "minlength" => Self::MinLength,
            "cpf" => Self::Cpf,
            "match" => Self::Match,
            "regex" => Self::Regex,
            _ => Self::Unknown(name.to_owned()),
        }
    }
}

/// One rule attached to an input.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationRule {
    /// What to check.
    pub kind: RuleKind,
    /// Rule-specific parameters (`min`, `targetId`, `pattern`).
    pub params: Props,
    /// Custom message; empty means "use the default".
    pub message: String,
}

impl ValidationRule {
    /// Creates a rule with no params and the default message.
    #[must_use]
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            params: Props::new(),
            message: String::new(),
        }
    }

    /// Sets the params.
    #[must_use]
    pub fn with_params(mut self, params: Props) -> Self {
        self.params = params;
        self
    }

    /// Sets the custom message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Reads one rule from its map form. Entries that are not maps yield `None`.
    #[must_use]
    pub fn from_value(value: &PropValue) -> Option<Self> {
        let map = value.as_map()?;
        Some(Self {
            kind: RuleKind::parse(&map.get_string("component").unwrap_or_default()),
            params: map.get_map("params").cloned().unwrap_or_default(),
            message: map.get_string("message").unwrap_or_default(),
        })
    }

    /// Reads `props["rules"]`, in declared order. Missing list reads as empty.
    #[must_use]
    pub fn list_from_props(props: &Props) -> Vec<Self> {
        props
            .get_list(PROP_RULES)
            .map(|raw| raw.iter().filter_map(Self::from_value).collect())
            .unwrap_or_default()
    }

    /// The custom message, or `default` when none was given.
    #[must_use]
    pub fn message_or(&self, default: impl Into<String>) -> String {
        if self.message.trim().is_empty() {
            default.into()
        } else {
            self.message.clone()
        }
    }
}

/// Per-field failures in the order the fields were checked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(Vec<(String, String)>);

impl ValidationErrors {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure. A second failure for the same field replaces the first.
    pub fn insert(&mut self, id: impl Into<String>, message: impl Into<String>) {
        let id = id.into();
        let message = message.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = message,
            None => self.0.push((id, message)),
        }
    }

    /// Message for a field.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, message)| message.as_str())
    }

    /// The first failing field and its message.
    #[must_use]
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0.first().map(|(id, message)| (id.as_str(), message.as_str()))
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in check order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, message)| (id.as_str(), message.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut errors = Self::new();
        for (id, message) in iter {
            errors.insert(id, message);
        }
        errors
    }
}

/// Outcome of validating a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every checked field passed.
    Valid,
    /// At least one field failed.
    Invalid(ValidationErrors),
}

impl ValidationResult {
    /// Builds the result from collected errors.
    #[must_use]
    pub fn from_errors(errors: ValidationErrors) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// True for [`ValidationResult::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The errors, if any.
    #[must_use]
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Valid => None,
            Self::Invalid(errors) => Some(errors),
        }
    }
}
