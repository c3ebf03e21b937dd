//! Field validation.
//!
//! Rules are compiled once when an input registers: messages resolved,
//! regex patterns built, unknown kinds dropped. Evaluation then runs on
//! every keystroke without allocating.

use layer_shared::constants::{
    min_length_message, MSG_CPF, MSG_EMAIL, MSG_MATCH, MSG_REGEX, MSG_REQUIRED,
};
use layer_shared::{RuleKind, ValidationRule};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Full-match email shape (local part, `@`, dotted domain).
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\A[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+\z",
    )
    .expect("email regex")
});

const CPF_LEN: usize = 11;

/// A rule ready to evaluate.
#[derive(Debug, Clone)]
pub enum CompiledRule {
    /// Fails on blank values.
    Required {
        /// Failure message.
        message: String,
    },
    /// Fails unless the value looks like an email address.
    Email {
        /// Failure message.
        message: String,
    },
    /// Fails when the value has fewer than `min` characters.
    MinLength {
        /// Minimum character count.
        min: usize,
        /// Failure message.
        message: String,
    },
    /// Fails unless the value is a valid CPF.
    Cpf {
        /// Failure message.
        message: String,
    },
    /// Fails unless the value equals another field's value.
    Match {
        /// The other field.
        target_id: String,
        /// Failure message.
        message: String,
    },
    /// Fails unless the whole value matches, ignoring case.
    Regex {
        /// Anchored, case-insensitive pattern.
        pattern: Regex,
        /// Failure message.
        message: String,
    },
}

impl CompiledRule {
    /// Compiles a rule. Unknown kinds and regex rules without a usable
    /// pattern yield `None` and never fail a field.
    #[must_use]
    pub fn compile(rule: &ValidationRule) -> Option<Self> {
        let compiled = match &rule.kind {
            RuleKind::Required => Self::Required {
                message: rule.message_or(MSG_REQUIRED),
            },
            RuleKind::Email => Self::Email {
                message: rule.message_or(MSG_EMAIL),
            },
            RuleKind::MinLength => {
                let min = rule.params.get_i32("min").unwrap_or(0);
                Self::MinLength {
                    min: usize::try_from(min).unwrap_or(0),
                    message: rule.message_or(min_length_message(min)),
                }
            }
            RuleKind::Cpf => Self::Cpf {
                message: rule.message_or(MSG_CPF),
            },
            RuleKind::Match => Self::Match {
                target_id: rule.params.get_string("targetId").unwrap_or_default(),
                message: rule.message_or(MSG_MATCH),
            },
            RuleKind::Regex => {
                let raw = rule.params.get_string("pattern")?;
                let pattern = match RegexBuilder::new(&format!(r"\A(?:{raw})\z"))
                    .case_insensitive(true)
                    .build()
                {
                    Ok(pattern) => pattern,
                    Err(err) => {
                        tracing::warn!("Skipping regex rule with bad pattern '{}': {}", raw, err);
                        return None;
                    }
                };
                Self::Regex {
                    pattern,
                    message: rule.message_or(MSG_REGEX),
                }
            }
            RuleKind::Unknown(name) => {
                tracing::debug!("Ignoring unknown rule '{}'", name);
                return None;
            }
        };
        Some(compiled)
    }

    /// Compiles a list, keeping declared order.
    #[must_use]
    pub fn compile_all(rules: &[ValidationRule]) -> Vec<Self> {
        rules.iter().filter_map(Self::compile).collect()
    }

    /// Failure message of this rule.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Required { message }
            | Self::Email { message }
            | Self::MinLength { message, .. }
            | Self::Cpf { message }
            | Self::Match { message, .. }
            | Self::Regex { message, .. } => message,
        }
    }

    /// True if `value` passes. `lookup` resolves other fields for `match`.
    pub fn passes<'a>(&self, value: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> bool {
        match self {
            Self::Required { .. } => !value.trim().is_empty(),
            Self::Email { .. } => EMAIL_REGEX.is_match(value),
            Self::MinLength { min, .. } => value.chars().count() >= *min,
            Self::Cpf { .. } => is_valid_cpf(value),
            Self::Match { target_id, .. } => value == lookup(target_id).unwrap_or(""),
            Self::Regex { pattern, .. } => pattern.is_match(value),
        }
    }
}

/// Runs `rules` in order and returns the first failure message.
pub fn evaluate<'r, 'a>(
    rules: &'r [CompiledRule],
    value: &str,
    lookup: impl Fn(&str) -> Option<&'a str> + Copy,
) -> Option<&'r str> {
    rules
        .iter()
        .find(|rule| !rule.passes(value, lookup))
        .map(CompiledRule::message)
}

// =============================================================================
// CPF
// =============================================================================

/// Validates a CPF (Brazilian individual tax id).
///
/// Non-digits are ignored. The remaining 11 digits must not all be equal
/// and must end with the two check digits of the first nine.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn is_valid_cpf(input: &str) -> bool {
    let digits: Vec<u8> = input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();
    if digits.len() != CPF_LEN || digits.iter().all(|&d| d == digits[0]) {
        return false;
    }
    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    let [first, second] = cpf_check_digits(&base);
    digits[9] == first && digits[10] == second
}

/// The two check digits completing a nine-digit CPF base.
#[must_use]
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base, 10);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, check_digit(&extended, 11)]
}

/// Weighted mod-11 digit, weights counting down from `top` to 2.
#[allow(clippy::cast_possible_truncation)]
fn check_digit(digits: &[u8], top: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        // remainder is in 2..=10, so the digit fits in 0..=9.
        (11 - remainder) as u8
    }
}
