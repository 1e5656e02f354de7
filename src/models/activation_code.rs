//! The memorized prefix printed on the instruction bar.

use crate::models::charset::is_special;
use serde::Serialize;
use std::fmt;

/// A code that starts with a lowercase letter and contains at least one
/// digit, one uppercase letter and one special character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivationCode(String);

impl ActivationCode {
    /// Wraps `code` if it satisfies the composition rules.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        satisfies_policy(&code).then_some(Self(code))
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the code.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false for a valid code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ActivationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks the whole-code rule: digit, uppercase and special present anywhere.
#[must_use]
pub fn has_required_classes(code: &str) -> bool {
    code.chars().any(|c| c.is_ascii_digit())
        && code.chars().any(|c| c.is_ascii_uppercase())
        && code.chars().any(is_special)
}

/// Checks every composition rule, including the lowercase first character.
#[must_use]
pub fn satisfies_policy(code: &str) -> bool {
    code.chars().next().is_some_and(|c| c.is_ascii_lowercase()) && has_required_classes(code)
}
