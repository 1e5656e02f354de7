//! Letter substitution table printed on the card.

use crate::error::{CardError, CardResult};
use crate::models::charset::Category;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Mapping from each uppercase letter to its printed substitute.
///
/// # Invariants
///
/// - all 26 uppercase letters are keys
/// - no substitute is its own key, compared case-insensitively
/// - substitutes are pairwise distinct
///
/// The only constructor validates these, so any `CipherMap` value upholds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CipherMap {
    entries: BTreeMap<char, char>,
}

impl CipherMap {
    /// Builds a map from `(letter, substitute)` pairs, checking every invariant.
    pub fn from_entries<I>(entries: I) -> CardResult<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut map = BTreeMap::new();
        let mut used = HashSet::new();

        for (letter, substitute) in entries {
            if !Category::Upper.contains(letter) {
                return Err(CardError::InvalidCipher(format!(
                    "key {letter:?} is not an uppercase letter"
                )));
            }
            if substitute.to_ascii_uppercase() == letter {
                return Err(CardError::InvalidCipher(format!(
                    "{letter:?} maps to itself"
                )));
            }
            if !used.insert(substitute) {
                return Err(CardError::InvalidCipher(format!(
                    "substitute {substitute:?} is used more than once"
                )));
            }
            if map.insert(letter, substitute).is_some() {
                return Err(CardError::InvalidCipher(format!(
                    "key {letter:?} appears more than once"
                )));
            }
        }

        if map.len() != Category::Upper.as_str().len() {
            return Err(CardError::InvalidCipher(format!(
                "expected 26 letters, got {}",
                map.len()
            )));
        }

        Ok(Self { entries: map })
    }

    /// Substitute printed for `letter`. Lowercase input is looked up as uppercase.
    #[must_use]
    pub fn substitute(&self, letter: char) -> Option<char> {
        self.entries.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Iterates `(letter, substitute)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// Number of letters in the map (always 26).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reverse lookup: which letter prints as `substitute`.
    #[must_use]
    pub fn letter_for(&self, substitute: char) -> Option<char> {
        self.entries
            .iter()
            .find_map(|(k, v)| (*v == substitute).then_some(*k))
    }
}
