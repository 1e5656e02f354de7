//! Character categories and the pools built from them.

use serde::{Deserialize, Serialize};

const UPPER: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";
const LOWER: &str = "qwertyuiopasdfghjklzxcvbnm";
const DIGITS: &str = "1234567890";
const SPECIAL: &str = "!@#$%^&*()-=+~,.?";

/// A disjoint class of characters used on the card.
///
/// Letters are listed in QWERTY order, so [`Category::Upper`] doubles as the
/// keyboard ordering of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Uppercase ASCII letters
    Upper,
    /// Lowercase ASCII letters
    Lower,
    /// Decimal digits
    Digit,
    /// Punctuation accepted by most password forms
    Special,
}

impl Category {
    /// All categories in pool order.
    pub const ALL: [Self; 4] = [Self::Upper, Self::Lower, Self::Digit, Self::Special];

    /// Characters of this category, in their fixed order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upper => UPPER,
            Self::Lower => LOWER,
            Self::Digit => DIGITS,
            Self::Special => SPECIAL,
        }
    }

    /// Characters of this category as a vector.
    #[must_use]
    pub fn chars(self) -> Vec<char> {
        self.as_str().chars().collect()
    }

    /// Returns true if `ch` belongs to this category.
    #[must_use]
    pub fn contains(self, ch: char) -> bool {
        self.as_str().contains(ch)
    }

    /// Classifies a character, or `None` if no category holds it.
    #[must_use]
    pub fn of(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.contains(ch))
    }
}

/// Which categories a pool draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolOptions {
    /// Include uppercase letters
    pub upper: bool,
    /// Include lowercase letters
    pub lower: bool,
    /// Include digits
    pub numbers: bool,
    /// Include special characters
    pub special: bool,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            numbers: true,
            special: true,
        }
    }
}

impl PoolOptions {
    /// Options enabling a single category.
    #[must_use]
    pub const fn only(category: Category) -> Self {
        Self {
            upper: matches!(category, Category::Upper),
            lower: matches!(category, Category::Lower),
            numbers: matches!(category, Category::Digit),
            special: matches!(category, Category::Special),
        }
    }

    /// Each category paired with its flag, in pool order.
    #[must_use]
    pub const fn flags(&self) -> [(Category, bool); 4] {
        [
            (Category::Upper, self.upper),
            (Category::Lower, self.lower),
            (Category::Digit, self.numbers),
            (Category::Special, self.special),
        ]
    }
}

/// Builds the character pool for the given options.
///
/// Enabled categories are concatenated in the order upper, lower, numbers,
/// special. Disabling everything yields an empty pool.
#[must_use]
pub fn characters(options: PoolOptions) -> Vec<char> {
    options
        .flags()
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .flat_map(|(category, _)| category.as_str().chars())
        .collect()
}

/// Returns true if `ch` is one of the card's special characters.
#[must_use]
pub fn is_special(ch: char) -> bool {
    Category::Special.contains(ch)
}
