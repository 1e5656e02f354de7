//! Activation code construction by rejection sampling.

use crate::constants::DEFAULT_CODE_LENGTH;
use crate::error::{CardError, CardResult};
use crate::models::activation_code::has_required_classes;
use crate::models::{characters, is_special, ActivationCode, Category, PoolOptions};
use rand::{CryptoRng, Rng};
use tracing::debug;

/// Builds an [`ActivationCode`].
///
/// Each attempt draws a lowercase first character, then `length - 1`
/// characters with replacement from the letter pool. Attempts that lack a
/// digit, an uppercase letter or a special character are thrown away whole
/// and the code is rebuilt from scratch. There is no attempt limit; settings
/// that could never succeed are rejected before the first draw.
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    length: usize,
    letters: Vec<char>,
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            letters: characters(PoolOptions::default()),
        }
    }
}

impl CodeBuilder {
    /// Builder for an eight character code over the full pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the code length.
    #[must_use]
    pub const fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the pool for every position after the first.
    #[must_use]
    pub fn letters(mut self, letters: impl IntoIterator<Item = char>) -> Self {
        self.letters = letters.into_iter().collect();
        self
    }

    /// Rejects settings under which no attempt can ever pass.
    fn check_satisfiable(&self) -> CardResult<()> {
        // First character is lowercase, so three more are needed for the classes.
        if self.length < 4 {
            return Err(CardError::UnsatisfiableCode(format!(
                "length {} is too short to hold a lowercase start, digit, uppercase and special character",
                self.length
            )));
        }

        let missing: Vec<&str> = [
            ("digit", self.letters.iter().any(char::is_ascii_digit)),
            ("uppercase", self.letters.iter().any(char::is_ascii_uppercase)),
            ("special", self.letters.iter().any(|c| is_special(*c))),
        ]
        .into_iter()
        .filter_map(|(name, present)| (!present).then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(CardError::UnsatisfiableCode(format!(
                "letter pool has no {} character",
                missing.join(", ")
            )));
        }

        Ok(())
    }

    /// Builds a code using `rng` for every draw.
    pub fn build<R: Rng + CryptoRng>(&self, rng: &mut R) -> CardResult<ActivationCode> {
        self.check_satisfiable()?;

        let lower = Category::Lower.chars();
        let mut attempts = 0usize;

        loop {
            attempts += 1;

            let mut code = String::with_capacity(self.length);
            code.push(lower[rng.gen_range(0..lower.len())]);
            for _ in 1..self.length {
                code.push(self.letters[rng.gen_range(0..self.letters.len())]);
            }

            if has_required_classes(&code) {
                debug!(attempts, length = self.length, "activation code built");
                if let Some(code) = ActivationCode::new(code) {
                    return Ok(code);
                }
            }
        }
    }
}

/// Builds a code of `code_length` over `letters` with the OS random source.
///
/// `None` for `letters` uses a freshly built full pool.
pub fn build_code(code_length: usize, letters: Option<Vec<char>>) -> CardResult<ActivationCode> {
    let mut builder = CodeBuilder::new().length(code_length);
    if let Some(letters) = letters {
        builder = builder.letters(letters);
    }
    builder.build(&mut super::csprng())
}
