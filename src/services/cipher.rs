//! Random keyboard cipher construction.

use crate::error::{CardError, CardResult};
use crate::models::{characters, Category, CipherMap, PoolOptions};
use rand::{CryptoRng, Rng};
use tracing::debug;

/// Builds a [`CipherMap`] by drawing substitutes without replacement.
///
/// For each letter a candidate is drawn uniformly from the remaining pool;
/// a candidate whose uppercase form is the letter itself is discarded and
/// redrawn. Accepted candidates leave the pool so no substitute repeats.
#[derive(Debug, Clone, Copy, Default)]
pub struct CipherBuilder {
    pool: PoolOptions,
}

impl CipherBuilder {
    /// Builder drawing from every category.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the substitute pool.
    #[must_use]
    pub const fn pool(mut self, pool: PoolOptions) -> Self {
        self.pool = pool;
        self
    }

    /// Builds a cipher map using `rng` for every draw.
    pub fn build<R: Rng + CryptoRng>(&self, rng: &mut R) -> CardResult<CipherMap> {
        let mut pool = characters(self.pool);
        let mut entries = Vec::with_capacity(Category::Upper.as_str().len());
        let mut redraws = 0usize;

        for letter in Category::Upper.as_str().chars() {
            // Without an eligible candidate the rejection loop below never ends.
            if !pool.iter().any(|c| c.to_ascii_uppercase() != letter) {
                return Err(CardError::PoolExhausted {
                    letter,
                    remaining: pool.len(),
                });
            }

            let index = loop {
                let index = rng.gen_range(0..pool.len());
                if pool[index].to_ascii_uppercase() != letter {
                    break index;
                }
                redraws += 1;
            };

            entries.push((letter, pool.remove(index)));
        }

        debug!(redraws, remaining = pool.len(), "cipher map built");
        CipherMap::from_entries(entries)
    }
}

/// Builds a cipher map over the full pool with the OS random source.
pub fn build_cipher() -> CardResult<CipherMap> {
    CipherBuilder::new().build(&mut super::csprng())
}
