//! Error taxonomy for card generation.
//!
//! Every variant is terminal for the generation call that produced it.
//! The rejection loops in the cipher and code builders are ordinary control
//! flow and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating, laying out, rendering or saving a card.
#[derive(Debug, Error)]
pub enum CardError {
    /// The cipher pool ran out of eligible substitutes before every letter was assigned.
    #[error("character pool exhausted while assigning '{letter}' ({remaining} characters left)")]
    PoolExhausted {
        /// Letter that could not be assigned
        letter: char,
        /// Characters still in the pool, none of them eligible
        remaining: usize,
    },

    /// The activation code constraints can never be met with the given settings.
    #[error("activation code cannot be satisfied: {0}")]
    UnsatisfiableCode(String),

    /// A cipher map built from explicit entries breaks a map invariant.
    #[error("invalid cipher map: {0}")]
    InvalidCipher(String),

    /// Keyboard row lengths do not cover the letter sequence exactly.
    #[error("keyboard rows hold {slots} tiles but {letters} letters need placing")]
    LayoutMismatch {
        /// Letters in the keyboard ordering
        letters: usize,
        /// Sum of the configured row lengths
        slots: usize,
    },

    /// A font or drawing resource could not be loaded.
    #[error("resource '{name}' unavailable: {reason}")]
    ResourceUnavailable {
        /// Resource name as requested
        name: String,
        /// Why loading failed
        reason: String,
    },

    /// The output file could not be created, written or moved into place.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The PNG encoder rejected the image.
    #[error("failed to encode {}: {source}", path.display())]
    Encoding {
        /// Path being written
        path: PathBuf,
        /// Underlying encoder error
        #[source]
        source: png::EncodingError,
    },
}

/// Result alias for card operations.
pub type CardResult<T> = std::result::Result<T, CardError>;
