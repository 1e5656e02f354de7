//! Data models for the password card.
//!
//! Character pools, the cipher map, the activation code, card geometry and
//! colors. Models carry no randomness and do no drawing.

pub mod activation_code;
pub mod card_layout;
pub mod charset;
pub mod cipher_map;
pub mod theme;

// Re-export all model types
pub use activation_code::ActivationCode;
pub use card_layout::{CardGeometry, CardLayout, Tile, TileBounds};
pub use charset::{characters, is_special, Category, PoolOptions};
pub use cipher_map::CipherMap;
pub use theme::{CardTheme, RgbColor};
