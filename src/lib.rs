//! Passcard Library
//!
//! Generates printable password cards: a random substitution cipher laid out
//! on a QWERTY keyboard grid, plus an activation code the owner memorizes.
//! The library covers character pools, cipher and code generation, card
//! layout, rendering and PNG output.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{CardError, CardResult};
pub use services::{generate_image, generate_image_with};
