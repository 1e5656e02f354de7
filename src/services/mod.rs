//! Card generation services.
//!
//! Random cipher and code construction, layout geometry, and the pipeline
//! tying them to the renderer.

pub mod card;
pub mod cipher;
pub mod code;
pub mod geometry;

pub use card::{generate_image, generate_image_with, Card, CardGenerator, RenderOptions};
pub use cipher::{build_cipher, CipherBuilder};
pub use code::{build_code, CodeBuilder};
pub use geometry::build_layout;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> rand::rngs::OsRng {
    rand::rngs::OsRng
}
