//! Card output.
//!
//! The renderer draws a layout against the [`DrawingSurface`] capability;
//! [`RasterSurface`] implements it for PNG output and the text renderer
//! produces a terminal preview.

pub mod card_renderer;
pub mod raster;
pub mod surface;
pub mod text_renderer;

pub use card_renderer::render_card;
pub use raster::{RasterFont, RasterSurface};
pub use surface::{DrawingSurface, Point, TextExtent};
pub use text_renderer::render_card_diagram;
