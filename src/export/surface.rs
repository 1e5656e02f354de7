//! Drawing-surface capability consumed by the card renderer.
//!
//! The renderer only needs rectangles, text and font metrics. Canvas
//! creation and persistence belong to the concrete surface.

use crate::error::CardResult;
use crate::models::RgbColor;

/// A pixel position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Horizontal offset from the left edge
    pub x: i32,
    /// Vertical offset from the top edge
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rendered size of a string in a given font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Primitive drawing operations on a canvas.
pub trait DrawingSurface {
    /// Loaded font handle.
    type Font;

    /// Loads the font `name` at `size` pixels.
    ///
    /// # Errors
    ///
    /// [`CardError::ResourceUnavailable`](crate::error::CardError::ResourceUnavailable)
    /// if the font cannot be found or parsed.
    fn load_font(&mut self, name: &str, size: f32) -> CardResult<Self::Font>;

    /// Fills the rectangle between two inclusive corners and strokes its
    /// outline `outline_width` pixels inward.
    fn draw_rectangle(
        &mut self,
        top_left: Point,
        bottom_right: Point,
        fill: RgbColor,
        outline: RgbColor,
        outline_width: u32,
    );

    /// Measures `text` as it would be drawn with `font`.
    fn measure_text(&self, font: &Self::Font, text: &str) -> TextExtent;

    /// Draws `text` with its top-left corner at `position`.
    fn draw_text(&mut self, position: Point, font: &Self::Font, color: RgbColor, text: &str);
}
