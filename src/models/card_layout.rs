//! Card geometry and the positioned tiles drawn on it.

use crate::constants::{CARD_HEIGHT, CARD_WIDTH, ROW_LENGTHS, TILE_SIZE};
use serde::{Deserialize, Serialize};

/// Canvas and keyboard grid dimensions for one card.
///
/// Pixel coordinates with the origin at the top-left corner.
///
/// # Default
///
/// - canvas 1000×400
/// - tiles 100×100
/// - keyboard rows of 10, 9 and 7 letters at y = 0, 100, 200
/// - instruction bar at y = 300
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardGeometry {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Edge length of a keyboard tile, also the instruction bar height
    pub tile_size: u32,
    /// Letters per keyboard row, top to bottom
    pub row_lengths: Vec<usize>,
}

impl Default for CardGeometry {
    fn default() -> Self {
        Self {
            canvas_width: CARD_WIDTH,
            canvas_height: CARD_HEIGHT,
            tile_size: TILE_SIZE,
            row_lengths: ROW_LENGTHS.to_vec(),
        }
    }
}

impl CardGeometry {
    /// Replaces the row partition.
    #[must_use]
    pub fn with_row_lengths(mut self, row_lengths: Vec<usize>) -> Self {
        self.row_lengths = row_lengths;
        self
    }

    /// Total keyboard slots across all rows.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.row_lengths.iter().sum()
    }

    /// Outline width for rectangles of the given height.
    #[must_use]
    pub const fn outline_width(extent: u32) -> u32 {
        extent / 20
    }

    /// Font size for labels inside a box of the given height.
    #[must_use]
    pub fn font_size(extent: u32) -> f32 {
        (extent as f32 / 2.5).floor()
    }
}

/// Axis-aligned tile rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBounds {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl TileBounds {
    /// Creates bounds from origin and size.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive of the outline pixel column drawn at it).
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Horizontal midpoint, rounded down.
    #[must_use]
    pub const fn center_x(&self) -> u32 {
        self.x + self.width / 2
    }

    /// Vertical midpoint, rounded down.
    #[must_use]
    pub const fn center_y(&self) -> u32 {
        self.y + self.height / 2
    }
}

/// One positioned cell of the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tile {
    /// A keyboard letter and the substitute printed beside it
    Key {
        /// Tile rectangle
        bounds: TileBounds,
        /// Keyboard letter (primary label)
        letter: char,
        /// Cipher substitute (secondary label)
        substitute: char,
    },
    /// The bottom strip carrying the activation code
    Instruction {
        /// Tile rectangle
        bounds: TileBounds,
        /// Full instruction text
        text: String,
    },
}

impl Tile {
    /// Tile rectangle.
    #[must_use]
    pub const fn bounds(&self) -> TileBounds {
        match self {
            Self::Key { bounds, .. } | Self::Instruction { bounds, .. } => *bounds,
        }
    }

    /// Primary label: the letter for keys, the full text for the instruction bar.
    #[must_use]
    pub fn primary_label(&self) -> String {
        match self {
            Self::Key { letter, .. } => letter.to_string(),
            Self::Instruction { text, .. } => text.clone(),
        }
    }

    /// Secondary label: the substitute for keys, nothing for the instruction bar.
    #[must_use]
    pub fn secondary_label(&self) -> Option<String> {
        match self {
            Self::Key { substitute, .. } => Some(substitute.to_string()),
            Self::Instruction { .. } => None,
        }
    }

    /// Returns true for keyboard tiles.
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Key { .. })
    }
}

/// Every tile of one card, keyboard tiles first in row order.
///
/// Built once per card and consumed by a renderer. There are no mutating
/// methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLayout {
    pub(crate) canvas_width: u32,
    pub(crate) canvas_height: u32,
    pub(crate) tile_size: u32,
    pub(crate) tiles: Vec<Tile>,
}

impl CardLayout {
    /// Canvas width in pixels.
    #[must_use]
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Keyboard tile edge length.
    #[must_use]
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// All tiles in drawing order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Keyboard tiles only.
    pub fn key_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.is_key())
    }

    /// The instruction bar, if present.
    #[must_use]
    pub fn instruction(&self) -> Option<&Tile> {
        self.tiles.iter().find(|tile| !tile.is_key())
    }
}
