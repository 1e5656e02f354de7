//! Card layout construction.
//!
//! Places the 26 letters on a QWERTY grid and appends the instruction bar.
//! All positions are derived from [`CardGeometry`]; nothing here is random.

use crate::constants::INSTRUCTION_SUFFIX;
use crate::error::{CardError, CardResult};
use crate::models::{ActivationCode, CardGeometry, CardLayout, Category, CipherMap, Tile, TileBounds};
use tracing::debug;

/// Letters in physical keyboard order, top row first.
#[must_use]
pub fn keyboard_order() -> Vec<char> {
    Category::Upper.chars()
}

/// Text printed on the instruction bar for `code`.
#[must_use]
pub fn instruction_text(code: &ActivationCode) -> String {
    format!("{code}{INSTRUCTION_SUFFIX}")
}

/// Builds the tile layout for one card.
///
/// Keyboard tiles come first in row order, each at
/// `(column * tile_size, row * tile_size)`; the instruction bar spans the
/// bottom `tile_size` pixels of the canvas.
///
/// # Errors
///
/// Returns [`CardError::LayoutMismatch`] when the row lengths do not add up
/// to the number of letters. Letters are never dropped or repeated.
pub fn build_layout(
    cipher: &CipherMap,
    code: &ActivationCode,
    geometry: &CardGeometry,
) -> CardResult<CardLayout> {
    let letters = keyboard_order();
    let slots = geometry.slot_count();
    if slots != letters.len() {
        return Err(CardError::LayoutMismatch {
            letters: letters.len(),
            slots,
        });
    }

    let size = geometry.tile_size;
    let mut tiles = Vec::with_capacity(letters.len() + 1);
    let mut remaining = letters.iter();

    for (row, &length) in geometry.row_lengths.iter().enumerate() {
        for column in 0..length {
            let Some(&letter) = remaining.next() else {
                return Err(CardError::LayoutMismatch {
                    letters: letters.len(),
                    slots,
                });
            };
            let substitute = cipher.substitute(letter).ok_or_else(|| {
                CardError::InvalidCipher(format!("no substitute for {letter:?}"))
            })?;

            tiles.push(Tile::Key {
                bounds: TileBounds::new(column as u32 * size, row as u32 * size, size, size),
                letter,
                substitute,
            });
        }
    }

    tiles.push(Tile::Instruction {
        bounds: TileBounds::new(
            0,
            geometry.canvas_height.saturating_sub(size),
            geometry.canvas_width,
            size,
        ),
        text: instruction_text(code),
    });

    debug!(
        tiles = tiles.len(),
        rows = geometry.row_lengths.len(),
        "card layout built"
    );

    Ok(CardLayout {
        canvas_width: geometry.canvas_width,
        canvas_height: geometry.canvas_height,
        tile_size: size,
        tiles,
    })
}
