//! Terminal preview of a card.
//!
//! Draws the layout with Unicode box-drawing characters, one box per tile.
//!
//! # Example
//!
//! ```text
//! ┌─────┐┌─────┐┌─────┐
//! │ Q % ││ W k ││ E 7 │ ...
//! └─────┘└─────┘└─────┘
//! ┌──────────────────────────────────────────────┐
//! │   k3Y$word + [Your Secret] + [Site Code]     │
//! └──────────────────────────────────────────────┘
//! ```

use crate::models::{CardLayout, Tile};

/// Characters per tile unit, borders included.
const CELL_WIDTH: usize = 7;
/// Lines per tile unit, borders included.
const CELL_HEIGHT: usize = 3;

/// Renders `layout` as a box diagram suitable for a terminal or code block.
#[must_use]
pub fn render_card_diagram(layout: &CardLayout) -> String {
    let unit = layout.tile_size().max(1) as usize;
    let columns = (layout.canvas_width() as usize).div_ceil(unit);
    let rows = (layout.canvas_height() as usize).div_ceil(unit);

    let mut buffer = vec![vec![' '; columns * CELL_WIDTH]; rows * CELL_HEIGHT];

    for tile in layout.tiles() {
        let bounds = tile.bounds();
        let row = bounds.y as usize / unit * CELL_HEIGHT;
        let col = bounds.x as usize / unit * CELL_WIDTH;
        let width = (bounds.width as usize / unit).max(1) * CELL_WIDTH;
        let height = (bounds.height as usize / unit).max(1) * CELL_HEIGHT;

        let label = match tile {
            Tile::Key {
                letter, substitute, ..
            } => format!("{letter} {substitute}"),
            Tile::Instruction { text, .. } => text.clone(),
        };

        render_box(&mut buffer, row, col, width, height, &label);
    }

    let mut output = String::new();
    for line in &buffer {
        let line: String = line.iter().collect();
        let line = line.trim_end();
        if !line.is_empty() {
            output.push_str(line);
            output.push('\n');
        }
    }
    output
}

/// Draws one box with its label centered on the middle line.
fn render_box(
    buffer: &mut [Vec<char>],
    row: usize,
    col: usize,
    width: usize,
    height: usize,
    label: &str,
) {
    let max_row = buffer.len();
    let max_col = buffer.first().map_or(0, Vec::len);
    if row >= max_row || col >= max_col {
        return;
    }

    let width = width.min(max_col - col);
    let height = height.min(max_row - row);
    if width < 3 || height < 3 {
        return;
    }

    let right = col + width - 1;
    let bottom = row + height - 1;

    for c in col + 1..right {
        buffer[row][c] = '─';
        buffer[bottom][c] = '─';
    }
    for line in buffer.iter_mut().take(bottom).skip(row + 1) {
        line[col] = '│';
        line[right] = '│';
    }
    buffer[row][col] = '┌';
    buffer[row][right] = '┐';
    buffer[bottom][col] = '└';
    buffer[bottom][right] = '┘';

    write_centered_text(buffer, row + height / 2, col + 1, width - 2, label);
}

/// Writes text centered in `width` cells, truncating if it does not fit.
fn write_centered_text(
    buffer: &mut [Vec<char>],
    row: usize,
    start_col: usize,
    width: usize,
    text: &str,
) {
    let Some(line) = buffer.get_mut(row) else {
        return;
    };

    let text_len = text.chars().count();
    let padding = width.saturating_sub(text_len) / 2;
    for (i, ch) in text.chars().take(width).enumerate() {
        if let Some(cell) = line.get_mut(start_col + padding + i) {
            *cell = ch;
        }
    }
}
