//! Draws a [`CardLayout`] onto a [`DrawingSurface`].
//!
//! Pure geometry: every value drawn was decided when the layout was built.

use crate::error::CardResult;
use crate::export::surface::{DrawingSurface, Point, TextExtent};
use crate::models::{CardGeometry, CardLayout, CardTheme, Tile, TileBounds};
use tracing::debug;

/// Renders every tile of `layout` onto `surface`.
///
/// The font is loaded once at `floor(tile_size / 2.5)` pixels. Keyboard
/// tiles show the letter immediately left of the tile's horizontal center
/// and the substitute immediately right of it, both vertically centered.
/// The instruction bar text is centered in both directions.
///
/// # Errors
///
/// Fails only if the font cannot be loaded; nothing is drawn in that case.
pub fn render_card<S: DrawingSurface>(
    layout: &CardLayout,
    theme: &CardTheme,
    font_name: &str,
    surface: &mut S,
) -> CardResult<()> {
    let font_size = CardGeometry::font_size(layout.tile_size());
    let font = surface.load_font(font_name, font_size)?;

    for tile in layout.tiles() {
        draw_tile_box(surface, tile.bounds(), theme);

        match tile {
            Tile::Key {
                bounds,
                letter,
                substitute,
            } => {
                let letter = letter.to_string();
                let substitute = substitute.to_string();
                let letter_extent = surface.measure_text(&font, &letter);
                let substitute_extent = surface.measure_text(&font, &substitute);

                let (letter_at, substitute_at) =
                    key_label_positions(*bounds, letter_extent, substitute_extent);
                surface.draw_text(letter_at, &font, theme.text, &letter);
                surface.draw_text(substitute_at, &font, theme.text, &substitute);
            }
            Tile::Instruction { bounds, text } => {
                let extent = surface.measure_text(&font, text);
                surface.draw_text(centered(*bounds, extent), &font, theme.text, text);
            }
        }
    }

    debug!(tiles = layout.tiles().len(), font_size, "card rendered");
    Ok(())
}

/// Draws the filled, outlined rectangle behind a tile.
fn draw_tile_box<S: DrawingSurface>(surface: &mut S, bounds: TileBounds, theme: &CardTheme) {
    surface.draw_rectangle(
        Point::new(bounds.x as i32, bounds.y as i32),
        Point::new(bounds.right() as i32, bounds.bottom() as i32),
        theme.tile,
        theme.outline,
        CardGeometry::outline_width(bounds.height),
    );
}

/// Top-left positions for a key's letter and substitute.
///
/// The letter ends where the substitute begins, at the horizontal center.
fn key_label_positions(
    bounds: TileBounds,
    letter: TextExtent,
    substitute: TextExtent,
) -> (Point, Point) {
    let center_x = bounds.center_x() as i32;
    let center_y = bounds.center_y() as i32;

    (
        Point::new(
            center_x - letter.width as i32,
            center_y - (letter.height / 2) as i32,
        ),
        Point::new(center_x, center_y - (substitute.height / 2) as i32),
    )
}

/// Top-left position that centers `extent` in `bounds`.
fn centered(bounds: TileBounds, extent: TextExtent) -> Point {
    Point::new(
        bounds.center_x() as i32 - (extent.width / 2) as i32,
        bounds.center_y() as i32 - (extent.height / 2) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;
    use crate::models::{ActivationCode, CipherMap, RgbColor};
    use crate::services::geometry::{build_layout, keyboard_order};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Rect {
            top_left: Point,
            bottom_right: Point,
            outline_width: u32,
        },
        Text {
            position: Point,
            text: String,
        },
    }

    /// Records calls; every glyph is 10 px wide and 20 px tall.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
        font_sizes: Vec<f32>,
        missing_font: bool,
    }

    impl DrawingSurface for RecordingSurface {
        type Font = f32;

        fn load_font(&mut self, name: &str, size: f32) -> CardResult<f32> {
            if self.missing_font {
                return Err(CardError::ResourceUnavailable {
                    name: name.to_string(),
                    reason: "not found".to_string(),
                });
            }
            self.font_sizes.push(size);
            Ok(size)
        }

        fn draw_rectangle(
            &mut self,
            top_left: Point,
            bottom_right: Point,
            fill: RgbColor,
            outline: RgbColor,
            outline_width: u32,
        ) {
            assert_eq!(fill, RgbColor::BLACK);
            assert_eq!(outline, RgbColor::WHITE);
            self.calls.push(Call::Rect {
                top_left,
                bottom_right,
                outline_width,
            });
        }

        fn measure_text(&self, _font: &f32, text: &str) -> TextExtent {
            TextExtent {
                width: 10 * text.chars().count() as u32,
                height: 20,
            }
        }

        fn draw_text(&mut self, position: Point, _font: &f32, color: RgbColor, text: &str) {
            assert_eq!(color, RgbColor::WHITE);
            self.calls.push(Call::Text {
                position,
                text: text.to_string(),
            });
        }
    }

    fn test_layout() -> CardLayout {
        let letters = keyboard_order();
        let cipher = CipherMap::from_entries(
            letters
                .iter()
                .zip(letters.iter().rev())
                .map(|(&l, &s)| (l, s.to_ascii_lowercase())),
        )
        .unwrap();
        let code = ActivationCode::new("m4X!abcd").unwrap();
        build_layout(&cipher, &code, &CardGeometry::default()).unwrap()
    }

    fn render(surface: &mut RecordingSurface) -> CardResult<()> {
        render_card(&test_layout(), &CardTheme::default(), "Test.ttf", surface)
    }

    #[test]
    fn test_call_counts() {
        let mut surface = RecordingSurface::default();
        render(&mut surface).unwrap();

        let rects = surface
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Rect { .. }))
            .count();
        let texts = surface
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Text { .. }))
            .count();
        assert_eq!(rects, 27);
        assert_eq!(texts, 26 * 2 + 1);
        assert_eq!(surface.font_sizes, vec![40.0]);
    }

    #[test]
    fn test_first_key_geometry() {
        let mut surface = RecordingSurface::default();
        render(&mut surface).unwrap();

        assert_eq!(
            surface.calls[0],
            Call::Rect {
                top_left: Point::new(0, 0),
                bottom_right: Point::new(100, 100),
                outline_width: 5,
            }
        );
        // Q ends at the center; its substitute 'm' starts there.
        assert_eq!(
            surface.calls[1],
            Call::Text {
                position: Point::new(40, 40),
                text: "Q".to_string(),
            }
        );
        assert_eq!(
            surface.calls[2],
            Call::Text {
                position: Point::new(50, 40),
                text: "m".to_string(),
            }
        );
    }

    #[test]
    fn test_last_key_of_bottom_row() {
        let mut surface = RecordingSurface::default();
        render(&mut surface).unwrap();

        // M is the 26th key: calls 75..78.
        assert_eq!(
            surface.calls[75],
            Call::Rect {
                top_left: Point::new(600, 200),
                bottom_right: Point::new(700, 300),
                outline_width: 5,
            }
        );
        assert_eq!(
            surface.calls[76],
            Call::Text {
                position: Point::new(640, 240),
                text: "M".to_string(),
            }
        );
    }

    #[test]
    fn test_instruction_bar_centered() {
        let mut surface = RecordingSurface::default();
        render(&mut surface).unwrap();

        let text = "m4X!abcd + [Your Secret] + [Site Code]";
        let width = 10 * text.len() as i32;
        let n = surface.calls.len();
        assert_eq!(
            surface.calls[n - 2],
            Call::Rect {
                top_left: Point::new(0, 300),
                bottom_right: Point::new(1000, 400),
                outline_width: 5,
            }
        );
        assert_eq!(
            surface.calls[n - 1],
            Call::Text {
                position: Point::new(500 - width / 2, 340),
                text: text.to_string(),
            }
        );
    }

    #[test]
    fn test_missing_font_draws_nothing() {
        let mut surface = RecordingSurface {
            missing_font: true,
            ..RecordingSurface::default()
        };
        let err = render(&mut surface).unwrap_err();
        assert!(matches!(err, CardError::ResourceUnavailable { .. }));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_centered() {
        let bounds = TileBounds::new(0, 300, 1000, 100);
        let extent = TextExtent {
            width: 380,
            height: 40,
        };
        assert_eq!(centered(bounds, extent), Point::new(310, 330));
    }
}
