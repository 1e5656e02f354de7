//! In-memory RGB canvas with TrueType text and PNG output.

use crate::constants::APP_NAME;
use crate::error::{CardError, CardResult};
use crate::export::surface::{DrawingSurface, Point, TextExtent};
use crate::models::RgbColor;
use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A parsed font at a fixed pixel size.
pub struct RasterFont {
    face: FontVec,
    scale: PxScale,
}

impl std::fmt::Debug for RasterFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterFont")
            .field("scale", &self.scale.y)
            .finish_non_exhaustive()
    }
}

/// Drawing surface backed by an RGB image.
///
/// Font names are tried as paths first, then inside each configured font
/// directory in order.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbImage,
    font_dirs: Vec<PathBuf>,
}

impl RasterSurface {
    /// Creates a `width` × `height` canvas filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: RgbColor) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background.channels())),
            font_dirs: Vec::new(),
        }
    }

    /// Adds directories searched for fonts given by bare name.
    #[must_use]
    pub fn with_font_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.font_dirs.extend(dirs);
        self
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<RgbColor> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgb([r, g, b])| RgbColor::new(*r, *g, *b))
    }

    /// Paths tried, in order, when loading `name`.
    fn font_candidates(&self, name: &str) -> Vec<PathBuf> {
        let mut candidates = vec![PathBuf::from(name)];
        candidates.extend(self.font_dirs.iter().map(|dir| dir.join(name)));
        candidates
    }

    /// Writes the canvas as an 8-bit RGB PNG.
    ///
    /// The image is encoded in memory, written to a sibling temporary file
    /// and renamed over `path`, so a failed save never leaves a partial card.
    pub fn save_png(&self, path: &Path) -> CardResult<()> {
        let data = self.encode_png(path)?;

        let temp_path = temp_path_for(path);
        let result = fs::write(&temp_path, &data)
            .and_then(|()| fs::rename(&temp_path, path))
            .map_err(|source| CardError::Io {
                path: path.to_path_buf(),
                source,
            });

        if result.is_err() {
            // Best effort; the original error is what matters.
            let _ = fs::remove_file(&temp_path);
        }
        result?;

        info!(path = %path.display(), bytes = data.len(), "card image written");
        Ok(())
    }

    fn encode_png(&self, path: &Path) -> CardResult<Vec<u8>> {
        let encoding_error = |error: png::EncodingError| match error {
            png::EncodingError::IoError(source) => CardError::Io {
                path: path.to_path_buf(),
                source,
            },
            source => CardError::Encoding {
                path: path.to_path_buf(),
                source,
            },
        };

        let mut data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut data, self.width(), self.height());
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            encoder
                .add_text_chunk("Software".to_string(), APP_NAME.to_string())
                .map_err(encoding_error)?;
            encoder
                .add_text_chunk(
                    "Creation Time".to_string(),
                    chrono::Local::now().to_rfc2822(),
                )
                .map_err(encoding_error)?;

            let mut writer = encoder.write_header().map_err(encoding_error)?;
            writer
                .write_image_data(self.image.as_raw())
                .map_err(encoding_error)?;
            writer.finish().map_err(encoding_error)?;
        }
        Ok(data)
    }

    /// Fills the inclusive rectangle `(x0, y0)..=(x1, y1)`, clipped to the canvas.
    fn fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: RgbColor) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width() as i32 - 1);
        let y1 = y1.min(self.height() as i32 - 1);
        if x1 < x0 || y1 < y0 {
            return;
        }

        let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
        draw_filled_rect_mut(&mut self.image, rect, Rgb(color.channels()));
    }
}

/// Sibling path used while a PNG is being written.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl DrawingSurface for RasterSurface {
    type Font = RasterFont;

    fn load_font(&mut self, name: &str, size: f32) -> CardResult<RasterFont> {
        let unavailable = |reason: String| CardError::ResourceUnavailable {
            name: name.to_string(),
            reason,
        };

        let candidates = self.font_candidates(name);
        let path = candidates
            .iter()
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| {
                let searched: Vec<String> = candidates
                    .iter()
                    .map(|candidate| candidate.display().to_string())
                    .collect();
                unavailable(format!("font not found (searched: {})", searched.join(", ")))
            })?;

        let data = fs::read(path)
            .map_err(|e| unavailable(format!("failed to read {}: {e}", path.display())))?;
        let face = FontVec::try_from_vec(data)
            .map_err(|e| unavailable(format!("{} is not a usable font: {e}", path.display())))?;

        debug!(path = %path.display(), size, "font loaded");
        Ok(RasterFont {
            face,
            scale: PxScale::from(size),
        })
    }

    fn draw_rectangle(
        &mut self,
        top_left: Point,
        bottom_right: Point,
        fill: RgbColor,
        outline: RgbColor,
        outline_width: u32,
    ) {
        let (x0, y0, x1, y1) = (top_left.x, top_left.y, bottom_right.x, bottom_right.y);
        if outline_width == 0 {
            self.fill(x0, y0, x1, y1, fill);
            return;
        }

        let inset = outline_width as i32;
        self.fill(x0, y0, x1, y1, outline);
        self.fill(x0 + inset, y0 + inset, x1 - inset, y1 - inset, fill);
    }

    fn measure_text(&self, font: &RasterFont, text: &str) -> TextExtent {
        let (width, height) = text_size(font.scale, &font.face, text);
        TextExtent { width, height }
    }

    fn draw_text(&mut self, position: Point, font: &RasterFont, color: RgbColor, text: &str) {
        draw_text_mut(
            &mut self.image,
            Rgb(color.channels()),
            position.x,
            position.y,
            font.scale,
            &font.face,
            text,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_canvas_is_background() {
        let surface = RasterSurface::new(20, 10, RgbColor::WHITE);
        assert_eq!(surface.width(), 20);
        assert_eq!(surface.height(), 10);
        assert_eq!(surface.pixel(0, 0), Some(RgbColor::WHITE));
        assert_eq!(surface.pixel(19, 9), Some(RgbColor::WHITE));
        assert_eq!(surface.pixel(20, 0), None);
    }

    #[test]
    fn test_rectangle_outline_inside_bounds() {
        let mut surface = RasterSurface::new(30, 30, RgbColor::new(1, 2, 3));
        surface.draw_rectangle(
            Point::new(5, 5),
            Point::new(25, 25),
            RgbColor::BLACK,
            RgbColor::WHITE,
            2,
        );

        assert_eq!(surface.pixel(4, 4), Some(RgbColor::new(1, 2, 3)));
        assert_eq!(surface.pixel(5, 5), Some(RgbColor::WHITE));
        assert_eq!(surface.pixel(6, 15), Some(RgbColor::WHITE));
        assert_eq!(surface.pixel(7, 7), Some(RgbColor::BLACK));
        assert_eq!(surface.pixel(23, 23), Some(RgbColor::BLACK));
        assert_eq!(surface.pixel(24, 24), Some(RgbColor::WHITE));
        assert_eq!(surface.pixel(25, 25), Some(RgbColor::WHITE));
        assert_eq!(surface.pixel(26, 26), Some(RgbColor::new(1, 2, 3)));
    }

    #[test]
    fn test_rectangle_clipped_to_canvas() {
        let mut surface = RasterSurface::new(100, 100, RgbColor::WHITE);
        surface.draw_rectangle(
            Point::new(90, 90),
            Point::new(100, 100),
            RgbColor::BLACK,
            RgbColor::new(200, 0, 0),
            0,
        );
        assert_eq!(surface.pixel(99, 99), Some(RgbColor::BLACK));
        assert_eq!(surface.pixel(89, 89), Some(RgbColor::WHITE));
    }

    #[test]
    fn test_missing_font_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let mut surface = RasterSurface::new(10, 10, RgbColor::WHITE)
            .with_font_dirs([temp.path().to_path_buf()]);

        let err = surface.load_font("NoSuchFont.ttf", 40.0).unwrap_err();
        match err {
            CardError::ResourceUnavailable { name, reason } => {
                assert_eq!(name, "NoSuchFont.ttf");
                assert!(reason.contains("not found"));
                assert!(reason.contains(&temp.path().display().to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_font_file_is_unavailable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Broken.ttf"), b"not a font").unwrap();
        let mut surface = RasterSurface::new(10, 10, RgbColor::WHITE)
            .with_font_dirs([temp.path().to_path_buf()]);

        let err = surface.load_font("Broken.ttf", 40.0).unwrap_err();
        assert!(err.to_string().contains("not a usable font"));
    }

    #[test]
    fn test_save_png_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("card.png");
        let surface = RasterSurface::new(40, 16, RgbColor::WHITE);

        surface.save_png(&path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert!(!temp.path().join("card.png.tmp").exists());
    }

    #[test]
    fn test_save_png_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("card.png");
        let surface = RasterSurface::new(4, 4, RgbColor::WHITE);

        let err = surface.save_png(&path).unwrap_err();
        assert!(matches!(err, CardError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path_for(Path::new("out/card.png")),
            PathBuf::from("out/card.png.tmp")
        );
    }
}
