//! Card generation pipeline.
//!
//! Fresh pools, cipher, code and layout on every call; then render and save.

use crate::config::Config;
use crate::constants::{DEFAULT_FONT, DEFAULT_OUTPUT_FILE};
use crate::error::CardResult;
use crate::export::{render_card, RasterSurface};
use crate::models::{ActivationCode, CardGeometry, CardLayout, CardTheme, CipherMap};
use crate::services::cipher::CipherBuilder;
use crate::services::code::CodeBuilder;
use crate::services::geometry::build_layout;
use anyhow::Result;
use rand::{CryptoRng, Rng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything generated for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Activation code printed on the instruction bar
    pub code: ActivationCode,
    /// Letter substitutions printed on the keyboard tiles
    pub cipher: CipherMap,
    /// Positioned tiles
    #[serde(skip)]
    pub layout: CardLayout,
}

/// Builds cards from a geometry and the cipher and code builders.
#[derive(Debug, Clone, Default)]
pub struct CardGenerator {
    geometry: CardGeometry,
    cipher: CipherBuilder,
    code: CodeBuilder,
}

impl CardGenerator {
    /// Generator with the standard card geometry and builders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different card geometry.
    #[must_use]
    pub fn geometry(mut self, geometry: CardGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Generates a card, drawing every random value from `rng`.
    pub fn generate<R: Rng + CryptoRng>(&self, rng: &mut R) -> CardResult<Card> {
        let code = self.code.build(rng)?;
        let cipher = self.cipher.build(rng)?;
        let layout = build_layout(&cipher, &code, &self.geometry)?;
        Ok(Card {
            code,
            cipher,
            layout,
        })
    }

    /// Generates a card with the OS random source.
    pub fn generate_secure(&self) -> CardResult<Card> {
        self.generate(&mut super::csprng())
    }
}

/// How a card is drawn and where it goes by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Font file name or path
    pub font: String,
    /// Directories searched for a bare font name
    pub font_dirs: Vec<PathBuf>,
    /// Card colors
    pub theme: CardTheme,
    /// Output path used when the caller names none
    pub default_output: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            font_dirs: Vec::new(),
            theme: CardTheme::default(),
            default_output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl RenderOptions {
    /// Options described by a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            font: config.render.font.clone(),
            font_dirs: config.font_search_dirs(),
            theme: config.theme.to_theme()?,
            default_output: config.output.default_file.clone(),
        })
    }
}

/// Renders `layout` and writes it to `path` as PNG.
///
/// The font is loaded before anything touches the file system, so a missing
/// font leaves no output behind.
pub fn write_card_png(layout: &CardLayout, options: &RenderOptions, path: &Path) -> CardResult<()> {
    let mut surface = RasterSurface::new(
        layout.canvas_width(),
        layout.canvas_height(),
        options.theme.background,
    )
    .with_font_dirs(options.font_dirs.iter().cloned());

    render_card(layout, &options.theme, &options.font, &mut surface)?;
    surface.save_png(path)
}

/// Generates a card and writes it to `output` (default `card.png`).
///
/// Uses the default font, colors and geometry. Returns the path written.
pub fn generate_image(output: Option<&Path>) -> CardResult<PathBuf> {
    generate_image_with(output, &RenderOptions::default())
}

/// Generates a card and writes it using `options`.
pub fn generate_image_with(output: Option<&Path>, options: &RenderOptions) -> CardResult<PathBuf> {
    let path = output.map_or_else(|| options.default_output.clone(), Path::to_path_buf);

    let card = CardGenerator::new().generate_secure()?;
    write_card_png(&card.layout, options, &path)?;

    info!(path = %path.display(), "card generated");
    Ok(path)
}
