//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{DEFAULT_FONT, DEFAULT_OUTPUT_FILE};
use crate::models::{CardTheme, RgbColor};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Font settings for the rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Font file name or path (e.g., "Hack-Bold.ttf")
    pub font: String,
    /// Extra directories searched when `font` is a bare file name
    #[serde(default)]
    pub font_dirs: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            font_dirs: Vec::new(),
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// PNG written when no output path is given
    pub default_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Card colors as "#RRGGBB" strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Canvas background
    pub background: String,
    /// Tile fill
    pub tile: String,
    /// Tile outline
    pub outline: String,
    /// Label color
    pub text: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let theme = CardTheme::default();
        Self {
            background: theme.background.to_hex(),
            tile: theme.tile.to_hex(),
            outline: theme.outline.to_hex(),
            text: theme.text.to_hex(),
        }
    }
}

impl ThemeConfig {
    /// Parses every color into a [`CardTheme`].
    pub fn to_theme(&self) -> Result<CardTheme> {
        Ok(CardTheme {
            background: RgbColor::from_hex(&self.background).context("theme.background")?,
            tile: RgbColor::from_hex(&self.tile).context("theme.tile")?,
            outline: RgbColor::from_hex(&self.outline).context("theme.outline")?,
            text: RgbColor::from_hex(&self.text).context("theme.text")?,
        })
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Passcard/config.toml`
/// - macOS: `~/Library/Application Support/Passcard/config.toml`
/// - Windows: `%APPDATA%\Passcard\config.toml`
///
/// # Validation
///
/// - `render.font` must not be empty
/// - `output.default_file` must not be empty
/// - every `theme` color must be a valid hex color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Font settings
    #[serde(default)]
    pub render: RenderConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Card colors
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Passcard/`
    /// - macOS: `~/Library/Application Support/Passcard/`
    /// - Windows: `%APPDATA%\Passcard\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Passcard");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the platform config file.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.render.font.trim().is_empty() {
            anyhow::bail!("render.font must name a font file");
        }

        if self.output.default_file.as_os_str().is_empty() {
            anyhow::bail!("output.default_file must not be empty");
        }

        self.theme.to_theme()?;

        Ok(())
    }

    /// Directories searched for a bare font name: configured ones first,
    /// then `fonts/` inside the config directory.
    #[must_use]
    pub fn font_search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.render.font_dirs.clone();
        if let Ok(config_dir) = Self::config_dir() {
            dirs.push(config_dir.join("fonts"));
        }
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.render.font, "Hack-Bold.ttf");
        assert!(config.render.font_dirs.is_empty());
        assert_eq!(config.output.default_file, PathBuf::from("card.png"));
        assert_eq!(config.theme.background, "#FFFFFF");
        assert_eq!(config.theme.tile, "#000000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_theme_matches_card_theme() {
        let theme = Config::new().theme.to_theme().unwrap();
        assert_eq!(theme, CardTheme::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.render.font = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.output.default_file = PathBuf::new();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.theme.outline = "#12345".to_string();
        let err = config.validate().unwrap_err();
        assert!(format!("{err:#}").contains("theme.outline"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.render.font = "DejaVuSansMono-Bold.ttf".to_string();
        config.render.font_dirs = vec![PathBuf::from("/usr/share/fonts/truetype")];
        config.theme.tile = "#1A1A1A".to_string();

        config.save_to(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_section_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[render]\nfont = \"Other.ttf\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.render.font, "Other.ttf");
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "[render\nfont = ").unwrap();
        assert!(Config::load_from(&path).is_err());

        fs::write(&path, "[theme]\nbackground = \"white\"\ntile = \"#000000\"\noutline = \"#FFFFFF\"\ntext = \"#FFFFFF\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config file"));
    }

    #[test]
    fn test_font_search_dirs_prefers_configured() {
        let mut config = Config::new();
        config.render.font_dirs = vec![PathBuf::from("/opt/fonts")];
        let dirs = config.font_search_dirs();
        assert_eq!(dirs[0], PathBuf::from("/opt/fonts"));
    }
}
