//! Shared test fixtures for card tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use passcard::config::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to the passcard binary
pub fn passcard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_passcard")
}

/// Writes `config` into a fresh temp directory.
///
/// # Returns
/// The config path and the temp directory, which must be kept alive.
pub fn create_temp_config(config: &Config) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    config.save_to(&path).expect("Failed to write config");
    (path, temp_dir)
}

/// A config whose font cannot exist.
pub fn config_with_missing_font(dir: &Path) -> Config {
    let mut config = Config::new();
    config.render.font = dir.join("no-such-font.ttf").display().to_string();
    config.render.font_dirs = vec![dir.to_path_buf()];
    config
}

/// Letters of the card in keyboard order.
pub fn qwerty_letters() -> Vec<char> {
    "QWERTYUIOPASDFGHJKLZXCVBNM".chars().collect()
}
