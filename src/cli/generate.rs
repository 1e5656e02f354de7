//! Generate command: build a card and write or print it.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::render_card_diagram;
use crate::services::{generate_image_with, CardGenerator, RenderOptions};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Stdout formats for `--print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    /// Box diagram of the card
    Text,
    /// Code and cipher as JSON
    Json,
}

/// Generate a password card
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Output PNG path (defaults to the configured file, card.png)
    #[arg(value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Font file to render with, overriding the config
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the card to stdout instead of writing a PNG
    #[arg(long, value_enum, value_name = "FORMAT", conflicts_with = "output")]
    pub print: Option<PrintFormat>,

    /// Write a default config file and exit
    #[arg(long, conflicts_with_all = ["output", "print"])]
    pub init_config: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        if self.init_config {
            return self.write_default_config();
        }

        if let Some(format) = self.print {
            return Self::print_card(format);
        }

        let options = self.render_options()?;
        let path = generate_image_with(self.output.as_deref(), &options)?;

        println!("✓ Card written to: {}", path.display());
        Ok(())
    }

    /// Config file this invocation reads or writes.
    fn config_path(&self) -> CliResult<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate config file: {e}"))),
        }
    }

    fn write_default_config(&self) -> CliResult<()> {
        let path = self.config_path()?;
        if path.exists() {
            return Err(CliError::validation(format!(
                "Config file already exists: {}",
                path.display()
            )));
        }

        Config::new()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to write config: {e:#}")))?;

        println!("✓ Wrote default config to: {}", path.display());
        Ok(())
    }

    fn print_card(format: PrintFormat) -> CliResult<()> {
        let card = CardGenerator::new().generate_secure()?;

        match format {
            PrintFormat::Text => print!("{}", render_card_diagram(&card.layout)),
            PrintFormat::Json => {
                let json = serde_json::to_string_pretty(&card)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
                println!("{json}");
            }
        }
        Ok(())
    }

    /// Render options from the config file with command-line overrides applied.
    fn render_options(&self) -> CliResult<RenderOptions> {
        let config = Config::load_from(&self.config_path()?)
            .map_err(|e| CliError::validation(format!("Failed to load config: {e:#}")))?;

        let mut options = RenderOptions::from_config(&config)
            .map_err(|e| CliError::validation(format!("Invalid config: {e:#}")))?;

        if let Some(font) = &self.font {
            options.font = font.display().to_string();
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_options_font_override() {
        let temp = TempDir::new().unwrap();
        let args = GenerateArgs {
            font: Some(PathBuf::from("/fonts/Mono.ttf")),
            config: Some(temp.path().join("config.toml")),
            ..GenerateArgs::default()
        };

        let options = args.render_options().unwrap();
        assert_eq!(options.font, "/fonts/Mono.ttf");
        assert_eq!(options.default_output, PathBuf::from("card.png"));
    }

    #[test]
    fn test_render_options_from_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(
            &config_path,
            "[render]\nfont = \"Custom.ttf\"\n\n[output]\ndefault_file = \"mine.png\"\n",
        )
        .unwrap();

        let args = GenerateArgs {
            config: Some(config_path),
            ..GenerateArgs::default()
        };
        let options = args.render_options().unwrap();
        assert_eq!(options.font, "Custom.ttf");
        assert_eq!(options.default_output, PathBuf::from("mine.png"));
    }

    #[test]
    fn test_broken_config_is_validation_error() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "not = [valid").unwrap();

        let args = GenerateArgs {
            config: Some(config_path),
            ..GenerateArgs::default()
        };
        let err = args.render_options().unwrap_err();
        assert_eq!(err.exit_code, ExitCode::ValidationError);
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        let args = GenerateArgs {
            config: Some(config_path.clone()),
            init_config: true,
            ..GenerateArgs::default()
        };

        args.execute().unwrap();
        assert!(config_path.exists());
        assert_eq!(Config::load_from(&config_path).unwrap(), Config::new());

        let err = args.execute().unwrap_err();
        assert_eq!(err.exit_code, ExitCode::ValidationError);
    }
}
