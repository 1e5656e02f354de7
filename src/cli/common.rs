//! Error and exit-code plumbing shared by CLI commands.

use crate::error::CardError;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Card written or printed
    Success = 0,
    /// Output could not be written or encoded
    IoError = 1,
    /// Invalid configuration, geometry or generation settings
    ValidationError = 2,
    /// Font or other resource missing
    ResourceError = 3,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// A failed command with its exit code.
#[derive(Debug)]
pub struct CliError {
    /// Exit code reported to the shell
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Missing resource.
    pub fn resource(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ResourceError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<CardError> for CliError {
    fn from(error: CardError) -> Self {
        let message = error.to_string();
        match error {
            CardError::Io { .. } | CardError::Encoding { .. } => Self::io(message),
            CardError::ResourceUnavailable { .. } => Self::resource(message),
            CardError::PoolExhausted { .. }
            | CardError::UnsatisfiableCode(_)
            | CardError::InvalidCipher(_)
            | CardError::LayoutMismatch { .. } => Self::validation(message),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_card_error_mapping() {
        let err = CliError::from(CardError::ResourceUnavailable {
            name: "Hack-Bold.ttf".to_string(),
            reason: "font not found".to_string(),
        });
        assert_eq!(err.exit_code, ExitCode::ResourceError);
        assert!(err.message.contains("Hack-Bold.ttf"));

        let err = CliError::from(CardError::LayoutMismatch {
            letters: 26,
            slots: 25,
        });
        assert_eq!(err.exit_code, ExitCode::ValidationError);

        let err = CliError::from(CardError::Io {
            path: PathBuf::from("/nope/card.png"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(err.exit_code, ExitCode::IoError);
        assert!(err.to_string().contains("/nope/card.png"));
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::IoError.code(), 1);
        assert_eq!(ExitCode::ValidationError.code(), 2);
        assert_eq!(ExitCode::ResourceError.code(), 3);
    }
}
