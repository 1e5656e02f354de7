//! Application-wide constants.
//!
//! This module defines the application name and the fixed card geometry.
//! The geometry values match existing printed cards and must not drift.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Passcard";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "passcard";

/// Card canvas width in pixels.
pub const CARD_WIDTH: u32 = 1000;

/// Card canvas height in pixels.
pub const CARD_HEIGHT: u32 = 400;

/// Edge length of one keyboard tile in pixels.
pub const TILE_SIZE: u32 = 100;

/// Number of letters on each keyboard row, top to bottom.
pub const ROW_LENGTHS: [usize; 3] = [10, 9, 7];

/// Default activation code length.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Output file used when the caller does not name one.
pub const DEFAULT_OUTPUT_FILE: &str = "card.png";

/// Font file loaded when no other font is configured.
pub const DEFAULT_FONT: &str = "Hack-Bold.ttf";

/// Text following the activation code on the instruction bar.
pub const INSTRUCTION_SUFFIX: &str = " + [Your Secret] + [Site Code]";
