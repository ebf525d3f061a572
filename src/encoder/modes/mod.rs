//! QR code data modes
//!
//! Each mode packs its characters differently:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and nine symbols
//! - Byte: 8-bit data (UTF-8)
//! - Kanji: Shift JIS double-byte characters, 13 bits each

use std::fmt;
use std::str::FromStr;

use crate::error::EncodeError;
use crate::models::Version;

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;

pub use alphanumeric::AlphanumericData;
pub use byte::ByteData;
pub use kanji::{KanjiData, ShiftJis};
pub use numeric::NumericData;

/// Data mode of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte, Mode::Kanji];

    /// 4-bit mode indicator
    pub fn indicator_bits(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Width of the character count indicator for `version`
    pub fn char_count_bits(&self, version: Version) -> usize {
        let widths: [usize; 3] = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
        };
        widths[version.tier()]
    }

    /// Payload bits needed for `len` characters (bytes for Byte mode)
    pub fn bits_length(&self, len: usize) -> usize {
        match self {
            Mode::Numeric => NumericData::bits_length(len),
            Mode::Alphanumeric => AlphanumericData::bits_length(len),
            Mode::Byte => ByteData::bits_length(len),
            Mode::Kanji => KanjiData::bits_length(len),
        }
    }

    /// Lower-case name
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Byte => "byte",
            Mode::Kanji => "kanji",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Mode {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(Mode::Numeric),
            "alphanumeric" => Ok(Mode::Alphanumeric),
            "byte" => Ok(Mode::Byte),
            "kanji" => Ok(Mode::Kanji),
            _ => Err(EncodeError::UnknownMode(s.to_string())),
        }
    }
}
