//! Error types for QR code encoding

use crate::encoder::modes::Mode;
use crate::models::ECLevel;

/// Reasons an encode call can fail
///
/// Every failure is reported before any matrix is produced; callers never
/// see a partially built symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Version number outside 1..=40
    #[error("invalid QR code version {0}, expected a value between 1 and 40")]
    InvalidVersion(u8),

    /// The requested version cannot hold the data at the chosen level
    #[error(
        "version {requested} cannot contain this amount of data, minimum version required is {required}"
    )]
    VersionTooSmall {
        /// Version asked for by the caller
        requested: u8,
        /// Smallest version that fits the data
        required: u8,
    },

    /// Not even version 40 can hold the data at the chosen level
    #[error("the amount of data is too big to be stored in a QR code at level {ec_level:?}")]
    DataTooLong {
        /// Level the data was checked against
        ec_level: ECLevel,
    },

    /// Unrecognized error correction level token
    #[error("unknown error correction level: {0:?}")]
    InvalidErrorCorrectionLevel(String),

    /// Unrecognized mode name
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),

    /// A mode hint that cannot represent the data losslessly
    #[error("data cannot be encoded with mode {mode}, suggested mode is {suggested}")]
    InvalidMode {
        /// Mode requested for the segment
        mode: Mode,
        /// Best mode able to hold the data
        suggested: Mode,
    },

    /// Character outside the charset of the mode it was given to
    #[error("character {ch:?} cannot be encoded in {mode} mode")]
    InvalidCharacter {
        /// Offending character
        ch: char,
        /// Mode the character was offered to
        mode: Mode,
    },

    /// Kanji encoding was required but no Shift JIS conversion was supplied
    #[error("kanji mode requires a Shift JIS conversion function")]
    KanjiUnsupported,

    /// Mask index outside 0..=7
    #[error("invalid mask pattern {0}, expected a value between 0 and 7")]
    InvalidMaskPattern(u8),

    /// Empty input string
    #[error("no input text")]
    EmptyInput,

    /// Shortest path search did not reach the end node
    #[error("segment graph search failed: {0}")]
    InternalGraph(&'static str),
}

/// Result alias used across the encoder
pub type Result<T> = std::result::Result<T, EncodeError>;
