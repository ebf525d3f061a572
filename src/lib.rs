//! qr_encode - QR Code Model 2 symbol encoder
//!
//! Turns text into a square matrix of dark/light modules: optimal segment
//! modes, Reed-Solomon error correction, function patterns, and mask
//! selection. Rendering the matrix is left to the caller.

mod config;
/// QR code encoding modules (segments, error correction, matrix building)
pub mod encoder;
/// Error type shared by every encode call
pub mod error;
/// Core data structures (QRCode, BitMatrix, Version, etc.)
pub mod models;

use rayon::prelude::*;

pub use encoder::modes::{Mode, ShiftJis};
pub use encoder::qr_encoder::{EncodeOptions, QrEncoder};
pub use encoder::segments::{Segment, SegmentSpec};
pub use error::{EncodeError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, QRCode, Version, symbol_size};

/// Encode text into a grid of modules
///
/// # Arguments
/// * `value` - Text to encode
/// * `options` - Version, error correction level, mask, and Kanji support
///
/// # Returns
/// Rows of 0 (light) / 1 (dark), `version * 4 + 17` on each side
///
/// # Example
/// ```
/// use qr_encode::{ECLevel, EncodeOptions};
///
/// let options = EncodeOptions::new().with_error_correction(ECLevel::Q);
/// let rows = qr_encode::encode("HELLO WORLD", &options).unwrap();
/// assert_eq!(rows.len(), 21);
/// ```
pub fn encode(value: &str, options: &EncodeOptions) -> Result<Vec<Vec<u8>>> {
    create_qr_code(value, options).map(|qr| qr.to_rows())
}

/// Encode text into a full symbol (matrix, version, level, mask, segments)
pub fn create_qr_code(value: &str, options: &EncodeOptions) -> Result<QRCode> {
    QrEncoder::new(options.clone()).encode(value)
}

/// Encode an explicit segment list, each with an optional mode hint
pub fn create_qr_code_from_segments(
    segments: &[SegmentSpec],
    options: &EncodeOptions,
) -> Result<QRCode> {
    QrEncoder::new(options.clone()).encode_segments(segments)
}

/// Encode many values with the same options
///
/// Each value is encoded independently; large batches are spread across
/// the rayon thread pool. Results keep the input order.
pub fn encode_batch<S>(values: &[S], options: &EncodeOptions) -> Vec<Result<QRCode>>
where
    S: AsRef<str> + Sync,
{
    let encoder = QrEncoder::new(options.clone());
    if values.len() < config::batch_parallel_min() {
        return values.iter().map(|v| encoder.encode(v.as_ref())).collect();
    }
    values.par_iter().map(|v| encoder.encode(v.as_ref())).collect()
}
