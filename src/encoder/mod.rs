//! QR code encoding modules
//!
//! This module contains all the logic for turning text into a symbol:
//! - Segment optimization and data modes (numeric, alphanumeric, byte, kanji)
//! - Version and capacity selection
//! - Error correction (Reed-Solomon, BCH) and interleaving
//! - Function patterns, data placement, and masking

/// BCH codes for format and version info
pub mod bch;
/// Growable bit buffer
pub mod bit_buffer;
/// Zigzag data placement into the matrix
pub mod bitstream;
/// Data codewords, EC blocks, and interleaving
pub mod codewords;
/// Format information (mask pattern, EC level)
pub mod format;
/// Finder, timing, and alignment patterns
pub mod function_patterns;
/// Segment graph and shortest path search
pub mod graph;
/// Mask application and penalty scoring
pub mod mask;
/// Data modes (numeric, alphanumeric, byte, kanji)
pub mod modes;
/// GF(256) polynomial arithmetic
pub mod polynomial;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// Segment construction and mode optimization
pub mod segments;
/// ISO/IEC 18004 tables (ECC codewords/blocks)
pub mod tables;
/// Version selection and version information (versions 7-40)
pub mod version;
