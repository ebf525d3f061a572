/// Main QR encoder - wires everything together
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::bitstream::place_data;
use super::codewords::{create_codewords, create_data};
use super::format::place_format_info;
use super::function_patterns::build_function_patterns;
use super::mask::{apply_mask, best_mask};
use super::modes::ShiftJis;
use super::segments::{self, Segment, SegmentSpec};
use super::version::best_version_for_data;
use crate::config;
use crate::error::{EncodeError, Result};
use crate::models::{ECLevel, MaskPattern, QRCode, Version};

/// Options for one encode call
#[derive(Clone)]
pub struct EncodeOptions {
    /// Fixed version; `None` picks the smallest that fits
    pub version: Option<Version>,
    /// Error correction level
    pub error_correction: ECLevel,
    /// Fixed mask; `None` picks the lowest-penalty mask
    pub mask_pattern: Option<MaskPattern>,
    /// Shift JIS conversion enabling Kanji mode
    pub shift_jis: Option<Arc<dyn ShiftJis + Send + Sync>>,
}

impl EncodeOptions {
    /// Defaults with the level taken from `QR_DEFAULT_ECL` (M when unset)
    pub fn new() -> Self {
        Self {
            version: None,
            error_correction: config::default_ec_level(),
            mask_pattern: None,
            shift_jis: None,
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_error_correction(mut self, level: ECLevel) -> Self {
        self.error_correction = level;
        self
    }

    pub fn with_mask_pattern(mut self, mask: MaskPattern) -> Self {
        self.mask_pattern = Some(mask);
        self
    }

    pub fn with_shift_jis<S>(mut self, sjis: S) -> Self
    where
        S: ShiftJis + Send + Sync + 'static,
    {
        self.shift_jis = Some(Arc::new(sjis));
        self
    }

    fn sjis(&self) -> Option<&dyn ShiftJis> {
        self.shift_jis.as_deref().map(|s| s as &dyn ShiftJis)
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EncodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeOptions")
            .field("version", &self.version)
            .field("error_correction", &self.error_correction)
            .field("mask_pattern", &self.mask_pattern)
            .field("shift_jis", &self.shift_jis.is_some())
            .finish()
    }
}

/// Encoder holding the options shared by every call
#[derive(Debug, Clone, Default)]
pub struct QrEncoder {
    options: EncodeOptions,
}

impl QrEncoder {
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode text, letting the optimizer choose segment modes
    pub fn encode(&self, text: &str) -> Result<QRCode> {
        if text.is_empty() {
            return Err(EncodeError::EmptyInput);
        }
        let sjis = self.options.sjis();

        // Segment costs depend on the version, so estimate one from the
        // unoptimized split first
        let estimate = match self.options.version {
            Some(version) => version,
            None => {
                let raw = segments::raw_split(text, sjis)?;
                best_version_for_data(&raw, self.options.error_correction)
                    .unwrap_or(Version::MAX)
            }
        };

        let segments = segments::from_string(text, estimate, sjis)?;
        self.build(segments)
    }

    /// Encode caller-described segments as given
    pub fn encode_segments(&self, specs: &[SegmentSpec]) -> Result<QRCode> {
        if specs.iter().all(|s| s.data.is_empty()) {
            return Err(EncodeError::EmptyInput);
        }
        let segments = segments::from_array(specs, self.options.sjis())?;
        self.build(segments)
    }

    fn build(&self, segments: Vec<Segment>) -> Result<QRCode> {
        let ec_level = self.options.error_correction;
        let required =
            best_version_for_data(&segments, ec_level).ok_or(EncodeError::DataTooLong { ec_level })?;

        let version = match self.options.version {
            Some(requested) if requested < required => {
                return Err(EncodeError::VersionTooSmall {
                    requested: requested.number(),
                    required: required.number(),
                });
            }
            Some(requested) => requested,
            None => required,
        };
        debug!(
            version = version.number(),
            ec_level = ?ec_level,
            segments = ?segments.iter().map(|s| (s.mode(), s.len())).collect::<Vec<_>>(),
            "segment plan"
        );

        let data = create_data(&segments, version, ec_level);
        let codewords = create_codewords(&data, version, ec_level);

        let mut modules = build_function_patterns(version);
        place_data(&mut modules, &codewords);

        let mask = match self.options.mask_pattern {
            Some(mask) => mask,
            None => best_mask(&modules, ec_level),
        };
        apply_mask(&mut modules, mask);
        place_format_info(&mut modules, ec_level, mask);
        debug!(mask = mask.index(), size = modules.size(), "symbol built");

        Ok(QRCode {
            modules,
            version,
            error_correction: ec_level,
            mask_pattern: mask,
            segments,
        })
    }
}
