use std::fmt;
use std::str::FromStr;

use super::BitMatrix;
use crate::encoder::segments::Segment;
use crate::error::EncodeError;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest Model 2 version
    pub const MIN: Version = Version(1);
    /// Largest Model 2 version
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1..=40
    pub fn new(number: u8) -> Result<Self, EncodeError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(EncodeError::InvalidVersion(number))
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Index into per-tier tables: 0 for 1-9, 1 for 10-26, 2 for 27-40
    pub fn tier(&self) -> usize {
        match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        }
    }

    /// Iterate every version from 1 to 40
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side length for a version number, checked
pub fn symbol_size(version: u8) -> Result<usize, EncodeError> {
    Version::new(version).map(|v| v.size())
}

/// Error correction level
///
/// Deliberately not `Ord`: the variants are labels, and their format codes
/// do not follow recovery strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// All levels in table order
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Two-bit code written into format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Row index into the block tables
    pub(crate) fn ordinal(&self) -> usize {
        match self {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        }
    }

    /// Parse a level name, falling back to `default` for unknown tokens
    pub fn from_str_or(value: &str, default: ECLevel) -> ECLevel {
        value.parse().unwrap_or(default)
    }
}

impl Default for ECLevel {
    fn default() -> Self {
        ECLevel::M
    }
}

impl FromStr for ECLevel {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(ECLevel::L),
            "m" | "medium" => Ok(ECLevel::M),
            "q" | "quartile" => Ok(ECLevel::Q),
            "h" | "high" => Ok(ECLevel::H),
            _ => Err(EncodeError::InvalidErrorCorrectionLevel(s.to_string())),
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All patterns in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its index
    pub fn from_index(index: u8) -> Result<Self, EncodeError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(EncodeError::InvalidMaskPattern(index))
    }

    /// Index in 0..=7
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` should be inverted
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Encoded QR code symbol
#[derive(Debug, Clone, PartialEq)]
pub struct QRCode {
    /// Module matrix (true = dark, false = light)
    pub modules: BitMatrix,
    /// QR code version
    pub version: Version,
    /// Error correction level
    pub error_correction: ECLevel,
    /// Mask pattern applied to the data region
    pub mask_pattern: MaskPattern,
    /// Segments the payload was split into
    pub segments: Vec<Segment>,
}

impl QRCode {
    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// Module grid as rows of 0 (light) / 1 (dark)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.modules.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).unwrap().size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::new(40).unwrap().size(), 177);
        for v in Version::all() {
            assert_eq!(symbol_size(v.number()).unwrap(), v.number() as usize * 4 + 17);
        }
    }

    #[test]
    fn test_version_range() {
        assert_eq!(Version::new(0), Err(EncodeError::InvalidVersion(0)));
        assert_eq!(Version::new(41), Err(EncodeError::InvalidVersion(41)));
        assert_eq!(Version::all().count(), 40);
    }

    #[test]
    fn test_version_tier() {
        assert_eq!(Version::new(9).unwrap().tier(), 0);
        assert_eq!(Version::new(10).unwrap().tier(), 1);
        assert_eq!(Version::new(26).unwrap().tier(), 1);
        assert_eq!(Version::new(27).unwrap().tier(), 2);
    }

    #[test]
    fn test_ec_level() {
        assert_eq!(ECLevel::L.format_bits(), 0b01);
        assert_eq!(ECLevel::M.format_bits(), 0b00);
        assert_eq!(ECLevel::Q.format_bits(), 0b11);
        assert_eq!(ECLevel::H.format_bits(), 0b10);
    }

    #[test]
    fn test_ec_level_parse() {
        assert_eq!("q".parse::<ECLevel>(), Ok(ECLevel::Q));
        assert_eq!("High".parse::<ECLevel>(), Ok(ECLevel::H));
        assert_eq!(
            "x".parse::<ECLevel>(),
            Err(EncodeError::InvalidErrorCorrectionLevel("x".to_string()))
        );
        assert_eq!(ECLevel::from_str_or("bogus", ECLevel::M), ECLevel::M);
        assert_eq!(ECLevel::from_str_or("low", ECLevel::M), ECLevel::L);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        assert_eq!(MaskPattern::from_index(5), Ok(MaskPattern::Pattern5));
        assert_eq!(MaskPattern::from_index(8), Err(EncodeError::InvalidMaskPattern(8)));
        assert_eq!(MaskPattern::Pattern7.index(), 7);
    }
}
