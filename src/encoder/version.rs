/// Version selection, capacity, and version information (v7+)
use super::bch::{self, G18};
use super::modes::Mode;
use super::segments::Segment;
use super::tables;
use crate::models::{BitMatrix, ECLevel, Version};

/// Mode indicator width
const MODE_BITS: usize = 4;

/// Data bits available after error correction
pub fn data_bits(version: Version, ec_level: ECLevel) -> usize {
    tables::data_codewords(version, ec_level) * 8
}

/// Characters of `mode` a single segment can hold at this version and level
pub fn capacity(version: Version, ec_level: ECLevel, mode: Mode) -> usize {
    let total = data_bits(version, ec_level);
    let usable = total.saturating_sub(MODE_BITS + mode.char_count_bits(version));

    match mode {
        Mode::Numeric => usable * 3 / 10,
        Mode::Alphanumeric => usable * 2 / 11,
        Mode::Kanji => usable / 13,
        Mode::Byte => usable / 8,
    }
}

/// Bits `segments` occupy at `version`, headers included
pub fn segments_bit_length(segments: &[Segment], version: Version) -> usize {
    segments
        .iter()
        .map(|s| MODE_BITS + s.mode().char_count_bits(version) + s.bit_len())
        .sum()
}

/// Smallest version whose capacity fits `segments` at `ec_level`
pub fn best_version_for_data(segments: &[Segment], ec_level: ECLevel) -> Option<Version> {
    match segments {
        [] => Some(Version::MIN),
        [segment] => Version::all()
            .find(|&v| segment.len() <= capacity(v, ec_level, segment.mode())),
        _ => Version::all()
            .find(|&v| segments_bit_length(segments, v) <= data_bits(v, ec_level)),
    }
}

/// 18-bit version information codeword, `None` below version 7
pub fn version_info_bits(version: Version) -> Option<u32> {
    (version.number() >= 7).then(|| bch::encode(u32::from(version.number()), G18))
}

/// Write version information into both 6x3 blocks
///
/// Bit `i` lands at row `i / 3`, column `size - 11 + i % 3` in the top-right
/// block, and transposed in the bottom-left block.
pub fn place_version_info(matrix: &mut BitMatrix, version: Version) {
    let Some(bits) = version_info_bits(version) else {
        return;
    };
    let size = matrix.size();

    for i in 0..18 {
        let dark = (bits >> i) & 1 == 1;
        let row = i / 3;
        let col = i % 3 + size - 11;

        matrix.set_reserved(row, col, dark);
        matrix.set_reserved(col, row, dark);
    }
}
