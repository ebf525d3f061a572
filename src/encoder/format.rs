/// Format information placement for QR code
use super::bch::{self, G15, G15_MASK};
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// Format info is 15 bits (5 data + 10 ECC), XORed with 0x5412
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = (u32::from(ec_level.format_bits()) << 3) | u32::from(mask.index());
    (bch::encode(data, G15) ^ G15_MASK) as u16
}

/// Write both copies of the format info plus the fixed dark module
///
/// Bit 0 is the least significant bit. The vertical copy runs down
/// column 8, the horizontal copy along row 8.
pub fn place_format_info(matrix: &mut BitMatrix, ec_level: ECLevel, mask: MaskPattern) {
    let size = matrix.size();
    let bits = format_bits(ec_level, mask);

    for i in 0..15 {
        let dark = (bits >> i) & 1 == 1;

        // Vertical
        if i < 6 {
            matrix.set_reserved(i, 8, dark);
        } else if i < 8 {
            matrix.set_reserved(i + 1, 8, dark);
        } else {
            matrix.set_reserved(size - 15 + i, 8, dark);
        }

        // Horizontal
        if i < 8 {
            matrix.set_reserved(8, size - i - 1, dark);
        } else if i < 9 {
            matrix.set_reserved(8, 15 - i, dark);
        } else {
            matrix.set_reserved(8, 15 - i - 1, dark);
        }
    }

    // Always dark
    matrix.set_reserved(size - 8, 8, true);
}

/// Mark the format areas reserved so data placement skips them
pub fn reserve_format_area(matrix: &mut BitMatrix) {
    place_format_info(matrix, ECLevel::M, MaskPattern::Pattern0);
}
