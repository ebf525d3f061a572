use crate::models::{ECLevel, Version};

/// Block layout for one (version, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    pub num_blocks: usize,
    pub ecc_per_block: usize,
}

impl EcBlockInfo {
    /// Total error correction codewords over all blocks
    pub fn total_ecc(&self) -> usize {
        self.num_blocks * self.ecc_per_block
    }
}

// Total codewords (data + EC) per version, index 0 unused.
const TOTAL_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761,
    2876, 3034, 3196, 3362, 3532, 3706,
];

// Tables from ISO/IEC 18004 (QR Code Model 2).
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Total codewords (data + EC) a symbol of this version carries
pub fn total_codewords(version: Version) -> usize {
    TOTAL_CODEWORDS[version.number() as usize] as usize
}

pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let idx = ec_level.ordinal();
    let v = version.number() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}

/// Total EC codewords for the version and level
pub fn ec_total_codewords(version: Version, ec_level: ECLevel) -> usize {
    ec_block_info(version, ec_level).total_ecc()
}

/// Data codewords left after error correction
pub fn data_codewords(version: Version, ec_level: ECLevel) -> usize {
    total_codewords(version) - ec_total_codewords(version, ec_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_total_codewords_bounds() {
        assert_eq!(total_codewords(v(1)), 26);
        assert_eq!(total_codewords(v(40)), 3706);
    }

    #[test]
    fn test_total_codewords_match_module_count() {
        // Raw data modules per version, derived from the symbol geometry
        for version in Version::all() {
            let n = version.number() as usize;
            let mut modules = (16 * n + 128) * n + 64;
            if n >= 2 {
                let align = n / 7 + 2;
                modules -= (25 * align - 10) * align - 55;
                if n >= 7 {
                    modules -= 36;
                }
            }
            assert_eq!(total_codewords(version), modules / 8, "version {}", n);
        }
    }

    #[test]
    fn test_known_data_codewords() {
        assert_eq!(data_codewords(v(1), ECLevel::L), 19);
        assert_eq!(data_codewords(v(1), ECLevel::M), 16);
        assert_eq!(data_codewords(v(1), ECLevel::Q), 13);
        assert_eq!(data_codewords(v(1), ECLevel::H), 9);
        assert_eq!(data_codewords(v(40), ECLevel::L), 2956);
        assert_eq!(data_codewords(v(40), ECLevel::H), 1276);
    }

    #[test]
    fn test_ec_block_info() {
        let info = ec_block_info(v(5), ECLevel::Q);
        assert_eq!(info.num_blocks, 4);
        assert_eq!(info.ecc_per_block, 18);
        assert_eq!(info.total_ecc(), 72);
    }
}
