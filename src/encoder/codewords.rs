//! Data codeword assembly, error correction, and interleaving

use super::bit_buffer::BitBuffer;
use super::reed_solomon::ReedSolomonEncoder;
use super::segments::Segment;
use super::tables;
use crate::models::{ECLevel, Version};

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Pack segments into exactly `data_codewords(version, ec_level)` bytes
///
/// Each segment is written as mode indicator, count, payload. A 4-bit
/// terminator follows when it fits, then zero bits to the byte boundary and
/// alternating pad bytes up to capacity. Callers check that the segments
/// fit before calling.
pub fn create_data(segments: &[Segment], version: Version, ec_level: ECLevel) -> Vec<u8> {
    let mut buffer = BitBuffer::new();

    for segment in segments {
        let mode = segment.mode();
        buffer.put(mode.indicator_bits(), 4);
        buffer.put(segment.len() as u32, mode.char_count_bits(version));
        segment.write(&mut buffer);
    }

    let data_codewords = tables::data_codewords(version, ec_level);
    let capacity_bits = data_codewords * 8;

    if buffer.len_in_bits() + 4 <= capacity_bits {
        buffer.put(0, 4);
    }
    while buffer.len_in_bits() % 8 != 0 {
        buffer.put_bit(false);
    }

    let mut data = buffer.into_bytes();
    let pad_count = data_codewords.saturating_sub(data.len());
    data.extend(PAD_BYTES.iter().cycle().take(pad_count));
    data
}

/// Split data into RS blocks, add EC codewords, and interleave
///
/// Group 1 blocks carry `data_total / blocks` data codewords; the last
/// `total % blocks` blocks carry one more.
pub fn create_codewords(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<u8> {
    let total_codewords = tables::total_codewords(version);
    let info = tables::ec_block_info(version, ec_level);
    let data_total = total_codewords - info.total_ecc();

    let blocks = info.num_blocks;
    let blocks_in_group2 = total_codewords % blocks;
    let blocks_in_group1 = blocks - blocks_in_group2;
    let data_in_group1 = data_total / blocks;

    let rs = ReedSolomonEncoder::new(info.ecc_per_block);
    let mut data_blocks: Vec<&[u8]> = Vec::with_capacity(blocks);
    let mut ec_blocks: Vec<Vec<u8>> = Vec::with_capacity(blocks);

    let mut offset = 0;
    for b in 0..blocks {
        let len = if b < blocks_in_group1 {
            data_in_group1
        } else {
            data_in_group1 + 1
        };
        let block = &data[offset..offset + len];
        ec_blocks.push(rs.encode(block));
        data_blocks.push(block);
        offset += len;
    }

    let mut result = Vec::with_capacity(total_codewords);
    let max_data = data_in_group1 + usize::from(blocks_in_group2 > 0);
    for i in 0..max_data {
        for block in &data_blocks {
            if let Some(&byte) = block.get(i) {
                result.push(byte);
            }
        }
    }
    for i in 0..info.ecc_per_block {
        for block in &ec_blocks {
            result.push(block[i]);
        }
    }
    result
}
