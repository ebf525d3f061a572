/// Data placement into the QR code matrix
use crate::models::BitMatrix;

/// Write codewords into every unreserved module following the zigzag path.
///
/// Columns are walked in pairs from the right edge, alternating upward and
/// downward, skipping the vertical timing column. Bits are taken MSB first;
/// modules left over once the codewords run out stay light.
pub fn place_data(matrix: &mut BitMatrix, codewords: &[u8]) {
    let size = matrix.size() as isize;
    let mut upward = true;
    let mut bit_index = 0usize;
    let total_bits = codewords.len() * 8;

    let mut col = size - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
        }

        for i in 0..size {
            let row = (if upward { size - 1 - i } else { i }) as usize;
            for c in 0..2 {
                let x = (col - c) as usize;
                if matrix.is_reserved(row, x) {
                    continue;
                }
                let dark = bit_index < total_bits
                    && (codewords[bit_index / 8] >> (7 - bit_index % 8)) & 1 == 1;
                matrix.set(row, x, dark);
                bit_index += 1;
            }
        }

        upward = !upward;
        col -= 2;
    }
}

/// Read back the bits of every unreserved module in placement order
pub fn read_data(matrix: &BitMatrix) -> Vec<bool> {
    let size = matrix.size() as isize;
    let mut bits = Vec::new();
    let mut upward = true;

    let mut col = size - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
        }

        for i in 0..size {
            let row = (if upward { size - 1 - i } else { i }) as usize;
            for c in 0..2 {
                let x = (col - c) as usize;
                if !matrix.is_reserved(row, x) {
                    bits.push(matrix.get(row, x));
                }
            }
        }

        upward = !upward;
        col -= 2;
    }
    bits
}
