/// Mask application and penalty scoring
use tracing::trace;

use super::format::place_format_info;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// Penalty weights
const N1: u32 = 3;
const N2: u32 = 3;
const N3: u32 = 40;
const N4: u32 = 10;

/// Finder-like 1:1:3:1:1 pattern with four light modules after / before it
const FINDER_LIKE: [u16; 2] = [0b10111010000, 0b00001011101];

/// XOR `mask` into every non-reserved module
pub fn apply_mask(matrix: &mut BitMatrix, mask: MaskPattern) {
    let size = matrix.size();
    for row in 0..size {
        for col in 0..size {
            if !matrix.is_reserved(row, col) {
                matrix.xor(row, col, mask.is_masked(row, col));
            }
        }
    }
}

/// Runs of five or more same-colour modules in a row or column
pub fn penalty_n1(matrix: &BitMatrix) -> u32 {
    let size = matrix.size();
    let mut points = 0;

    for i in 0..size {
        points += run_penalty((0..size).map(|j| matrix.get(i, j)));
        points += run_penalty((0..size).map(|j| matrix.get(j, i)));
    }
    points
}

fn run_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let mut points = 0;
    let mut last = None;
    let mut count = 0u32;

    for module in line {
        if Some(module) == last {
            count += 1;
        } else {
            if count >= 5 {
                points += N1 + (count - 5);
            }
            last = Some(module);
            count = 1;
        }
    }
    if count >= 5 {
        points += N1 + (count - 5);
    }
    points
}

/// 2x2 blocks of one colour
pub fn penalty_n2(matrix: &BitMatrix) -> u32 {
    let size = matrix.size();
    let mut blocks = 0;

    for row in 0..size.saturating_sub(1) {
        for col in 0..size - 1 {
            let dark = matrix.get(row, col) as u8
                + matrix.get(row, col + 1) as u8
                + matrix.get(row + 1, col) as u8
                + matrix.get(row + 1, col + 1) as u8;
            if dark == 0 || dark == 4 {
                blocks += 1;
            }
        }
    }
    blocks * N2
}

/// Finder-like patterns in any row or column
pub fn penalty_n3(matrix: &BitMatrix) -> u32 {
    let size = matrix.size();
    let mut hits = 0;

    for i in 0..size {
        hits += finder_like_count((0..size).map(|j| matrix.get(i, j)));
        hits += finder_like_count((0..size).map(|j| matrix.get(j, i)));
    }
    hits * N3
}

fn finder_like_count(line: impl Iterator<Item = bool>) -> u32 {
    let mut window = 0u16;
    let mut hits = 0;
    for (j, module) in line.enumerate() {
        window = ((window << 1) & 0x7FF) | module as u16;
        if j >= 10 && FINDER_LIKE.contains(&window) {
            hits += 1;
        }
    }
    hits
}

/// Deviation of the dark ratio from 50%, in 5% steps
pub fn penalty_n4(matrix: &BitMatrix) -> u32 {
    let total = matrix.size() * matrix.size();
    if total == 0 {
        return 0;
    }
    let dark = matrix.dark_count();
    let fifths = (dark * 20).div_ceil(total);
    fifths.abs_diff(10) as u32 * N4
}

/// Sum of all four penalty rules
pub fn penalty(matrix: &BitMatrix) -> u32 {
    penalty_n1(matrix) + penalty_n2(matrix) + penalty_n3(matrix) + penalty_n4(matrix)
}

/// Score every mask on a copy of `matrix` carrying that mask's format info
pub fn evaluate_masks(matrix: &BitMatrix, ec_level: ECLevel) -> [u32; 8] {
    let mut scores = [0u32; 8];
    for mask in MaskPattern::ALL {
        let mut trial = matrix.clone();
        place_format_info(&mut trial, ec_level, mask);
        apply_mask(&mut trial, mask);
        let score = penalty(&trial);
        trace!(mask = mask.index(), penalty = score, "mask penalty");
        scores[mask.index() as usize] = score;
    }
    scores
}

/// Mask with the lowest penalty, the lowest index winning ties
pub fn best_mask(matrix: &BitMatrix, ec_level: ECLevel) -> MaskPattern {
    let scores = evaluate_masks(matrix, ec_level);
    let mut best = MaskPattern::Pattern0;
    for mask in MaskPattern::ALL {
        if scores[mask.index() as usize] < scores[best.index() as usize] {
            best = mask;
        }
    }
    best
}
