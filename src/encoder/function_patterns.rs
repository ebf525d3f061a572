use super::format::reserve_format_area;
use super::version::place_version_info;
use crate::models::{BitMatrix, Version};

/// Matrix with every function pattern drawn and reserved.
///
/// Finders with separators, timing, alignment, a placeholder for the format
/// info, and version info for v7+. Data placement fills the rest.
pub fn build_function_patterns(version: Version) -> BitMatrix {
    let mut matrix = BitMatrix::new(version.size());

    place_finder_patterns(&mut matrix);
    place_timing_patterns(&mut matrix);
    place_alignment_patterns(&mut matrix, version);
    reserve_format_area(&mut matrix);
    place_version_info(&mut matrix, version);

    matrix
}

/// Draw the three finder patterns and their light separators
pub fn place_finder_patterns(matrix: &mut BitMatrix) {
    let size = matrix.size();
    for (row, col) in [(0, 0), (size - 7, 0), (0, size - 7)] {
        draw_finder(matrix, row, col);
    }
}

fn draw_finder(matrix: &mut BitMatrix, row: usize, col: usize) {
    let size = matrix.size() as isize;
    for r in -1isize..=7 {
        let y = row as isize + r;
        if y < 0 || y >= size {
            continue;
        }
        for c in -1isize..=7 {
            let x = col as isize + c;
            if x < 0 || x >= size {
                continue;
            }
            let outer = ((0..=6).contains(&r) && (c == 0 || c == 6))
                || ((0..=6).contains(&c) && (r == 0 || r == 6));
            let core = (2..=4).contains(&r) && (2..=4).contains(&c);
            matrix.set_reserved(y as usize, x as usize, outer || core);
        }
    }
}

/// Alternating modules on row 6 and column 6 between the finders
pub fn place_timing_patterns(matrix: &mut BitMatrix) {
    let size = matrix.size();
    for i in 8..size.saturating_sub(8) {
        let dark = i % 2 == 0;
        matrix.set_reserved(i, 6, dark);
        matrix.set_reserved(6, i, dark);
    }
}

/// Alignment pattern row/column coordinates for a version.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let count = v / 7 + 2;
    let size = version.size();
    let step = if size == 145 {
        26
    } else {
        (size - 13).div_ceil(2 * count - 2) * 2
    };

    let mut positions = vec![6usize; count];
    let mut pos = size - 7;
    for slot in positions.iter_mut().skip(1).rev() {
        *slot = pos;
        pos = pos.saturating_sub(step);
    }
    positions
}

/// Alignment pattern centres, excluding the three finder corners
pub fn alignment_pattern_centres(version: Version) -> Vec<(usize, usize)> {
    let coords = alignment_pattern_positions(version);
    let last = coords.len().saturating_sub(1);
    let mut centres = Vec::new();
    for (i, &row) in coords.iter().enumerate() {
        for (j, &col) in coords.iter().enumerate() {
            if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                continue;
            }
            centres.push((row, col));
        }
    }
    centres
}

/// Draw each 5x5 alignment pattern: dark ring, light ring, dark centre
pub fn place_alignment_patterns(matrix: &mut BitMatrix, version: Version) {
    for (row, col) in alignment_pattern_centres(version) {
        for r in -2isize..=2 {
            for c in -2isize..=2 {
                let dark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
                let y = (row as isize + r) as usize;
                let x = (col as isize + c) as usize;
                matrix.set_reserved(y, x, dark);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    fn finder_rows(matrix: &BitMatrix, row: usize, col: usize) -> Vec<Vec<u8>> {
        (row..row + 7)
            .map(|r| (col..col + 7).map(|c| matrix.get(r, c) as u8).collect())
            .collect()
    }

    #[test]
    fn test_finder_pattern() {
        let matrix = build_function_patterns(v(1));
        let expected = vec![
            vec![1, 1, 1, 1, 1, 1, 1],
            vec![1, 0, 0, 0, 0, 0, 1],
            vec![1, 0, 1, 1, 1, 0, 1],
            vec![1, 0, 1, 1, 1, 0, 1],
            vec![1, 0, 1, 1, 1, 0, 1],
            vec![1, 0, 0, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1, 1, 1],
        ];
        assert_eq!(finder_rows(&matrix, 0, 0), expected);
        assert_eq!(finder_rows(&matrix, 14, 0), expected);
        assert_eq!(finder_rows(&matrix, 0, 14), expected);

        // Separators are light and reserved
        for i in 0..8 {
            assert!(!matrix.get(7, i));
            assert!(!matrix.get(i, 7));
            assert!(matrix.is_reserved(7, i));
        }
    }

    #[test]
    fn test_timing_patterns() {
        let matrix = build_function_patterns(v(2));
        for i in 8..matrix.size() - 8 {
            assert_eq!(matrix.get(6, i), i % 2 == 0);
            assert_eq!(matrix.get(i, 6), i % 2 == 0);
            assert!(matrix.is_reserved(6, i));
        }
    }

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_pattern_positions(v(1)).is_empty());
        assert_eq!(alignment_pattern_positions(v(2)), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(v(7)), vec![6, 22, 38]);
        assert_eq!(alignment_pattern_positions(v(32)), vec![6, 34, 60, 86, 112, 138]);
        assert_eq!(
            alignment_pattern_positions(v(40)),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn test_alignment_centres() {
        assert_eq!(alignment_pattern_centres(v(2)), vec![(18, 18)]);
        assert_eq!(alignment_pattern_centres(v(7)).len(), 6);
        assert_eq!(alignment_pattern_centres(v(40)).len(), 46);
    }

    #[test]
    fn test_alignment_pattern_drawn() {
        let matrix = build_function_patterns(v(2));
        assert!(matrix.get(18, 18));
        assert!(!matrix.get(17, 18));
        assert!(matrix.get(16, 16));
        assert!(matrix.get(20, 20));
        assert!(matrix.is_reserved(19, 17));
    }

    #[test]
    fn test_data_module_count() {
        // Unreserved cells hold exactly the codewords plus remainder bits
        for (n, remainder) in [(1, 0), (2, 7), (7, 0), (14, 3), (40, 0)] {
            let version = v(n);
            let matrix = build_function_patterns(version);
            let size = matrix.size();
            let free = (0..size)
                .flat_map(|r| (0..size).map(move |c| (r, c)))
                .filter(|&(r, c)| !matrix.is_reserved(r, c))
                .count();
            let codewords = crate::encoder::tables::total_codewords(version);
            assert_eq!(free, codewords * 8 + remainder, "version {}", n);
        }
    }
}
