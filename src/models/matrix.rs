/// Square module matrix with a per-cell reserved flag
///
/// Both planes are packed eight cells to a byte, row-major. Reserved cells
/// hold function patterns (finders, timing, alignment, format and version
/// info); data placement skips them and masking never touches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
    reserved: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-light matrix with no reserved cells
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size + 7) / 8;
        Self {
            size,
            data: vec![0; bytes_needed],
            reserved: vec![0; bytes_needed],
        }
    }

    /// Get matrix side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (row, col); out-of-bounds reads are light
    pub fn get(&self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some((byte_index, bit_index)) => (self.data[byte_index] >> bit_index) & 1 == 1,
            None => false,
        }
    }

    /// Set module at (row, col) without touching the reserved flag
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if let Some((byte_index, bit_index)) = self.index(row, col) {
            if value {
                self.data[byte_index] |= 1 << bit_index;
            } else {
                self.data[byte_index] &= !(1 << bit_index);
            }
        }
    }

    /// Set module at (row, col) and mark the cell reserved
    pub fn set_reserved(&mut self, row: usize, col: usize, value: bool) {
        self.set(row, col, value);
        if let Some((byte_index, bit_index)) = self.index(row, col) {
            self.reserved[byte_index] |= 1 << bit_index;
        }
    }

    /// Check whether (row, col) belongs to a function pattern
    pub fn is_reserved(&self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some((byte_index, bit_index)) => (self.reserved[byte_index] >> bit_index) & 1 == 1,
            None => false,
        }
    }

    /// XOR the module at (row, col) with `value`
    pub fn xor(&mut self, row: usize, col: usize, value: bool) {
        if !value {
            return;
        }
        if let Some((byte_index, bit_index)) = self.index(row, col) {
            self.data[byte_index] ^= 1 << bit_index;
        }
    }

    /// Count dark modules
    pub fn dark_count(&self) -> usize {
        // Padding bits past size*size are never set, so a popcount is exact
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Rows of 0/1 values (0 = light, 1 = dark)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.get(row, col) as u8).collect())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let index = row * self.size + col;
        Some((index / 8, index % 8))
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}
