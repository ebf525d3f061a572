/// Growable MSB-first bit buffer used to assemble the data codewords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `length` bits of `value`, most significant first
    pub fn put(&mut self, value: u32, length: usize) {
        debug_assert!(length <= 32);
        for i in (0..length).rev() {
            self.put_bit((value >> i) & 1 == 1);
        }
    }

    pub fn put_bit(&mut self, bit: bool) {
        let byte_index = self.len / 8;
        if byte_index == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Bit at `index`; reads past the end are zero
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        (self.bytes[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Number of bits written
    pub fn len_in_bits(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Backing bytes; a trailing partial byte is zero-filled
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
