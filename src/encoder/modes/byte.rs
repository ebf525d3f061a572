/// Byte mode encoder (Mode 0100) for 8-bit data
/// Text is carried as its UTF-8 bytes, 8 bits each
use crate::encoder::bit_buffer::BitBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteData {
    data: String,
}

impl ByteData {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn bits_length(len: usize) -> usize {
        len * 8
    }

    /// Length in bytes, which is what the count indicator carries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn write(&self, buffer: &mut BitBuffer) {
        for &byte in self.data.as_bytes() {
            buffer.put(u32::from(byte), 8);
        }
    }
}
