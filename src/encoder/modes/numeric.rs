/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use super::Mode;
use crate::encoder::bit_buffer::BitBuffer;
use crate::error::EncodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericData {
    data: String,
}

impl NumericData {
    /// Wrap a string of ASCII digits
    pub fn new(data: impl Into<String>) -> Result<Self, EncodeError> {
        let data = data.into();
        if let Some(ch) = data.chars().find(|c| !c.is_ascii_digit()) {
            return Err(EncodeError::InvalidCharacter {
                ch,
                mode: Mode::Numeric,
            });
        }
        Ok(Self { data })
    }

    /// Bits for `len` digits
    pub fn bits_length(len: usize) -> usize {
        10 * (len / 3) + [0, 4, 7][len % 3]
    }

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
        for group in self.data.as_bytes().chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0'));
            buffer.put(value, group.len() * 3 + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_length() {
        let lengths: Vec<usize> = (0..=5).map(NumericData::bits_length).collect();
        assert_eq!(lengths, vec![0, 4, 7, 10, 14, 17]);
    }

    #[test]
    fn test_numeric_encode() {
        // 012 -> 0000001100, 345 -> 0101011001, 67 -> 1000011
        let data = NumericData::new("01234567").unwrap();
        let mut buffer = BitBuffer::new();
        data.write(&mut buffer);
        assert_eq!(buffer.len_in_bits(), NumericData::bits_length(8));
        assert_eq!(
            buffer.as_bytes(),
            &[0b0000_0011, 0b0001_0101, 0b1001_1000, 0b0110_0000]
        );
    }

    #[test]
    fn test_rejects_non_digits() {
        assert_eq!(
            NumericData::new("12a"),
            Err(EncodeError::InvalidCharacter {
                ch: 'a',
                mode: Mode::Numeric
            })
        );
    }
}
