/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use super::Mode;
use crate::encoder::bit_buffer::BitBuffer;
use crate::error::EncodeError;

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Table index of `c`, if it belongs to the charset
pub fn char_value(c: char) -> Option<u32> {
    ALPHANUMERIC_TABLE
        .iter()
        .position(|&t| t == c)
        .map(|i| i as u32)
}

pub fn is_alphanumeric(c: char) -> bool {
    char_value(c).is_some()
}

/// Pairs = 11 bits, single = 6 bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphanumericData {
    data: String,
    // Table indices, one per character
    values: Vec<u32>,
}

impl AlphanumericData {
    pub fn new(data: impl Into<String>) -> Result<Self, EncodeError> {
        let data = data.into();
        let values = data
            .chars()
            .map(|ch| {
                char_value(ch).ok_or(EncodeError::InvalidCharacter {
                    ch,
                    mode: Mode::Alphanumeric,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { data, values })
    }

    pub fn bits_length(len: usize) -> usize {
        11 * (len / 2) + 6 * (len % 2)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn write(&self, buffer: &mut BitBuffer) {
        for pair in self.values.chunks(2) {
            match pair {
                [a, b] => buffer.put(a * 45 + b, 11),
                [a] => buffer.put(*a, 6),
                _ => unreachable!("chunks(2) yields one or two items"),
            }
        }
    }
}
