/// Kanji mode encoder (Mode 1000)
/// Each character is converted to Shift JIS and packed into 13 bits
use super::Mode;
use crate::encoder::bit_buffer::BitBuffer;
use crate::error::EncodeError;

/// Shift JIS conversion supplied by the caller
///
/// The crate carries no conversion table; Kanji mode is only used when one
/// of these is passed in the encode options.
pub trait ShiftJis {
    /// Double-byte Shift JIS value of `c`, if it has one
    fn to_sjis(&self, c: char) -> Option<u16>;
}

impl<F> ShiftJis for F
where
    F: Fn(char) -> Option<u16>,
{
    fn to_sjis(&self, c: char) -> Option<u16> {
        self(c)
    }
}

/// Whether `c` falls in the ranges Kanji mode is tried for
pub fn is_kanji_char(c: char) -> bool {
    matches!(
        c,
        '\u{3000}'..='\u{30FF}'
            | '\u{FF00}'..='\u{FFEF}'
            | '\u{4E00}'..='\u{9FAF}'
            | '\u{2605}'..='\u{2606}'
            | '\u{2190}'..='\u{2195}'
            | '\u{203B}'
            | '\u{2010}'
            | '\u{2015}'
            | '\u{2018}'
            | '\u{2019}'
            | '\u{2025}'
            | '\u{2026}'
            | '\u{201C}'
            | '\u{201D}'
            | '\u{2225}'
            | '\u{2260}'
            | '\u{0391}'..='\u{0451}'
            | '\u{00A7}'
            | '\u{00A8}'
            | '\u{00B1}'
            | '\u{00B4}'
            | '\u{00D7}'
            | '\u{00F7}'
    )
}

/// Map a Shift JIS value to its 13-bit Kanji mode code
pub fn pack_sjis(value: u16) -> Option<u16> {
    let offset = match value {
        0x8140..=0x9FFC => value - 0x8140,
        0xE040..=0xEBBF => value - 0xC140,
        _ => return None,
    };
    Some((offset >> 8) * 0xC0 + (offset & 0xFF))
}

/// 13-bit code for `c`, or `InvalidCharacter` when it has none
pub fn kanji_code(c: char, sjis: &dyn ShiftJis) -> Result<u16, EncodeError> {
    sjis.to_sjis(c)
        .and_then(pack_sjis)
        .ok_or(EncodeError::InvalidCharacter {
            ch: c,
            mode: Mode::Kanji,
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanjiData {
    data: String,
    // Packed 13-bit codes, validated at construction
    codes: Vec<u16>,
}

impl KanjiData {
    pub fn new(data: impl Into<String>, sjis: &dyn ShiftJis) -> Result<Self, EncodeError> {
        let data = data.into();
        let codes = data
            .chars()
            .map(|c| kanji_code(c, sjis))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { data, codes })
    }

    pub fn bits_length(len: usize) -> usize {
        len * 13
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn write(&self, buffer: &mut BitBuffer) {
        for &code in &self.codes {
            buffer.put(u32::from(code), 13);
        }
    }
}
