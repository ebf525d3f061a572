//! Segment construction and mode optimization
//!
//! Text is first split into maximal runs of one character class, then the
//! segment graph picks, per run, the mode that minimizes the total bit
//! length. Adjacent runs that end up in the same mode are merged.

use super::bit_buffer::BitBuffer;
use super::graph::SegmentGraph;
use super::modes::alphanumeric::is_alphanumeric;
use super::modes::kanji::{is_kanji_char, kanji_code};
use super::modes::{AlphanumericData, ByteData, KanjiData, Mode, NumericData, ShiftJis};
use crate::error::{EncodeError, Result};
use crate::models::Version;

/// A realised segment: one mode and the data encoded in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Numeric(NumericData),
    Alphanumeric(AlphanumericData),
    Byte(ByteData),
    Kanji(KanjiData),
}

impl Segment {
    /// Realise `data` in `mode`
    ///
    /// Kanji needs a Shift JIS conversion and fails with `KanjiUnsupported`
    /// without one.
    pub fn new(data: &str, mode: Mode, sjis: Option<&dyn ShiftJis>) -> Result<Self> {
        Ok(match mode {
            Mode::Numeric => Segment::Numeric(NumericData::new(data)?),
            Mode::Alphanumeric => Segment::Alphanumeric(AlphanumericData::new(data)?),
            Mode::Byte => Segment::Byte(ByteData::new(data)),
            Mode::Kanji => {
                let sjis = sjis.ok_or(EncodeError::KanjiUnsupported)?;
                Segment::Kanji(KanjiData::new(data, sjis)?)
            }
        })
    }

    pub fn mode(&self) -> Mode {
        match self {
            Segment::Numeric(_) => Mode::Numeric,
            Segment::Alphanumeric(_) => Mode::Alphanumeric,
            Segment::Byte(_) => Mode::Byte,
            Segment::Kanji(_) => Mode::Kanji,
        }
    }

    /// Value written into the character count indicator
    pub fn len(&self) -> usize {
        match self {
            Segment::Numeric(d) => d.len(),
            Segment::Alphanumeric(d) => d.len(),
            Segment::Byte(d) => d.len(),
            Segment::Kanji(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload bits, excluding mode indicator and count
    pub fn bit_len(&self) -> usize {
        self.mode().bits_length(self.len())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Segment::Numeric(d) => d.as_str(),
            Segment::Alphanumeric(d) => d.as_str(),
            Segment::Byte(d) => d.as_str(),
            Segment::Kanji(d) => d.as_str(),
        }
    }

    /// Write the payload bits
    pub fn write(&self, buffer: &mut BitBuffer) {
        match self {
            Segment::Numeric(d) => d.write(buffer),
            Segment::Alphanumeric(d) => d.write(buffer),
            Segment::Byte(d) => d.write(buffer),
            Segment::Kanji(d) => d.write(buffer),
        }
    }
}

/// Caller-described segment with an optional mode hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSpec {
    pub data: String,
    pub mode: Option<Mode>,
}

impl SegmentSpec {
    /// Segment whose mode is picked from its content
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mode: None,
        }
    }

    pub fn with_mode(data: impl Into<String>, mode: Mode) -> Self {
        Self {
            data: data.into(),
            mode: Some(mode),
        }
    }

    /// Segment hinted by a mode name; unknown names leave the mode to be
    /// picked from the content
    pub fn with_mode_name(data: impl Into<String>, name: &str) -> Self {
        Self {
            data: data.into(),
            mode: name.parse().ok(),
        }
    }
}

impl From<&str> for SegmentSpec {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl From<&Segment> for SegmentSpec {
    fn from(segment: &Segment) -> Self {
        Self::with_mode(segment.as_str(), segment.mode())
    }
}

/// Maximal run of characters sharing one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub mode: Mode,
    pub text: String,
}

/// Class of a single character
///
/// Kanji is only reported when a conversion is available and yields a
/// valid Kanji mode code, so every Kanji run can be realised.
pub fn classify(c: char, sjis: Option<&dyn ShiftJis>) -> Mode {
    if c.is_ascii_digit() {
        Mode::Numeric
    } else if is_alphanumeric(c) {
        Mode::Alphanumeric
    } else if sjis.is_some_and(|s| is_kanji_char(c) && kanji_code(c, s).is_ok()) {
        Mode::Kanji
    } else {
        Mode::Byte
    }
}

/// Split `text` into maximal runs of one class
pub fn split_runs(text: &str, sjis: Option<&dyn ShiftJis>) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for c in text.chars() {
        let mode = classify(c, sjis);
        match runs.last_mut() {
            Some(last) if last.mode == mode => last.text.push(c),
            _ => runs.push(Run {
                mode,
                text: c.to_string(),
            }),
        }
    }
    runs
}

/// Runs realised as-is, without optimization
///
/// Only used to estimate a version before the optimizer runs.
pub fn raw_split(text: &str, sjis: Option<&dyn ShiftJis>) -> Result<Vec<Segment>> {
    split_runs(text, sjis)
        .iter()
        .map(|run| Segment::new(&run.text, run.mode, sjis))
        .collect()
}

/// Minimal-bit segment list for `text` at `version`
pub fn from_string(
    text: &str,
    version: Version,
    sjis: Option<&dyn ShiftJis>,
) -> Result<Vec<Segment>> {
    let runs = split_runs(text, sjis);
    let graph = SegmentGraph::build(&runs, version);
    let path = graph.shortest_path()?;

    let mut plan: Vec<Run> = Vec::with_capacity(path.len());
    for id in path {
        let node = &graph.nodes()[id];
        let run = node
            .run
            .and_then(|r| runs.get(r))
            .ok_or(EncodeError::InternalGraph("path node without a run"))?;
        plan.push(Run {
            mode: node.mode,
            text: run.text.clone(),
        });
    }

    merge(plan)
        .iter()
        .map(|run| Segment::new(&run.text, run.mode, sjis))
        .collect()
}

/// Join adjacent runs that share a mode
pub fn merge(runs: Vec<Run>) -> Vec<Run> {
    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        match merged.last_mut() {
            Some(last) if last.mode == run.mode => last.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    merged
}

/// Most compact mode able to hold all of `data`
pub fn best_mode(data: &str, sjis: Option<&dyn ShiftJis>) -> Mode {
    if data.is_empty() {
        Mode::Byte
    } else if data.chars().all(|c| c.is_ascii_digit()) {
        Mode::Numeric
    } else if data.chars().all(is_alphanumeric) {
        Mode::Alphanumeric
    } else if sjis.is_some_and(|s| data.chars().all(|c| kanji_code(c, s).is_ok())) {
        Mode::Kanji
    } else {
        Mode::Byte
    }
}

/// Literal segments from caller specs
///
/// Specs with empty data are skipped. A missing hint picks the best mode. A
/// Kanji hint without a conversion falls back to Byte. A Numeric or
/// Alphanumeric hint whose charset cannot hold the data fails with
/// `InvalidMode`; a Kanji character without a valid Shift JIS code fails
/// with `InvalidCharacter`.
pub fn from_array(specs: &[SegmentSpec], sjis: Option<&dyn ShiftJis>) -> Result<Vec<Segment>> {
    specs
        .iter()
        .filter(|spec| !spec.data.is_empty())
        .map(|spec| {
            let best = best_mode(&spec.data, sjis);
            let mode = match spec.mode {
                None => best,
                Some(Mode::Kanji) if sjis.is_none() => Mode::Byte,
                Some(mode) => mode,
            };
            match Segment::new(&spec.data, mode, sjis) {
                Err(EncodeError::InvalidCharacter { .. })
                    if matches!(mode, Mode::Numeric | Mode::Alphanumeric) && mode != best =>
                {
                    Err(EncodeError::InvalidMode {
                        mode,
                        suggested: best,
                    })
                }
                other => other,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    fn sjis(c: char) -> Option<u16> {
        match c {
            '点' => Some(0x935F),
            '茗' => Some(0xE4AA),
            _ => None,
        }
    }

    fn modes(segments: &[Segment]) -> Vec<(Mode, &str)> {
        segments.iter().map(|s| (s.mode(), s.as_str())).collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('7', None), Mode::Numeric);
        assert_eq!(classify('$', None), Mode::Alphanumeric);
        assert_eq!(classify('a', None), Mode::Byte);
        assert_eq!(classify('点', None), Mode::Byte);
        assert_eq!(classify('点', Some(&sjis)), Mode::Kanji);
        // In the Kanji ranges but not convertible
        assert_eq!(classify('あ', Some(&sjis)), Mode::Byte);
    }

    #[test]
    fn test_split_runs() {
        let runs = split_runs("123ABcd", None);
        assert_eq!(
            runs,
            vec![
                Run {
                    mode: Mode::Numeric,
                    text: "123".into()
                },
                Run {
                    mode: Mode::Alphanumeric,
                    text: "AB".into()
                },
                Run {
                    mode: Mode::Byte,
                    text: "cd".into()
                },
            ]
        );
        assert!(split_runs("", None).is_empty());
    }

    #[test]
    fn test_mixed_numeric_alphanumeric() {
        let segments = from_string("1234567890ABC", v(1), None).unwrap();
        assert_eq!(
            modes(&segments),
            vec![(Mode::Numeric, "1234567890"), (Mode::Alphanumeric, "ABC")]
        );
    }

    #[test]
    fn test_short_digit_run_absorbed() {
        // Switching mode for one digit costs more than staying alphanumeric
        let segments = from_string("ABC1DEF", v(1), None).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Alphanumeric, "ABC1DEF")]);
    }

    #[test]
    fn test_lowercase_becomes_byte() {
        let segments = from_string("hello world", v(1), None).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Byte, "hello world")]);
    }

    #[test]
    fn test_kanji_segment() {
        let segments = from_string("点茗", v(1), Some(&sjis)).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Kanji, "点茗")]);
        assert_eq!(segments[0].bit_len(), 26);

        let segments = from_string("点茗", v(1), None).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Byte, "点茗")]);
        assert_eq!(segments[0].len(), 6);
    }

    #[test]
    fn test_raw_split() {
        let segments = raw_split("ABC1DEF", None).unwrap();
        assert_eq!(
            modes(&segments),
            vec![
                (Mode::Alphanumeric, "ABC"),
                (Mode::Numeric, "1"),
                (Mode::Alphanumeric, "DEF")
            ]
        );
    }

    #[test]
    fn test_from_array_hints() {
        let specs = vec![
            SegmentSpec::new("0123"),
            SegmentSpec::with_mode("ABC", Mode::Byte),
            SegmentSpec::with_mode("点", Mode::Kanji),
        ];
        let segments = from_array(&specs, None).unwrap();
        assert_eq!(
            modes(&segments),
            vec![(Mode::Numeric, "0123"), (Mode::Byte, "ABC"), (Mode::Byte, "点")]
        );
    }

    #[test]
    fn test_from_array_invalid_mode() {
        let err = from_array(&[SegmentSpec::with_mode("abc", Mode::Numeric)], None).unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidMode {
                mode: Mode::Numeric,
                suggested: Mode::Byte
            }
        );

        let err = from_array(&[SegmentSpec::with_mode("ab", Mode::Kanji)], Some(&sjis)).unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidCharacter {
                ch: 'a',
                mode: Mode::Kanji
            }
        );
    }

    #[test]
    fn test_from_array_skips_empty_specs() {
        let specs = [
            SegmentSpec::new(""),
            SegmentSpec::with_mode("", Mode::Numeric),
            SegmentSpec::new("A"),
        ];
        let segments = from_array(&specs, None).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Alphanumeric, "A")]);
        assert!(from_array(&[SegmentSpec::new("")], None).unwrap().is_empty());
    }

    #[test]
    fn test_mode_name_hint() {
        assert_eq!(
            SegmentSpec::with_mode_name("123", "Byte"),
            SegmentSpec::with_mode("123", Mode::Byte)
        );

        // Unknown names fall back to the best mode for the data
        let spec = SegmentSpec::with_mode_name("123", "ascii");
        assert_eq!(spec.mode, None);
        let segments = from_array(&[spec], None).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Numeric, "123")]);
    }

    #[test]
    fn test_best_mode() {
        assert_eq!(best_mode("", None), Mode::Byte);
        assert_eq!(best_mode("42", None), Mode::Numeric);
        assert_eq!(best_mode("A 1", None), Mode::Alphanumeric);
        assert_eq!(best_mode("点", Some(&sjis)), Mode::Kanji);
        assert_eq!(best_mode("点", None), Mode::Byte);
    }

    #[test]
    fn test_segment_kanji_without_conversion() {
        assert_eq!(
            Segment::new("点", Mode::Kanji, None),
            Err(EncodeError::KanjiUnsupported)
        );
    }
}
