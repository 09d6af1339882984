//! Scanner for example-based timestamp layouts.
//!
//! A layout mixes literal separators with a fixed vocabulary of field
//! designators ("2006" for a four-digit year, "Jan" for an abbreviated month
//! name, and so on). The scanner walks the layout left to right and extracts
//! the next designator together with the literal text before it. The grammar
//! is context sensitive: a digit or letter means different things depending
//! on what follows it, so recognition checks the longer spellings first
//! ("January" before "Jan", "2006" before "2") and refuses to read "Mon" out
//! of an unrelated word like "Month".

pub mod chunk;

pub use chunk::{Chunk, ScannedChunk};

/// Zero-padded kinds selected by "01" through "06", in that order.
const ZERO_PADDED: [Chunk; 6] = [
    Chunk::ZeroMonth,
    Chunk::ZeroDay,
    Chunk::ZeroHour12,
    Chunk::ZeroMinute,
    Chunk::ZeroSecond,
    Chunk::Year,
];

/// A scanner over the unconsumed remainder of a layout string.
pub struct Scanner<'a> {
    remaining: &'a str,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `layout`.
    pub fn new(layout: &'a str) -> Self {
        Self { remaining: layout }
    }

    /// The not-yet-scanned tail of the layout.
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// Scans the next chunk and advances past it.
    ///
    /// When no designator remains, the whole tail is returned as prefix with
    /// `kind` absent, and the scanner is left empty.
    pub fn next_chunk(&mut self) -> ScannedChunk<'a> {
        let chunk = next_chunk(self.remaining);
        self.remaining = chunk.suffix;
        chunk
    }
}

/// Finds the first field designator in `layout`, returning the literal text
/// before it, its kind, and the text after it.
///
/// Pure and re-entrant: every call scans only the string it is given, so
/// previously accepted literal text never influences a later scan.
pub fn next_chunk(layout: &str) -> ScannedChunk<'_> {
    let bytes = layout.as_bytes();
    for i in 0..bytes.len() {
        match bytes[i] {
            b'J' => {
                // January, Jan
                if layout[i..].starts_with("January") {
                    return found(layout, i, 7, Chunk::LongMonth);
                }
                if layout[i..].starts_with("Jan") && !starts_with_lowercase(&layout[i + 3..]) {
                    return found(layout, i, 3, Chunk::Month);
                }
            }
            b'M' => {
                // Monday, Mon, MST
                if layout[i..].starts_with("Monday") {
                    return found(layout, i, 6, Chunk::LongWeekday);
                }
                if layout[i..].starts_with("Mon") && !starts_with_lowercase(&layout[i + 3..]) {
                    return found(layout, i, 3, Chunk::Weekday);
                }
                if layout[i..].starts_with("MST") {
                    return found(layout, i, 3, Chunk::TzName);
                }
            }
            b'0' => {
                // 01, 02, 03, 04, 05, 06
                if let Some(&d) = bytes.get(i + 1) {
                    if (b'1'..=b'6').contains(&d) {
                        return found(layout, i, 2, ZERO_PADDED[(d - b'1') as usize]);
                    }
                }
            }
            b'1' => {
                // 15, 1
                if bytes.get(i + 1) == Some(&b'5') {
                    return found(layout, i, 2, Chunk::Hour);
                }
                return found(layout, i, 1, Chunk::NumMonth);
            }
            b'2' => {
                // 2006, 2
                if layout[i..].starts_with("2006") {
                    return found(layout, i, 4, Chunk::LongYear);
                }
                return found(layout, i, 1, Chunk::Day);
            }
            b'_' => {
                // _2, _2006
                if bytes.get(i + 1) == Some(&b'2') {
                    // "_2006" is a literal underscore followed by the year
                    if layout[i + 1..].starts_with("2006") {
                        return ScannedChunk {
                            prefix: &layout[..i + 1],
                            kind: Some(Chunk::LongYear),
                            suffix: &layout[i + 5..],
                        };
                    }
                    return found(layout, i, 2, Chunk::UnderDay);
                }
            }
            b'3' => return found(layout, i, 1, Chunk::Hour12),
            b'4' => return found(layout, i, 1, Chunk::Minute),
            b'5' => return found(layout, i, 1, Chunk::Second),
            b'P' => {
                if bytes.get(i + 1) == Some(&b'M') {
                    return found(layout, i, 2, Chunk::AmPmUpper);
                }
            }
            b'p' => {
                if bytes.get(i + 1) == Some(&b'm') {
                    return found(layout, i, 2, Chunk::AmPmLower);
                }
            }
            b'-' => {
                // -070000, -07:00:00, -0700, -07:00, -07
                if layout[i..].starts_with("-070000") {
                    return found(layout, i, 7, Chunk::NumSecondsTz);
                }
                if layout[i..].starts_with("-07:00:00") {
                    return found(layout, i, 9, Chunk::NumColonSecondsTz);
                }
                if layout[i..].starts_with("-0700") {
                    return found(layout, i, 5, Chunk::NumTz);
                }
                if layout[i..].starts_with("-07:00") {
                    return found(layout, i, 6, Chunk::NumColonTz);
                }
                if layout[i..].starts_with("-07") {
                    return found(layout, i, 3, Chunk::NumShortTz);
                }
            }
            b'Z' => {
                // Z070000, Z07:00:00, Z0700, Z07:00
                if layout[i..].starts_with("Z070000") {
                    return found(layout, i, 7, Chunk::IsoSecondsTz);
                }
                if layout[i..].starts_with("Z07:00:00") {
                    return found(layout, i, 9, Chunk::IsoColonSecondsTz);
                }
                if layout[i..].starts_with("Z0700") {
                    return found(layout, i, 5, Chunk::IsoTz);
                }
                if layout[i..].starts_with("Z07:00") {
                    return found(layout, i, 6, Chunk::IsoColonTz);
                }
            }
            b'.' => {
                // A run of identical '0' or '9' digits marks fractional
                // seconds, but only when the run ends unambiguously: a
                // different digit right after it would make the run length
                // unclear, so the whole thing is left as literal text.
                if let Some(&digit) = bytes.get(i + 1) {
                    if digit == b'0' || digit == b'9' {
                        let mut j = i + 1;
                        while j < bytes.len() && bytes[j] == digit {
                            j += 1;
                        }
                        if !is_digit(bytes, j) {
                            let width = (j - i - 1).min(u8::MAX as usize) as u8;
                            let kind = if digit == b'9' {
                                Chunk::FracSecondTrimmed(width)
                            } else {
                                Chunk::FracSecondFixed(width)
                            };
                            return ScannedChunk {
                                prefix: &layout[..i],
                                kind: Some(kind),
                                suffix: &layout[j..],
                            };
                        }
                    }
                }
            }
            _ => {}
        }
    }
    ScannedChunk {
        prefix: layout,
        kind: None,
        suffix: "",
    }
}

/// Builds the chunk for a designator of `len` bytes found at byte `i`.
fn found(layout: &str, i: usize, len: usize, kind: Chunk) -> ScannedChunk<'_> {
    ScannedChunk {
        prefix: &layout[..i],
        kind: Some(kind),
        suffix: &layout[i + len..],
    }
}

/// Reports whether the string begins with an ASCII lower-case letter.
fn starts_with_lowercase(s: &str) -> bool {
    matches!(s.as_bytes().first(), Some(b'a'..=b'z'))
}

/// Reports whether `bytes[i]` is in range and is a decimal digit.
fn is_digit(bytes: &[u8], i: usize) -> bool {
    bytes.get(i).is_some_and(|b| b.is_ascii_digit())
}
