//! Translation of layouts into chrono `strftime` formats.
//!
//! Text located by a compiled pattern still has to be turned into a time
//! value. The layout vocabulary is example based while chrono's is percent
//! based; this module bridges the two with the same scan loop the pattern
//! compiler uses, so the translated format consumes exactly the text the
//! compiled pattern matches.

use crate::error::TranslateError;
use crate::scanner::{Chunk, Scanner};

/// Translates a layout into a chrono format string.
///
/// Designators the pattern table skips (ISO-8601 "Z" offsets, fractional
/// seconds) translate to nothing, and trailing literal text is dropped the
/// same way the pattern compiler drops it, keeping the two generators
/// aligned. Designators chrono cannot parse are reported as
/// [`TranslateError::Unsupported`].
pub fn translate(layout: &str) -> Result<String, TranslateError> {
    let mut format = String::new();
    let mut scanner = Scanner::new(layout);
    loop {
        let chunk = scanner.next_chunk();
        let Some(kind) = chunk.kind else {
            break;
        };
        push_literal(&mut format, chunk.prefix);
        format.push_str(specifier(kind)?);
    }
    Ok(format)
}

/// Appends literal layout text, escaping `%` so chrono does not read it as a
/// specifier.
fn push_literal(format: &mut String, literal: &str) {
    for ch in literal.chars() {
        if ch == '%' {
            format.push_str("%%");
        } else {
            format.push(ch);
        }
    }
}

/// The chrono specifier for one designator.
fn specifier(chunk: Chunk) -> Result<&'static str, TranslateError> {
    let spec = match chunk {
        Chunk::Year => "%y",
        Chunk::LongYear => "%Y",
        Chunk::Month => "%b",
        Chunk::LongMonth => "%B",
        Chunk::NumMonth => "%-m",
        Chunk::ZeroMonth => "%m",
        Chunk::Weekday => "%a",
        Chunk::LongWeekday => "%A",
        Chunk::Day => "%-d",
        Chunk::UnderDay => "%e",
        Chunk::ZeroDay => "%d",
        Chunk::Hour => "%H",
        Chunk::Hour12 => "%-I",
        Chunk::ZeroHour12 => "%I",
        Chunk::Minute => "%-M",
        Chunk::ZeroMinute => "%M",
        Chunk::Second => "%-S",
        Chunk::ZeroSecond => "%S",
        Chunk::AmPmUpper => "%p",
        Chunk::AmPmLower => "%P",
        Chunk::NumTz => "%z",
        Chunk::NumColonTz => "%:z",
        // Skipped by the pattern table, so matched text never carries these.
        Chunk::IsoTz
        | Chunk::IsoColonTz
        | Chunk::IsoSecondsTz
        | Chunk::IsoColonSecondsTz
        | Chunk::FracSecondFixed(_)
        | Chunk::FracSecondTrimmed(_) => "",
        // chrono has no parseable equivalent for these renderings.
        Chunk::TzName => return Err(TranslateError::Unsupported { text: "MST" }),
        Chunk::NumShortTz => return Err(TranslateError::Unsupported { text: "-07" }),
        Chunk::NumSecondsTz => return Err(TranslateError::Unsupported { text: "-070000" }),
        Chunk::NumColonSecondsTz => {
            return Err(TranslateError::Unsupported { text: "-07:00:00" })
        }
    };
    Ok(spec)
}
