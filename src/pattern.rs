//! Compilation of layouts into regular-expression patterns.
//!
//! Every field designator maps to a fixed sub-pattern; literal text between
//! designators is carried into the pattern verbatim. Two behaviors of the
//! compiler are load-bearing for callers and are kept as they are:
//! literal text after the last recognized designator is dropped, and literal
//! text is never escaped, so a layout literal that happens to be a regex
//! metacharacter stays a metacharacter.

use crate::scanner::{Chunk, Scanner};

/// Compiles a layout into a regular expression matching every string the
/// layout could produce when formatting a time value.
///
/// Total over its input: any string compiles, although the result is only a
/// valid expression when the layout's literal text is. A layout with no
/// designators at all compiles to the empty string.
pub fn to_regex(layout: &str) -> String {
    let mut pattern = String::new();
    let mut scanner = Scanner::new(layout);
    loop {
        let chunk = scanner.next_chunk();
        let Some(kind) = chunk.kind else {
            break;
        };
        pattern.push_str(chunk.prefix);
        pattern.push_str(subpattern(kind));
    }
    pattern
}

/// The regular-expression fragment matching all text a designator can render
/// to.
///
/// The ISO-8601 "Z" offsets and the fractional-second kinds map to the empty
/// fragment: such components are skipped rather than constrained, which is
/// also why the fractional digit-count payload is not consulted here.
pub(crate) fn subpattern(chunk: Chunk) -> &'static str {
    match chunk {
        Chunk::Year => r"\d{2}",
        Chunk::LongYear => r"\d{4}",
        Chunk::Month => "(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)",
        Chunk::LongMonth => {
            "(January|February|March|April|May|June|July|August|September|October|November|December)"
        }
        Chunk::NumMonth => r"([1-9]|1[0-2])",
        Chunk::ZeroMonth => r"(0[1-9]|1[0-2])",
        Chunk::Weekday => "(Sun|Mon|Tue|Wed|Thu|Fri|Sat)",
        Chunk::LongWeekday => "(Sunday|Monday|Tuesday|Wednesday|Thursday|Friday|Saturday)",
        Chunk::Day => r"([1-9]|[12]\d|3[0-1])",
        Chunk::UnderDay => r"(_[1-9]|[12]\d|3[0-1])",
        Chunk::ZeroDay => r"(0[1-9]|[12]\d|3[0-1])",
        Chunk::Hour => r"([01][0-9]|2[0-3])",
        Chunk::Hour12 => r"([1-9]|1[0-2])",
        Chunk::ZeroHour12 => r"(0[1-9]|1[0-2])",
        Chunk::Minute => r"[1-5]?\d",
        Chunk::ZeroMinute => r"[0-5]\d",
        Chunk::Second => r"[1-5]?\d",
        Chunk::ZeroSecond => r"[0-5]\d",
        Chunk::AmPmUpper => "[AP]M",
        Chunk::AmPmLower => "[ap]m",
        Chunk::IsoTz | Chunk::IsoColonTz | Chunk::IsoSecondsTz | Chunk::IsoColonSecondsTz => "",
        Chunk::NumTz => r"(\+|-)\d{4}",
        Chunk::NumShortTz => r"(\+|-)\d{2}",
        Chunk::NumColonTz => r"(\+|-)\d{2}:\d{2}",
        Chunk::NumSecondsTz => r"(\+|-)\d{6}",
        Chunk::NumColonSecondsTz => r"(\+|-)\d{2}:\d{2}:\d{2}",
        Chunk::TzName => "(MST|GSM|UTC)",
        Chunk::FracSecondFixed(_) | Chunk::FracSecondTrimmed(_) => "",
    }
}
