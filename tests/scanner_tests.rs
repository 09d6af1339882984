//! Tests for the layout scanner.

use timegrep::scanner::{next_chunk, Chunk, Scanner};

#[test]
fn test_scan_long_year() {
    let chunk = next_chunk("2006");
    assert_eq!(chunk.prefix, "");
    assert_eq!(chunk.kind, Some(Chunk::LongYear));
    assert_eq!(chunk.suffix, "");
}

#[test]
fn test_scan_literal_prefix() {
    let chunk = next_chunk("at 15:04");
    assert_eq!(chunk.prefix, "at ");
    assert_eq!(chunk.kind, Some(Chunk::Hour));
    assert_eq!(chunk.suffix, ":04");
}

#[test]
fn test_monday_scans_as_long_weekday() {
    let chunk = next_chunk("Monday");
    assert_eq!(chunk.kind, Some(Chunk::LongWeekday));
    assert_eq!(chunk.suffix, "");
}

#[test]
fn test_month_word_is_not_a_weekday() {
    // The lower-case letter after "Mon" keeps it from being read as a
    // weekday designator.
    let chunk = next_chunk("Month");
    assert_eq!(chunk.kind, None);
    assert_eq!(chunk.prefix, "Month");
    assert_eq!(chunk.suffix, "");
}

#[test]
fn test_timezone_name() {
    let chunk = next_chunk("15:04 MST");
    assert_eq!(chunk.kind, Some(Chunk::Hour));
    let chunk = next_chunk(" MST");
    assert_eq!(chunk.prefix, " ");
    assert_eq!(chunk.kind, Some(Chunk::TzName));
}

#[test]
fn test_month_name_variants() {
    assert_eq!(next_chunk("January").kind, Some(Chunk::LongMonth));
    assert_eq!(next_chunk("Jan 2").kind, Some(Chunk::Month));
    // "Jan" inside an unrelated word is literal text
    assert_eq!(next_chunk("Janet").kind, None);
}

#[test]
fn test_underscore_day_and_year() {
    let chunk = next_chunk("_2006");
    assert_eq!(chunk.prefix, "_");
    assert_eq!(chunk.kind, Some(Chunk::LongYear));
    assert_eq!(chunk.suffix, "");

    let chunk = next_chunk("_2 Jan");
    assert_eq!(chunk.prefix, "");
    assert_eq!(chunk.kind, Some(Chunk::UnderDay));
    assert_eq!(chunk.suffix, " Jan");
}

#[test]
fn test_zero_padded_dispatch() {
    assert_eq!(next_chunk("01").kind, Some(Chunk::ZeroMonth));
    assert_eq!(next_chunk("02").kind, Some(Chunk::ZeroDay));
    assert_eq!(next_chunk("03").kind, Some(Chunk::ZeroHour12));
    assert_eq!(next_chunk("04").kind, Some(Chunk::ZeroMinute));
    assert_eq!(next_chunk("05").kind, Some(Chunk::ZeroSecond));
    assert_eq!(next_chunk("06").kind, Some(Chunk::Year));
}

#[test]
fn test_hour_versus_num_month() {
    assert_eq!(next_chunk("15").kind, Some(Chunk::Hour));
    let chunk = next_chunk("1/2");
    assert_eq!(chunk.kind, Some(Chunk::NumMonth));
    assert_eq!(chunk.suffix, "/2");
}

#[test]
fn test_single_digit_designators() {
    assert_eq!(next_chunk("3").kind, Some(Chunk::Hour12));
    assert_eq!(next_chunk("4").kind, Some(Chunk::Minute));
    assert_eq!(next_chunk("5").kind, Some(Chunk::Second));
    assert_eq!(next_chunk("2").kind, Some(Chunk::Day));
}

#[test]
fn test_am_pm_markers() {
    assert_eq!(next_chunk("PM").kind, Some(Chunk::AmPmUpper));
    assert_eq!(next_chunk("pm").kind, Some(Chunk::AmPmLower));
}

#[test]
fn test_numeric_timezone_longest_spelling_wins() {
    assert_eq!(next_chunk("-070000").kind, Some(Chunk::NumSecondsTz));
    assert_eq!(next_chunk("-07:00:00").kind, Some(Chunk::NumColonSecondsTz));
    assert_eq!(next_chunk("-0700").kind, Some(Chunk::NumTz));
    assert_eq!(next_chunk("-07:00").kind, Some(Chunk::NumColonTz));
    assert_eq!(next_chunk("-07").kind, Some(Chunk::NumShortTz));
}

#[test]
fn test_iso_timezone_longest_spelling_wins() {
    assert_eq!(next_chunk("Z070000").kind, Some(Chunk::IsoSecondsTz));
    assert_eq!(next_chunk("Z07:00:00").kind, Some(Chunk::IsoColonSecondsTz));
    assert_eq!(next_chunk("Z0700").kind, Some(Chunk::IsoTz));
    assert_eq!(next_chunk("Z07:00").kind, Some(Chunk::IsoColonTz));
}

#[test]
fn test_fractional_second_runs() {
    assert_eq!(next_chunk(".000").kind, Some(Chunk::FracSecondFixed(3)));
    assert_eq!(next_chunk(".9999").kind, Some(Chunk::FracSecondTrimmed(4)));
}

#[test]
fn test_ambiguous_fraction_run_is_left_literal() {
    // ".0001" is not a fractional-second marker: the run of zeros is
    // followed by another digit, so its length would be ambiguous. The scan
    // moves on and reads the trailing "01" as a designator instead.
    let chunk = next_chunk(".0001");
    assert_eq!(chunk.prefix, ".00");
    assert_eq!(chunk.kind, Some(Chunk::ZeroMonth));
    assert_eq!(chunk.suffix, "");
}

#[test]
fn test_mixed_digit_fraction_is_left_literal() {
    let chunk = next_chunk(".123");
    assert_eq!(chunk.prefix, ".");
    assert_eq!(chunk.kind, Some(Chunk::NumMonth));
    assert_eq!(chunk.suffix, "23");
}

#[test]
fn test_prefix_and_suffix_reassemble() {
    let layout = "time=2006, rest";
    let chunk = next_chunk(layout);
    assert_eq!(chunk.prefix, "time=");
    assert_eq!(chunk.kind, Some(Chunk::LongYear));
    assert_eq!(chunk.suffix, ", rest");
    assert_eq!(format!("{}2006{}", chunk.prefix, chunk.suffix), layout);
}

#[test]
fn test_scanner_walks_whole_layout() {
    let mut scanner = Scanner::new("02/Jan/2006:15:04:05 -0700");
    let mut kinds = Vec::new();
    loop {
        let chunk = scanner.next_chunk();
        match chunk.kind {
            Some(kind) => kinds.push(kind),
            None => break,
        }
    }
    assert_eq!(
        kinds,
        vec![
            Chunk::ZeroDay,
            Chunk::Month,
            Chunk::LongYear,
            Chunk::Hour,
            Chunk::ZeroMinute,
            Chunk::ZeroSecond,
            Chunk::NumTz,
        ]
    );
}
