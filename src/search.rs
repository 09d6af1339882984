//! Searching lines for timestamps and filtering them against a cutoff.

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::cache;
use crate::error::SearchError;
use crate::strptime;

/// A timestamp recovered from matched text.
///
/// Layouts that carry a parseable offset produce `Zoned` values; everything
/// else parses as wall-clock time with no zone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// True when this timestamp is at or after `cutoff`. Naive values are
    /// compared against the cutoff's local wall-clock reading.
    pub fn at_or_after(&self, cutoff: DateTime<Local>) -> bool {
        match self {
            Timestamp::Zoned(dt) => *dt >= cutoff,
            Timestamp::Naive(dt) => *dt >= cutoff.naive_local(),
        }
    }
}

/// A layout compiled for searching: the pattern locating timestamps shaped
/// like the layout, and the chrono format that parses what the pattern finds.
pub struct LayoutMatcher {
    pattern: Regex,
    format: String,
}

impl LayoutMatcher {
    /// Compiles `layout` for searching.
    ///
    /// Fails when the generated pattern is not a valid regular expression
    /// (layout literals pass through unescaped, so a stray metacharacter can
    /// break it) or when the layout carries a designator that cannot be
    /// parsed back into a time value.
    pub fn new(layout: &str) -> Result<Self, SearchError> {
        let pattern = cache::get_or_compile(layout)?;
        let format = strptime::translate(layout)?;
        Ok(Self { pattern, format })
    }

    /// The generated regular expression.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Finds the first timestamp-shaped substring of `line`.
    ///
    /// An empty match means the layout had no designators at all; that is
    /// treated as no find.
    pub fn find_timestamp<'t>(&self, line: &'t str) -> Option<&'t str> {
        self.pattern
            .find(line)
            .map(|m| m.as_str())
            .filter(|text| !text.is_empty())
    }

    /// Parses text previously located by [`LayoutMatcher::find_timestamp`].
    ///
    /// A matched timestamp without clock fields defaults to midnight; one
    /// without date fields cannot be placed on a timeline and is an error.
    pub fn parse_timestamp(&self, text: &str) -> Result<Timestamp, SearchError> {
        let mut parsed = Parsed::new();
        parse(&mut parsed, text, StrftimeItems::new(&self.format))
            .map_err(|source| timestamp_error(text, source))?;

        if let Ok(zoned) = parsed.to_datetime() {
            return Ok(Timestamp::Zoned(zoned));
        }
        let date = parsed
            .to_naive_date()
            .map_err(|source| timestamp_error(text, source))?;
        let time = parsed.to_naive_time().unwrap_or(NaiveTime::MIN);
        Ok(Timestamp::Naive(date.and_time(time)))
    }
}

fn timestamp_error(text: &str, source: chrono::ParseError) -> SearchError {
    SearchError::Timestamp {
        text: text.to_string(),
        source,
    }
}

/// Filters lines, keeping those whose timestamp is at or after a cutoff.
pub struct LineFilter {
    matcher: LayoutMatcher,
    cutoff: DateTime<Local>,
}

impl LineFilter {
    pub fn new(matcher: LayoutMatcher, cutoff: DateTime<Local>) -> Self {
        Self { matcher, cutoff }
    }

    /// True when `line` carries a timestamp at or after the cutoff.
    ///
    /// Lines without a recognizable timestamp are rejected, as are matches
    /// that fail to parse: the pattern is shape based and can land on digit
    /// runs that are not calendar-valid.
    pub fn matches(&self, line: &str) -> bool {
        match self.matcher.find_timestamp(line) {
            Some(text) => self
                .matcher
                .parse_timestamp(text)
                .map(|ts| ts.at_or_after(self.cutoff))
                .unwrap_or(false),
            None => false,
        }
    }
}

/// The moment `days`, `hours`, and `minutes` before now.
pub fn cutoff_before_now(days: i64, hours: i64, minutes: i64) -> DateTime<Local> {
    Local::now() - Duration::days(days) - Duration::hours(hours) - Duration::minutes(minutes)
}
