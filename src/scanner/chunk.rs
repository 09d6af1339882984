//! Field designator kinds recognized in a layout.

/// A field designator recognized within a layout string.
///
/// Each variant stands for one date/time field together with its rendering
/// style; the doc comment shows the exact substring that denotes it in a
/// layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    /// `January`
    LongMonth,
    /// `Jan`
    Month,
    /// `1`
    NumMonth,
    /// `01`
    ZeroMonth,
    /// `Monday`
    LongWeekday,
    /// `Mon`
    Weekday,
    /// `2`
    Day,
    /// `_2`
    UnderDay,
    /// `02`
    ZeroDay,
    /// `15`
    Hour,
    /// `3`
    Hour12,
    /// `03`
    ZeroHour12,
    /// `4`
    Minute,
    /// `04`
    ZeroMinute,
    /// `5`
    Second,
    /// `05`
    ZeroSecond,
    /// `2006`
    LongYear,
    /// `06`
    Year,
    /// `PM`
    AmPmUpper,
    /// `pm`
    AmPmLower,
    /// `MST`
    TzName,
    /// `Z0700`; renders as `Z` for UTC
    IsoTz,
    /// `Z070000`
    IsoSecondsTz,
    /// `Z07:00`; renders as `Z` for UTC
    IsoColonTz,
    /// `Z07:00:00`
    IsoColonSecondsTz,
    /// `-0700`
    NumTz,
    /// `-070000`
    NumSecondsTz,
    /// `-07`
    NumShortTz,
    /// `-07:00`
    NumColonTz,
    /// `-07:00:00`
    NumColonSecondsTz,
    /// `.0`, `.00`, ...; trailing zeros kept. The payload is the digit count.
    FracSecondFixed(u8),
    /// `.9`, `.99`, ...; trailing zeros trimmed. The payload is the digit count.
    FracSecondTrimmed(u8),
}

/// One step of the layout scan: the literal text before the designator, the
/// designator kind if one was found, and the unscanned remainder after it.
///
/// `prefix`, the matched designator text, and `suffix` together reassemble
/// the scanned portion of the layout. When no designator is found, `kind` is
/// absent, `prefix` is the entire remaining layout, and `suffix` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedChunk<'a> {
    pub prefix: &'a str,
    pub kind: Option<Chunk>,
    pub suffix: &'a str,
}
