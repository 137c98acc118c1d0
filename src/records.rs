//! Historical trip records and the normalization helpers shared by the
//! parser and the query layer.

use chrono::{Datelike, NaiveDate};

/// One historical trip, as parsed from a dataset row.
///
/// Every field is optional: malformed or empty cells become `None` instead of
/// failing the batch. A record without `delay_minutes` is retained but never
/// contributes to any aggregate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripRecord {
    /// Normalized train number, e.g. "ICE845".
    pub train: Option<String>,
    /// Train family: the leading letter run of the train number, e.g. "ICE".
    pub family: Option<String>,
    /// Hour of day, 0-23.
    pub hour: Option<u8>,
    /// Weekday index, 0=Monday .. 6=Sunday.
    pub weekday: Option<u8>,
    /// Departure station, raw as found in the data.
    pub station: Option<String>,
    /// Observed delay in minutes.
    pub delay_minutes: Option<f64>,
}

/// Normalizes a train identifier: strips all whitespace and upper-cases,
/// so "ice 845" becomes "ICE845". Idempotent.
pub fn normalize_train(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Extracts the train family from an already-normalized train number:
/// the leading run of letters ("ICE845" -> "ICE"). Returns `None` for
/// purely numeric identifiers.
pub fn train_family(normalized: &str) -> Option<String> {
    let family: String = normalized
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    if family.is_empty() { None } else { Some(family) }
}

/// Weekday index for a calendar date, 0=Monday .. 6=Sunday.
pub fn weekday_from_date(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Three-letter weekday abbreviation for a 0=Monday .. 6=Sunday index.
/// Out-of-range indices render as an empty string.
pub fn weekday_abbrev(idx: u8) -> &'static str {
    const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    NAMES.get(idx as usize).copied().unwrap_or("")
}
