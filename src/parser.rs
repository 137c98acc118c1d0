//! Permissive CSV parser for historical trip data.
//!
//! Recognized headers: `train_number`, `hour`, `delay_minutes`, `date`,
//! `station`. Anything the parser cannot make sense of in a cell becomes
//! `None` on that field; a malformed row never aborts the load.

use anyhow::Result;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

use crate::records::{TripRecord, normalize_train, train_family, weekday_from_date};

/// Parses CSV text into trip records.
///
/// # Errors
///
/// Returns an error only when the header row itself is unreadable; row-level
/// problems are logged and skipped.
pub fn parse_rows(text: &str) -> Result<Vec<TripRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let train_col = column("train_number");
    let hour_col = column("hour");
    let delay_col = column("delay_minutes");
    let date_col = column("date");
    let station_col = column("station");

    let mut records = Vec::new();

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(error = %e, "skipping unreadable CSV row");
                continue;
            }
        };

        let train = cell(&row, train_col)
            .map(normalize_train)
            .filter(|t| !t.is_empty());
        let family = train.as_deref().and_then(train_family);
        let hour = cell(&row, hour_col).and_then(parse_hour);
        let weekday = cell(&row, date_col)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .map(weekday_from_date);
        let station = cell(&row, station_col).map(str::to_string);
        let delay_minutes = cell(&row, delay_col)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|d| d.is_finite());

        records.push(TripRecord {
            train,
            family,
            hour,
            weekday,
            station,
            delay_minutes,
        });
    }

    Ok(records)
}

/// Non-empty cell at the given column, if the column exists at all.
fn cell<'r>(row: &'r StringRecord, col: Option<usize>) -> Option<&'r str> {
    col.and_then(|i| row.get(i)).filter(|s| !s.is_empty())
}

fn parse_hour(s: &str) -> Option<u8> {
    let n = s.parse::<f64>().ok()?;
    if n.is_finite() && n.fract() == 0.0 && (0.0..=23.0).contains(&n) {
        Some(n as u8)
    } else {
        None
    }
}
