//! User-facing rendering of a resolved estimate: headline banding, the
//! matched-pattern phrase, the details line, and the fallback note.

use serde::Serialize;

use crate::estimator::confidence::Confidence;
use crate::estimator::types::{Granularity, Query};
use crate::records::weekday_abbrev;

/// The rendered prediction handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub headline: String,
    pub details_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_note: Option<String>,
}

/// Renders the primary estimate line.
///
/// No median means no data. A non-positive median means the train typically
/// runs on time or early; the message frames that as a possible-delay band
/// instead of claiming a negative delay.
pub fn headline(median: Option<f64>) -> String {
    match median {
        None => "Likely delay: —".to_string(),
        Some(m) if m <= 0.0 => "Likely delay: 0–15 min (possible)".to_string(),
        Some(m) => format!("Likely delay: {m:.1} min"),
    }
}

/// Short phrase naming the slice of history that backed the estimate,
/// e.g. "ICE845 at 14:00 on Wed" or "all trains around 07:00".
pub fn describe(matched: Granularity, query: &Query) -> String {
    let hour = query
        .hour
        .map(|h| format!("{h:02}:00"))
        .unwrap_or_default();
    let weekday = query.weekday.map(weekday_abbrev).unwrap_or("");
    let train = query.train.as_deref().unwrap_or("");
    let family = query.family.as_deref().unwrap_or("");

    match matched {
        Granularity::TrainHourWeekday => format!("{train} at {hour} on {weekday}"),
        Granularity::TrainHour => format!("{train} around {hour}"),
        Granularity::FamilyHourWeekday => format!("{family} trains at {hour} on {weekday}"),
        Granularity::FamilyHour => format!("{family} trains around {hour}"),
        Granularity::StationHour => {
            let station = query.station.as_deref().unwrap_or("this station");
            format!("{station} around {hour}")
        }
        Granularity::NationalHour => format!("all trains around {hour}"),
        Granularity::Overall => "overall historical data".to_string(),
    }
}

/// Compact context line: confidence, sample size, matched pattern.
pub fn details_line(label: Confidence, count: Option<usize>, pattern: &str) -> String {
    let count_text = match count {
        Some(c) => format!("{c} past trips"),
        None => "historical data".to_string(),
    };
    format!("Confidence: {label} • Based on {count_text} • Pattern: {pattern}")
}

/// Explains which coarser pattern was used, present for every match below
/// the exact train+hour+weekday level.
pub fn fallback_note(matched: Granularity) -> Option<String> {
    let note = match matched {
        Granularity::TrainHourWeekday => return None,
        Granularity::TrainHour => "Few exact trips; used the train-level pattern.",
        Granularity::FamilyHourWeekday | Granularity::FamilyHour => {
            "Few exact trips; used the train family pattern."
        }
        Granularity::StationHour => "Few train-level trips; used station pattern.",
        Granularity::NationalHour => "Very few local trips; used national-by-hour pattern.",
        Granularity::Overall => "Sparse data; used overall history.",
    };
    Some(note.to_string())
}
