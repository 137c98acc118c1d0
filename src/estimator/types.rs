//! Data types used by the aggregation and resolution pipeline.

use serde::Serialize;
use std::collections::HashMap;

/// Composite-key grouping for historical delays, ordered from most to least
/// specific. `Overall` is the terminal level with no key at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    TrainHourWeekday,
    TrainHour,
    FamilyHourWeekday,
    FamilyHour,
    StationHour,
    NationalHour,
    Overall,
}

impl Granularity {
    /// The keyed levels in fallback order. Adding or reordering a level is a
    /// change here, not in the resolver's control flow.
    pub const KEYED: [Granularity; 6] = [
        Granularity::TrainHourWeekday,
        Granularity::TrainHour,
        Granularity::FamilyHourWeekday,
        Granularity::FamilyHour,
        Granularity::StationHour,
        Granularity::NationalHour,
    ];

    /// Stable textual label, e.g. "train+hour+weekday".
    pub fn label(self) -> &'static str {
        match self {
            Granularity::TrainHourWeekday => "train+hour+weekday",
            Granularity::TrainHour => "train+hour",
            Granularity::FamilyHourWeekday => "family+hour+weekday",
            Granularity::FamilyHour => "family+hour",
            Granularity::StationHour => "station+hour",
            Granularity::NationalHour => "national+hour",
            Granularity::Overall => "overall",
        }
    }
}

/// Median delay and observation count for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatEntry {
    pub median: Option<f64>,
    pub count: usize,
}

/// All statistic tables for one dataset: one map per keyed granularity plus
/// the overall entry. Built once per prediction, read-only afterward.
///
/// Keys are tuples, not concatenated strings, so a train number or station
/// name containing a separator character cannot collide with another key.
#[derive(Debug, Default)]
pub struct AggregateStore {
    pub train_hour_weekday: HashMap<(String, u8, u8), StatEntry>,
    pub train_hour: HashMap<(String, u8), StatEntry>,
    pub family_hour_weekday: HashMap<(String, u8, u8), StatEntry>,
    pub family_hour: HashMap<(String, u8), StatEntry>,
    pub station_hour: HashMap<(String, u8), StatEntry>,
    pub national_hour: HashMap<u8, StatEntry>,
    pub overall: StatEntry,
}

impl AggregateStore {
    /// Looks up the entry for a keyed level using the query's field values.
    /// Returns `None` when the query lacks a required field or the table has
    /// no entry for that key. `Overall` always resolves.
    pub fn lookup(&self, level: Granularity, query: &Query) -> Option<StatEntry> {
        match level {
            Granularity::TrainHourWeekday => {
                let key = (query.train.clone()?, query.hour?, query.weekday?);
                self.train_hour_weekday.get(&key).copied()
            }
            Granularity::TrainHour => {
                let key = (query.train.clone()?, query.hour?);
                self.train_hour.get(&key).copied()
            }
            Granularity::FamilyHourWeekday => {
                let key = (query.family.clone()?, query.hour?, query.weekday?);
                self.family_hour_weekday.get(&key).copied()
            }
            Granularity::FamilyHour => {
                let key = (query.family.clone()?, query.hour?);
                self.family_hour.get(&key).copied()
            }
            Granularity::StationHour => {
                let key = (query.station.clone()?, query.hour?);
                self.station_hour.get(&key).copied()
            }
            Granularity::NationalHour => self.national_hour.get(&query.hour?).copied(),
            Granularity::Overall => Some(self.overall),
        }
    }
}

/// Query fields derived once from user input at submission time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub train: Option<String>,
    pub family: Option<String>,
    pub hour: Option<u8>,
    pub weekday: Option<u8>,
    pub station: Option<String>,
}

/// Outcome of walking the fallback chain for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolutionResult {
    pub median: Option<f64>,
    pub matched: Granularity,
    pub count: Option<usize>,
}
