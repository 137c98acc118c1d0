//! Builds the per-granularity statistic tables from raw trip records.

use std::collections::HashMap;
use std::hash::Hash;

use crate::estimator::types::{AggregateStore, StatEntry};
use crate::estimator::utility::median;
use crate::records::TripRecord;

/// Aggregates trip records into an [`AggregateStore`].
///
/// A record without a delay contributes nothing, not even to the overall
/// entry. A record with a delay is pushed into every keyed bucket whose
/// required fields are all present, and always into the overall bucket.
/// Pure: the result depends only on the multiset of valid input records.
pub fn build(records: &[TripRecord]) -> AggregateStore {
    let mut train_hour_weekday: HashMap<(String, u8, u8), Vec<f64>> = HashMap::new();
    let mut train_hour: HashMap<(String, u8), Vec<f64>> = HashMap::new();
    let mut family_hour_weekday: HashMap<(String, u8, u8), Vec<f64>> = HashMap::new();
    let mut family_hour: HashMap<(String, u8), Vec<f64>> = HashMap::new();
    let mut station_hour: HashMap<(String, u8), Vec<f64>> = HashMap::new();
    let mut national_hour: HashMap<u8, Vec<f64>> = HashMap::new();
    let mut all_delays = Vec::new();

    for r in records {
        let Some(delay) = r.delay_minutes else {
            continue;
        };

        all_delays.push(delay);

        if let (Some(train), Some(hour), Some(weekday)) = (&r.train, r.hour, r.weekday) {
            train_hour_weekday
                .entry((train.clone(), hour, weekday))
                .or_default()
                .push(delay);
        }
        if let (Some(train), Some(hour)) = (&r.train, r.hour) {
            train_hour.entry((train.clone(), hour)).or_default().push(delay);
        }
        if let (Some(family), Some(hour), Some(weekday)) = (&r.family, r.hour, r.weekday) {
            family_hour_weekday
                .entry((family.clone(), hour, weekday))
                .or_default()
                .push(delay);
        }
        if let (Some(family), Some(hour)) = (&r.family, r.hour) {
            family_hour.entry((family.clone(), hour)).or_default().push(delay);
        }
        if let (Some(station), Some(hour)) = (&r.station, r.hour) {
            station_hour.entry((station.clone(), hour)).or_default().push(delay);
        }
        if let Some(hour) = r.hour {
            national_hour.entry(hour).or_default().push(delay);
        }
    }

    AggregateStore {
        train_hour_weekday: finish(train_hour_weekday),
        train_hour: finish(train_hour),
        family_hour_weekday: finish(family_hour_weekday),
        family_hour: finish(family_hour),
        station_hour: finish(station_hour),
        national_hour: finish(national_hour),
        overall: StatEntry {
            median: median(&all_delays),
            count: all_delays.len(),
        },
    }
}

/// Collapses raw observation buckets into stat entries. Buckets are only
/// ever created on push, so every entry here has count >= 1.
fn finish<K: Eq + Hash>(buckets: HashMap<K, Vec<f64>>) -> HashMap<K, StatEntry> {
    buckets
        .into_iter()
        .map(|(key, delays)| {
            let entry = StatEntry {
                median: median(&delays),
                count: delays.len(),
            };
            (key, entry)
        })
        .collect()
}
