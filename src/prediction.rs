//! End-to-end prediction: validate the request, fetch and parse the
//! historical dataset, aggregate, resolve, and render.
//!
//! Each prediction fetches and aggregates from scratch; nothing is cached
//! across requests.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use crate::estimator::aggregate;
use crate::estimator::confidence::confidence;
use crate::estimator::resolve::resolve;
use crate::estimator::types::Query;
use crate::fetch::{HttpClient, fetch_text};
use crate::output::{Prediction, describe, details_line, fallback_note, headline};
use crate::parser::parse_rows;
use crate::records::{TripRecord, normalize_train, train_family, weekday_from_date};

/// Published sheet export used when no other source is given.
pub const DEFAULT_DATA_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vS-xYvfI3vFOxZ4yjVwAEQ1T68bcuzQkSEfgMWVSPcOFJt48_U24pKP9C_e8odreBYdXjM3M8D1dgMP/pub?output=csv";

/// One prediction request as submitted by the caller.
///
/// `end_station` is accepted for contract compatibility but not used by the
/// estimator. Date and time are naive local wall-clock values; no timezone
/// conversion happens anywhere, so the derived hour and weekday are exactly
/// what the caller typed.
#[derive(Debug, Clone, Default)]
pub struct PredictionRequest {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub date: String,
    pub time: String,
    pub train_number: String,
}

impl PredictionRequest {
    /// Validates the request and derives the query fields.
    ///
    /// # Errors
    ///
    /// Returns a user-facing error naming the missing or unparseable field.
    /// Validation happens before any data is fetched.
    pub fn to_query(&self) -> Result<Query> {
        if self.date.trim().is_empty() || self.time.trim().is_empty() {
            bail!("Please enter date and time.");
        }
        if self.train_number.trim().is_empty() {
            bail!("Please enter a train number.");
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid date: {}", self.date))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .with_context(|| format!("Invalid time: {}", self.time))?;

        let train = normalize_train(&self.train_number);
        let family = train_family(&train);
        let station = self
            .start_station
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Query {
            train: Some(train),
            family,
            hour: Some(time.hour() as u8),
            weekday: Some(weekday_from_date(date)),
            station,
        })
    }
}

/// Runs the pure half of a prediction over already-loaded records.
pub fn predict_from_records(records: &[TripRecord], query: &Query) -> Prediction {
    let store = aggregate::build(records);
    let pick = resolve(&store, query);

    let pattern = describe(pick.matched, query);
    let label = confidence(pick.matched, pick.count.unwrap_or(0));

    debug!(
        matched = pick.matched.label(),
        count = pick.count,
        median = pick.median,
        "query resolved"
    );

    Prediction {
        headline: headline(pick.median),
        details_line: details_line(label, pick.count, &pattern),
        fallback_note: fallback_note(pick.matched),
    }
}

/// Full prediction pass: validate, fetch the dataset, parse, estimate.
///
/// # Errors
///
/// Fails on invalid request fields or when the dataset cannot be fetched.
/// A fetched-but-empty dataset is not an error; it renders the no-data
/// headline.
#[tracing::instrument(skip(client, request), fields(train = %request.train_number))]
pub async fn predict<C: HttpClient>(
    client: &C,
    data_url: &str,
    request: &PredictionRequest,
) -> Result<Prediction> {
    let query = request.to_query()?;

    let text = fetch_text(client, data_url)
        .await
        .context("Historical data fetch failed")?;
    let records = parse_rows(&text)?;
    debug!(rows = records.len(), "historical rows loaded");

    Ok(predict_from_records(&records, &query))
}
