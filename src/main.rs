//! CLI entry point for the train delay rater.
//!
//! Provides subcommands for running a single delay prediction against the
//! historical dataset and for inspecting the aggregate tables built from it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use train_delay_rater::{
    estimator::aggregate,
    fetch::{BasicClient, CacheBust, fetch_text},
    parser::parse_rows,
    prediction::{DEFAULT_DATA_URL, PredictionRequest, predict, predict_from_records},
};

#[derive(Parser)]
#[command(name = "train_delay_rater")]
#[command(about = "Estimate train delays from historical trip data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the likely delay for one trip
    Predict {
        /// Train number, e.g. "ICE 845"
        #[arg(long)]
        train: String,

        /// Trip date, YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Local departure time, HH:MM
        #[arg(long)]
        time: String,

        /// Start station (optional)
        #[arg(long)]
        from: Option<String>,

        /// End station (optional, not used by the estimator)
        #[arg(long)]
        to: Option<String>,

        /// Historical data source: file path or URL
        #[arg(long, value_name = "FILE_OR_URL")]
        data: Option<String>,
    },
    /// Build the aggregate tables and print a JSON summary
    Aggregates {
        /// Historical data source: file path or URL
        #[arg(long, value_name = "FILE_OR_URL")]
        data: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/train_delay_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("train_delay_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            train,
            date,
            time,
            from,
            to,
            data,
        } => {
            let source = data_source(data);
            let request = PredictionRequest {
                start_station: from,
                end_station: to,
                date,
                time,
                train_number: train,
            };

            let result = if source.starts_with("http") {
                let client = CacheBust::new(BasicClient::new());
                predict(&client, &source, &request).await?
            } else {
                let query = request.to_query()?;
                let text = std::fs::read_to_string(&source)?;
                let records = parse_rows(&text)?;
                debug!(rows = records.len(), "historical rows loaded from file");
                predict_from_records(&records, &query)
            };

            println!("{}", result.headline);
            println!("{}", result.details_line);
            if let Some(note) = &result.fallback_note {
                println!("{note}");
            }
        }
        Commands::Aggregates { data } => {
            let source = data_source(data);
            let text = load_source(&source).await?;
            let records = parse_rows(&text)?;
            let store = aggregate::build(&records);

            info!(rows = records.len(), "aggregate tables built");

            let summary = json!({
                "rows": records.len(),
                "buckets": {
                    "train_hour_weekday": store.train_hour_weekday.len(),
                    "train_hour": store.train_hour.len(),
                    "family_hour_weekday": store.family_hour_weekday.len(),
                    "family_hour": store.family_hour.len(),
                    "station_hour": store.station_hour.len(),
                    "national_hour": store.national_hour.len(),
                },
                "overall": store.overall,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// Resolves the data source: CLI flag, then `DELAY_DATA_URL`, then the
/// published sheet export.
fn data_source(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("DELAY_DATA_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}

/// Loads dataset text from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %source))]
async fn load_source(source: &str) -> Result<String> {
    let text = if source.starts_with("http") {
        let client = CacheBust::new(BasicClient::new());
        fetch_text(&client, source).await?
    } else {
        std::fs::read_to_string(source)?
    };
    Ok(text)
}
