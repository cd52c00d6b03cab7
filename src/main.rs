//! CLI entry point for the GHG facility grouper.
//!
//! Reads a GeoJSON FeatureCollection of per-facility greenhouse-gas emission
//! records, merges records that share a facility name, and writes the grouped
//! collection back out as GeoJSON.

use anyhow::Result;
use clap::Parser;
use ghg_grouper::grouper::aggregate::group_by_facility;
use ghg_grouper::output::write_collection;
use ghg_grouper::parser::parse_collection;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "ghg_grouper")]
#[command(about = "Groups facility-level GHG emission features by facility name", long_about = None)]
struct Cli {
    /// Path to the input GeoJSON FeatureCollection
    #[arg(value_name = "INPUT", default_value = "flight_data.geojson")]
    input: String,

    /// File to write the grouped FeatureCollection to
    #[arg(short, long, default_value = "flight_data_grouped.geojson")]
    output: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/ghg_grouper.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("ghg_grouper.log"));

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

    let raw = std::fs::read_to_string(&cli.input)?;
    let collection = parse_collection(&raw)?;
    info!(
        input = %cli.input,
        feature_count = collection.features.len(),
        "Input collection parsed"
    );

    let grouped = group_by_facility(&collection)?;
    info!(group_count = grouped.features.len(), "Facilities grouped");

    write_collection(&cli.output, &grouped)?;
    info!(output = %cli.output, "Grouped collection written");

    Ok(())
}
