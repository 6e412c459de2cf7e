//! CLI commands for the research automation engine.

pub mod analyze;
pub mod fetch_data;
pub mod signals;

pub use analyze::{run_analyze, AnalyzeArgs};
pub use fetch_data::{run_fetch_data, FetchDataArgs};
pub use signals::{run_signals, SignalsArgs};

use anyhow::Context;
use rae_core::DataConfig;
use rae_data::YahooClient;
use std::num::NonZeroU32;

/// Builds a Yahoo client from the data section of the config.
///
/// # Errors
/// Returns an error if `requests_per_minute` is zero.
pub fn yahoo_client(config: &DataConfig) -> anyhow::Result<YahooClient> {
    let rate = NonZeroU32::new(config.requests_per_minute)
        .context("data.requests_per_minute must be greater than zero")?;

    Ok(YahooClient::with_rate_limit(rate).with_base_url(&config.yahoo_base_url))
}

/// Upper-cases a ticker and rejects blank input.
///
/// # Errors
/// Returns an error if the ticker is empty after trimming.
pub fn normalize_ticker(raw: &str) -> anyhow::Result<String> {
    let ticker = raw.trim().to_uppercase();
    if ticker.is_empty() {
        anyhow::bail!("Ticker must not be empty");
    }
    Ok(ticker)
}
