//! Fetch-data CLI command.
//!
//! Downloads daily bars from Yahoo Finance and stores them as CSV, so later
//! runs can use `analyze --data-dir` without network access.

use super::{normalize_ticker, yahoo_client};
use anyhow::Result;
use clap::Args;
use rae_core::AppConfig;
use rae_data::CsvStorage;
use std::path::PathBuf;

/// Arguments for the fetch-data command.
#[derive(Args, Debug, Clone)]
pub struct FetchDataArgs {
    /// Symbol to fetch (e.g., "AAPL", "SPY")
    pub symbol: String,

    /// Output CSV file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Calendar days of history to fetch (defaults to data.lookback_days)
    #[arg(long)]
    pub lookback_days: Option<u32>,
}

/// Runs the fetch-data command.
///
/// # Errors
/// Returns an error if the download fails or the file cannot be written.
pub async fn run_fetch_data(args: FetchDataArgs, config: &AppConfig) -> Result<()> {
    let symbol = normalize_ticker(&args.symbol)?;
    let lookback_days = args.lookback_days.unwrap_or(config.data.lookback_days);

    tracing::info!("Fetching {} days of daily bars for {}", lookback_days, symbol);

    let client = yahoo_client(&config.data)?;
    let history = client.fetch_recent(&symbol, lookback_days).await?;

    CsvStorage::write_history(&args.output, &history)?;

    tracing::info!(
        "✅ Wrote {} bars for {} to {}",
        history.len(),
        symbol,
        args.output.display()
    );
    if let Some(dir) = args.output.parent() {
        tracing::info!(
            "You can now run: rae analyze {} --data-dir {}",
            symbol,
            dir.display()
        );
    }

    Ok(())
}
