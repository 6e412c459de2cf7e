//! Analyze CLI command.
//!
//! Loads a ticker and its benchmark, computes the signal set, and prints the
//! table, price trend and summary (or the same data as JSON).

use super::{normalize_ticker, yahoo_client};
use anyhow::{Context, Result};
use clap::Args;
use rae_core::{AppConfig, HistoryProvider};
use rae_data::DirectoryHistoryProvider;
use rae_report::{AnalysisReport, ReportFormatter};
use rae_signals::SignalEngine;
use std::path::PathBuf;

/// Arguments for the analyze command.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Ticker to analyze (e.g., "AAPL")
    pub ticker: String,

    /// Benchmark symbol used for beta (defaults to data.benchmark, "SPY")
    #[arg(short, long)]
    pub benchmark: Option<String>,

    /// Read <SYMBOL>.csv / <SYMBOL>.json from this directory instead of Yahoo
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Calendar days of history to load (defaults to data.lookback_days)
    #[arg(long)]
    pub lookback_days: Option<u32>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs the analyze command.
///
/// # Errors
/// Returns an error if either history cannot be loaded.
pub async fn run_analyze(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let ticker = normalize_ticker(&args.ticker)?;
    let benchmark = normalize_ticker(args.benchmark.as_deref().unwrap_or(&config.data.benchmark))?;
    let lookback_days = args.lookback_days.unwrap_or(config.data.lookback_days);

    let provider: Box<dyn HistoryProvider> = match args.data_dir {
        Some(dir) => Box::new(DirectoryHistoryProvider::new(dir)),
        None => Box::new(yahoo_client(&config.data)?),
    };

    let report = build_report(provider.as_ref(), &ticker, &benchmark, lookback_days, config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", ReportFormatter::format(&report));
    }

    Ok(())
}

/// Fetches both histories concurrently and assembles the report.
///
/// # Errors
/// Returns an error if the provider fails for either symbol.
pub async fn build_report(
    provider: &dyn HistoryProvider,
    ticker: &str,
    benchmark: &str,
    lookback_days: u32,
    config: &AppConfig,
) -> Result<AnalysisReport> {
    tracing::info!(
        "Analyzing {} against {} using {} provider ({} days)",
        ticker,
        benchmark,
        provider.name(),
        lookback_days
    );

    let (history, benchmark_history) = tokio::try_join!(
        async {
            provider
                .fetch_history(ticker, lookback_days)
                .await
                .with_context(|| format!("Failed to load history for {ticker}"))
        },
        async {
            provider
                .fetch_history(benchmark, lookback_days)
                .await
                .with_context(|| format!("Failed to load benchmark history for {benchmark}"))
        },
    )?;

    tracing::info!(
        "Loaded {} bars for {} and {} bars for {}",
        history.len(),
        ticker,
        benchmark_history.len(),
        benchmark
    );

    let raw = SignalEngine::new(config.signals.clone()).compute(&history, &benchmark_history);
    let trend: Vec<f64> = history
        .last_n(config.report.sparkline_days)
        .iter()
        .map(|bar| bar.close)
        .collect();

    Ok(AnalysisReport::new(ticker, benchmark, raw, &trend))
}
