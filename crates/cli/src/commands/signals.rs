//! Signals CLI command.
//!
//! Computes the raw signal set from two local history files and prints it
//! as JSON, with NaN values written as `null`.

use anyhow::{Context, Result};
use clap::Args;
use rae_core::{AppConfig, PriceHistory};
use rae_data::load_history_file;
use rae_report::normalize_signals;
use rae_signals::{SignalEngine, SignalSet};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Arguments for the signals command.
#[derive(Args, Debug, Clone)]
pub struct SignalsArgs {
    /// History file for the stock (.csv or .json)
    #[arg(short, long)]
    pub data: PathBuf,

    /// History file for the benchmark (.csv or .json)
    #[arg(short, long)]
    pub benchmark_data: PathBuf,

    /// Include min-max normalized values alongside the raw ones
    #[arg(long)]
    pub normalized: bool,
}

#[derive(Debug, Serialize)]
struct SignalsOutput {
    symbol: String,
    benchmark: String,
    raw: SignalSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<SignalSet>,
}

/// Runs the signals command.
///
/// # Errors
/// Returns an error if either file cannot be read.
pub async fn run_signals(args: SignalsArgs, config: &AppConfig) -> Result<()> {
    let history = load(&args.data).await?;
    let benchmark = load(&args.benchmark_data).await?;

    let raw = SignalEngine::new(config.signals.clone()).compute(&history, &benchmark);
    let output = SignalsOutput {
        symbol: history.symbol().to_string(),
        benchmark: benchmark.symbol().to_string(),
        raw,
        normalized: args.normalized.then(|| normalize_signals(&raw)),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Uses the file stem, upper-cased, as the symbol.
fn symbol_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

async fn load(path: &Path) -> Result<PriceHistory> {
    let symbol = symbol_from_path(path);
    let owned = path.to_path_buf();

    let history = tokio::task::spawn_blocking(move || load_history_file(&owned, &symbol))
        .await?
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if history.is_empty() {
        anyhow::bail!("{} contains no usable bars", path.display());
    }

    tracing::debug!("Loaded {} bars from {}", history.len(), path.display());
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_from_file_stem() {
        assert_eq!(symbol_from_path(Path::new("data/aapl.csv")), "AAPL");
        assert_eq!(symbol_from_path(Path::new("SPY.json")), "SPY");
    }

    #[tokio::test]
    async fn load_rejects_empty_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("EMPTY.csv");
        std::fs::write(&path, "date,open,high,low,close,volume\n").unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(err.to_string().contains("no usable bars"));
    }

    #[tokio::test]
    async fn load_reads_csv() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("msft.csv");
        std::fs::write(
            &path,
            "date,open,high,low,close,volume\n2025-01-02,1,1,1,10,100\n2025-01-03,1,1,1,11,120\n",
        )
        .unwrap();

        let history = load(&path).await.unwrap();
        assert_eq!(history.symbol(), "MSFT");
        assert_eq!(history.closes(), vec![10.0, 11.0]);
    }
}
