//! File-backed history provider.

use crate::csv_storage::CsvStorage;
use crate::error::{ProviderError, Result};
use crate::json_history::JsonHistory;
use async_trait::async_trait;
use rae_core::{HistoryProvider, PriceHistory};
use std::path::{Path, PathBuf};

/// Loads a history file, choosing the format from its extension.
///
/// `.json` files are read as JSON records; anything else as CSV.
///
/// # Errors
/// Propagates the loader's error.
pub fn load_history_file(path: impl AsRef<Path>, symbol: &str) -> Result<PriceHistory> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        JsonHistory::read_history(path, symbol)
    } else {
        CsvStorage::read_history(path, symbol)
    }
}

/// Serves histories from `<dir>/<SYMBOL>.csv` (or `.json`) files.
#[derive(Debug, Clone)]
pub struct DirectoryHistoryProvider {
    dir: PathBuf,
}

impl DirectoryHistoryProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Finds the file for `symbol`, preferring CSV over JSON.
    fn path_for(&self, symbol: &str) -> Option<PathBuf> {
        ["csv", "json"]
            .iter()
            .map(|ext| self.dir.join(format!("{symbol}.{ext}")))
            .find(|path| path.is_file())
    }

    /// Loads `symbol` trimmed to the trailing `lookback_days`.
    ///
    /// # Errors
    /// Returns `NoData` if no file exists or nothing survives trimming.
    pub async fn load(&self, symbol: &str, lookback_days: u32) -> Result<PriceHistory> {
        let path = self
            .path_for(symbol)
            .ok_or_else(|| ProviderError::no_data(symbol))?;

        tracing::debug!("Loading {} from {}", symbol, path.display());

        let owned_symbol = symbol.to_string();
        let history =
            tokio::task::spawn_blocking(move || load_history_file(&path, &owned_symbol))
                .await
                .map_err(|e| ProviderError::Io(std::io::Error::other(e)))??;

        let history = history.trailing_days(lookback_days);
        if history.is_empty() {
            return Err(ProviderError::no_data(symbol));
        }

        Ok(history)
    }
}

#[async_trait]
impl HistoryProvider for DirectoryHistoryProvider {
    async fn fetch_history(&self, symbol: &str, lookback_days: u32) -> anyhow::Result<PriceHistory> {
        Ok(self.load(symbol, lookback_days).await?)
    }

    fn name(&self) -> &str {
        "directory"
    }
}
