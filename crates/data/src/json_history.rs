//! JSON record loader.
//!
//! Accepts an array of daily records where each numeric field is either a
//! bare number or a one-element array, e.g. `{"date": "2025-01-02",
//! "close": [187.3], "volume": 51000000}`.

use crate::error::Result;
use chrono::NaiveDate;
use rae_core::{DailyBar, PriceHistory, Scalar};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(alias = "Date")]
    date: NaiveDate,
    #[serde(default, alias = "Open")]
    open: Option<Scalar>,
    #[serde(default, alias = "High")]
    high: Option<Scalar>,
    #[serde(default, alias = "Low")]
    low: Option<Scalar>,
    #[serde(default, alias = "Close")]
    close: Option<Scalar>,
    #[serde(default, alias = "Volume")]
    volume: Option<Scalar>,
}

fn coerce(value: Option<&Scalar>) -> Result<Option<f64>> {
    Ok(value.map(Scalar::to_f64).transpose()?)
}

impl JsonRecord {
    fn into_bar(self) -> Result<Option<DailyBar>> {
        let (Some(close), Some(volume)) = (coerce(self.close.as_ref())?, coerce(self.volume.as_ref())?)
        else {
            return Ok(None);
        };

        let bar = DailyBar::new(
            self.date,
            coerce(self.open.as_ref())?.unwrap_or(close),
            coerce(self.high.as_ref())?.unwrap_or(close),
            coerce(self.low.as_ref())?.unwrap_or(close),
            close,
            volume,
        );

        Ok(bar.is_finite().then_some(bar))
    }
}

pub struct JsonHistory;

impl JsonHistory {
    /// Parses a JSON array of daily records.
    ///
    /// Records with a null or missing close or volume are dropped.
    ///
    /// # Errors
    /// Returns `Parse` for malformed JSON, `InvalidScalar` (via `History`)
    /// for a field holding more than one number, and `DuplicateDate` if two
    /// records share a date.
    pub fn parse(json: &str, symbol: &str) -> Result<PriceHistory> {
        let records: Vec<JsonRecord> = serde_json::from_str(json)?;
        let total = records.len();

        let mut bars = Vec::with_capacity(total);
        for record in records {
            if let Some(bar) = record.into_bar()? {
                bars.push(bar);
            }
        }

        if bars.len() < total {
            tracing::warn!(
                "{}: dropped {} incomplete JSON records",
                symbol,
                total - bars.len()
            );
        }

        Ok(PriceHistory::from_unsorted(symbol, bars)?)
    }

    /// Reads and parses a JSON history file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, otherwise see [`JsonHistory::parse`].
    pub fn read_history(path: impl AsRef<Path>, symbol: &str) -> Result<PriceHistory> {
        let json = std::fs::read_to_string(path)?;
        Self::parse(&json, symbol)
    }
}
