use crate::error::{ProviderError, Result};
use anyhow::Context;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim, Writer};
use rae_core::{CoreError, DailyBar, PriceHistory};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const HEADER: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];

/// Accepted spellings for each required column.
const DATE_COLUMNS: [&str; 3] = ["date", "Date", "timestamp"];
const CLOSE_COLUMNS: [&str; 2] = ["close", "Close"];
const VOLUME_COLUMNS: [&str; 2] = ["volume", "Volume"];

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(alias = "Date", alias = "timestamp")]
    date: String,
    #[serde(default, alias = "Open")]
    open: Option<f64>,
    #[serde(default, alias = "High")]
    high: Option<f64>,
    #[serde(default, alias = "Low")]
    low: Option<f64>,
    #[serde(alias = "Close")]
    close: Option<f64>,
    #[serde(alias = "Volume")]
    volume: Option<f64>,
}

impl CsvRow {
    /// Converts to a bar, or `None` if close or volume is missing or non-finite.
    /// Missing open/high/low fall back to the close.
    fn into_bar(self, line: u64) -> Result<Option<DailyBar>> {
        let date = parse_date(&self.date)
            .ok_or_else(|| ProviderError::Parse(format!("line {line}: invalid date '{}'", self.date)))?;

        let (Some(close), Some(volume)) = (self.close, self.volume) else {
            return Ok(None);
        };

        let bar = DailyBar::new(
            date,
            self.open.unwrap_or(close),
            self.high.unwrap_or(close),
            self.low.unwrap_or(close),
            close,
            volume,
        );

        Ok(bar.is_finite().then_some(bar))
    }
}

/// Parses `YYYY-MM-DD`, ignoring any time-of-day suffix.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

pub struct CsvStorage;

impl CsvStorage {
    /// Writes a history to CSV.
    ///
    /// Format: date,open,high,low,close,volume
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_history(path: impl AsRef<Path>, history: &PriceHistory) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        let mut writer = Writer::from_writer(file);

        writer.write_record(HEADER)?;

        for bar in history.bars() {
            writer.write_record(&[
                bar.date.format("%Y-%m-%d").to_string(),
                bar.open.to_string(),
                bar.high.to_string(),
                bar.low.to_string(),
                bar.close.to_string(),
                bar.volume.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Reads a history from a CSV file.
    ///
    /// # Errors
    /// See [`CsvStorage::read_from`].
    pub fn read_history(path: impl AsRef<Path>, symbol: &str) -> Result<PriceHistory> {
        let file = File::open(path.as_ref())?;
        Self::read_from(file, symbol)
    }

    /// Reads a history from any CSV source.
    ///
    /// Rows are sorted by date. Rows with a blank or non-finite close or
    /// volume are dropped.
    ///
    /// # Errors
    /// Returns `MissingField` if the date, close, or volume column is absent,
    /// `Parse` for an unreadable date or number, and `DuplicateDate` if two
    /// rows share a date.
    pub fn read_from<R: Read>(reader: R, symbol: &str) -> Result<PriceHistory> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = reader.headers()?.clone();
        for (field, accepted) in [
            ("date", &DATE_COLUMNS[..]),
            ("close", &CLOSE_COLUMNS[..]),
            ("volume", &VOLUME_COLUMNS[..]),
        ] {
            if !headers.iter().any(|h| accepted.contains(&h)) {
                return Err(CoreError::missing_field(field).into());
            }
        }

        let mut bars = Vec::new();
        let mut dropped = 0usize;

        for result in reader.deserialize::<CsvRow>() {
            let row = result.map_err(|e| ProviderError::Parse(e.to_string()))?;
            let line = bars.len() as u64 + dropped as u64 + 2;
            match row.into_bar(line)? {
                Some(bar) => bars.push(bar),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            tracing::warn!("{}: dropped {} incomplete CSV rows", symbol, dropped);
        }
        tracing::debug!("{}: loaded {} bars from CSV", symbol, bars.len());

        Ok(PriceHistory::from_unsorted(symbol, bars)?)
    }
}
