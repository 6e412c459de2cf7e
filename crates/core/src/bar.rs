//! Daily OHLCV bars and validated price histories.

use crate::error::{CoreError, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One trading day of OHLCV data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl DailyBar {
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Creates a bar where only the close and volume are known.
    #[must_use]
    pub const fn from_close(date: NaiveDate, close: f64, volume: f64) -> Self {
        Self::new(date, close, close, close, close, volume)
    }

    /// Returns true if every numeric field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Ordered daily history for a single symbol.
///
/// Bars are strictly ascending by date with no duplicates. An empty history
/// is representable; providers refuse to hand one out, and every signal
/// computed from it is NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistory {
    symbol: String,
    bars: Vec<DailyBar>,
}

impl PriceHistory {
    /// Creates a history from bars already in ascending date order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateDate` if two bars share a date and
    /// `CoreError::UnsortedDates` if the bars are not ascending.
    pub fn new(symbol: impl Into<String>, bars: Vec<DailyBar>) -> Result<Self> {
        let symbol = symbol.into();

        for pair in bars.windows(2) {
            match pair[0].date.cmp(&pair[1].date) {
                Ordering::Less => {}
                Ordering::Equal => {
                    return Err(CoreError::DuplicateDate {
                        symbol,
                        date: pair[1].date,
                    })
                }
                Ordering::Greater => {
                    return Err(CoreError::UnsortedDates {
                        symbol,
                        previous: pair[0].date,
                        next: pair[1].date,
                    })
                }
            }
        }

        Ok(Self { symbol, bars })
    }

    /// Sorts bars by date, then validates them.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateDate` if two bars share a date.
    pub fn from_unsorted(symbol: impl Into<String>, mut bars: Vec<DailyBar>) -> Result<Self> {
        bars.sort_by_key(|bar| bar.date);
        Self::new(symbol, bars)
    }

    /// Builds a history from parallel close and volume series, one bar per
    /// calendar day starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::LengthMismatch` if the series differ in length.
    pub fn from_series(
        symbol: impl Into<String>,
        start: NaiveDate,
        closes: &[f64],
        volumes: &[f64],
    ) -> Result<Self> {
        if closes.len() != volumes.len() {
            return Err(CoreError::length_mismatch(
                "volumes",
                closes.len(),
                volumes.len(),
            ));
        }

        let bars = closes
            .iter()
            .zip(volumes)
            .zip(start.iter_days())
            .map(|((&close, &volume), date)| DailyBar::from_close(date, close, volume))
            .collect();

        Self::new(symbol, bars)
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices in chronological order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    /// Volumes in chronological order.
    #[must_use]
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.volume).collect()
    }

    /// The most recent `n` bars (all of them if fewer are available).
    #[must_use]
    pub fn last_n(&self, n: usize) -> &[DailyBar] {
        &self.bars[self.bars.len().saturating_sub(n)..]
    }

    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|bar| bar.date)
    }

    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|bar| bar.date)
    }

    /// Keeps only bars within `days` calendar days of the most recent bar.
    #[must_use]
    pub fn trailing_days(&self, days: u32) -> Self {
        let Some(last) = self.last_date() else {
            return self.clone();
        };
        let Some(cutoff) = last.checked_sub_days(Days::new(u64::from(days))) else {
            return self.clone();
        };

        Self {
            symbol: self.symbol.clone(),
            bars: self
                .bars
                .iter()
                .filter(|bar| bar.date > cutoff)
                .copied()
                .collect(),
        }
    }
}
