//! Price history providers for the research automation engine.
//!
//! This crate provides:
//! - CSV storage for daily OHLCV histories
//! - A JSON record loader tolerant of single-element array fields
//! - A directory-backed provider serving `<SYMBOL>.csv` files
//! - A rate-limited Yahoo Finance chart client

pub mod csv_storage;
pub mod error;
pub mod json_history;
pub mod provider;
pub mod yahoo;

pub use csv_storage::CsvStorage;
pub use error::{ProviderError, Result};
pub use json_history::JsonHistory;
pub use provider::{load_history_file, DirectoryHistoryProvider};
pub use yahoo::{YahooClient, YAHOO_CHART_URL};
