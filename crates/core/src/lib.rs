//! Core types for the research automation engine.
//!
//! This crate provides:
//! - Validated daily price histories
//! - Scalar coercion for loosely shaped numeric inputs
//! - Layered configuration loading
//! - The `HistoryProvider` trait implemented by data sources

pub mod bar;
pub mod config;
pub mod config_loader;
pub mod error;
pub mod scalar;
pub mod traits;

pub use bar::{DailyBar, PriceHistory};
pub use config::{AppConfig, DataConfig, ReportConfig, SignalConfig};
pub use config_loader::ConfigLoader;
pub use error::CoreError;
pub use scalar::Scalar;
pub use traits::HistoryProvider;
