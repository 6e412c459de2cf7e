//! Presentation layer for computed signals: min-max normalization, a
//! signal table, a price sparkline, and a short prose summary.

pub mod normalize;
pub mod report;
pub mod sparkline;
pub mod summary;
pub mod table;

pub use normalize::normalize_signals;
pub use report::{AnalysisReport, ReportFormatter};
pub use sparkline::{sparkline, SPARK_BARS};
pub use summary::summarize_signals;
pub use table::format_table;
