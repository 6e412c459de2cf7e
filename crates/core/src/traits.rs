use crate::bar::PriceHistory;
use anyhow::Result;
use async_trait::async_trait;

/// Source of daily price history for a symbol.
///
/// Implementations return an error instead of an empty history, so the
/// signal engine never sees a fetch that silently came back blank.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    async fn fetch_history(&self, symbol: &str, lookback_days: u32) -> Result<PriceHistory>;
    fn name(&self) -> &str;
}
