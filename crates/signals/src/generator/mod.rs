//! Signal computations over daily price history.
//!
//! Each computation is independent, pure, and returns NaN when the history
//! is too short to support it.

mod beta;
mod returns;
mod sharpe;
mod volatility;
mod volume_trend;

pub use beta::{beta, BETA_MIN_RETURNS};
pub use returns::{daily_returns, period_return, ONE_MONTH_DAYS, SIX_MONTH_DAYS, THREE_MONTH_DAYS};
pub use sharpe::{sharpe_ratio, SHARPE_WINDOW};
pub use volatility::{rolling_volatility, VOLATILITY_WINDOW};
pub use volume_trend::{volume_trend, VOLUME_WINDOW};
