//! Volume trend: recent average volume against the preceding window.

use crate::stats::mean;
use rae_core::PriceHistory;

/// Default volume window in trading days.
pub const VOLUME_WINDOW: usize = 30;

/// Percent change of mean volume over the last `window` bars versus the
/// `window` bars immediately before them.
///
/// NaN when fewer than `2 * window` bars exist. A zero previous average is
/// not guarded: positive recent volume yields `+inf`, zero yields NaN.
#[must_use]
pub fn volume_trend(history: &PriceHistory, window: usize) -> f64 {
    let n = history.len();
    if window == 0 || window.checked_mul(2).map_or(true, |span| n < span) {
        return f64::NAN;
    }

    let volumes = history.volumes();
    let recent = mean(&volumes[n - window..]);
    let prev = mean(&volumes[n - 2 * window..n - window]);

    (recent / prev - 1.0) * 100.0
}
