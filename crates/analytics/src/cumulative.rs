//! Compounded cumulative returns over a bounded date window.

use core_types::{CumulativePoint, CumulativeSeries, DateWindow, ReturnsSeries};
use rust_decimal::Decimal;

use crate::error::AnalyticsError;

/// Compounds a returns series into cumulative percentage growth over
/// `window`, inclusive at both edges.
///
/// Filtering is by date value, not position: a window edge that falls on a
/// non-trading day silently narrows to the nearest enclosed trading dates.
/// Compounding restarts at the first row inside the window, so history before
/// the window never contributes. Each output row carries the running
/// `Π(1 + r) - 1`, scaled to a percentage; the last row is the total period
/// cumulative return.
pub fn compound_over_window(
    window: &DateWindow,
    returns: &ReturnsSeries,
) -> Result<CumulativeSeries, AnalyticsError> {
    let mut growth = Decimal::ONE;
    let mut points = Vec::new();

    for point in returns.points.iter().filter(|p| window.contains(p.date)) {
        growth *= Decimal::ONE + point.value;
        points.push(CumulativePoint {
            date: point.date,
            cumulative_ret: (growth - Decimal::ONE) * Decimal::from(100),
        });
    }

    if points.is_empty() {
        return Err(AnalyticsError::EmptyWindow {
            start: window.start,
            end: window.end,
        });
    }

    Ok(CumulativeSeries { points })
}
