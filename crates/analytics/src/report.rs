use std::fmt;

use chrono::NaiveDate;
use core_types::{CumulativeSeries, DateWindow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The window's extreme daily returns with their dates of occurrence.
///
/// Values are percentages. Ties on the return value resolve to the earliest
/// date in the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxReturns {
    pub min_value: Decimal,
    pub min_date: NaiveDate,
    pub max_value: Decimal,
    pub max_date: NaiveDate,
}

/// Every period metric for one window, evaluated in a single call.
///
/// This struct is the data transfer object handed to presentation layers;
/// stored values are unrounded, and the reference display precision lives in
/// the `Display` impl only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub window: DateWindow,
    pub min_max: MinMaxReturns,
    /// Total fund cumulative return over the window, percent.
    pub cumulative_return_pct: Decimal,
    /// Per-date cumulative series backing `cumulative_return_pct`.
    pub cumulative_table: CumulativeSeries,
    /// Fund performance as a percentage of the benchmark's, same window.
    pub relative_return_pct: Decimal,
    /// Absolute net-equity change, anchored to the record preceding the
    /// window start.
    pub net_equity_growth: Decimal,
}

/// Formats a percentage metric at the reference display precision.
pub fn format_pct(value: Decimal) -> String {
    format!("{value:.4}%")
}

/// Formats a currency-denominated metric at the reference display precision.
pub fn format_equity(value: Decimal) -> String {
    format!("{value:.2}")
}

impl fmt::Display for PeriodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Period {} to {}", self.window.start, self.window.end)?;
        writeln!(
            f,
            "  Minimum daily return:  {} on {}",
            format_pct(self.min_max.min_value),
            self.min_max.min_date
        )?;
        writeln!(
            f,
            "  Maximum daily return:  {} on {}",
            format_pct(self.min_max.max_value),
            self.min_max.max_date
        )?;
        writeln!(
            f,
            "  Cumulative return:     {}",
            format_pct(self.cumulative_return_pct)
        )?;
        writeln!(
            f,
            "  Return vs benchmark:   {}",
            format_pct(self.relative_return_pct)
        )?;
        write!(
            f,
            "  Net equity growth:     {}",
            format_equity(self.net_equity_growth)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formatting_matches_reference_precision() {
        assert_eq!(format_pct(dec!(2.5)), "2.5000%");
        assert_eq!(format_pct(dec!(-0.12345)), "-0.1234%");
        assert_eq!(format_equity(dec!(30)), "30.00");
    }
}
