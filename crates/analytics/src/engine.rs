use core_types::{BenchmarkSeries, CumulativeSeries, DateWindow, FundSeries};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::cumulative::compound_over_window;
use crate::error::AnalyticsError;
use crate::normalizer::{self, ColumnMapping, RawRecord};
use crate::report::{MinMaxReturns, PeriodReport};
use crate::returns::simple_returns;

/// The period analytics engine: one immutable dataset pairing, many window
/// queries.
///
/// Normalization happens once, at construction. Every query operation is a
/// pure read over the stored series plus transient derived series allocated
/// and discarded within the call, so a single instance can serve concurrent
/// read-only queries without coordination.
///
/// Callers must check [`PeriodAnalytics::validate_window`] before invoking
/// any other operation; the query operations assume a well-formed window.
#[derive(Debug, Clone)]
pub struct PeriodAnalytics {
    fund: FundSeries,
    benchmark: BenchmarkSeries,
}

impl PeriodAnalytics {
    /// Normalizes raw fund and benchmark rows with the default column
    /// mapping and builds the engine.
    pub fn new(
        fund_rows: &[RawRecord],
        benchmark_rows: &[RawRecord],
    ) -> Result<Self, AnalyticsError> {
        Self::with_mapping(fund_rows, benchmark_rows, &ColumnMapping::default())
    }

    /// Same as [`PeriodAnalytics::new`] but with a caller-supplied column
    /// mapping, for feeds that name their columns differently.
    pub fn with_mapping(
        fund_rows: &[RawRecord],
        benchmark_rows: &[RawRecord],
        mapping: &ColumnMapping,
    ) -> Result<Self, AnalyticsError> {
        let fund = normalizer::normalize_fund(fund_rows, mapping)?;
        let benchmark = normalizer::normalize_benchmark(benchmark_rows, mapping)?;
        Ok(Self::from_series(fund, benchmark))
    }

    /// Builds the engine from already-normalized series.
    pub fn from_series(fund: FundSeries, benchmark: BenchmarkSeries) -> Self {
        info!(
            fund_rows = fund.len(),
            benchmark_rows = benchmark.len(),
            "period analytics engine constructed"
        );
        Self { fund, benchmark }
    }

    /// Returns `true` when the window is **invalid** (`start >= end`).
    ///
    /// Precondition check, not an error raise: the caller decides the
    /// user-facing message and must not run the other operations on a window
    /// this reports as invalid.
    pub fn validate_window(&self, window: &DateWindow) -> bool {
        window.is_invalid()
    }

    /// The minimum and maximum daily fund return inside the window, as
    /// percentages, each with its date of occurrence.
    ///
    /// Ties on the return value resolve to the first matching date in
    /// ascending order.
    pub fn min_max_returns(&self, window: &DateWindow) -> Result<MinMaxReturns, AnalyticsError> {
        let returns = simple_returns(&self.fund.quota_points())?;
        let mut in_window = returns.points.iter().filter(|p| window.contains(p.date));

        let first = in_window.next().ok_or(AnalyticsError::EmptyWindow {
            start: window.start,
            end: window.end,
        })?;

        let mut min = first;
        let mut max = first;
        for point in in_window {
            if point.value < min.value {
                min = point;
            }
            if point.value > max.value {
                max = point;
            }
        }

        debug!(%window.start, %window.end, %min.date, %max.date, "located extreme returns");
        Ok(MinMaxReturns {
            min_value: min.value * Decimal::from(100),
            min_date: min.date,
            max_value: max.value * Decimal::from(100),
            max_date: max.date,
        })
    }

    /// Total fund cumulative return over the window, percent.
    pub fn cumulative_return_value(&self, window: &DateWindow) -> Result<Decimal, AnalyticsError> {
        let table = self.cumulative_return_table(window)?;
        table.total().ok_or(AnalyticsError::EmptyWindow {
            start: window.start,
            end: window.end,
        })
    }

    /// The full per-date fund cumulative series over the window, for display
    /// or export.
    pub fn cumulative_return_table(
        &self,
        window: &DateWindow,
    ) -> Result<CumulativeSeries, AnalyticsError> {
        let returns = simple_returns(&self.fund.quota_points())?;
        let table = compound_over_window(window, &returns)?;
        debug!(%window.start, %window.end, rows = table.len(), "compounded fund returns");
        Ok(table)
    }

    /// The fund's cumulative return as a percentage of the benchmark's over
    /// the identical window.
    pub fn relative_return(&self, window: &DateWindow) -> Result<Decimal, AnalyticsError> {
        let fund = self.cumulative_return_value(window)?;

        let benchmark_table = compound_over_window(window, &self.benchmark.returns_series())?;
        let benchmark = benchmark_table.total().ok_or(AnalyticsError::EmptyWindow {
            start: window.start,
            end: window.end,
        })?;

        if benchmark == Decimal::ZERO {
            return Err(AnalyticsError::DivisionByZero("relative_return".to_string()));
        }

        Ok(fund / benchmark * Decimal::from(100))
    }

    /// Absolute net-equity change over the window.
    ///
    /// The opening balance is the equity at the close of the prior period, so
    /// the anchor is the fund record immediately preceding the first record
    /// inside the window, located by sequence position. The closing balance
    /// is the record exactly at `window.end`. Unlike cumulative aggregation,
    /// neither endpoint silently narrows: a missing anchor or end record is a
    /// `WindowOutOfRange` error.
    pub fn net_equity_growth(&self, window: &DateWindow) -> Result<Decimal, AnalyticsError> {
        let first_inside = self.fund.first_on_or_after(window.start).ok_or_else(|| {
            AnalyticsError::WindowOutOfRange(format!(
                "window start {} is after the last fund record",
                window.start
            ))
        })?;

        if first_inside == 0 {
            return Err(AnalyticsError::WindowOutOfRange(format!(
                "no fund record precedes the window start {}",
                window.start
            )));
        }
        let anchor = self.fund.records()[first_inside - 1];

        let end = self.fund.get(window.end).ok_or_else(|| {
            AnalyticsError::WindowOutOfRange(format!(
                "window end {} is not a fund trading date",
                window.end
            ))
        })?;

        debug!(%anchor.date, %end.date, "resolved net-equity anchor and close");
        Ok(end.net_equity - anchor.net_equity)
    }

    /// Evaluates every period metric for one window.
    ///
    /// Any error from the individual metrics propagates unmodified; the
    /// report never carries partial or defaulted values.
    pub fn report(&self, window: &DateWindow) -> Result<PeriodReport, AnalyticsError> {
        Ok(PeriodReport {
            window: *window,
            min_max: self.min_max_returns(window)?,
            cumulative_return_pct: self.cumulative_return_value(window)?,
            cumulative_table: self.cumulative_return_table(window)?,
            relative_return_pct: self.relative_return(window)?,
            net_equity_growth: self.net_equity_growth(window)?,
        })
    }
}
