use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single observation of a raw value series: one entity per trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// One daily fund observation: per-unit quota price and total net equity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    pub date: NaiveDate,
    pub quota: Decimal,
    pub net_equity: Decimal,
}

/// One daily benchmark observation. `returns` is the daily variation as a
/// fraction (the raw percentage already divided by 100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub date: NaiveDate,
    pub annualized_rate: Decimal,
    pub returns: Decimal,
}

/// The canonical fund series, date-indexed and immutable after construction.
///
/// Invariant: records are sorted by date, strictly increasing, no duplicates.
/// The constructor sorts; duplicate dates are rejected rather than merged, so
/// a lookup by date is unambiguous for the lifetime of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundSeries {
    records: Vec<FundRecord>,
}

impl FundSeries {
    pub fn new(mut records: Vec<FundRecord>) -> Result<Self, CoreError> {
        records.sort_by_key(|r| r.date);
        check_strictly_increasing(records.iter().map(|r| r.date))?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[FundRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact lookup by observation date.
    pub fn get(&self, date: NaiveDate) -> Option<&FundRecord> {
        self.records
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|idx| &self.records[idx])
    }

    /// Index of the first record on or after `date`, if any.
    ///
    /// This is the positional anchor used when a calculation needs "the
    /// record preceding the window", which is a sequence question and not a
    /// date-range one.
    pub fn first_on_or_after(&self, date: NaiveDate) -> Option<usize> {
        let idx = self.records.partition_point(|r| r.date < date);
        (idx < self.records.len()).then_some(idx)
    }

    /// The quota price level as a raw value series, ready for returns
    /// derivation.
    pub fn quota_points(&self) -> Vec<TimeSeriesPoint> {
        self.records
            .iter()
            .map(|r| TimeSeriesPoint {
                date: r.date,
                value: r.quota,
            })
            .collect()
    }
}

/// The canonical benchmark series. Same ordering invariant as [`FundSeries`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSeries {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkSeries {
    pub fn new(mut records: Vec<BenchmarkRecord>) -> Result<Self, CoreError> {
        records.sort_by_key(|r| r.date);
        check_strictly_increasing(records.iter().map(|r| r.date))?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The benchmark's daily fractional returns, which arrive pre-computed in
    /// the source data rather than being derived from a price level.
    pub fn returns_series(&self) -> ReturnsSeries {
        ReturnsSeries {
            points: self
                .records
                .iter()
                .map(|r| ReturnPoint {
                    date: r.date,
                    value: r.returns,
                })
                .collect(),
        }
    }
}

/// One derived daily simple return, as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// A derived sequence of daily simple returns, in ascending date order.
///
/// Derived from a raw value series, so it is always one row shorter than its
/// source: the first observation has no predecessor and is dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReturnsSeries {
    pub points: Vec<ReturnPoint>,
}

impl ReturnsSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One row of a compounded cumulative-return series. `cumulative_ret` is a
/// percentage (already scaled by 100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub cumulative_ret: Decimal,
}

/// Compounded growth over a window, row per trading date, ascending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CumulativeSeries {
    pub points: Vec<CumulativePoint>,
}

impl CumulativeSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The last row's `cumulative_ret`: the total period cumulative return.
    pub fn total(&self) -> Option<Decimal> {
        self.points.last().map(|p| p.cumulative_ret)
    }
}

fn check_strictly_increasing(
    dates: impl Iterator<Item = NaiveDate>,
) -> Result<(), CoreError> {
    let mut previous: Option<NaiveDate> = None;
    for date in dates {
        if previous == Some(date) {
            return Err(CoreError::DuplicateDate(date));
        }
        previous = Some(date);
    }
    Ok(())
}
