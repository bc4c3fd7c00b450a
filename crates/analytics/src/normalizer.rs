//! Normalization of raw tabular rows into the canonical series.
//!
//! The file/reader collaborator hands this module rows keyed by the source's
//! own (localized) column names. Normalization maps those names to the
//! canonical fields, strips percentage formatting, rescales the benchmark's
//! daily variation to a fraction and parses dates, producing the immutable
//! series the engine holds for its lifetime.

use std::collections::HashMap;

use chrono::NaiveDate;
use core_types::{BenchmarkRecord, BenchmarkSeries, FundRecord, FundSeries};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::AnalyticsError;

/// One raw row as delivered by the tabular reader: source column name → cell
/// text, still carrying whatever formatting the source uses.
pub type RawRecord = HashMap<String, String>;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maps source column names to the canonical fields.
///
/// The defaults match the reference data feed, which names the fund columns
/// in Portuguese (`data`/`cota`/`pl`) and the benchmark columns with the
/// central bank's labels (`taxa anualizada`/`variação diária`). A deployment
/// with a different feed deserializes its own mapping from configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub fund_date: String,
    pub fund_quota: String,
    pub fund_net_equity: String,
    pub benchmark_date: String,
    pub benchmark_annualized_rate: String,
    pub benchmark_daily_variation: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            fund_date: "data".to_string(),
            fund_quota: "cota".to_string(),
            fund_net_equity: "pl".to_string(),
            benchmark_date: "date".to_string(),
            benchmark_annualized_rate: "taxa anualizada".to_string(),
            benchmark_daily_variation: "variação diária".to_string(),
        }
    }
}

/// Builds the canonical [`FundSeries`] from raw fund rows.
pub fn normalize_fund(
    rows: &[RawRecord],
    mapping: &ColumnMapping,
) -> Result<FundSeries, AnalyticsError> {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let date = parse_date(field(row, &mapping.fund_date)?)?;
        let quota = parse_numeric(field(row, &mapping.fund_quota)?, &mapping.fund_quota)?;
        let net_equity = parse_numeric(
            field(row, &mapping.fund_net_equity)?,
            &mapping.fund_net_equity,
        )?;

        // A non-positive quota would make the derived returns meaningless
        // (and a zero quota would divide by zero downstream).
        if quota <= Decimal::ZERO {
            return Err(AnalyticsError::MalformedInput(format!(
                "quota must be positive, got {quota} on {date}"
            )));
        }

        records.push(FundRecord {
            date,
            quota,
            net_equity,
        });
    }

    debug!(rows = records.len(), "normalized fund series");
    Ok(FundSeries::new(records)?)
}

/// Builds the canonical [`BenchmarkSeries`] from raw benchmark rows.
///
/// The source publishes the daily variation as a percentage (optionally with
/// a literal `%` suffix); it is rescaled here to a fractional daily return so
/// compounding downstream needs no special casing.
pub fn normalize_benchmark(
    rows: &[RawRecord],
    mapping: &ColumnMapping,
) -> Result<BenchmarkSeries, AnalyticsError> {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let date = parse_date(field(row, &mapping.benchmark_date)?)?;
        let annualized_rate = parse_numeric(
            field(row, &mapping.benchmark_annualized_rate)?,
            &mapping.benchmark_annualized_rate,
        )?;
        let daily_variation = parse_numeric(
            field(row, &mapping.benchmark_daily_variation)?,
            &mapping.benchmark_daily_variation,
        )?;

        records.push(BenchmarkRecord {
            date,
            annualized_rate,
            returns: daily_variation / Decimal::from(100),
        });
    }

    debug!(rows = records.len(), "normalized benchmark series");
    Ok(BenchmarkSeries::new(records)?)
}

fn field<'a>(row: &'a RawRecord, column: &str) -> Result<&'a str, AnalyticsError> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| AnalyticsError::MalformedInput(format!("missing required column '{column}'")))
}

/// Parses a numeric cell, tolerating a trailing literal `%`.
fn parse_numeric(raw: &str, column: &str) -> Result<Decimal, AnalyticsError> {
    let cleaned = raw.trim().trim_end_matches('%').trim_end();
    cleaned.parse::<Decimal>().map_err(|_| {
        AnalyticsError::MalformedInput(format!("non-numeric value '{raw}' in column '{column}'"))
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, AnalyticsError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| AnalyticsError::MalformedInput(format!("unparseable date '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fund_row(date: &str, quota: &str, net_equity: &str) -> RawRecord {
        RawRecord::from([
            ("data".to_string(), date.to_string()),
            ("cota".to_string(), quota.to_string()),
            ("pl".to_string(), net_equity.to_string()),
        ])
    }

    fn benchmark_row(date: &str, rate: &str, variation: &str) -> RawRecord {
        RawRecord::from([
            ("date".to_string(), date.to_string()),
            ("taxa anualizada".to_string(), rate.to_string()),
            ("variação diária".to_string(), variation.to_string()),
        ])
    }

    #[test]
    fn fund_rows_map_localized_columns() {
        let series = normalize_fund(
            &[fund_row("2019-01-02", "2.5901", "1150000.00")],
            &ColumnMapping::default(),
        )
        .unwrap();

        let record = &series.records()[0];
        assert_eq!(record.date, "2019-01-02".parse().unwrap());
        assert_eq!(record.quota, dec!(2.5901));
        assert_eq!(record.net_equity, dec!(1150000.00));
    }

    #[test]
    fn benchmark_variation_is_stripped_and_rescaled() {
        let series = normalize_benchmark(
            &[benchmark_row("2019-01-02", "6.40", "0.0246%")],
            &ColumnMapping::default(),
        )
        .unwrap();

        let record = &series.records()[0];
        assert_eq!(record.annualized_rate, dec!(6.40));
        assert_eq!(record.returns, dec!(0.000246));
    }

    #[test]
    fn missing_column_is_malformed_input() {
        let mut row = fund_row("2019-01-02", "2.5901", "1150000.00");
        row.remove("cota");

        let err = normalize_fund(&[row], &ColumnMapping::default()).unwrap_err();
        assert!(matches!(err, AnalyticsError::MalformedInput(msg) if msg.contains("cota")));
    }

    #[test]
    fn non_numeric_value_is_malformed_input() {
        let err = normalize_fund(
            &[fund_row("2019-01-02", "n/a", "1150000.00")],
            &ColumnMapping::default(),
        )
        .unwrap_err();

        assert!(matches!(err, AnalyticsError::MalformedInput(msg) if msg.contains("n/a")));
    }

    #[test]
    fn unparseable_date_is_malformed_input() {
        let err = normalize_fund(
            &[fund_row("02/01/2019", "2.5901", "1150000.00")],
            &ColumnMapping::default(),
        )
        .unwrap_err();

        assert!(matches!(err, AnalyticsError::MalformedInput(_)));
    }

    #[test]
    fn non_positive_quota_is_malformed_input() {
        let err = normalize_fund(
            &[fund_row("2019-01-02", "0", "1150000.00")],
            &ColumnMapping::default(),
        )
        .unwrap_err();

        assert!(matches!(err, AnalyticsError::MalformedInput(msg) if msg.contains("quota")));
    }

    #[test]
    fn duplicate_dates_surface_the_series_invariant() {
        let rows = vec![
            fund_row("2019-01-02", "2.59", "1150000.00"),
            fund_row("2019-01-02", "2.60", "1160000.00"),
        ];

        let err = normalize_fund(&rows, &ColumnMapping::default()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Core(_)));
    }

    #[test]
    fn custom_mapping_overrides_defaults() {
        let mapping = ColumnMapping {
            fund_date: "date".to_string(),
            fund_quota: "nav".to_string(),
            fund_net_equity: "aum".to_string(),
            ..ColumnMapping::default()
        };
        let row = RawRecord::from([
            ("date".to_string(), "2019-01-02".to_string()),
            ("nav".to_string(), "1.0000".to_string()),
            ("aum".to_string(), "500.00".to_string()),
        ]);

        let series = normalize_fund(&[row], &mapping).unwrap();
        assert_eq!(series.records()[0].quota, dec!(1.0000));
    }
}
