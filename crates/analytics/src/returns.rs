//! Simple period-over-period returns derived from a raw value series.

use core_types::{ReturnPoint, ReturnsSeries, TimeSeriesPoint};
use rust_decimal::Decimal;

use crate::error::AnalyticsError;

/// Derives the simple-return series `value[i] / value[i-1] - 1` from a raw
/// value series in ascending date order.
///
/// The first observation has no predecessor, so its (undefined) return is
/// dropped: the output is always one row shorter than the input. The input is
/// not mutated; the derived series is a new value.
pub fn simple_returns(points: &[TimeSeriesPoint]) -> Result<ReturnsSeries, AnalyticsError> {
    if points.len() < 2 {
        return Err(AnalyticsError::InsufficientData { rows: points.len() });
    }

    let points = points
        .windows(2)
        .map(|pair| ReturnPoint {
            date: pair[1].date,
            value: pair[1].value / pair[0].value - Decimal::ONE,
        })
        .collect();

    Ok(ReturnsSeries { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn point(date: &str, value: Decimal) -> TimeSeriesPoint {
        TimeSeriesPoint {
            date: date.parse().unwrap(),
            value,
        }
    }

    #[test]
    fn derived_series_is_one_shorter_and_drops_first_date() {
        let series = simple_returns(&[
            point("2019-01-01", dec!(100)),
            point("2019-01-02", dec!(110)),
            point("2019-01-03", dec!(99)),
        ])
        .unwrap();

        assert_eq!(series.len(), 2);
        let dates: Vec<NaiveDate> = series.points.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                "2019-01-02".parse::<NaiveDate>().unwrap(),
                "2019-01-03".parse::<NaiveDate>().unwrap()
            ]
        );
    }

    #[test]
    fn returns_are_simple_percent_changes() {
        let series = simple_returns(&[
            point("2019-01-01", dec!(100)),
            point("2019-01-02", dec!(110)),
            point("2019-01-03", dec!(99)),
        ])
        .unwrap();

        assert_eq!(series.points[0].value, dec!(0.1));
        assert_eq!(series.points[1].value, dec!(-0.1));
    }

    #[test]
    fn fewer_than_two_rows_is_insufficient_data() {
        let err = simple_returns(&[point("2019-01-01", dec!(100))]).unwrap_err();
        assert!(matches!(err, AnalyticsError::InsufficientData { rows: 1 }));

        let err = simple_returns(&[]).unwrap_err();
        assert!(matches!(err, AnalyticsError::InsufficientData { rows: 0 }));
    }
}
