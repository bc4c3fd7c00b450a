use chrono::NaiveDate;
use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Not enough data to compute returns: got {rows} row(s), need at least 2")]
    InsufficientData { rows: usize },

    #[error("Window {start} to {end} does not intersect the available dates")]
    EmptyWindow { start: NaiveDate, end: NaiveDate },

    #[error("Window out of range: {0}")]
    WindowOutOfRange(String),

    #[error("Calculation error: Division by zero encountered in metric '{0}'")]
    DivisionByZero(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
