use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Duplicate observation date in series: {0}")]
    DuplicateDate(NaiveDate),
}
