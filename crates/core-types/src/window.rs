use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The inclusive `[start, end]` calendar-date range a query is scoped to.
///
/// The window is plain data; whether it is usable is decided by
/// [`DateWindow::is_invalid`], which callers must consult before running any
/// analytics operation. Keeping the predicate here, away from the engine,
/// means alternate window semantics can be swapped in without touching the
/// calculations themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns `true` when the window is unusable, i.e. `start >= end`.
    ///
    /// This is deliberately a predicate and not a raised error: the caller
    /// owns the user-facing messaging for a rejected request.
    pub fn is_invalid(&self) -> bool {
        self.start >= self.end
    }

    /// Inclusive-range membership test used for window filtering.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
