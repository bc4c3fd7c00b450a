//! # Quotaview Core Types
//!
//! This crate defines the shared data model for the analytics engine: the
//! canonical fund and benchmark series, the derived returns and cumulative
//! series, and the date window that scopes every query.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate depends on no other workspace crate. Everything
//!   above it (the analytics engine, any presentation layer) speaks in these
//!   types.
//! - **Immutable after construction:** The canonical series are validated and
//!   sorted once, at construction, and never mutated. Derived series are new
//!   values, never in-place column additions.

pub mod error;
pub mod series;
pub mod window;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use series::{
    BenchmarkRecord, BenchmarkSeries, CumulativePoint, CumulativeSeries, FundRecord, FundSeries,
    ReturnPoint, ReturnsSeries, TimeSeriesPoint,
};
pub use window::DateWindow;
