//! # Quotaview Analytics Engine
//!
//! This crate computes period performance metrics for an investment fund
//! measured against a benchmark interest-rate index, from two daily series:
//! fund quota/net-equity and benchmark annualized-rate/daily-return.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   file formats or presentation. It depends only on `core-types` (Layer 0);
//!   a tabular reader supplies raw rows, a presentation layer renders the
//!   structured results.
//! - **Normalize once, query many:** `PeriodAnalytics` normalizes its input
//!   at construction and answers any number of window queries against the
//!   same immutable dataset. Derived series are transient values, never
//!   in-place augmentations of the canonical data.
//!
//! ## Public API
//!
//! - `PeriodAnalytics`: the engine holding the normalized series and the
//!   per-window query operations.
//! - `MinMaxReturns` / `PeriodReport`: the structured results.
//! - `ColumnMapping`: source-column configuration for normalization.
//! - `AnalyticsError`: the specific error types this crate can return.

// Declare the modules that constitute this crate.
pub mod cumulative;
pub mod engine;
pub mod error;
pub mod normalizer;
pub mod report;
pub mod returns;

// Re-export the key components to create a clean, public-facing API.
pub use cumulative::compound_over_window;
pub use engine::PeriodAnalytics;
pub use error::AnalyticsError;
pub use normalizer::{ColumnMapping, RawRecord};
pub use report::{MinMaxReturns, PeriodReport};
pub use returns::simple_returns;
