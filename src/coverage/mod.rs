//! Continuous coverage: merging day-numbered intervals into maximal periods
//! and ranking those periods by length.
//!
//! [`merge_longest`] is the entry point. Input intervals may arrive in any
//! order; the result lists every [`MergedPeriod`] tied for the longest
//! length, ascending by start.

mod error;
mod interval;
mod merger;
mod period;


pub use error::CoverageError;
pub use interval::Interval;
pub use merger::{merge_longest, merge_longest_pairs, merge_periods};
pub use period::{LongestCoverage, MergedPeriod};
