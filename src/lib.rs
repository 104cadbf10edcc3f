//! covrun - longest continuous coverage over day-numbered intervals.
//!
//! Merges overlapping or touching coverage intervals into maximal periods,
//! reports every period tied for the longest length, and renders the result
//! against an explicit reference year.

pub mod calendar;
pub mod coverage;
pub mod report;

pub use coverage::{merge_longest, CoverageError, Interval, LongestCoverage, MergedPeriod};
