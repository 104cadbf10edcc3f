//! Maximal runs of continuous coverage and the ranking result built from them.

use std::fmt::Display;

use qtty::{Day, Quantity};

use super::interval::Interval;

/// A maximal union of input intervals that touch or overlap.
///
/// `members` keeps the constituent intervals in the order they were absorbed,
/// which is ascending by start. A period is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MergedPeriod {
    start: u32,
    end: u32,
    members: Vec<Interval>,
}

impl MergedPeriod {
    pub(super) fn new(start: u32, end: u32, members: Vec<Interval>) -> Self {
        debug_assert!(!members.is_empty());
        debug_assert!(members.iter().all(|m| start <= m.start() && m.end() <= end));
        Self {
            start,
            end,
            members,
        }
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Days covered by the period, counting both ends.
    pub const fn length(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn duration(&self) -> Quantity<Day> {
        self.span().duration()
    }

    /// Intervals that make up this period, ascending by start.
    pub fn members(&self) -> &[Interval] {
        &self.members
    }

    /// The extent of the period as a plain interval.
    pub const fn span(&self) -> Interval {
        Interval::from_valid(self.start, self.end)
    }
}

impl Display for MergedPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <- {{", self.span())?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member)?;
        }
        write!(f, "}}")
    }
}

/// Longest continuous coverage and every period that reaches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LongestCoverage {
    longest_length: u32,
    winners: Vec<MergedPeriod>,
}

impl LongestCoverage {
    pub(super) fn new(longest_length: u32, winners: Vec<MergedPeriod>) -> Self {
        Self {
            longest_length,
            winners,
        }
    }

    /// Length in days of the longest period, `0` for empty input.
    pub const fn longest_length(&self) -> u32 {
        self.longest_length
    }

    pub fn longest_duration(&self) -> Quantity<Day> {
        Quantity::new(f64::from(self.longest_length))
    }

    /// Periods tied for the longest length, ascending by start.
    pub fn winners(&self) -> &[MergedPeriod] {
        &self.winners
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    pub fn into_winners(self) -> Vec<MergedPeriod> {
        self.winners
    }
}
