//! Single-pass merge of coverage intervals and ranking by merged length.

use log::{debug, trace};

use super::error::CoverageError;
use super::interval::Interval;
use super::period::{LongestCoverage, MergedPeriod};

/// Merges intervals into maximal periods of continuous coverage.
///
/// Intervals are sorted by start (stable), then swept once. An interval joins
/// the running period when it starts no later than the day after the period
/// ends; a skipped day closes the period.
///
/// Returns every completed period, ascending by start.
pub fn merge_periods<I>(intervals: I) -> Vec<MergedPeriod>
where
    I: IntoIterator<Item = Interval>,
{
    let mut sorted: Vec<Interval> = intervals.into_iter().collect();
    sorted.sort_by_key(Interval::start);

    let mut periods = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return periods;
    };

    let mut start = first.start();
    let mut end = first.end();
    let mut members = vec![first];

    for interval in iter {
        if end.saturating_add(1) >= interval.start() {
            end = end.max(interval.end());
            members.push(interval);
        } else {
            trace!("closing coverage period [{start}, {end}] before gap at {interval}");
            let absorbed = std::mem::replace(&mut members, vec![interval]);
            periods.push(MergedPeriod::new(start, end, absorbed));
            start = interval.start();
            end = interval.end();
        }
    }
    periods.push(MergedPeriod::new(start, end, members));

    periods
}

/// Computes the longest continuous coverage and every period tied for it.
///
/// Empty input yields a length of `0` and no winners.
///
/// # Example
///
/// ```rust
/// use covrun::coverage::{merge_longest, Interval};
///
/// let intervals = [(1, 20), (21, 30), (28, 40), (50, 60), (61, 200)]
///     .into_iter()
///     .map(|(s, e)| Interval::new(s, e).unwrap());
///
/// let result = merge_longest(intervals);
/// assert_eq!(result.longest_length(), 151);
/// assert_eq!(result.winners().len(), 1);
/// assert_eq!(result.winners()[0].members().len(), 2);
/// ```
pub fn merge_longest<I>(intervals: I) -> LongestCoverage
where
    I: IntoIterator<Item = Interval>,
{
    let periods = merge_periods(intervals);
    let longest_length = periods.iter().map(MergedPeriod::length).max().unwrap_or(0);
    let winners: Vec<MergedPeriod> = periods
        .into_iter()
        .filter(|p| p.length() == longest_length)
        .collect();

    debug!(
        "longest continuous coverage is {} day(s) across {} period(s)",
        longest_length,
        winners.len()
    );

    LongestCoverage::new(longest_length, winners)
}

/// Validates raw `(start, end)` day pairs, then runs [`merge_longest`].
///
/// # Errors
///
/// Fails on the first invalid pair; nothing is merged in that case.
pub fn merge_longest_pairs(pairs: &[(u32, u32)]) -> Result<LongestCoverage, CoverageError> {
    let intervals = pairs
        .iter()
        .map(|&pair| Interval::try_from(pair))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(merge_longest(intervals))
}
