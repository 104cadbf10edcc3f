//! Closed day-number interval representing one reported coverage span.

use std::fmt::Display;

use qtty::{Day, Quantity};

use super::error::CoverageError;

/// Closed range `[start, end]` of 1-based day numbers, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    /// Creates interval `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::InvalidInterval`] if `start > end` and
    /// [`CoverageError::DayZero`] if `start` is day `0`.
    pub const fn new(start: u32, end: u32) -> Result<Self, CoverageError> {
        if start > end {
            return Err(CoverageError::InvalidInterval { start, end });
        }
        if start == 0 {
            return Err(CoverageError::DayZero { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds an interval whose bounds are already known to be valid.
    pub(crate) const fn from_valid(start: u32, end: u32) -> Self {
        debug_assert!(start >= 1 && start <= end);
        Self { start, end }
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Number of covered days, counting both ends.
    ///
    /// ```rust
    /// use covrun::coverage::Interval;
    ///
    /// assert_eq!(Interval::new(1, 20).unwrap().length(), 20);
    /// assert_eq!(Interval::new(7, 7).unwrap().length(), 1);
    /// ```
    pub const fn length(&self) -> u32 {
        self.end - self.start + 1
    }

    /// The covered length as a dimensioned quantity of days.
    pub fn duration(&self) -> Quantity<Day> {
        Quantity::new(f64::from(self.length()))
    }

    /// Returns true if `day` ∈ `[start, end]`.
    pub const fn contains(&self, day: u32) -> bool {
        self.start <= day && day <= self.end
    }

    /// Checks if the two intervals share at least one day.
    pub const fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if the two intervals overlap or sit next to each other with no
    /// day skipped between them.
    pub const fn is_continuous_with(&self, other: &Interval) -> bool {
        self.start <= other.end.saturating_add(1) && other.start <= self.end.saturating_add(1)
    }
}

impl TryFrom<(u32, u32)> for Interval {
    type Error = CoverageError;

    fn try_from((start, end): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: u32,
            end: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_interval_creation() {
        let interval = iv(1, 20);
        assert_eq!(interval.start(), 1);
        assert_eq!(interval.end(), 20);
        assert_eq!(interval.length(), 20);
    }

    #[test]
    fn test_single_day_has_length_one() {
        assert_eq!(iv(42, 42).length(), 1);
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        assert_eq!(
            Interval::new(30, 20),
            Err(CoverageError::InvalidInterval { start: 30, end: 20 })
        );
    }

    #[test]
    fn test_day_zero_is_rejected() {
        assert_eq!(
            Interval::new(0, 10),
            Err(CoverageError::DayZero { start: 0, end: 10 })
        );
    }

    #[test]
    fn test_full_range_length_does_not_overflow() {
        assert_eq!(iv(1, u32::MAX).length(), u32::MAX);
    }

    #[test]
    fn test_try_from_pair() {
        assert_eq!(Interval::try_from((3, 9)), Ok(iv(3, 9)));
        assert!(Interval::try_from((9, 3)).is_err());
    }

    #[test]
    fn test_duration_in_days() {
        let duration = iv(1, 20).duration();
        assert!((duration.value() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_interval_contains() {
        let interval = iv(10, 20);
        assert!(interval.contains(10));
        assert!(interval.contains(15));
        assert!(interval.contains(20));
        assert!(!interval.contains(9));
        assert!(!interval.contains(21));
    }

    #[test]
    fn test_interval_overlaps() {
        assert!(iv(1, 20).overlaps(&iv(20, 30)));
        assert!(iv(20, 30).overlaps(&iv(1, 20)));
        assert!(!iv(1, 20).overlaps(&iv(21, 30)));
    }

    #[test]
    fn test_adjacent_intervals_are_continuous() {
        assert!(iv(1, 20).is_continuous_with(&iv(21, 30)));
        assert!(iv(21, 30).is_continuous_with(&iv(1, 20)));
        assert!(!iv(1, 20).is_continuous_with(&iv(22, 30)));
    }

    #[test]
    fn test_continuity_at_upper_bound() {
        assert!(iv(u32::MAX, u32::MAX).is_continuous_with(&iv(1, u32::MAX - 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(1, 20).to_string(), "[1, 20]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_bounds() {
        let ok: Interval = serde_json::from_str(r#"{"start": 1, "end": 20}"#).unwrap();
        assert_eq!(ok, iv(1, 20));

        let bad = serde_json::from_str::<Interval>(r#"{"start": 20, "end": 1}"#);
        assert!(bad.is_err());
    }
}
