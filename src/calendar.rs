//! Mapping of 1-based day numbers onto calendar dates of a reference year.
//!
//! The reference year is always explicit, so the same day numbers render to
//! the same dates regardless of when the program runs.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::coverage::Interval;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    #[error("Day {day} does not exist in {year} ({days_in_year} days)")]
    DayOutOfYear {
        day: u32,
        year: i32,
        days_in_year: u32,
    },
}

/// A calendar year that day number `1` maps to January 1st of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceYear {
    year: i32,
    days_in_year: u32,
}

impl ReferenceYear {
    pub fn new(year: i32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::InvalidYear(year))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(CalendarError::InvalidYear(year))?;
        Ok(Self {
            year,
            days_in_year: last.ordinal(),
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 365, or 366 in a leap year.
    pub const fn days_in_year(&self) -> u32 {
        self.days_in_year
    }

    pub const fn is_leap(&self) -> bool {
        self.days_in_year == 366
    }

    /// Date of the given 1-based day number.
    pub fn date_of(&self, day: u32) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_yo_opt(self.year, day).ok_or(CalendarError::DayOutOfYear {
            day,
            year: self.year,
            days_in_year: self.days_in_year,
        })
    }

    /// First and last date covered by `interval`.
    pub fn dates_of(&self, interval: &Interval) -> Result<(NaiveDate, NaiveDate), CalendarError> {
        Ok((self.date_of(interval.start())?, self.date_of(interval.end())?))
    }
}
