//! Plain-text rendering of a [`LongestCoverage`] result with calendar dates.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use log::debug;
use thiserror::Error;

use crate::calendar::{CalendarError, ReferenceYear};
use crate::coverage::{Interval, LongestCoverage};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),

    #[error("Failed to write report")]
    Format(#[from] std::fmt::Error),
}

/// Settings for rendering a coverage report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Year whose January 1st is day number 1.
    pub reference_year: i32,
    /// `strftime`-style pattern used for every date in the report.
    pub date_format: String,
}

impl ReportConfig {
    pub const DEFAULT_REFERENCE_YEAR: i32 = 2020;
    pub const DEFAULT_DATE_FORMAT: &'static str = "%m-%d-%Y";

    /// Checks that `date_format` only contains recognised specifiers.
    pub fn validate(&self) -> Result<(), ReportError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ReportError::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reference_year: Self::DEFAULT_REFERENCE_YEAR,
            date_format: Self::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Text report listing the longest coverage, each winning period and the
/// intervals it was merged from.
#[derive(Debug, Clone)]
pub struct CoverageReport<'a> {
    coverage: &'a LongestCoverage,
    calendar: ReferenceYear,
    date_format: &'a str,
}

impl<'a> CoverageReport<'a> {
    pub fn new(coverage: &'a LongestCoverage, config: &'a ReportConfig) -> Result<Self, ReportError> {
        config.validate()?;
        let calendar = ReferenceYear::new(config.reference_year)?;
        Ok(Self {
            coverage,
            calendar,
            date_format: &config.date_format,
        })
    }

    pub fn render(&self) -> Result<String, ReportError> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let longest = self.coverage.longest_length();
        writeln!(out, "Longest Continuous Coverage = {longest} day(s)")?;
        writeln!(out)?;

        let winners = self.coverage.winners();
        if winners.is_empty() {
            return Ok(());
        }
        debug!(
            "rendering {} period(s) against reference year {}",
            winners.len(),
            self.calendar.year()
        );

        writeln!(
            out,
            "There was/were {} coverage period(s) with a max length = {longest} day(s)",
            winners.len()
        )?;
        writeln!(out)?;

        for (i, period) in winners.iter().enumerate() {
            let n = i + 1;
            writeln!(out, "Coverage Period {n} - {}", self.describe(&period.span())?)?;
            writeln!(out, "Coverages included in Coverage Period {n}:")?;
            for member in period.members() {
                writeln!(out, "- {}", self.describe(member)?)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// `[s, e]: L Days : <start date> to <end date>`
    fn describe(&self, interval: &Interval) -> Result<String, ReportError> {
        let (first, last) = self.calendar.dates_of(interval)?;
        let mut line = String::new();
        write!(
            line,
            "{interval}: {} Days : {} to {}",
            interval.length(),
            first.format(self.date_format),
            last.format(self.date_format)
        )?;
        Ok(line)
    }
}
