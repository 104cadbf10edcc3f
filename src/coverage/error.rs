use thiserror::Error;

/// Errors raised while validating coverage input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Invalid coverage interval [{start}, {end}]: start must be <= end")]
    InvalidInterval { start: u32, end: u32 },

    #[error("Invalid coverage interval [{start}, {end}]: day numbers start at 1")]
    DayZero { start: u32, end: u32 },
}
