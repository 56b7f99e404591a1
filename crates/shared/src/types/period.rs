//! Fiscal period keys.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned for an out-of-range period.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid fiscal period: year {year}, month {month}")]
pub struct InvalidPeriod {
    /// The rejected year.
    pub year: i32,
    /// The rejected month.
    pub month: u32,
}

/// A fiscal period key: calendar year plus month number (1-12).
///
/// Periods order chronologically and are used to key general-ledger summary
/// rows and reconciliation records. Membership is decided purely by the
/// transaction date, never by a manual flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    /// Calendar year.
    pub year: i32,
    /// Month number within the year (1-12).
    pub month: u32,
}

impl Period {
    /// Creates a period, validating the month number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` if the month is outside 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidPeriod> {
        if (1..=12).contains(&month) {
            Ok(Self { year, month })
        } else {
            Err(InvalidPeriod { year, month })
        }
    }

    /// Returns the period a date falls into.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the following period.
    #[must_use]
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
