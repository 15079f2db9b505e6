//! Calendar day used to key the daily quote.
//!
//! Persisted as `YYYY-MM-DD`. Hosts compute the value in the viewer's local
//! timezone; this type only fixes the string form so that writing and
//! comparing always agree.

#[cfg(test)]
#[path = "day_test.rs"]
mod day_test;

use std::fmt;
use std::str::FromStr;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Error returned when building or parsing a [`CalendarDay`].
#[derive(Debug, thiserror::Error)]
pub enum DayError {
    #[error("invalid calendar date `{0}`")]
    Parse(String),
    #[error("date component out of range: {0}")]
    Range(#[from] time::error::ComponentRange),
}

/// A single local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(Date);

impl CalendarDay {
    #[must_use]
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    /// Build a day from a year, a 1-based month, and a day of month.
    ///
    /// # Errors
    ///
    /// Returns [`DayError::Range`] for a month outside 1..=12 or a day that
    /// does not exist in that month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DayError> {
        let month = Month::try_from(month)?;
        Ok(Self(Date::from_calendar_date(year, month, day)?))
    }

    #[must_use]
    pub fn date(self) -> Date {
        self.0
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.0.previous_day().map(Self)
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDay {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s, DAY_FORMAT)
            .map(Self)
            .map_err(|_| DayError::Parse(s.to_owned()))
    }
}
