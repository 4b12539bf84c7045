use std::fmt;
use thiserror::Error;
use time::{Date, Duration, Month};

/// Largest number of days from the previous month shown before the first of
/// a month (when the first falls on a Sunday)
const MAX_LEADING_DAYS: i64 = 6;

/// Largest offset, in days, from the first of a month to the last cell of its
/// grid (when the first falls on a Monday)
const MAX_TRAILING_OFFSET: i64 = 41;

const MAX_DAYS_IN_MONTH: u8 = 31;

/// A month of a specific year whose whole 42-day grid is representable as
/// `time::Date` values
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct YearMonth {
    first_day: Date,
}

impl YearMonth {
    pub(crate) fn new(year: i32, month: Month) -> Result<YearMonth, OutOfTimeError> {
        let first_day = Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
        if first_day
            .checked_sub(Duration::days(MAX_LEADING_DAYS))
            .is_none()
            || first_day
                .checked_add(Duration::days(MAX_TRAILING_OFFSET))
                .is_none()
        {
            return Err(OutOfTimeError);
        }
        Ok(YearMonth { first_day })
    }

    pub(crate) fn containing(date: Date) -> Result<YearMonth, OutOfTimeError> {
        YearMonth::new(date.year(), date.month())
    }

    pub(crate) fn year(self) -> i32 {
        self.first_day.year()
    }

    pub(crate) fn month(self) -> Month {
        self.first_day.month()
    }

    pub(crate) fn first_day(self) -> Date {
        self.first_day
    }

    pub(crate) fn contains(self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub(crate) fn next(self) -> Result<YearMonth, OutOfTimeError> {
        let year = if self.month() == Month::December {
            self.year().checked_add(1).ok_or(OutOfTimeError)?
        } else {
            self.year()
        };
        YearMonth::new(year, self.month().next())
    }

    pub(crate) fn previous(self) -> Result<YearMonth, OutOfTimeError> {
        let year = if self.month() == Month::January {
            self.year().checked_sub(1).ok_or(OutOfTimeError)?
        } else {
            self.year()
        };
        YearMonth::new(year, self.month().previous())
    }

    /// Returns the date in this month with the given day number, or the last
    /// day of the month if the month is shorter than that
    pub(crate) fn clamp_day(self, day: u8) -> Date {
        (1..=day.min(MAX_DAYS_IN_MONTH))
            .rev()
            .find_map(|d| Date::from_calendar_date(self.year(), self.month(), d).ok())
            .unwrap_or(self.first_day)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), u8::from(self.month()))
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
