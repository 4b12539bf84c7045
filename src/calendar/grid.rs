use super::month::YearMonth;
use std::iter::successors;
use std::slice::Chunks;
use time::{Date, Duration};

/// Days per week, as a count of grid columns
pub(crate) const WEEK_COLUMNS: u16 = 7;

pub(crate) const DAYS_IN_WEEK: usize = WEEK_COLUMNS as usize;

/// Number of week rows in every month grid
pub(crate) const GRID_ROWS: u16 = 6;

pub(crate) const GRID_WEEKS: usize = GRID_ROWS as usize;

pub(crate) const GRID_CELLS: usize = DAYS_IN_WEEK * GRID_WEEKS;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct CalendarCell {
    pub(crate) date: Date,
    pub(crate) is_current_month: bool,
}

/// The 42 consecutive days displayed for a month, starting on the Monday on
/// or before the first of the month.
///
/// Invariant: `cells` always holds exactly `GRID_CELLS` dates, each one day
/// after the previous.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    month: YearMonth,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub(crate) fn month(&self) -> YearMonth {
        self.month
    }

    pub(crate) fn get(&self, index: usize) -> Option<CalendarCell> {
        self.cells.get(index).copied()
    }

    pub(crate) fn weeks(&self) -> Chunks<'_, CalendarCell> {
        self.cells.chunks(DAYS_IN_WEEK)
    }
}

pub(crate) fn build_grid(month: YearMonth) -> MonthGrid {
    let first = month.first_day();
    // Monday = 1, Sunday = 7
    let weekday = first.weekday().number_from_monday();
    // YearMonth guarantees that the leading and trailing days exist, so
    // neither the subtraction nor `next_day()` saturate.
    let start = first.saturating_sub(Duration::days((weekday - 1).into()));
    let cells = successors(Some(start), |d| d.next_day())
        .take(GRID_CELLS)
        .map(|date| CalendarCell {
            date,
            is_current_month: month.contains(date),
        })
        .collect::<Vec<_>>();
    debug_assert_eq!(
        cells.len(),
        GRID_CELLS,
        "month grid should always have {GRID_CELLS} cells"
    );
    MonthGrid { month, cells }
}
