//! Month view layout.
//!
//! The month view is a seven column grid. Cells before the first day of the
//! month are blank, and days that have at least one event carry a marker.

use chrono::{Datelike, NaiveDate, Weekday};
use log::info;

use weekgrid_core::event::CalendarEvent;

use crate::calendar::{CalendarError, month_grid};

/// Number of cells in one grid row
pub const DAYS_PER_WEEK: usize = 7;

/// A single day of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    date: NaiveDate,
    event_count: usize,
}

impl DayCell {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the day of the month, starting at 1
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns the number of events on this day
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// Returns true if the day should carry an event marker
    pub fn has_events(&self) -> bool {
        self.event_count > 0
    }
}

/// A laid out month.
#[derive(Debug, Clone)]
pub struct MonthLayout {
    first_day: Weekday,
    month_start: NaiveDate,
    cells: Vec<Option<DayCell>>,
}

impl MonthLayout {
    /// Builds the grid for `year`/`month`, counting events per day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for a month outside `1..=12`
    /// or a year chrono cannot represent.
    pub fn build(
        events: &[CalendarEvent],
        year: i32,
        month: u32,
        first_day: Weekday,
    ) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidMonth { year, month };
        let month_start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

        let cells = month_grid(year, month, first_day)?
            .into_iter()
            .map(|cell| {
                cell.and_then(|day| NaiveDate::from_ymd_opt(year, month, day))
                    .map(|date| DayCell {
                        date,
                        event_count: events.iter().filter(|event| event.date() == date).count(),
                    })
            })
            .collect::<Vec<_>>();

        let busy_days = cells.iter().flatten().filter(|cell| cell.has_events()).count();
        info!(month:? = month_start, busy_days = busy_days; "Building month layout");

        Ok(Self {
            first_day,
            month_start,
            cells,
        })
    }

    /// Returns the weekday of the first grid column
    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// Returns the first day of the month
    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    /// Returns the grid cells, `None` for leading blanks
    pub fn cells(&self) -> &[Option<DayCell>] {
        &self.cells
    }

    /// Returns the grid split into rows of seven cells; the last row may be shorter
    pub fn rows(&self) -> impl Iterator<Item = &[Option<DayCell>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Returns the number of grid rows
    pub fn row_count(&self) -> usize {
        self.cells.len().div_ceil(DAYS_PER_WEEK)
    }
}
