//! Calendar date arithmetic for week and month views.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use thiserror::Error;

use weekgrid_core::event::CalendarEvent;

/// Errors from calendar arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("{year}-{month:02} is not a valid month")]
    InvalidMonth { year: i32, month: u32 },
}

/// Number of days from `first_day` forward to `day`, in `0..7`.
fn days_since(day: Weekday, first_day: Weekday) -> u32 {
    (day.num_days_from_monday() + 7 - first_day.num_days_from_monday()) % 7
}

/// Returns the first day of the week containing `date`.
///
/// Dates too close to [`NaiveDate::MIN`] to have a full week before them
/// saturate at the minimum.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use weekgrid::calendar::week_start;
///
/// // 2024-05-15 is a Wednesday
/// let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
/// assert_eq!(week_start(date, Weekday::Sun), NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
/// assert_eq!(week_start(date, Weekday::Mon), NaiveDate::from_ymd_opt(2024, 5, 13).unwrap());
/// ```
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = days_since(date.weekday(), first_day);
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Returns the seven days of the week containing `date`, in display order.
pub fn week_days(date: NaiveDate, first_day: Weekday) -> [NaiveDate; 7] {
    let start = week_start(date, first_day);
    std::array::from_fn(|offset| {
        start
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Returns the number of days in a month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Builds the cells of a month grid.
///
/// The grid starts with one `None` per weekday between `first_day` and the
/// weekday of the 1st, followed by `Some(day)` for every day of the month.
/// Trailing cells of the last row are not padded.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in `1..=12` or
/// the year is out of range.
pub fn month_grid(
    year: i32,
    month: u32,
    first_day: Weekday,
) -> Result<Vec<Option<u32>>, CalendarError> {
    let invalid = || CalendarError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let days = days_in_month(year, month).ok_or_else(invalid)?;

    let leading = days_since(first.weekday(), first_day) as usize;
    let mut cells = vec![None; leading];
    cells.extend((1..=days).map(Some));
    Ok(cells)
}

/// Returns one-letter weekday labels starting at `first_day`.
pub fn weekday_initials(first_day: Weekday) -> [&'static str; 7] {
    let mut day = first_day;
    std::array::from_fn(|_| {
        let initial = match day {
            Weekday::Mon => "M",
            Weekday::Tue | Weekday::Thu => "T",
            Weekday::Wed => "W",
            Weekday::Fri => "F",
            Weekday::Sat | Weekday::Sun => "S",
        };
        day = day.succ();
        initial
    })
}

/// Returns the events that take place on `date`, in input order.
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|event| event.date() == date).collect()
}
