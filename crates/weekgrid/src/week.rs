//! Week view layout.
//!
//! A week view shows seven day columns over a shared vertical hour axis. The
//! horizontal placement of each event comes from [`layout_day`]; this module
//! adds the vertical placement by mapping the event's hours onto the visible
//! [`HourRange`].

use chrono::NaiveDate;
use log::{debug, info};

use weekgrid_core::{
    event::{CalendarEvent, Scheduled},
    geometry::{HOURS_PER_DAY, Rect, Span},
    time,
};

use crate::{
    calendar::{events_on, week_days},
    config::LayoutConfig,
    layout::layout_day,
};

/// The band of hours shown on the vertical axis of a week view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourRange {
    start: f32,
    end: f32,
}

impl HourRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Fits the range around `events`.
    ///
    /// The range starts `hour_padding` hours before the earliest start
    /// (rounded down) and ends `hour_padding` hours after the latest end
    /// (rounded up), clamped to the day. Without events, or when no event
    /// has finite hours, the configured default hours are used.
    pub fn fit<E: Scheduled>(events: &[E], config: &LayoutConfig) -> Self {
        let finite = || {
            events
                .iter()
                .map(Scheduled::span)
                .filter(|span| span.start().is_finite() && span.end().is_finite())
        };

        let Some(earliest) = finite().map(Span::start).reduce(f32::min) else {
            let (start, end) = config.default_hours();
            return Self::new(start, end);
        };
        let latest = finite().map(Span::end).fold(earliest, f32::max);

        let padding = config.hour_padding();
        Self {
            start: (earliest.floor() - padding).max(0.0),
            end: (latest.ceil() + padding).min(HOURS_PER_DAY),
        }
    }

    /// Returns the first visible hour
    pub fn start(self) -> f32 {
        self.start
    }

    /// Returns the last visible hour
    pub fn end(self) -> f32 {
        self.end
    }

    /// Returns the height of the axis in hours, never less than one
    pub fn total_hours(self) -> f32 {
        (self.end - self.start).max(1.0)
    }

    /// Returns `HH:00` labels, one per hour row
    pub fn time_slots(self) -> Vec<String> {
        let rows = self.total_hours().ceil() as usize;
        (0..rows)
            .map(|row| time::format_clock(self.start + row as f32))
            .collect()
    }

    /// Maps a span onto the axis, returning `(top, height)` in percent.
    ///
    /// Spans are clipped to the visible range. Returns `None` if nothing of
    /// the span is visible, which includes inverted spans and spans with a
    /// NaN end.
    pub fn place(self, span: Span) -> Option<(f32, f32)> {
        let visible = span.clamp(self.start, self.end)?;
        let total = self.total_hours();
        let top = (visible.start() - self.start) / total * 100.0;
        let height = visible.duration() / total * 100.0;
        Some((top, height))
    }
}

/// An event with its complete position inside a day column.
#[derive(Debug, Clone, Copy)]
pub struct PlacedEvent<'a> {
    event: &'a CalendarEvent,
    column: usize,
    column_count: usize,
    rect: Rect,
}

impl<'a> PlacedEvent<'a> {
    /// Get a reference to the original event
    pub fn event(&self) -> &'a CalendarEvent {
        self.event
    }

    /// Position in percent of the day column
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Zero-based column index inside the event's overlap cluster
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of columns opened for the event's overlap cluster
    pub fn column_count(&self) -> usize {
        self.column_count
    }
}

/// The placed events of one day.
#[derive(Debug, Clone)]
pub struct DayColumn<'a> {
    date: NaiveDate,
    events: Vec<PlacedEvent<'a>>,
}

impl<'a> DayColumn<'a> {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn events(&self) -> &[PlacedEvent<'a>] {
        &self.events
    }
}

/// A fully positioned week.
#[derive(Debug, Clone)]
pub struct WeekLayout<'a> {
    days: Vec<DayColumn<'a>>,
    hours: HourRange,
}

impl<'a> WeekLayout<'a> {
    /// Lays out the week containing `anchor`.
    ///
    /// Only events dated within that week are considered. Events outside the
    /// visible hour range are dropped. That only happens to spans that are
    /// not well formed, such as inverted spans or spans with NaN hours.
    pub fn build(events: &'a [CalendarEvent], anchor: NaiveDate, config: &LayoutConfig) -> Self {
        let dates = week_days(anchor, config.week_starts_on());
        let (first, last) = (dates[0], dates[6]);

        let week_events: Vec<&CalendarEvent> = events
            .iter()
            .filter(|event| (first..=last).contains(&event.date()))
            .collect();
        let hours = HourRange::fit(&week_events, config);
        info!(
            week_start:? = first,
            events = week_events.len(),
            start_hour = hours.start(),
            end_hour = hours.end();
            "Building week layout"
        );

        let days = dates
            .iter()
            .map(|&date| {
                let day_events = events_on(events, date);
                let placed = layout_day(&day_events)
                    .into_iter()
                    .filter_map(|laid_out| {
                        let (top, height) = hours.place(laid_out.span())?;
                        Some(PlacedEvent {
                            event: *laid_out.event(),
                            column: laid_out.column(),
                            column_count: laid_out.column_count(),
                            rect: laid_out.rect().with_vertical(top, height),
                        })
                    })
                    .collect::<Vec<_>>();

                if placed.len() < day_events.len() {
                    debug!(
                        date:? = date,
                        hidden = day_events.len() - placed.len();
                        "Events outside the visible hours"
                    );
                }

                DayColumn {
                    date,
                    events: placed,
                }
            })
            .collect();

        Self { days, hours }
    }

    /// Returns the seven day columns in display order
    pub fn days(&self) -> &[DayColumn<'a>] {
        &self.days
    }

    /// Returns the visible hour range
    pub fn hours(&self) -> HourRange {
        self.hours
    }

    /// Returns the first day of the week
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days.first().map(DayColumn::date)
    }

    /// Returns the last day of the week
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.days.last().map(DayColumn::date)
    }

    /// Returns the number of placed events across all days
    pub fn event_count(&self) -> usize {
        self.days.iter().map(|day| day.events.len()).sum()
    }
}
