//! Weekgrid - Calendar layout for week and month views
//!
//! This library loads calendar events, arranges overlapping events of a day
//! into side-by-side columns, and renders week and month views to SVG.
//!
//! The day layout engine in [`layout`] works on anything that implements
//! [`event::Scheduled`]; the rest of the crate builds the calendar views on
//! top of it.

pub mod calendar;
pub mod config;
pub mod layout;
pub mod month;
pub mod source;
pub mod week;

mod error;
mod export;

pub use weekgrid_core::{color, event, geometry, time};

pub use error::WeekgridError;

use chrono::{Datelike, NaiveDate};
use log::{debug, error, info, trace};

use config::AppConfig;
use event::CalendarEvent;
use export::Exporter;
use month::MonthLayout;
use week::WeekLayout;

/// The calendar view to render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Seven day columns with events placed on an hour axis
    #[default]
    Week,
    /// A month grid marking days that have events
    Month,
}

/// Builder for loading and rendering calendars.
///
/// This provides an API for processing events files through loading,
/// layout, and rendering stages.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use weekgrid::{CalendarBuilder, View, config::AppConfig};
///
/// let source = r#"
///     [[events]]
///     date = "2024-05-14"
///     title = "Farmers market"
///     details = "Main street"
///     start_hour = "09:00"
///     end_hour = "12:00"
/// "#;
///
/// let builder = CalendarBuilder::new(AppConfig::default());
///
/// // Load and validate the events
/// let events = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the week containing May 14th
/// let date = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
/// let svg = builder.render_svg(&events, View::Week, date)
///     .expect("Failed to render");
/// assert!(svg.contains("Farmers market"));
///
/// // Or use default config
/// let builder = CalendarBuilder::default();
/// ```
#[derive(Default)]
pub struct CalendarBuilder {
    config: AppConfig,
}

impl CalendarBuilder {
    /// Create a new calendar builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn check_config(&self) -> Result<(), WeekgridError> {
        self.config.validate().map_err(|err| {
            error!(err:%; "Invalid configuration");
            WeekgridError::Config(err)
        })
    }

    /// Parse an events file into calendar events.
    ///
    /// Every event needs a title and details. Time ranges are checked
    /// against the configured interval policy.
    ///
    /// # Arguments
    ///
    /// * `source` - Contents of a TOML events file
    ///
    /// # Errors
    ///
    /// Returns [`WeekgridError::Config`] if the configuration is invalid, or
    /// [`WeekgridError::Source`] for syntax errors, missing fields and time
    /// ranges rejected by the interval policy.
    pub fn parse(&self, source: &str) -> Result<Vec<CalendarEvent>, WeekgridError> {
        self.check_config()?;
        info!("Loading events");
        let events = source::load_events(source, self.config.layout())
            .map_err(|err| WeekgridError::new_source_error(err, source))?;
        debug!(events = events.len(); "Events loaded successfully");
        trace!(events:?; "Loaded events");
        Ok(events)
    }

    /// Lay out the week containing `date`.
    pub fn layout_week<'a>(&self, events: &'a [CalendarEvent], date: NaiveDate) -> WeekLayout<'a> {
        WeekLayout::build(events, date, self.config.layout())
    }

    /// Lay out the month containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`WeekgridError::Calendar`] if the month cannot be represented.
    pub fn layout_month(
        &self,
        events: &[CalendarEvent],
        date: NaiveDate,
    ) -> Result<MonthLayout, WeekgridError> {
        let layout = MonthLayout::build(
            events,
            date.year(),
            date.month(),
            self.config.layout().week_starts_on(),
        )?;
        Ok(layout)
    }

    /// Render a calendar view to an SVG string.
    ///
    /// # Arguments
    ///
    /// * `events` - Events to place, typically from [`CalendarBuilder::parse`]
    /// * `view` - Whether to render a week or a month
    /// * `date` - Any date within the week or month to render
    ///
    /// # Errors
    ///
    /// Returns [`WeekgridError::Config`] if the configuration is invalid, for
    /// example an unknown color or default hours outside 0-24, or
    /// [`WeekgridError::Export`] if rendering fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use weekgrid::{CalendarBuilder, View, event::CalendarEvent};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
    /// let events = vec![CalendarEvent::new(date, "Standup", 9.0, 9.25)];
    ///
    /// let svg = CalendarBuilder::default()
    ///     .render_svg(&events, View::Month, date)
    ///     .expect("Failed to render calendar");
    /// assert!(svg.contains("May 2024"));
    /// ```
    pub fn render_svg(
        &self,
        events: &[CalendarEvent],
        view: View,
        date: NaiveDate,
    ) -> Result<String, WeekgridError> {
        self.check_config()?;
        let mut svg_exporter = export::svg::SvgBuilder::new(Vec::new())
            .with_style(self.config.style())
            .build()
            .map_err(|err| WeekgridError::Config(err.to_string()))?;

        info!(view:?, date:?; "Rendering calendar");
        match view {
            View::Week => {
                let layout = self.layout_week(events, date);
                info!(events = layout.event_count(); "Week layout calculated");
                svg_exporter.export_week(&layout)?;
            }
            View::Month => {
                let layout = self.layout_month(events, date)?;
                info!(rows = layout.row_count(); "Month layout calculated");
                svg_exporter.export_month(&layout)?;
            }
        }

        let svg_string = String::from_utf8(svg_exporter.into_inner())
            .map_err(|err| WeekgridError::Export(Box::new(err)))?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}
