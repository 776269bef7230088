//! Configuration types for weekgrid layouts and rendering.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so a configuration file only needs to mention what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Week start, visible hour range and interval validation.
//! - [`StyleConfig`] - Colors and pixel dimensions of the rendered SVG.
//!
//! # Example
//!
//! ```
//! # use weekgrid::config::{AppConfig, IntervalPolicy};
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     week_starts_on = "monday"
//!     interval_policy = "normalize"
//! "#).unwrap();
//!
//! assert_eq!(config.layout().interval_policy(), IntervalPolicy::Normalize);
//! assert_eq!(config.layout().default_hours(), (8.0, 18.0));
//! assert!(config.validate().is_ok());
//! ```

use chrono::Weekday;
use serde::Deserialize;

use weekgrid_core::{color::Color, geometry::HOURS_PER_DAY};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks both sections for values the layout cannot work with.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        self.style.validate()
    }
}

/// First day of the week in week and month views.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
        }
    }
}

/// What to do with events whose time range is not a proper interval within
/// one day (inverted, empty, non-finite, or outside 0-24).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalPolicy {
    /// Fail loading with a validation error.
    #[default]
    Reject,
    /// Clamp to the day and stretch empty ranges to the minimum duration.
    Normalize,
    /// Hand the event to the layout engine unchanged, logging a warning.
    Passthrough,
}

/// Layout settings shared by the week and month views.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    week_starts_on: WeekStart,
    default_start_hour: f32,
    default_end_hour: f32,
    hour_padding: f32,
    interval_policy: IntervalPolicy,
    minimum_duration: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            week_starts_on: WeekStart::default(),
            default_start_hour: 8.0,
            default_end_hour: 18.0,
            hour_padding: 1.0,
            interval_policy: IntervalPolicy::default(),
            minimum_duration: 0.25,
        }
    }
}

impl LayoutConfig {
    /// Set the first day of the week
    pub fn with_week_start(mut self, week_starts_on: WeekStart) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }

    /// Set the hour range shown for a week without events
    pub fn with_default_hours(mut self, start: f32, end: f32) -> Self {
        self.default_start_hour = start;
        self.default_end_hour = end;
        self
    }

    /// Set the number of empty hours kept above and below a week's events
    pub fn with_hour_padding(mut self, padding: f32) -> Self {
        self.hour_padding = padding;
        self
    }

    /// Set the policy for malformed event intervals
    pub fn with_interval_policy(mut self, policy: IntervalPolicy) -> Self {
        self.interval_policy = policy;
        self
    }

    /// Set the duration, in hours, given to empty intervals when normalizing
    pub fn with_minimum_duration(mut self, hours: f32) -> Self {
        self.minimum_duration = hours;
        self
    }

    /// Returns the first day of the week
    pub fn week_starts_on(&self) -> Weekday {
        self.week_starts_on.into()
    }

    /// Returns the `(start, end)` hours shown for a week without events
    pub fn default_hours(&self) -> (f32, f32) {
        (self.default_start_hour, self.default_end_hour)
    }

    pub fn hour_padding(&self) -> f32 {
        self.hour_padding
    }

    pub fn interval_policy(&self) -> IntervalPolicy {
        self.interval_policy
    }

    pub fn minimum_duration(&self) -> f32 {
        self.minimum_duration
    }

    fn validate(&self) -> Result<(), String> {
        let (start, end) = self.default_hours();
        if !(0.0..HOURS_PER_DAY).contains(&start) || !(start < end && end <= HOURS_PER_DAY) {
            return Err(format!(
                "default hours must satisfy 0 <= start < end <= 24, got {start}..{end}"
            ));
        }
        if !(self.hour_padding >= 0.0 && self.hour_padding.is_finite()) {
            return Err(format!(
                "hour_padding must be a non-negative number, got {}",
                self.hour_padding
            ));
        }
        if !(self.minimum_duration > 0.0 && self.minimum_duration <= HOURS_PER_DAY) {
            return Err(format!(
                "minimum_duration must be within (0, 24], got {}",
                self.minimum_duration
            ));
        }
        Ok(())
    }
}

/// Visual styling of rendered calendars.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color, as a color string. Transparent when unset.
    background_color: Option<String>,

    /// Fill used for events whose own color cannot be parsed.
    default_event_color: String,

    /// Horizontal gap between side-by-side events, in pixels.
    column_gap: f32,

    /// Height of one hour row in the week view, in pixels.
    hour_height: f32,

    /// Width of one day column, in pixels.
    day_width: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            default_event_color: "blue".to_string(),
            column_gap: 2.0,
            hour_height: 48.0,
            day_width: 140.0,
        }
    }
}

impl StyleConfig {
    /// Set the background color string
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed fallback event [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn default_event_color(&self) -> Result<Color, String> {
        Color::new(&self.default_event_color)
            .map_err(|err| format!("Invalid default event color in config: {err}"))
    }

    pub fn column_gap(&self) -> f32 {
        self.column_gap
    }

    pub fn hour_height(&self) -> f32 {
        self.hour_height
    }

    pub fn day_width(&self) -> f32 {
        self.day_width
    }

    fn validate(&self) -> Result<(), String> {
        self.background_color()?;
        self.default_event_color()?;
        if !(self.hour_height > 0.0 && self.day_width > 0.0) {
            return Err("hour_height and day_width must be positive".to_string());
        }
        if !(self.column_gap >= 0.0 && self.column_gap < self.day_width) {
            return Err(format!(
                "column_gap must be non-negative and smaller than day_width, got {}",
                self.column_gap
            ));
        }
        Ok(())
    }
}
