//! Event records and the [`Scheduled`] seam used by the layout engine.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{color::Color, geometry::Span, time};

/// Anything that occupies a time range within a single day.
///
/// The layout engine only ever looks at these two values; every other field
/// of an event is carried through untouched.
pub trait Scheduled {
    /// Hours since midnight at which the item starts
    fn start_hour(&self) -> f32;

    /// Hours since midnight at which the item ends
    fn end_hour(&self) -> f32;

    /// Returns the item's time range as a [`Span`]
    fn span(&self) -> Span {
        Span::new(self.start_hour(), self.end_hour())
    }

    /// Half-open overlap test, see [`Span::overlaps`]
    fn overlaps<O: Scheduled + ?Sized>(&self, other: &O) -> bool {
        self.span().overlaps(other.span())
    }
}

impl Scheduled for Span {
    fn start_hour(&self) -> f32 {
        self.start()
    }

    fn end_hour(&self) -> f32 {
        self.end()
    }
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn start_hour(&self) -> f32 {
        (**self).start_hour()
    }

    fn end_hour(&self) -> f32 {
        (**self).end_hour()
    }
}

fn default_color() -> String {
    "blue".to_string()
}

/// A community calendar event.
///
/// Hours may be written either as numbers (`start_hour = 9.5`) or as clock
/// strings (`start_hour = "09:30"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i64>,

    date: NaiveDate,

    title: String,

    #[serde(default)]
    details: String,

    #[serde(deserialize_with = "deserialize_hour")]
    start_hour: f32,

    #[serde(deserialize_with = "deserialize_hour")]
    end_hour: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    external_link: Option<String>,

    #[serde(default = "default_color")]
    color: String,
}

impl CalendarEvent {
    /// Creates an event with empty details and the default color.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use weekgrid_core::event::{CalendarEvent, Scheduled};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
    /// let event = CalendarEvent::new(date, "Farmers market", 9.0, 12.5)
    ///     .with_details("Main street parking lot");
    /// assert_eq!(event.span().duration(), 3.5);
    /// ```
    pub fn new(date: NaiveDate, title: impl Into<String>, start_hour: f32, end_hour: f32) -> Self {
        Self {
            id: None,
            date,
            title: title.into(),
            details: String::new(),
            start_hour,
            end_hour,
            external_link: None,
            color: default_color(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_external_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Replaces the event's time range
    pub fn with_span(mut self, span: Span) -> Self {
        self.start_hour = span.start();
        self.end_hour = span.end();
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn external_link(&self) -> Option<&str> {
        self.external_link.as_deref()
    }

    /// Returns the raw color string as written in the event
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Parses the event's color string.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the string is not a CSS color.
    pub fn parsed_color(&self) -> Result<Color, String> {
        Color::new(&self.color)
    }

    /// Returns the relative link of the event's detail page
    pub fn link(&self) -> Option<String> {
        self.id.map(|id| format!("/event/{id}"))
    }
}

impl Scheduled for CalendarEvent {
    fn start_hour(&self) -> f32 {
        self.start_hour
    }

    fn end_hour(&self) -> f32 {
        self.end_hour
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HourValue {
    Number(f32),
    Clock(String),
}

fn deserialize_hour<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match HourValue::deserialize(deserializer)? {
        HourValue::Number(hour) => Ok(hour),
        HourValue::Clock(clock) => time::parse_clock(&clock).map_err(serde::de::Error::custom),
    }
}
