//! Loading and validating events files.
//!
//! An events file is a TOML document with an array of `[[events]]` tables:
//!
//! ```toml
//! [[events]]
//! date = "2024-05-14"
//! title = "Farmers market"
//! details = "Main street parking lot"
//! start_hour = "09:00"
//! end_hour = 12.5
//! color = "green"
//! ```
//!
//! Loading runs in two steps. Syntax and record checks always apply: every
//! event needs a non-blank title and details. The time range of each event
//! is then checked against the configured [`IntervalPolicy`], since the
//! layout engine itself accepts any pair of numbers.

use std::ops::Range;

use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;
use toml::Spanned;

use weekgrid_core::{
    event::{CalendarEvent, Scheduled},
    geometry::{HOURS_PER_DAY, Span},
};

use crate::config::{IntervalPolicy, LayoutConfig};

/// A problem with a single event record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("event #{index} `{title}` has an invalid time range {start}..{end}")]
    InvalidInterval {
        index: usize,
        title: String,
        start: f32,
        end: f32,
    },

    #[error("event #{index} is missing a {field}")]
    MissingField { index: usize, field: &'static str },
}

impl ValidationError {
    /// Returns a suggestion for fixing the problem
    pub fn help(&self) -> &'static str {
        match self {
            Self::InvalidInterval { .. } => {
                "end_hour must be after start_hour, both within 0-24; \
                 set `interval_policy = \"normalize\"` to repair such events instead"
            }
            Self::MissingField { .. } => "title and details are required for every event",
        }
    }
}

/// Errors produced while reading an events file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("invalid events file: {message}")]
    Syntax {
        message: String,
        span: Option<Range<usize>>,
    },

    #[error("{err}")]
    Validation {
        err: ValidationError,
        span: Option<Range<usize>>,
    },
}

impl SourceError {
    /// Returns the byte range of the offending text, if known
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::Syntax { span, .. } | Self::Validation { span, .. } => span.clone(),
        }
    }

    /// Returns a suggestion for fixing the problem, if there is one
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::Syntax { .. } => None,
            Self::Validation { err, .. } => Some(err.help()),
        }
    }
}

impl From<ValidationError> for SourceError {
    fn from(err: ValidationError) -> Self {
        Self::Validation { err, span: None }
    }
}

#[derive(Deserialize)]
struct EventsDocument {
    #[serde(default)]
    events: Vec<Spanned<CalendarEvent>>,
}

fn parse_document(source: &str) -> Result<EventsDocument, SourceError> {
    toml::from_str(source).map_err(|err| SourceError::Syntax {
        message: err.message().to_string(),
        span: err.span(),
    })
}

fn check_required_fields(index: usize, event: &CalendarEvent) -> Result<(), ValidationError> {
    let missing = if event.title().trim().is_empty() {
        Some("title")
    } else if event.details().trim().is_empty() {
        Some("details")
    } else {
        None
    };

    match missing {
        Some(field) => Err(ValidationError::MissingField { index, field }),
        None => Ok(()),
    }
}

/// Parses an events file without applying any interval policy.
///
/// # Errors
///
/// Returns [`SourceError::Syntax`] for malformed TOML or event records of the
/// wrong shape, and [`SourceError::Validation`] for events without a title
/// or details.
pub fn parse_events(source: &str) -> Result<Vec<CalendarEvent>, SourceError> {
    let document = parse_document(source)?;

    document
        .events
        .into_iter()
        .enumerate()
        .map(|(index, spanned)| {
            let span = spanned.span();
            let event = spanned.into_inner();
            check_required_fields(index, &event).map_err(|err| SourceError::Validation {
                err,
                span: Some(span),
            })?;
            Ok(event)
        })
        .collect()
}

/// Parses an events file and applies the interval policy of `config`.
///
/// Validation errors point at the table of the offending event.
///
/// # Errors
///
/// See [`parse_events`] and [`apply_policy`].
pub fn load_events(source: &str, config: &LayoutConfig) -> Result<Vec<CalendarEvent>, SourceError> {
    let document = parse_document(source)?;
    let policy = config.interval_policy();
    let mut events = Vec::with_capacity(document.events.len());

    for (index, spanned) in document.events.into_iter().enumerate() {
        let span = spanned.span();
        let event = spanned.into_inner();

        let checked = check_required_fields(index, &event)
            .and_then(|()| check_interval(index, event, policy, config.minimum_duration()));
        match checked {
            Ok(event) => events.push(event),
            Err(err) => {
                return Err(SourceError::Validation {
                    err,
                    span: Some(span),
                });
            }
        }
    }

    info!(events = events.len(), policy:? = policy; "Events loaded");
    Ok(events)
}

/// Applies an [`IntervalPolicy`] to already parsed events.
///
/// - [`IntervalPolicy::Reject`] fails on the first event whose span is not
///   well formed and within 0-24.
/// - [`IntervalPolicy::Normalize`] repairs such events, see [`normalize_span`].
///   Events with non-finite hours cannot be repaired and are rejected.
/// - [`IntervalPolicy::Passthrough`] keeps every event as is.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInterval`] naming the first event that
/// the policy cannot accept.
pub fn apply_policy(
    events: Vec<CalendarEvent>,
    policy: IntervalPolicy,
    minimum_duration: f32,
) -> Result<Vec<CalendarEvent>, ValidationError> {
    events
        .into_iter()
        .enumerate()
        .map(|(index, event)| check_interval(index, event, policy, minimum_duration))
        .collect()
}

fn check_interval(
    index: usize,
    event: CalendarEvent,
    policy: IntervalPolicy,
    minimum_duration: f32,
) -> Result<CalendarEvent, ValidationError> {
    let span = event.span();
    if span.is_within_day() {
        return Ok(event);
    }

    let invalid = |event: &CalendarEvent| ValidationError::InvalidInterval {
        index,
        title: event.title().to_string(),
        start: span.start(),
        end: span.end(),
    };

    match policy {
        IntervalPolicy::Reject => Err(invalid(&event)),
        IntervalPolicy::Normalize => match normalize_span(span, minimum_duration) {
            Some(normalized) => {
                debug!(
                    index,
                    title = event.title(),
                    start = normalized.start(),
                    end = normalized.end();
                    "Normalized event interval"
                );
                Ok(event.with_span(normalized))
            }
            None => Err(invalid(&event)),
        },
        IntervalPolicy::Passthrough => {
            warn!(
                index,
                title = event.title(),
                start = span.start(),
                end = span.end();
                "Passing malformed event interval to layout"
            );
            Ok(event)
        }
    }
}

/// Repairs a span so it lies within one day and has positive length.
///
/// Both ends are clamped to 0-24. An empty or inverted result is stretched
/// to `minimum_duration`, ending no later than 24:00. Returns `None` if
/// either end is not finite.
///
/// # Examples
///
/// ```
/// use weekgrid::source::normalize_span;
/// use weekgrid_core::geometry::Span;
///
/// assert_eq!(normalize_span(Span::new(22.0, 26.0), 0.25), Some(Span::new(22.0, 24.0)));
/// assert_eq!(normalize_span(Span::new(9.0, 9.0), 0.25), Some(Span::new(9.0, 9.25)));
/// assert_eq!(normalize_span(Span::new(f32::NAN, 9.0), 0.25), None);
/// ```
pub fn normalize_span(span: Span, minimum_duration: f32) -> Option<Span> {
    if !span.start().is_finite() || !span.end().is_finite() {
        return None;
    }

    let start = span.start().clamp(0.0, HOURS_PER_DAY);
    let end = span.end().clamp(0.0, HOURS_PER_DAY);
    if end > start {
        return Some(Span::new(start, end));
    }

    let end = (start + minimum_duration).min(HOURS_PER_DAY);
    if end > start {
        Some(Span::new(start, end))
    } else {
        Some(Span::new((end - minimum_duration).max(0.0), end))
    }
}
