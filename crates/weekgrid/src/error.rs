//! Error types for weekgrid operations.
//!
//! This module provides the main error type [`WeekgridError`] which wraps
//! the error conditions of every stage: loading events, date arithmetic,
//! configuration and export.

use std::io;

use thiserror::Error;

use crate::{calendar::CalendarError, source::SourceError};

/// The main error type for weekgrid operations.
///
/// # Diagnostic Variants
///
/// The `Source` variant keeps the text of the events file next to the error,
/// so that frontends can point at the offending event.
#[derive(Debug, Error)]
pub enum WeekgridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Source { err: SourceError, src: String },

    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for WeekgridError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl WeekgridError {
    /// Create a new `Source` error with the associated events file text.
    pub fn new_source_error(err: SourceError, src: impl Into<String>) -> Self {
        Self::Source {
            err,
            src: src.into(),
        }
    }
}
