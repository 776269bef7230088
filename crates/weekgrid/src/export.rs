//! Export functionality for weekgrid calendars.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting laid-out calendars into output formats. It is the final stage in
//! the weekgrid processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Events File
//!     ↓ load + interval policy
//! Calendar Events
//!     ↓ layout (per day, then week or month)
//! WeekLayout / MonthLayout
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`WeekgridError::Export`] at the crate
//! boundary.
//!
//! [`WeekgridError::Export`]: crate::WeekgridError::Export

/// SVG export backend.
pub mod svg;

use crate::{month::MonthLayout, week::WeekLayout};

/// Abstraction for calendar export backends.
///
/// Implementors convert a positioned week or month into a specific output
/// format and write it to their output.
pub trait Exporter {
    /// Exports a week view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing the output fails.
    fn export_week(&mut self, layout: &WeekLayout<'_>) -> Result<(), Error>;

    /// Exports a month view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing the output fails.
    fn export_month(&mut self, layout: &MonthLayout) -> Result<(), Error>;
}

/// Errors that can occur during calendar export.
///
/// This type is converted into [`WeekgridError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`WeekgridError::Export`]: crate::WeekgridError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
