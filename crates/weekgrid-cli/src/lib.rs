//! CLI logic for the weekgrid calendar renderer.
//!
//! This module contains the core CLI logic: loading configuration and
//! events, then writing the rendered calendar to the output file.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, ViewArg};

use std::fs;

use chrono::Local;
use log::info;

use weekgrid::{CalendarBuilder, WeekgridError};

/// Run the weekgrid CLI application
///
/// This function processes the events file through the weekgrid pipeline
/// and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `WeekgridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Events file errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), WeekgridError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing events"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let builder = CalendarBuilder::new(app_config);
    let events = builder.parse(&source)?;

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let svg = builder.render_svg(&events, args.view.into(), date)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
