//! Command-line argument definitions for the weekgrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the rendered view, and logging verbosity.

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use weekgrid::View;

/// Calendar view selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewArg {
    #[default]
    Week,
    Month,
}

impl From<ViewArg> for View {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Week => View::Week,
            ViewArg::Month => View::Month,
        }
    }
}

/// Command-line arguments for the weekgrid calendar renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input events file
    #[arg(help = "Path to the events file (TOML)")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Any date within the week or month to render (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Calendar view to render
    #[arg(long, value_enum, default_value_t = ViewArg::Week)]
    pub view: ViewArg,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
