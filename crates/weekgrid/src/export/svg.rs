//! SVG export backend.
//!
//! [`SvgBuilder`] resolves the [`StyleConfig`] into concrete colors and
//! dimensions once; [`Svg`] then renders week and month layouts into
//! [`svg::Document`]s and writes them to its output.

mod month;
mod week;

use std::io::Write;

use log::{debug, error, warn};
use svg::{Document, node::Text as SvgText, node::element as svg_element};

use weekgrid_core::{color::Color, event::CalendarEvent};

use crate::{
    config::StyleConfig,
    export::{self, Exporter},
    month::MonthLayout,
    week::WeekLayout,
};

/// Blank space around the rendered calendar, in pixels
const MARGIN: f32 = 16.0;

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE: f32 = 12.0;
const GRID_LINE_COLOR: &str = "#d0d0d0";
const LABEL_COLOR: &str = "#555555";

/// Builder for [`Svg`] exporters.
pub struct SvgBuilder<W> {
    output: W,
    style: StyleConfig,
}

impl<W: Write> SvgBuilder<W> {
    /// Creates a builder writing to `output` with the default style
    pub fn new(output: W) -> Self {
        Self {
            output,
            style: StyleConfig::default(),
        }
    }

    /// Set the style configuration
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color cannot be parsed.
    pub fn build(self) -> Result<Svg<W>, export::Error> {
        let background = self.style.background_color().map_err(export::Error::Render)?;
        let default_event_color = self
            .style
            .default_event_color()
            .map_err(export::Error::Render)?;

        Ok(Svg {
            output: self.output,
            background,
            default_event_color,
            column_gap: self.style.column_gap(),
            hour_height: self.style.hour_height(),
            day_width: self.style.day_width(),
        })
    }
}

/// SVG exporter for week and month layouts.
pub struct Svg<W> {
    output: W,
    background: Option<Color>,
    default_event_color: Color,
    column_gap: f32,
    hour_height: f32,
    day_width: f32,
}

impl<W: Write> Svg<W> {
    /// Consumes the exporter and returns its output
    pub fn into_inner(self) -> W {
        self.output
    }

    /// Creates an empty document of `width` x `height` content pixels plus
    /// margins, with the background applied.
    fn new_document(&self, width: f32, height: f32) -> Document {
        let svg_width = MARGIN.mul_add(2.0, width);
        let svg_height = MARGIN.mul_add(2.0, height);
        debug!(width = svg_width, height = svg_height; "Final SVG dimensions");

        let doc = Document::new()
            .set("viewBox", format!("0 0 {svg_width} {svg_height}"))
            .set("width", svg_width)
            .set("height", svg_height);

        match &self.background {
            Some(color) => doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", svg_width)
                    .set("height", svg_height)
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            ),
            None => doc,
        }
    }

    /// Creates the group all calendar content is drawn into
    fn content_group(&self) -> svg_element::Group {
        svg_element::Group::new().set("transform", format!("translate({MARGIN}, {MARGIN})"))
    }

    /// Returns the color an event is drawn with.
    ///
    /// Events with an unparsable color are drawn with the configured default.
    fn event_color(&self, event: &CalendarEvent) -> Color {
        event.parsed_color().unwrap_or_else(|err| {
            warn!(title = event.title(), err:% = err; "Using default event color");
            self.default_event_color
        })
    }

    /// Writes an SVG document to the output
    fn write_document(&mut self, doc: Document) -> Result<(), export::Error> {
        if let Err(err) = write!(self.output, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }
        Ok(())
    }
}

/// Creates a text element with a single line of content.
fn text_label(content: &str, x: f32, y: f32) -> svg_element::Text {
    svg_element::Text::new("")
        .set("x", x)
        .set("y", y)
        .set("font-family", FONT_FAMILY)
        .set("font-size", FONT_SIZE)
        .add(SvgText::new(content))
}

/// Creates a grid line from `(x1, y1)` to `(x2, y2)`.
fn grid_line(x1: f32, y1: f32, x2: f32, y2: f32) -> svg_element::Line {
    svg_element::Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", GRID_LINE_COLOR)
        .set("stroke-width", 1)
}

impl<W: Write> Exporter for Svg<W> {
    fn export_week(&mut self, layout: &WeekLayout<'_>) -> Result<(), export::Error> {
        let doc = self.render_week(layout);
        debug!("SVG document rendered");

        self.write_document(doc)
    }

    fn export_month(&mut self, layout: &MonthLayout) -> Result<(), export::Error> {
        let doc = self.render_month(layout);
        debug!("SVG document rendered");

        self.write_document(doc)
    }
}
