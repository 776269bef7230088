//! SVG rendering for week views.

use std::io::Write;

use log::trace;
use svg::{Document, node::element as svg_element};

use weekgrid_core::{event::Scheduled, time};

use super::{LABEL_COLOR, Svg, grid_line, text_label};
use crate::week::{PlacedEvent, WeekLayout};

/// Width of the hour label gutter left of the first day, in pixels
const GUTTER_WIDTH: f32 = 56.0;

/// Height of the day header row, in pixels
const HEADER_HEIGHT: f32 = 32.0;

/// Inset of event text from the event's top-left corner, in pixels
const TEXT_INSET: f32 = 4.0;

/// Vertical distance between the text lines of an event
const LINE_HEIGHT: f32 = 14.0;

const CORNER_RADIUS: f32 = 4.0;
const FILL_ALPHA: f32 = 0.25;

/// Pixel box of an event
struct EventBox {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl<W: Write> Svg<W> {
    /// Renders a week layout to an SVG document.
    pub fn render_week(&self, layout: &WeekLayout<'_>) -> Document {
        let grid_height = layout.hours().total_hours() * self.hour_height;
        let grid_width = layout.days().len() as f32 * self.day_width;

        let doc = self.new_document(GUTTER_WIDTH + grid_width, HEADER_HEIGHT + grid_height);
        let mut defs = svg_element::Definitions::new();
        let mut main_group = self.content_group();

        for (row, label) in layout.hours().time_slots().iter().enumerate() {
            let y = HEADER_HEIGHT + row as f32 * self.hour_height;
            main_group = main_group
                .add(grid_line(GUTTER_WIDTH, y, GUTTER_WIDTH + grid_width, y))
                .add(
                    text_label(label, GUTTER_WIDTH - TEXT_INSET, y)
                        .set("text-anchor", "end")
                        .set("dominant-baseline", "middle")
                        .set("fill", LABEL_COLOR),
                );
        }

        for index in 0..=layout.days().len() {
            let x = GUTTER_WIDTH + index as f32 * self.day_width;
            main_group = main_group.add(grid_line(x, HEADER_HEIGHT, x, HEADER_HEIGHT + grid_height));
        }

        for (index, day) in layout.days().iter().enumerate() {
            let day_x = GUTTER_WIDTH + index as f32 * self.day_width;
            main_group = main_group.add(
                text_label(
                    &day.date().format("%a %d").to_string(),
                    day_x + self.day_width / 2.0,
                    HEADER_HEIGHT / 2.0,
                )
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle"),
            );

            for (position, placed) in day.events().iter().enumerate() {
                let clip_id = format!("event-clip-{index}-{position}");
                let event_box = self.event_box(placed, day_x, grid_height);
                trace!(
                    title = placed.event().title(),
                    x = event_box.x,
                    y = event_box.y;
                    "Rendering event"
                );

                defs = defs.add(
                    svg_element::ClipPath::new().set("id", clip_id.as_str()).add(
                        svg_element::Rectangle::new()
                            .set("x", event_box.x)
                            .set("y", event_box.y)
                            .set("width", event_box.width)
                            .set("height", event_box.height),
                    ),
                );
                main_group = main_group.add(self.render_event(placed, &event_box, &clip_id));
            }
        }

        doc.add(defs).add(main_group)
    }

    /// Converts the percentage rectangle of an event into pixels.
    ///
    /// Side-by-side events are separated by the configured column gap.
    fn event_box(&self, placed: &PlacedEvent<'_>, day_x: f32, grid_height: f32) -> EventBox {
        let rect = placed.rect();
        EventBox {
            x: day_x + rect.left() / 100.0 * self.day_width + self.column_gap / 2.0,
            y: HEADER_HEIGHT + rect.top() / 100.0 * grid_height,
            width: (rect.width() / 100.0 * self.day_width - self.column_gap).max(0.0),
            height: rect.height() / 100.0 * grid_height,
        }
    }

    fn render_event(
        &self,
        placed: &PlacedEvent<'_>,
        event_box: &EventBox,
        clip_id: &str,
    ) -> svg_element::Group {
        let event = placed.event();
        let color = self.event_color(event);
        let fill = color.with_alpha(FILL_ALPHA);

        let mut group = svg_element::Group::new().set("class", "event");
        if let Some(id) = event.id() {
            group = group.set("id", format!("event-{id}"));
        }
        if let Some(link) = event.link() {
            group = group.set("data-link", link);
        }

        let block = svg_element::Rectangle::new()
            .set("x", event_box.x)
            .set("y", event_box.y)
            .set("width", event_box.width)
            .set("height", event_box.height)
            .set("rx", CORNER_RADIUS)
            .set("fill", fill.to_string())
            .set("fill-opacity", fill.alpha())
            .set("stroke", color.to_string())
            .set("stroke-opacity", color.alpha());

        let mut text = svg_element::Group::new().set("clip-path", format!("url(#{clip_id})"));
        text = text.add(
            text_label(
                event.title(),
                event_box.x + TEXT_INSET,
                event_box.y + LINE_HEIGHT,
            )
            .set("font-weight", "bold"),
        );
        let range = format!(
            "{} - {}",
            time::format_meridiem(event.start_hour()),
            time::format_meridiem(event.end_hour())
        );
        let details = Some(event.details()).filter(|details| !details.trim().is_empty());
        let extra_lines = details.into_iter().chain([range.as_str()]);
        for (line, content) in (2..).zip(extra_lines) {
            let baseline = line as f32 * LINE_HEIGHT;
            if event_box.height < baseline + TEXT_INSET {
                break;
            }
            text = text.add(
                text_label(content, event_box.x + TEXT_INSET, event_box.y + baseline)
                    .set("fill", LABEL_COLOR),
            );
        }

        group.add(block).add(text)
    }
}
