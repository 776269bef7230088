//! SVG rendering for month views.

use std::io::Write;

use svg::{Document, node::element as svg_element};

use super::{LABEL_COLOR, Svg, text_label};
use crate::{
    calendar::weekday_initials,
    month::{DAYS_PER_WEEK, MonthLayout},
};

/// Side length of one day cell, in pixels
const CELL_SIZE: f32 = 40.0;

/// Height of the month heading, in pixels
const HEADING_HEIGHT: f32 = 32.0;

/// Height of the weekday initials row, in pixels
const INITIALS_HEIGHT: f32 = 24.0;

const MARKER_RADIUS: f32 = 3.0;

impl<W: Write> Svg<W> {
    /// Renders a month layout to an SVG document.
    pub fn render_month(&self, layout: &MonthLayout) -> Document {
        let grid_width = DAYS_PER_WEEK as f32 * CELL_SIZE;
        let grid_top = HEADING_HEIGHT + INITIALS_HEIGHT;
        let height = grid_top + layout.row_count() as f32 * CELL_SIZE;

        let doc = self.new_document(grid_width, height);
        let mut main_group = self.content_group().add(
            text_label(
                &layout.month_start().format("%B %Y").to_string(),
                0.0,
                HEADING_HEIGHT / 2.0,
            )
            .set("dominant-baseline", "middle")
            .set("font-weight", "bold"),
        );

        for (column, initial) in weekday_initials(layout.first_day()).iter().enumerate() {
            main_group = main_group.add(
                text_label(
                    initial,
                    (column as f32 + 0.5) * CELL_SIZE,
                    HEADING_HEIGHT + INITIALS_HEIGHT / 2.0,
                )
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("fill", LABEL_COLOR),
            );
        }

        for (row, cells) in layout.rows().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let Some(cell) = cell else {
                    continue;
                };
                let center_x = (column as f32 + 0.5) * CELL_SIZE;
                let top = grid_top + row as f32 * CELL_SIZE;

                let mut day = svg_element::Group::new().set("class", "day").add(
                    text_label(&cell.day().to_string(), center_x, top + CELL_SIZE / 2.0)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
                if cell.has_events() {
                    let color = self.default_event_color;
                    day = day.add(
                        svg_element::Circle::new()
                            .set("class", "marker")
                            .set("cx", center_x)
                            .set("cy", top + CELL_SIZE - 2.0 * MARKER_RADIUS)
                            .set("r", MARKER_RADIUS)
                            .set("fill", color.to_string())
                            .set("fill-opacity", color.alpha()),
                    );
                }
                main_group = main_group.add(day);
            }
        }

        doc.add(main_group)
    }
}
