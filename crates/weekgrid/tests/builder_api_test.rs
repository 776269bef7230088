//! Integration tests for the CalendarBuilder API
//!
//! These tests verify that the public API works and is usable.

use chrono::NaiveDate;

use weekgrid::{
    CalendarBuilder, View, WeekgridError,
    config::{AppConfig, IntervalPolicy, LayoutConfig, StyleConfig, WeekStart},
    source::{SourceError, ValidationError},
};

const WEEK_SOURCE: &str = r#"
    [[events]]
    id = 1
    date = "2024-05-14"
    title = "Farmers market"
    details = "Main street"
    start_hour = "09:00"
    end_hour = "11:00"

    [[events]]
    id = 2
    date = "2024-05-14"
    title = "Story time"
    details = "Library"
    start_hour = 10
    end_hour = 12
    color = "green"

    [[events]]
    id = 3
    date = "2024-05-16"
    title = "Town hall"
    details = "Budget"
    start_hour = "18:00"
    end_hour = "20:00"
"#;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_builder_api_exists() {
    let _builder = CalendarBuilder::default();
}

#[test]
fn test_parse_events() {
    let builder = CalendarBuilder::default();
    let events = builder.parse(WEEK_SOURCE).expect("Failed to parse events");

    assert_eq!(events.len(), 3);
    assert_eq!(events[0].title(), "Farmers market");
    assert_eq!(events[1].color(), "green");
    assert_eq!(events[2].date(), ymd(2024, 5, 16));
}

#[test]
fn test_layout_week() {
    let builder = CalendarBuilder::default();
    let events = builder.parse(WEEK_SOURCE).expect("Failed to parse events");

    let week = builder.layout_week(&events, ymd(2024, 5, 15));

    assert_eq!(week.start_date(), Some(ymd(2024, 5, 12)));
    assert_eq!(week.event_count(), 3);

    let tuesday = &week.days()[2];
    let widths: Vec<f32> = tuesday
        .events()
        .iter()
        .map(|placed| placed.rect().width())
        .collect();
    assert_eq!(widths, vec![50.0, 50.0]);
    assert_eq!(week.days()[4].events()[0].rect().width(), 100.0);
}

#[test]
fn test_layout_month() {
    let builder = CalendarBuilder::default();
    let events = builder.parse(WEEK_SOURCE).expect("Failed to parse events");

    let month = builder
        .layout_month(&events, ymd(2024, 5, 20))
        .expect("Failed to lay out month");

    let busy: Vec<u32> = month
        .cells()
        .iter()
        .flatten()
        .filter(|cell| cell.has_events())
        .map(|cell| cell.day())
        .collect();
    assert_eq!(busy, vec![14, 16]);
}

#[test]
fn test_render_week_and_month() {
    let builder = CalendarBuilder::default();
    let events = builder.parse(WEEK_SOURCE).expect("Failed to parse events");

    let week = builder
        .render_svg(&events, View::Week, ymd(2024, 5, 14))
        .expect("Failed to render week");
    assert!(week.contains("<svg"), "Output should contain SVG tag");
    assert!(week.contains("</svg>"), "Output should be complete SVG");
    assert!(week.contains("Story time"));

    let month = builder
        .render_svg(&events, View::Month, ymd(2024, 5, 14))
        .expect("Failed to render month");
    assert!(month.contains("May 2024"));
    assert!(!month.contains("Story time"));
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let builder = CalendarBuilder::default();
    let result = builder.parse("[[events]\ntitle = ");

    match result {
        Err(WeekgridError::Source {
            err: SourceError::Syntax { .. },
            src,
        }) => assert!(src.starts_with("[[events]")),
        other => panic!("Expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_inverted_interval_rejected_by_default() {
    let source = r#"
        [[events]]
        date = "2024-05-14"
        title = "Backwards"
        details = "Ends before it starts"
        start_hour = 15
        end_hour = 13
    "#;

    let err = CalendarBuilder::default().parse(source).unwrap_err();
    assert!(matches!(
        err,
        WeekgridError::Source {
            err: SourceError::Validation {
                err: ValidationError::InvalidInterval { .. },
                ..
            },
            ..
        }
    ));
}

#[test]
fn test_normalize_policy_repairs_events() {
    let source = r#"
        [[events]]
        date = "2024-05-14"
        title = "Late show"
        details = "Past midnight"
        start_hour = 22
        end_hour = 26
    "#;

    let layout = LayoutConfig::default().with_interval_policy(IntervalPolicy::Normalize);
    let builder = CalendarBuilder::new(AppConfig::new(layout, StyleConfig::default()));
    let events = builder.parse(source).expect("Normalize should repair the event");

    let week = builder.layout_week(&events, ymd(2024, 5, 14));
    assert_eq!(week.hours().end(), 24.0);
    assert_eq!(week.event_count(), 1);
}

#[test]
fn test_passthrough_renders_malformed_events() {
    let source = r#"
        [[events]]
        date = "2024-05-14"
        title = "No start"
        details = "Hours lost in transit"
        start_hour = nan
        end_hour = 10

        [[events]]
        date = "2024-05-14"
        title = "Open ended"
        details = "Runs until further notice"
        start_hour = 9
        end_hour = inf

        [[events]]
        date = "2024-05-14"
        title = "Backwards"
        details = "Ends before it starts"
        start_hour = 11
        end_hour = 9

        [[events]]
        date = "2024-05-14"
        title = "Lunch"
        details = "Cafeteria"
        start_hour = 13
        end_hour = 14
    "#;

    let layout = LayoutConfig::default().with_interval_policy(IntervalPolicy::Passthrough);
    let builder = CalendarBuilder::new(AppConfig::new(layout, StyleConfig::default()));
    let events = builder.parse(source).expect("Passthrough keeps every event");
    assert_eq!(events.len(), 4);

    let week = builder
        .render_svg(&events, View::Week, ymd(2024, 5, 14))
        .expect("Failed to render week");
    assert_eq!(week.matches("class=\"event\"").count(), 2);
    assert!(week.contains("Open ended"));
    assert!(week.contains("Lunch"));
    assert!(!week.contains("No start"));
    assert!(!week.contains("Backwards"));

    let month = builder
        .render_svg(&events, View::Month, ymd(2024, 5, 14))
        .expect("Failed to render month");
    assert_eq!(month.matches("class=\"marker\"").count(), 1);
}

#[test]
fn test_out_of_range_default_hours_rejected() {
    let layout = LayoutConfig::default().with_default_hours(0.0, 1e12);
    let builder = CalendarBuilder::new(AppConfig::new(layout, StyleConfig::default()));

    let rendered = builder.render_svg(&[], View::Week, ymd(2024, 5, 14));
    assert!(matches!(rendered, Err(WeekgridError::Config(msg)) if msg.contains("default hours")));

    let parsed = builder.parse(WEEK_SOURCE);
    assert!(matches!(parsed, Err(WeekgridError::Config(_))));
}

#[test]
fn test_invalid_config_from_toml_rejected() {
    let config: AppConfig =
        toml::from_str("[layout]\ndefault_end_hour = 30\n").expect("Config should deserialize");
    let builder = CalendarBuilder::new(config);

    let result = builder.render_svg(&[], View::Month, ymd(2024, 5, 14));
    assert!(matches!(result, Err(WeekgridError::Config(_))));
}

#[test]
fn test_week_start_from_config() {
    let layout = LayoutConfig::default().with_week_start(WeekStart::Monday);
    let builder = CalendarBuilder::new(AppConfig::new(layout, StyleConfig::default()));
    let events = builder.parse(WEEK_SOURCE).expect("Failed to parse events");

    let week = builder.layout_week(&events, ymd(2024, 5, 15));
    assert_eq!(week.start_date(), Some(ymd(2024, 5, 13)));
    assert_eq!(week.end_date(), Some(ymd(2024, 5, 19)));
}

#[test]
fn test_invalid_style_is_config_error() {
    let style = StyleConfig::default().with_background_color("not-a-color");
    let builder = CalendarBuilder::new(AppConfig::new(LayoutConfig::default(), style));

    let result = builder.render_svg(&[], View::Week, ymd(2024, 5, 14));
    assert!(matches!(result, Err(WeekgridError::Config(_))));
}

#[test]
fn test_builder_reusability() {
    let builder = CalendarBuilder::default();
    let events = builder.parse(WEEK_SOURCE).expect("Failed to parse events");

    let first = builder
        .render_svg(&events, View::Week, ymd(2024, 5, 14))
        .expect("Failed to render first");
    let second = builder
        .render_svg(&events, View::Week, ymd(2024, 5, 14))
        .expect("Failed to render second");

    assert_eq!(first, second, "Rendering should be deterministic");
}
