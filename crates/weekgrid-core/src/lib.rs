//! Weekgrid Core Types
//!
//! This crate provides the foundational types shared by the weekgrid layout
//! engine and its frontends. It includes:
//!
//! - **Events**: The [`event::Scheduled`] seam and the concrete [`event::CalendarEvent`] record
//! - **Geometry**: Hour spans and percentage rectangles ([`geometry`] module)
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Time**: Conversions between decimal hours and clock strings ([`time`] module)

pub mod color;
pub mod event;
pub mod geometry;
pub mod time;
