//! Colors of event blocks, month markers and the calendar background.
//!
//! Events name their color as free-form CSS text in the events file. [`Color`]
//! is the parsed form handed to the renderer.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color such as `"#ff0000"`, `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected text.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid_core::color::Color;
    ///
    /// assert!(Color::new("teal").is_ok());
    /// assert!(Color::new("sparkly").is_err());
    /// ```
    pub fn new(css: &str) -> Result<Self, String> {
        DynamicColor::from_str(css)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }

    /// Returns this color with its alpha channel replaced.
    ///
    /// Event blocks use a faded copy of the event color for the fill and the
    /// opaque color for the outline.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid_core::color::Color;
    ///
    /// let fill = Color::new("green").unwrap().with_alpha(0.25);
    /// assert_eq!(fill.alpha(), 0.25);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha channel, 0.0 for transparent up to 1.0 for opaque
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

/// Events without a color are drawn in blue.
impl Default for Color {
    fn default() -> Self {
        Self::new("blue").expect("'blue' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
