//! Geometric primitives for calendar layouts.
//!
//! Two coordinate systems are involved:
//!
//! - [`Span`] lives on the time axis and is measured in hours since midnight.
//! - [`Rect`] lives on the day column and is measured in percent of the
//!   column's width and height, ready to be used as CSS-style positioning.

/// Latest hour a well-formed span may reach.
pub const HOURS_PER_DAY: f32 = 24.0;

/// A half-open interval of hours, `[start, end)`.
///
/// Fractional values represent minutes, so `9.5` is 9:30.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Span {
    start: f32,
    end: f32,
}

impl Span {
    /// Creates a new span. No ordering between `start` and `end` is enforced.
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Returns the start hour of the span
    pub fn start(self) -> f32 {
        self.start
    }

    /// Returns the end hour of the span
    pub fn end(self) -> f32 {
        self.end
    }

    /// Returns the length of the span in hours, negative for inverted spans
    pub fn duration(self) -> f32 {
        self.end - self.start
    }

    /// Checks whether two spans overlap.
    ///
    /// The test is half-open: spans that only touch at an endpoint do not
    /// overlap, so a 9:00-10:00 event and a 10:00-11:00 event can share a
    /// column.
    pub fn overlaps(self, other: Span) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Returns true if both ends are finite and the span has positive length
    pub fn is_well_formed(self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.end > self.start
    }

    /// Returns true if the span is well formed and lies within a single day
    pub fn is_within_day(self) -> bool {
        self.is_well_formed() && self.start >= 0.0 && self.end <= HOURS_PER_DAY
    }

    /// Intersects this span with `[lo, hi)`.
    ///
    /// Returns `None` if the intersection is empty or either end is NaN.
    /// Infinite ends are cut at the bounds.
    pub fn clamp(self, lo: f32, hi: f32) -> Option<Self> {
        if !(self.end > lo && self.start < hi) {
            return None;
        }
        let clamped = Self {
            start: self.start.max(lo),
            end: self.end.min(hi),
        };
        (clamped.end > clamped.start).then_some(clamped)
    }
}

/// Slack, in percent, allowed when comparing rectangle edges.
pub const EDGE_TOLERANCE: f32 = 1e-3;

/// A rectangle inside a day column, expressed in percentages.
///
/// `left` and `width` come from the horizontal column packing, `top` and
/// `height` from mapping the event's hours onto the visible hour range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    left: f32,
    width: f32,
    top: f32,
    height: f32,
}

impl Rect {
    /// Creates a rectangle with horizontal extent only (`top` and `height` are zero)
    pub fn horizontal(left: f32, width: f32) -> Self {
        Self {
            left,
            width,
            ..Self::default()
        }
    }

    /// Returns a copy of this rectangle with the vertical extent replaced
    pub fn with_vertical(self, top: f32, height: f32) -> Self {
        Self {
            top,
            height,
            ..self
        }
    }

    pub fn left(self) -> f32 {
        self.left
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the right edge, `left + width`
    pub fn right(self) -> f32 {
        self.left + self.width
    }

    /// Returns the bottom edge, `top + height`
    pub fn bottom(self) -> f32 {
        self.top + self.height
    }

    /// Checks that the half-open ranges `[left, right)` of both rectangles
    /// do not intersect.
    ///
    /// Edges closer than [`EDGE_TOLERANCE`] count as touching, since
    /// `col * w + w` and `(col + 1) * w` may differ in the last bit.
    pub fn horizontally_disjoint(self, other: Rect) -> bool {
        self.right() <= other.left + EDGE_TOLERANCE || other.right() <= self.left + EDGE_TOLERANCE
    }
}
