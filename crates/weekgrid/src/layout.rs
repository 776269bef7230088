//! Day layout engine.
//!
//! Turns the events of a single calendar day into side-by-side columns so
//! that events overlapping in time never cover each other. The computation
//! runs in two phases:
//!
//! 1. [`clusters`] groups events that are connected by time overlaps.
//! 2. [`pack_columns`] assigns the events of each cluster to columns using
//!    first-fit in start order.
//!
//! Every event of a cluster then gets the same width, `100 / columns`, and
//! is shifted right by its column index times that width. Clusters never
//! share columns, so an event that overlaps nothing always spans the full
//! day column.
//!
//! The engine does not validate its input. Inverted, empty or non-finite
//! spans are laid out by the same arithmetic without panicking; rejecting or
//! repairing them is the job of [`crate::source::apply_policy`].

mod cluster;
mod columns;

pub use cluster::clusters;
pub use columns::pack_columns;

use log::{debug, trace};

use weekgrid_core::{event::Scheduled, geometry::Rect};

/// Full width of a day column, in percent.
const FULL_WIDTH: f32 = 100.0;

/// An event together with its horizontal placement inside the day column.
#[derive(Debug)]
pub struct LaidOutEvent<'a, E> {
    event: &'a E,
    column: usize,
    column_count: usize,
    rect: Rect,
}

impl<'a, E> LaidOutEvent<'a, E> {
    fn new(event: &'a E, column: usize, column_count: usize) -> Self {
        let width = FULL_WIDTH / column_count as f32;
        Self {
            event,
            column,
            column_count,
            rect: Rect::horizontal(column as f32 * width, width),
        }
    }

    /// Get a reference to the original event
    pub fn event(&self) -> &'a E {
        self.event
    }

    /// Offset from the left edge of the day column, in percent
    pub fn left(&self) -> f32 {
        self.rect.left()
    }

    /// Width within the day column, in percent
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    /// Zero-based column index inside the event's overlap cluster
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of columns opened for the event's overlap cluster
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Horizontal placement as a [`Rect`] with zero vertical extent
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl<E> Clone for LaidOutEvent<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for LaidOutEvent<'_, E> {}

impl<E: Scheduled> Scheduled for LaidOutEvent<'_, E> {
    fn start_hour(&self) -> f32 {
        self.event.start_hour()
    }

    fn end_hour(&self) -> f32 {
        self.event.end_hour()
    }
}

/// Lays out the events of one day.
///
/// Returns exactly one [`LaidOutEvent`] per input event. Output is ordered
/// cluster by cluster, then column by column, then in placement order; it
/// is deterministic for a given input order.
///
/// # Examples
///
/// ```
/// use weekgrid::layout::layout_day;
/// use weekgrid_core::geometry::Span;
///
/// let events = [Span::new(9.0, 11.0), Span::new(10.0, 12.0), Span::new(13.0, 14.0)];
/// let laid_out = layout_day(&events);
///
/// let widths: Vec<f32> = laid_out.iter().map(|e| e.width()).collect();
/// assert_eq!(widths, vec![50.0, 50.0, 100.0]);
/// ```
pub fn layout_day<E: Scheduled>(events: &[E]) -> Vec<LaidOutEvent<'_, E>> {
    let groups = clusters(events);
    let mut laid_out = Vec::with_capacity(events.len());

    for (cluster_index, group) in groups.iter().enumerate() {
        let columns = pack_columns(events, group);
        let column_count = columns.len();
        trace!(cluster = cluster_index, events = group.len(), columns = column_count; "Packed overlap cluster");

        for (column, members) in columns.iter().enumerate() {
            laid_out.extend(
                members
                    .iter()
                    .map(|&index| LaidOutEvent::new(&events[index], column, column_count)),
            );
        }
    }

    debug!(events = events.len(), clusters = groups.len(); "Day layout calculated");
    laid_out
}

#[cfg(test)]
mod tests {
    use float_cmp::{approx_eq, assert_approx_eq};

    use weekgrid_core::geometry::Span;

    use super::*;

    #[test]
    fn test_layout_empty_day() {
        let events: Vec<Span> = Vec::new();
        assert!(layout_day(&events).is_empty());
    }

    #[test]
    fn test_layout_single_event_is_full_width() {
        let events = [Span::new(9.0, 10.0)];
        let laid_out = layout_day(&events);

        assert_eq!(laid_out.len(), 1);
        assert_approx_eq!(f32, laid_out[0].left(), 0.0);
        assert_approx_eq!(f32, laid_out[0].width(), 100.0);
        assert_eq!(laid_out[0].column_count(), 1);
        assert!(std::ptr::eq(laid_out[0].event(), &events[0]));
    }

    #[test]
    fn test_layout_two_identical_events_split_evenly() {
        let events = [Span::new(9.0, 10.0), Span::new(9.0, 10.0)];
        let laid_out = layout_day(&events);

        let mut lefts: Vec<f32> = laid_out.iter().map(LaidOutEvent::left).collect();
        lefts.sort_by(f32::total_cmp);
        assert_eq!(lefts, vec![0.0, 50.0]);
        assert!(laid_out.iter().all(|e| approx_eq!(f32, e.width(), 50.0)));
    }

    #[test]
    fn test_layout_overlapping_pair_and_disjoint_event() {
        let events = [
            Span::new(9.0, 11.0),
            Span::new(10.0, 12.0),
            Span::new(13.0, 14.0),
        ];
        let laid_out = layout_day(&events);
        assert_eq!(laid_out.len(), 3);

        let placement_of = |index: usize| {
            laid_out
                .iter()
                .find(|e| std::ptr::eq(e.event(), &events[index]))
                .map(|e| (e.left(), e.width()))
                .unwrap()
        };

        assert_eq!(placement_of(0), (0.0, 50.0));
        assert_eq!(placement_of(1), (50.0, 50.0));
        assert_eq!(placement_of(2), (0.0, 100.0));
    }

    #[test]
    fn test_layout_back_to_back_events_both_full_width() {
        let events = [Span::new(9.0, 10.0), Span::new(10.0, 11.0)];
        let laid_out = layout_day(&events);

        for event in &laid_out {
            assert_approx_eq!(f32, event.left(), 0.0);
            assert_approx_eq!(f32, event.width(), 100.0);
        }
    }

    #[test]
    fn test_layout_back_to_back_events_share_column_inside_cluster() {
        // The long event links both short ones into a single cluster
        let events = [
            Span::new(9.0, 11.0),
            Span::new(9.0, 10.0),
            Span::new(10.0, 11.0),
        ];
        let laid_out = layout_day(&events);

        assert!(laid_out.iter().all(|e| e.column_count() == 2));
        let second_column: Vec<_> = laid_out.iter().filter(|e| e.column() == 1).collect();
        assert_eq!(second_column.len(), 2);
    }

    #[test]
    fn test_layout_three_way_overlap() {
        let events = [Span::new(9.0, 10.0); 3];
        let laid_out = layout_day(&events);

        let mut columns: Vec<usize> = laid_out.iter().map(LaidOutEvent::column).collect();
        columns.sort_unstable();
        assert_eq!(columns, vec![0, 1, 2]);
        for event in &laid_out {
            assert_approx_eq!(f32, event.width(), 100.0 / 3.0);
            assert_approx_eq!(f32, event.left(), event.column() as f32 * (100.0 / 3.0));
        }
    }

    #[test]
    fn test_layout_output_order_is_cluster_then_column() {
        let events = [
            Span::new(14.0, 15.0),
            Span::new(9.0, 10.0),
            Span::new(9.0, 10.0),
        ];
        let laid_out = layout_day(&events);

        let order: Vec<*const Span> = laid_out.iter().map(|e| e.event() as *const Span).collect();
        assert_eq!(
            order,
            vec![
                &events[1] as *const Span,
                &events[2] as *const Span,
                &events[0] as *const Span,
            ]
        );
    }

    #[test]
    fn test_layout_is_repeatable() {
        let events = [
            Span::new(9.0, 10.0),
            Span::new(9.0, 10.0),
            Span::new(9.5, 12.0),
            Span::new(11.0, 13.0),
        ];

        fn placements(events: &[Span]) -> Vec<(*const Span, f32, f32)> {
            layout_day(events)
                .iter()
                .map(|e| (e.event() as *const Span, e.left(), e.width()))
                .collect()
        }

        assert_eq!(placements(&events), placements(&events));
    }

    // The engine does not validate spans. These tests pin its
    // raw behavior so that any change to it is visible.

    #[test]
    fn test_layout_zero_length_event_gets_its_own_cluster() {
        let events = [Span::new(9.0, 9.0), Span::new(9.0, 9.0)];
        let laid_out = layout_day(&events);

        // Zero-length spans never overlap, and can share a column
        assert_eq!(laid_out.len(), 2);
        for event in &laid_out {
            assert_approx_eq!(f32, event.width(), 100.0);
        }
    }

    #[test]
    fn test_layout_inverted_event_is_still_placed() {
        let events = [Span::new(11.0, 9.0), Span::new(9.5, 10.5)];
        let laid_out = layout_day(&events);

        assert_eq!(laid_out.len(), 2);
        assert!(laid_out.iter().all(|e| e.width() > 0.0));
    }

    #[test]
    fn test_layout_non_finite_hours_do_not_panic() {
        let events = [
            Span::new(f32::NAN, 10.0),
            Span::new(9.0, f32::INFINITY),
            Span::new(9.0, 10.0),
        ];
        let laid_out = layout_day(&events);
        assert_eq!(laid_out.len(), 3);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use weekgrid_core::geometry::Span;

    use super::*;

    /// An event that remembers its position in the input.
    #[derive(Debug, Clone, Copy)]
    struct Slot {
        id: usize,
        span: Span,
    }

    impl Scheduled for Slot {
        fn start_hour(&self) -> f32 {
            self.span.start()
        }

        fn end_hour(&self) -> f32 {
            self.span.end()
        }
    }

    // ===================
    // Strategies
    // ===================

    /// Well-formed spans on quarter-hour boundaries, so ties and touching
    /// endpoints come up often.
    fn span_strategy() -> impl Strategy<Value = Span> {
        (0u8..92, 1u8..16).prop_map(|(start, len)| {
            let start = f32::from(start) * 0.25;
            let end = (start + f32::from(len) * 0.25).min(24.0);
            Span::new(start, end)
        })
    }

    fn day_strategy() -> impl Strategy<Value = Vec<Slot>> {
        prop::collection::vec(span_strategy(), 0..24).prop_map(|spans| {
            spans
                .into_iter()
                .enumerate()
                .map(|(id, span)| Slot { id, span })
                .collect()
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every input event appears exactly once in the output.
    fn check_output_is_permutation(events: &[Slot]) -> Result<(), TestCaseError> {
        let mut ids: Vec<usize> = layout_day(events).iter().map(|e| e.event().id).collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..events.len()).collect::<Vec<_>>());
        Ok(())
    }

    /// Events that overlap in time share a cluster and never share a column.
    fn check_overlapping_events_get_distinct_columns(
        events: &[Slot],
    ) -> Result<(), TestCaseError> {
        let laid_out = layout_day(events);
        for (i, a) in laid_out.iter().enumerate() {
            for b in &laid_out[i + 1..] {
                if a.overlaps(b) {
                    prop_assert_eq!(a.column_count(), b.column_count());
                    prop_assert_ne!(a.column(), b.column());
                    let (a, b) = (a.rect(), b.rect());
                    prop_assert!(
                        a.horizontally_disjoint(b),
                        "rects {:?} and {:?} overlap horizontally",
                        a,
                        b
                    );
                }
            }
        }
        Ok(())
    }

    /// Events placed in the same column of the same cluster never overlap.
    fn check_columns_hold_disjoint_events(events: &[Slot]) -> Result<(), TestCaseError> {
        for cluster in clusters(events) {
            for column in pack_columns(events, &cluster) {
                for (i, &a) in column.iter().enumerate() {
                    for &b in &column[i + 1..] {
                        let (a, b) = (events[a].span, events[b].span);
                        prop_assert!(a.start() >= b.end() || b.start() >= a.end());
                    }
                }
            }
        }
        Ok(())
    }

    /// Width and offset follow from the column index and count.
    fn check_proportional_sizing(events: &[Slot]) -> Result<(), TestCaseError> {
        for event in layout_day(events) {
            prop_assert!(event.column() < event.column_count());
            let width = 100.0 / event.column_count() as f32;
            prop_assert!(approx_eq!(f32, event.width(), width));
            prop_assert!(approx_eq!(f32, event.left(), event.column() as f32 * width));
            prop_assert!(event.left() >= 0.0 && event.left() < 100.0);
            prop_assert!(event.width() > 0.0 && event.width() <= 100.0);
        }
        Ok(())
    }

    /// An event that overlaps nothing spans the whole day column.
    fn check_isolated_events_are_full_width(events: &[Slot]) -> Result<(), TestCaseError> {
        for event in layout_day(events) {
            let isolated = events
                .iter()
                .filter(|other| other.id != event.event().id)
                .all(|other| !other.overlaps(event.event()));
            if isolated {
                prop_assert!(approx_eq!(f32, event.width(), 100.0));
                prop_assert!(approx_eq!(f32, event.left(), 0.0));
            }
        }
        Ok(())
    }

    /// Laying out the same input twice yields the same placements.
    fn check_layout_is_deterministic(events: &[Slot]) -> Result<(), TestCaseError> {
        let first: Vec<_> = layout_day(events)
            .iter()
            .map(|e| (e.event().id, e.left(), e.width()))
            .collect();
        let second: Vec<_> = layout_day(events)
            .iter()
            .map(|e| (e.event().id, e.left(), e.width()))
            .collect();
        prop_assert_eq!(first, second);
        Ok(())
    }

    /// N copies of the same span split the column into N equal parts.
    fn check_identical_events_split_evenly(span: Span, count: usize) -> Result<(), TestCaseError> {
        let events: Vec<Slot> = (0..count).map(|id| Slot { id, span }).collect();
        let laid_out = layout_day(&events);

        let mut columns: Vec<usize> = laid_out.iter().map(|e| e.column()).collect();
        columns.sort_unstable();
        prop_assert_eq!(columns, (0..count).collect::<Vec<_>>());
        for event in &laid_out {
            prop_assert!(approx_eq!(f32, event.width(), 100.0 / count as f32));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn output_is_permutation(events in day_strategy()) {
            check_output_is_permutation(&events)?;
        }

        #[test]
        fn overlapping_events_get_distinct_columns(events in day_strategy()) {
            check_overlapping_events_get_distinct_columns(&events)?;
        }

        #[test]
        fn columns_hold_disjoint_events(events in day_strategy()) {
            check_columns_hold_disjoint_events(&events)?;
        }

        #[test]
        fn proportional_sizing(events in day_strategy()) {
            check_proportional_sizing(&events)?;
        }

        #[test]
        fn isolated_events_are_full_width(events in day_strategy()) {
            check_isolated_events_are_full_width(&events)?;
        }

        #[test]
        fn layout_is_deterministic(events in day_strategy()) {
            check_layout_is_deterministic(&events)?;
        }

        #[test]
        fn identical_events_split_evenly(span in span_strategy(), count in 1usize..12) {
            check_identical_events_split_evenly(span, count)?;
        }
    }
}
