//! Overlap clustering.
//!
//! Groups a day's events into connected components of the "overlaps in
//! time" relation. Events are addressed by their index in the input slice,
//! so identity never depends on where a record lives in memory.

use std::collections::VecDeque;

use weekgrid_core::event::Scheduled;

/// Returns the indices of `events` in traversal order: by start hour
/// ascending, then by end hour descending.
///
/// The sort is stable, so events with identical spans keep their input order.
pub(super) fn traversal_order<E: Scheduled>(events: &[E]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (events[a].span(), events[b].span());
        a.start()
            .total_cmp(&b.start())
            .then_with(|| b.end().total_cmp(&a.end()))
    });
    order
}

/// Splits `events` into overlap clusters.
///
/// Two events belong to the same cluster if they overlap, or if a chain of
/// pairwise overlaps connects them. Each cluster lists input indices in
/// breadth-first discovery order, and clusters are returned in the order
/// their first event appears in [`traversal_order`].
///
/// # Examples
///
/// ```
/// use weekgrid::layout::clusters;
/// use weekgrid_core::geometry::Span;
///
/// let events = [Span::new(9.0, 11.0), Span::new(13.0, 14.0), Span::new(10.0, 12.0)];
/// assert_eq!(clusters(&events), vec![vec![0, 2], vec![1]]);
/// ```
pub fn clusters<E: Scheduled>(events: &[E]) -> Vec<Vec<usize>> {
    let order = traversal_order(events);
    let mut visited = vec![false; events.len()];
    let mut groups = Vec::new();

    for &seed in &order {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        let mut group = Vec::new();
        let mut queue = VecDeque::from([seed]);

        while let Some(current) = queue.pop_front() {
            group.push(current);
            let span = events[current].span();

            for &other in &order {
                if !visited[other] && span.overlaps(events[other].span()) {
                    visited[other] = true;
                    queue.push_back(other);
                }
            }
        }

        groups.push(group);
    }

    groups
}
