//! First-fit column packing within one overlap cluster.

use weekgrid_core::event::Scheduled;

/// Assigns the events of one cluster to display columns.
///
/// Members are visited by start hour (stable, so ties keep cluster order).
/// Each event goes into the first column, in creation order, whose last
/// event ends no later than the event starts; otherwise a new column is
/// opened. Returned columns hold input indices in placement order.
pub fn pack_columns<E: Scheduled>(events: &[E], cluster: &[usize]) -> Vec<Vec<usize>> {
    let mut members = cluster.to_vec();
    members.sort_by(|&a, &b| events[a].start_hour().total_cmp(&events[b].start_hour()));

    let mut columns: Vec<Vec<usize>> = Vec::new();
    for index in members {
        let start = events[index].start_hour();
        let free_column = columns.iter_mut().find(|column| {
            column
                .last()
                .is_some_and(|&last| events[last].end_hour() <= start)
        });

        match free_column {
            Some(column) => column.push(index),
            None => columns.push(vec![index]),
        }
    }

    columns
}
