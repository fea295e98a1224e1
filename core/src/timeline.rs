use crate::utils::time::iso_to_unixepoch;
use common::events::TimelineEvent;

/// Sort key for one event. Events whose timestamp never parsed map to epoch 0
/// and group at the start, and ties fall back to the original artifact value
/// so the ordering is a total, reproducible one
fn event_sort_key(event: &TimelineEvent) -> (i64, String) {
    (
        iso_to_unixepoch(&event.timestamp),
        event.timestamp_raw.clone(),
    )
}

/// Produce a chronologically ordered copy of the merged event set.
/// The input is never mutated and the sort is stable, so equal keys keep
/// their extraction order
pub(crate) fn build_timeline(events: &[TimelineEvent]) -> Vec<TimelineEvent> {
    let mut timeline = events.to_vec();
    timeline.sort_by_key(event_sort_key);
    timeline
}
