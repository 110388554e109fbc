use super::types::{Event, EventFilter, EventStatus};

/// Number of events highlighted on the home page.
pub const HIGHLIGHT_COUNT: usize = 3;

/// Events admitted by `filter`, in input order.
pub fn filter_events(events: &[Event], filter: EventFilter) -> Vec<Event> {
    events
        .iter()
        .filter(|e| filter.admits(e.status))
        .cloned()
        .collect()
}

/// The one ordering every listing uses: most recent first, undated events
/// last. Stable, so events sharing a timestamp keep the backend's order.
pub fn sort_newest_first(events: &mut [Event]) {
    events.sort_by(|a, b| b.date.cmp(&a.date));
}

/// What the events page shows for `filter`.
pub fn listing(events: &[Event], filter: EventFilter) -> Vec<Event> {
    let mut shown = filter_events(events, filter);
    sort_newest_first(&mut shown);
    shown
}

/// Up to `limit` upcoming events, most recent first.
pub fn highlights(events: &[Event], limit: usize) -> Vec<Event> {
    let mut upcoming = listing(events, EventFilter::Upcoming);
    upcoming.truncate(limit);
    debug_assert!(upcoming.iter().all(|e| e.status == EventStatus::Upcoming));
    upcoming
}
