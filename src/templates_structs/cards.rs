use crate::models::event::{Event, EventStatus};
use crate::models::member::Member;
use crate::models::record::{clock_time, long_date};

/// Shown in place of the date when an event has none.
const INVALID_DATE: &str = "Invalid Date";

/// One event tile on the home and events pages.
pub struct EventCardView {
    pub title: String,
    pub description: String,
    pub image: String,
    pub when: String,
    pub venue: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    /// Only upcoming events offer registration.
    pub register_href: Option<String>,
}

impl From<&Event> for EventCardView {
    fn from(e: &Event) -> Self {
        let upcoming = e.status == EventStatus::Upcoming;
        EventCardView {
            title: e.title.clone(),
            description: e.description.clone(),
            image: e.image.clone(),
            when: e
                .date
                .as_ref()
                .map_or_else(|| INVALID_DATE.to_string(), |d| format!("{} at {}", long_date(d), clock_time(d))),
            venue: e.venue.clone(),
            status_label: e.status.label(),
            status_class: if upcoming { "upcoming" } else { "past" },
            register_href: upcoming.then(|| format!("/register?eventId={}", e.id)),
        }
    }
}

pub struct MemberCardView {
    pub name: String,
    pub role: String,
    pub portrait: String,
}

impl From<&Member> for MemberCardView {
    fn from(m: &Member) -> Self {
        MemberCardView {
            name: m.name.clone(),
            role: m.role.clone(),
            portrait: m.portrait().to_string(),
        }
    }
}
