use askama::Template;

use super::{EventCardView, Notice, PageContext};
use crate::models::event::{EventDetail, EventFilter};
use crate::models::record::long_date;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub notice: Option<Notice>,
    pub highlights: Vec<EventCardView>,
}

pub struct FilterTab {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

impl FilterTab {
    pub fn all(current: EventFilter) -> Vec<FilterTab> {
        EventFilter::TABS
            .iter()
            .map(|&f| FilterTab {
                label: f.tab_label(),
                href: format!("/events?filter={}", f.as_str()),
                active: f == current,
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub ctx: PageContext,
    pub notice: Option<Notice>,
    pub tabs: Vec<FilterTab>,
    /// `upcoming`, `past` or `all`, as used in the empty-list message.
    pub filter_name: &'static str,
    pub events: Vec<EventCardView>,
}

pub struct VenueLink {
    pub name: String,
    pub href: String,
}

/// Registration page body. `details_html` and `iframe_html` are emitted
/// without escaping.
pub struct EventDetailView {
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub venue: Option<VenueLink>,
    pub form_link: Option<String>,
    pub details_html: Option<String>,
    pub iframe_html: Option<String>,
}

impl From<EventDetail> for EventDetailView {
    fn from(d: EventDetail) -> Self {
        let venue = match (d.venue, d.venue_location) {
            (Some(name), Some(href)) => Some(VenueLink { name, href }),
            _ => None,
        };
        EventDetailView {
            title: d.title.unwrap_or_else(|| "Event Details".to_string()),
            description: d.description,
            date: d.date.as_ref().map(long_date),
            venue,
            form_link: d.form_link,
            details_html: d.details,
            iframe_html: d.iframe,
        }
    }
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub ctx: PageContext,
    pub notice: Option<Notice>,
    pub detail: Option<EventDetailView>,
}
