use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::models::record::{lenient_timestamp, non_blank, null_as_default, optional_timestamp, RecordId};

/// Lifecycle stage, maintained by the club's editors in the backend.
/// Never derived from the event date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

impl EventStatus {
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Past => "Past",
        }
    }
}

/// A row of the `events` collection as listed on the home and events pages.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// `None` when the column is empty or not a date the site understands.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub venue: String,
    #[serde(default, deserialize_with = "non_blank")]
    pub venue_location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub form_link: String,
    pub status: EventStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "non_blank")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub iframe: Option<String>,
}

/// The columns the registration page asks for. Every field may be `NULL`.
///
/// `details` and `iframe` hold editor-authored HTML that is rendered
/// verbatim; the backend is trusted to hold only sanitized markup.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDetail {
    pub id: RecordId,
    #[serde(default, deserialize_with = "non_blank")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "non_blank")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub venue_location: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub form_link: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub iframe: Option<String>,
}

/// Which slice of events the events page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    Upcoming,
    Past,
    All,
}

impl EventFilter {
    /// Tab order on the events page.
    pub const TABS: [EventFilter; 3] = [EventFilter::Upcoming, EventFilter::Past, EventFilter::All];

    /// Parse the `filter` query parameter; anything unrecognised means the default.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("past") => EventFilter::Past,
            Some("all") => EventFilter::All,
            _ => EventFilter::Upcoming,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventFilter::Upcoming => "upcoming",
            EventFilter::Past => "past",
            EventFilter::All => "all",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            EventFilter::Upcoming => "Upcoming Events",
            EventFilter::Past => "Past Events",
            EventFilter::All => "All Events",
        }
    }

    pub fn admits(self, status: EventStatus) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Upcoming => status == EventStatus::Upcoming,
            EventFilter::Past => status == EventStatus::Past,
        }
    }
}
