use crate::supabase::{self, Direction, Query, RecordSource, Result};

use super::types::{Event, EventDetail};

pub const COLLECTION: &str = "events";

const DETAIL_COLUMNS: &str = "id,title,description,date,venue,venue_location,form_link,iframe,details";

/// Every event, oldest first as stored.
pub fn all_query() -> Query {
    Query::table(COLLECTION).order("date", Direction::Ascending)
}

pub fn detail_query(id: &str) -> Query {
    Query::table(COLLECTION).select(DETAIL_COLUMNS).eq("id", id).single()
}

pub async fn find_all<S: RecordSource>(source: &S) -> Result<Vec<Event>> {
    supabase::fetch_all(source, &all_query()).await
}

/// The registration page's record, `None` if no event has this id.
pub async fn find_detail<S: RecordSource>(source: &S, id: &str) -> Result<Option<EventDetail>> {
    supabase::fetch_optional(source, &detail_query(id)).await
}
