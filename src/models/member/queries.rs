use crate::supabase::{self, Direction, Query, RecordSource, Result};

use super::types::Member;

pub const COLLECTION: &str = "members";

/// Every member, alphabetical.
pub fn all_query() -> Query {
    Query::table(COLLECTION)
        .select("id,name,role,image_url,type")
        .order("name", Direction::Ascending)
}

pub async fn find_all<S: RecordSource>(source: &S) -> Result<Vec<Member>> {
    supabase::fetch_all(source, &all_query()).await
}
