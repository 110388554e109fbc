//! Read-only access to the hosted PostgREST backend.

mod cache;
mod client;
mod error;
mod query;

use std::future::Future;

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use cache::CachedSource;
pub use client::SupabaseClient;
pub use error::{QueryError, Result};
pub use query::{Direction, Query};

/// Anything that can answer a [`Query`] with raw JSON rows.
///
/// For single-row queries an empty vector means "no such row".
pub trait RecordSource {
    fn fetch(&self, query: &Query) -> impl Future<Output = Result<Vec<Value>>>;
}

fn decode<T: DeserializeOwned>(query: &Query, row: Value) -> Result<T> {
    serde_json::from_value(row).map_err(|source| QueryError::Decode {
        collection: query.collection().to_string(),
        source,
    })
}

/// Run `query` and decode the returned rows one by one. A row that does not
/// fit `T` is logged and left out; only the query itself can fail.
pub async fn fetch_all<T, S>(source: &S, query: &Query) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: RecordSource,
{
    let rows = source.fetch(query).await?;
    Ok(rows
        .into_iter()
        .filter_map(|row| match decode(query, row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("skipping row: {e}");
                None
            }
        })
        .collect())
}

/// Run a single-row `query`; `None` when the backend has no matching row.
pub async fn fetch_optional<T, S>(source: &S, query: &Query) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: RecordSource,
{
    let mut rows = source.fetch(query).await?;
    match rows.pop() {
        Some(row) => decode(query, row).map(Some),
        None => Ok(None),
    }
}


#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::memory::MemorySource;
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[tokio::test]
    async fn fetch_optional_treats_empty_as_none() {
        let source = MemorySource::default().with_table("events", vec![json!({ "id": 1 })]);
        let q = Query::table("events").eq("id", "2").single();
        let row: Option<Row> = fetch_optional(&source, &q).await.expect("fetch");
        assert_eq!(row, None);

        let q = Query::table("events").eq("id", "1").single();
        let row: Option<Row> = fetch_optional(&source, &q).await.expect("fetch");
        assert_eq!(row, Some(Row { id: 1 }));
    }

    #[tokio::test]
    async fn malformed_rows_are_skipped_not_fatal() {
        let source = MemorySource::default().with_table(
            "members",
            vec![json!({ "id": 1 }), json!({ "id": "not a number" }), json!({ "id": 3 })],
        );
        let rows: Vec<Row> = fetch_all(&source, &Query::table("members")).await.expect("fetch");
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 3 }]);
    }

    #[tokio::test]
    async fn malformed_single_row_names_the_collection() {
        let source = MemorySource::default().with_table("events", vec![json!({ "id": "not a number" })]);
        let q = Query::table("events").single();
        let err = fetch_optional::<Row, _>(&source, &q).await.unwrap_err();
        assert!(matches!(err, QueryError::Decode { .. }));
        assert!(err.to_string().starts_with("invalid events record"));
    }
}
