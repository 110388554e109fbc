use std::time::Duration;

use log::debug;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Value;

use super::error::{QueryError, Result};
use super::query::Query;
use super::RecordSource;

/// Media type asking PostgREST for a bare object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// PostgREST code for "JSON object requested, multiple (or no) rows returned".
const NO_SINGLE_ROW: &str = "PGRST116";

/// Error body PostgREST returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Read-only client for a Supabase project's REST endpoint.
///
/// Wraps a [`reqwest::Client`]; every request carries the project's public
/// API key both as `apikey` and as a bearer token.
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
    api_key: String,
}

impl SupabaseClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(project_url: &str, api_key: &str, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, project_url, api_key))
    }

    /// Create a client using the provided [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, project_url: &str, api_key: &str) -> Self {
        Self {
            http,
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }
}

impl RecordSource for SupabaseClient {
    async fn fetch(&self, query: &Query) -> Result<Vec<Value>> {
        let url = format!("{}/{}", self.rest_url, query.collection());
        debug!("GET {url} {}", query.cache_key());
        let mut request = self
            .http
            .get(&url)
            .query(&query.params())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);
        if query.expects_single() {
            request = request.header(ACCEPT, SINGLE_OBJECT);
        }

        let http_err = |source| QueryError::Http {
            collection: query.collection().to_string(),
            source,
        };

        let response = request.send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = backend_error(status.as_u16(), &body);
            if query.expects_single() && is_missing_row(&err) {
                return Ok(Vec::new());
            }
            return Err(err);
        }

        let body: Value = response.json().await.map_err(http_err)?;
        Ok(match body {
            Value::Array(rows) => rows,
            Value::Null => Vec::new(),
            row => vec![row],
        })
    }
}

fn is_missing_row(err: &QueryError) -> bool {
    matches!(err, QueryError::Backend { code: Some(code), .. } if code == NO_SINGLE_ROW)
}

/// Turn a non-success response into a `QueryError`, keeping the backend's
/// own message when the body is a PostgREST error object.
fn backend_error(status: u16, body: &str) -> QueryError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { code, message: Some(message) }) => QueryError::Backend { status, code, message },
        Ok(ErrorBody { code, message: None }) => QueryError::Backend {
            status,
            code,
            message: format!("backend returned status {status}"),
        },
        Err(_) => QueryError::Backend {
            status,
            code: None,
            message: format!("backend returned status {status}"),
        },
    }
}
