/// Failures of a single backend query.
#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    /// Transport failure (connect, TLS, timeout, ...).
    #[error("request to {collection} failed: {source}")]
    Http {
        collection: String,
        source: reqwest::Error,
    },

    /// PostgREST answered with a non-success status and an error body.
    #[error("{message}")]
    Backend {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// A row could not be decoded into the expected record shape.
    #[error("invalid {collection} record: {source}")]
    Decode {
        collection: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, QueryError>;
