use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::{error, warn};
use serde::Deserialize;

use crate::club_data::ViewState;
use crate::errors::{render_status, AppError};
use crate::models::club_settings::{self, ClubSettings};
use crate::models::event::{self, EventDetail};
use crate::supabase::{QueryError, RecordSource};
use crate::templates_structs::{EventDetailView, Notice, PageContext, RegisterTemplate};
use crate::Backend;

#[derive(Debug, Deserialize)]
pub struct RegisterParams {
    #[serde(rename = "eventId")]
    pub event_id: Option<String>,
}

/// Why an event detail could not be shown.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("Event ID not provided.")]
    MissingId,
    #[error("Event not found.")]
    NotFound,
    #[error(transparent)]
    Query(QueryError),
}

impl LookupError {
    fn status(&self) -> StatusCode {
        match self {
            LookupError::MissingId => StatusCode::BAD_REQUEST,
            LookupError::NotFound => StatusCode::NOT_FOUND,
            LookupError::Query(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Single-record lookup keyed by the `eventId` query parameter.
pub async fn lookup_event<S: RecordSource>(
    source: &S,
    event_id: Option<&str>,
) -> Result<EventDetail, LookupError> {
    let id = event_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(LookupError::MissingId)?;
    match event::find_detail(source, id).await {
        Ok(Some(detail)) => Ok(detail),
        Ok(None) => Err(LookupError::NotFound),
        Err(e) => {
            error!("Error fetching event details: {e}");
            Err(LookupError::Query(e))
        }
    }
}

/// Settings for the footer only; a failure here just shortens the footer.
async fn footer_settings<S: RecordSource>(source: &S) -> Option<ClubSettings> {
    match club_settings::find(source).await {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!("Footer settings unavailable: {e}");
            None
        }
    }
}

/// GET /register?eventId=<id> — one event's full details and signup embed.
pub async fn show(
    backend: web::Data<Backend>,
    params: web::Query<RegisterParams>,
) -> Result<HttpResponse, AppError> {
    let outcome = lookup_event(backend.get_ref(), params.event_id.as_deref()).await;
    let status = outcome.as_ref().err().map_or(StatusCode::OK, LookupError::status);
    let state = ViewState::default().resolve(outcome);

    let settings = footer_settings(backend.get_ref()).await;
    let ctx = PageContext::build("/register", settings.as_ref());

    let (notice, detail) = match state {
        ViewState::Ready(detail) => (None, Some(EventDetailView::from(detail))),
        ViewState::Error(message) => (Some(Notice::error(&message)), None),
        ViewState::Loading => (Some(Notice::loading("Loading event details...")), None),
    };

    render_status(status, RegisterTemplate { ctx, notice, detail })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::supabase::memory::MemorySource;

    fn backend() -> MemorySource {
        MemorySource::default().with_table(
            "events",
            vec![json!({
                "id": 1,
                "title": "Rust Workshop",
                "date": "2025-01-01T10:00:00+00:00",
                "venue": "Lab 2",
                "venue_location": "https://maps.example/lab2",
                "details": "<ul><li>Bring a laptop</li></ul>"
            })],
        )
    }

    #[tokio::test]
    async fn missing_id_is_an_error_without_a_query() {
        let source = backend();
        let err = lookup_event(&source, Some("  ")).await.unwrap_err();
        assert_eq!(err.to_string(), "Event ID not provided.");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(source.requested().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_settles_in_the_not_found_state() {
        let source = backend();
        let outcome = lookup_event(&source, Some("404")).await;
        let state = ViewState::default().resolve(outcome);
        assert!(!state.is_loading());
        assert!(state.ready().is_none());
        assert_eq!(state.error(), Some("Event not found."));
    }

    #[tokio::test]
    async fn backend_failures_keep_their_message() {
        let source = MemorySource::default().failing("events", "JWT expired");
        let err = lookup_event(&source, Some("1")).await.unwrap_err();
        assert_eq!(err.to_string(), "JWT expired");
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn known_id_is_ready() {
        let source = backend();
        let detail = lookup_event(&source, Some("1")).await.expect("detail");
        let view = EventDetailView::from(detail);
        assert_eq!(view.title, "Rust Workshop");
        assert_eq!(view.date.as_deref(), Some("January 1, 2025"));
        assert_eq!(view.venue.map(|v| v.href).as_deref(), Some("https://maps.example/lab2"));
        assert_eq!(view.details_html.as_deref(), Some("<ul><li>Bring a laptop</li></ul>"));
        assert_eq!(
            source.requested(),
            vec!["events?select=id,title,description,date,venue,venue_location,form_link,iframe,details&id=eq.1#single".to_string()]
        );
    }
}
