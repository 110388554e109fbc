use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::page_notice;
use crate::club_data;
use crate::errors::{render_status, AppError};
use crate::models::event::{self, EventFilter};
use crate::templates_structs::{EventCardView, EventsTemplate, FilterTab, PageContext};
use crate::Backend;

#[derive(Debug, Deserialize)]
pub struct EventsParams {
    pub filter: Option<String>,
}

/// GET /events?filter=upcoming|past|all
pub async fn list(
    backend: web::Data<Backend>,
    params: web::Query<EventsParams>,
) -> Result<HttpResponse, AppError> {
    let filter = EventFilter::from_param(params.filter.as_deref());

    let state = club_data::load(backend.get_ref()).await;
    let (notice, status) = page_notice(&state, "Loading events...");
    let ctx = PageContext::build("/events", state.ready().map(|data| &data.settings));

    let events = state
        .ready()
        .map(|data| {
            event::listing(&data.events, filter)
                .iter()
                .map(EventCardView::from)
                .collect()
        })
        .unwrap_or_default();

    let tmpl = EventsTemplate {
        ctx,
        notice,
        tabs: FilterTab::all(filter),
        filter_name: filter.as_str(),
        events,
    };
    render_status(status, tmpl)
}
