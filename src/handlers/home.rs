use actix_web::{web, HttpResponse};

use super::page_notice;
use crate::club_data::{self, ViewState};
use crate::errors::{render_status, AppError};
use crate::models::event::{self, HIGHLIGHT_COUNT};
use crate::templates_structs::{EventCardView, HomeTemplate, PageContext};
use crate::Backend;

/// GET / — about copy plus the next few upcoming events.
pub async fn index(backend: web::Data<Backend>) -> Result<HttpResponse, AppError> {
    let state = club_data::load(backend.get_ref()).await;
    let (notice, status) = page_notice(&state, "Loading events...");
    let ctx = PageContext::build("/", state.ready().map(|data| &data.settings));

    let highlights = match &state {
        ViewState::Ready(data) => event::highlights(&data.events, HIGHLIGHT_COUNT)
            .iter()
            .map(EventCardView::from)
            .collect(),
        _ => Vec::new(),
    };

    render_status(status, HomeTemplate { ctx, notice, highlights })
}
