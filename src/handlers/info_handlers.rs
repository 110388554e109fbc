use actix_web::{web, HttpResponse};

use super::page_notice;
use crate::club_data;
use crate::errors::{render_status, AppError};
use crate::site;
use crate::templates_structs::{ContactTemplate, JoinTemplate, PageContext};
use crate::Backend;

/// GET /join — membership benefits and the external join form.
pub async fn join(backend: web::Data<Backend>) -> Result<HttpResponse, AppError> {
    let state = club_data::load(backend.get_ref()).await;
    let (notice, status) = page_notice(&state, "Loading club data...");
    let settings = state.ready().map(|data| &data.settings);
    let ctx = PageContext::build("/join", settings);

    let join_href = settings
        .map(|s| s.join_form_link.trim())
        .filter(|link| !link.is_empty())
        .unwrap_or("#")
        .to_string();

    let tmpl = JoinTemplate {
        ctx,
        notice,
        benefits: site::MEMBER_BENEFITS.to_vec(),
        join_href,
    };
    render_status(status, tmpl)
}

/// GET /contact — email, phone, social links and the campus map.
pub async fn contact(backend: web::Data<Backend>) -> Result<HttpResponse, AppError> {
    let state = club_data::load(backend.get_ref()).await;
    let (notice, status) = page_notice(&state, "Loading contact details...");
    let ctx = PageContext::build("/contact", state.ready().map(|data| &data.settings));

    let tmpl = ContactTemplate {
        ctx,
        notice,
        map_embed: site::CAMPUS_MAP_EMBED,
    };
    render_status(status, tmpl)
}
