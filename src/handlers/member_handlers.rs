use actix_web::{web, HttpResponse};

use super::page_notice;
use crate::club_data;
use crate::errors::{render_status, AppError};
use crate::models::member::partition_members;
use crate::templates_structs::{MemberCardView, MembersTemplate, PageContext};
use crate::Backend;

fn cards(members: &[crate::models::member::Member]) -> Vec<MemberCardView> {
    members.iter().map(MemberCardView::from).collect()
}

/// GET /members — faculty coordinators, then student coordinators.
pub async fn list(backend: web::Data<Backend>) -> Result<HttpResponse, AppError> {
    let state = club_data::load(backend.get_ref()).await;
    let (notice, status) = page_notice(&state, "Loading club members...");
    let ctx = PageContext::build("/members", state.ready().map(|data| &data.settings));

    let roster = state
        .ready()
        .map(|data| partition_members(&data.members))
        .unwrap_or_default();

    let tmpl = MembersTemplate {
        ctx,
        notice,
        faculty: cards(&roster.faculty),
        students: cards(&roster.students),
    };
    render_status(status, tmpl)
}
