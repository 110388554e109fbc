pub mod event_handlers;
pub mod home;
pub mod info_handlers;
pub mod member_handlers;
pub mod registration_handlers;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::club_data::ViewState;
use crate::errors::{render_status, AppError};
use crate::templates_structs::{Notice, NotFoundTemplate, PageContext};

/// Register every page route. Static files and the 404 fallback are wired
/// in `main` so tests can mount the pages alone.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::index))
        .route("/events", web::get().to(event_handlers::list))
        .route("/members", web::get().to(member_handlers::list))
        .route("/join", web::get().to(info_handlers::join))
        .route("/contact", web::get().to(info_handlers::contact))
        .route("/register", web::get().to(registration_handlers::show));
}

/// Notice and HTTP status for a page whose content depends on `state`.
/// Ready pages get no notice; failed ones answer 502 since the backend,
/// not the visitor, is at fault.
fn page_notice<T>(state: &ViewState<T>, loading_text: &str) -> (Option<Notice>, StatusCode) {
    match state {
        ViewState::Ready(_) => (None, StatusCode::OK),
        ViewState::Error(message) => (Some(Notice::error(message)), StatusCode::BAD_GATEWAY),
        ViewState::Loading => (Some(Notice::loading(loading_text)), StatusCode::OK),
    }
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    let tmpl = NotFoundTemplate {
        ctx: PageContext::build("", None),
    };
    render_status(StatusCode::NOT_FOUND, tmpl)
}
