//! Shared test infrastructure: a stub PostgREST server and page helpers.
//!
//! # Stub backend
//! - `Stub::default().table(..)` seeds a collection with JSON rows
//! - `Stub::fail(..)` makes a collection answer with a PostgREST error
//! - `Stub::start()` serves it on an ephemeral port
//!
//! The stub honours `order=col.asc|desc`, `col=eq.value` and the
//! single-object `Accept` header, which is all the site uses.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

use clubsite::handlers;
use clubsite::supabase::{CachedSource, SupabaseClient};
use clubsite::Backend;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const API_KEY: &str = "test-anon-key";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

// ============================================================================
// STUB BACKEND
// ============================================================================

#[derive(Clone, Default)]
pub struct Stub {
    tables: HashMap<String, Vec<Value>>,
    failures: HashMap<String, (u16, Value)>,
    hits: Arc<Mutex<Vec<String>>>,
}

pub struct RunningStub {
    pub url: String,
    hits: Arc<Mutex<Vec<String>>>,
    handle: ServerHandle,
}

impl RunningStub {
    /// `collection?raw-query-string` for every request received, in order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().expect("hits lock").clone()
    }

    pub fn backend(&self) -> Backend {
        let client = SupabaseClient::new(&self.url, API_KEY, Duration::from_secs(5)).expect("http client");
        CachedSource::new(client, Duration::ZERO)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

impl Stub {
    pub fn table(mut self, collection: &str, rows: Vec<Value>) -> Self {
        self.tables.insert(collection.to_string(), rows);
        self
    }

    pub fn fail(mut self, collection: &str, status: u16, message: &str) -> Self {
        self.failures.insert(
            collection.to_string(),
            (status, json!({ "code": "42501", "details": null, "hint": null, "message": message })),
        );
        self
    }

    pub fn start(self) -> RunningStub {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
        let port = listener.local_addr().expect("stub addr").port();
        let hits = self.hits.clone();
        let data = web::Data::new(self);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/rest/v1/{collection}", web::get().to(serve))
        })
        .workers(1)
        .listen(listener)
        .expect("listen")
        .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        RunningStub {
            url: format!("http://127.0.0.1:{port}"),
            hits,
            handle,
        }
    }
}

fn cell(row: &Value, column: &str) -> String {
    match row.get(column) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

async fn serve(
    req: HttpRequest,
    collection: web::Path<String>,
    params: web::Query<Vec<(String, String)>>,
    stub: web::Data<Stub>,
) -> HttpResponse {
    let collection = collection.into_inner();
    stub.hits
        .lock()
        .expect("hits lock")
        .push(format!("{collection}?{}", req.query_string()));

    let has_key = req.headers().get("apikey").and_then(|v| v.to_str().ok()) == Some(API_KEY);
    let bearer = format!("Bearer {API_KEY}");
    let has_bearer = req.headers().get("authorization").and_then(|v| v.to_str().ok()) == Some(bearer.as_str());
    if !has_key || !has_bearer {
        return HttpResponse::Unauthorized().json(json!({ "message": "No API key found in request" }));
    }

    if let Some((status, body)) = stub.failures.get(&collection) {
        let status = StatusCode::from_u16(*status).expect("status");
        return HttpResponse::build(status).json(body);
    }

    let mut rows = stub.tables.get(&collection).cloned().unwrap_or_default();
    for (key, value) in params.iter() {
        match key.as_str() {
            "select" => {}
            "order" => {
                let (column, direction) = value.split_once('.').unwrap_or((value.as_str(), "asc"));
                rows.sort_by_key(|row| cell(row, column));
                if direction == "desc" {
                    rows.reverse();
                }
            }
            column => {
                let expected = value.strip_prefix("eq.").unwrap_or(value);
                rows.retain(|row| cell(row, column) == expected);
            }
        }
    }

    let single = req.headers().get("accept").and_then(|v| v.to_str().ok()) == Some(SINGLE_OBJECT);
    if single {
        if rows.len() == 1 {
            return HttpResponse::Ok().json(&rows[0]);
        }
        return HttpResponse::NotAcceptable().json(json!({
            "code": "PGRST116",
            "details": format!("The result contains {} rows", rows.len()),
            "hint": null,
            "message": "JSON object requested, multiple (or no) rows returned"
        }));
    }
    HttpResponse::Ok().json(rows)
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn event(id: i64, title: &str, status: &str, date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("About {title}"),
        "date": date,
        "venue": "Seminar Hall",
        "venue_location": null,
        "form_link": "",
        "status": status,
        "image": format!("https://img.example/{id}.jpg"),
        "details": null,
        "iframe": null
    })
}

pub fn member(id: i64, name: &str, kind: &str) -> Value {
    json!({ "id": id, "name": name, "role": "Coordinator", "image_url": "", "type": kind })
}

pub fn settings() -> Value {
    json!({
        "id": 1,
        "join_form_link": "https://forms.example/join-csi",
        "contact_email": "csi@nrcm.example",
        "phone_number": "+91 90000 12345",
        "social_media_facebook": null,
        "social_media_instagram": "https://instagram.com/csi_nrcm",
        "social_media_linkedin": "https://linkedin.com/company/csi-nrcm",
        "social_media_whatsapp": "https://chat.whatsapp.com/csi"
    })
}

/// A club with two events (one upcoming, one past), two members and settings.
pub fn seeded() -> Stub {
    Stub::default()
        .table(
            "events",
            vec![
                event(1, "Rust Bootcamp", "upcoming", "2025-01-01T10:00:00+00:00"),
                event(2, "Alumni Meetup", "past", "2024-01-01T10:00:00+00:00"),
            ],
        )
        .table("members", vec![member(1, "Dr. Rao", "faculty"), member(2, "Asha", "student")])
        .table("club_settings", vec![settings()])
}

// ============================================================================
// PAGE REQUESTS
// ============================================================================

/// GET `uri` from the site wired to `backend`; returns status and HTML.
pub async fn get_page(backend: Backend, uri: &str) -> (StatusCode, String) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(backend))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found)),
    )
    .await;
    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

/// Titles of the event cards on a page, in document order.
pub fn card_titles(html: &str) -> Vec<String> {
    let re = regex::Regex::new(r#"(?s)<article class="card event-card">.*?<h3>(.*?)</h3>"#).expect("regex");
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}

pub fn member_names(html: &str, section: &str) -> Vec<String> {
    let section_re = regex::Regex::new(&format!(r#"(?s)<section class="roster {section}">(.*?)</section>"#)).expect("regex");
    let Some(body) = section_re.captures(html).map(|c| c[1].to_string()) else {
        return Vec::new();
    };
    let name_re = regex::Regex::new(r#"(?s)<article class="card member-card">.*?<h3>(.*?)</h3>"#).expect("regex");
    name_re.captures_iter(&body).map(|c| c[1].to_string()).collect()
}
