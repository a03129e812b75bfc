//! Route table and request handlers.
//!
//! Thin glue over the inner crates: every domain error is recovered here
//! as a notice plus a redirect to a sensible prior page.

use crate::pages;
use crate::state::AppState;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Build the gateway router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/scan_rfid", get(scan_rfid))
        .route("/scan_rfid_arduino", get(scan_rfid_arduino))
        .route("/verify_user", get(verify_user))
        .route("/add_user", get(add_user))
        .route("/verify_user_action", post(verify_user_action))
        .route("/add_user_action", post(add_user_action))
        .route("/parking_status", get(parking_status))
        .route("/check_verification", get(check_verification))
        .route("/open_gate", post(open_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Redirect carrying a user-visible notice in the query string.
fn notice_redirect(path: &str, notice: &str) -> Redirect {
    Redirect::to(&format!("{path}?notice={}", pages::encode_notice(notice)))
}

#[derive(Debug, Deserialize)]
struct NoticeQuery {
    notice: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VerifyForm {
    rfid_tag: String,
}

#[derive(Debug, Deserialize)]
struct AddUserForm {
    rfid_tag: String,
    name: String,
}

/// `GET /` — home page with the current matched identity.
async fn index(State(state): State<AppState>, Query(query): Query<NoticeQuery>) -> Html<String> {
    let verification = state.coordinator.current_verification().await;
    Html(pages::index(&verification, query.notice.as_deref()))
}

/// `GET /scan_rfid` — one exclusive read from the local reader.
async fn scan_rfid(State(state): State<AppState>) -> Response {
    match state.scanner.scan_once().await {
        Ok(tag) => Json(json!({ "rfid_tag": tag })).into_response(),
        Err(e) => {
            warn!(%e, "local scan failed");
            notice_redirect("/", "Failed to scan RFID tag.").into_response()
        }
    }
}

/// `GET /scan_rfid_arduino` — bounded wait for a bus-delivered scan.
async fn scan_rfid_arduino(State(state): State<AppState>) -> Response {
    match state.coordinator.await_scan(state.bus_scan_wait).await {
        Some(scan) => Json(json!({ "rfid_tag": scan.tag })).into_response(),
        None => {
            warn!(
                wait_ms = state.bus_scan_wait.as_millis() as u64,
                "no bus scan arrived within the wait window"
            );
            notice_redirect("/verify_user", "Failed to receive RFID tag from Arduino.")
                .into_response()
        }
    }
}

/// `GET /verify_user` — manual verification form.
async fn verify_user(Query(query): Query<NoticeQuery>) -> Html<String> {
    Html(pages::verify_user(query.notice.as_deref()))
}

/// `GET /add_user` — registration form.
async fn add_user(Query(query): Query<NoticeQuery>) -> Html<String> {
    Html(pages::add_user(query.notice.as_deref()))
}

/// `POST /verify_user_action` — verify a directly submitted tag.
async fn verify_user_action(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<VerifyForm>,
) -> Redirect {
    use lotgate_verify::VerifyError;

    match state.coordinator.verify_by_tag(&form.rfid_tag).await {
        Ok(true) => Redirect::to("/parking_status"),
        Ok(false) => notice_redirect("/verify_user", "RFID Tag not found. Please try again."),
        Err(VerifyError::InvalidTag(_)) => {
            notice_redirect("/verify_user", "Invalid RFID tag format.")
        }
        Err(e @ VerifyError::DirectoryUnavailable(_)) => {
            warn!(%e, "verification could not reach the directory");
            notice_redirect("/verify_user", "User directory unavailable. Try again.")
        }
    }
}

/// `POST /add_user_action` — register a tag/name pair.
///
/// No uniqueness check: duplicate tags are permitted, and lookups will
/// keep returning the earliest registration.
async fn add_user_action(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<AddUserForm>,
) -> Redirect {
    use lotgate_core::TagId;
    use lotgate_directory::UserDirectory;

    let tag = match TagId::new(&form.rfid_tag) {
        Ok(tag) => tag,
        Err(_) => return notice_redirect("/add_user", "Invalid RFID tag format."),
    };

    match state.directory.add_user(&tag, &form.name).await {
        Ok(_) => notice_redirect("/", &format!("User {} added successfully!", form.name)),
        Err(e) => {
            warn!(%e, "user registration failed");
            notice_redirect("/add_user", "Failed to add user. Try again.")
        }
    }
}

/// `GET /parking_status` — status page with the current matched identity.
async fn parking_status(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Html<String> {
    let verification = state.coordinator.current_verification().await;
    Html(pages::parking_status(&verification, query.notice.as_deref()))
}

/// `GET /check_verification` — pure poll of the verification state.
async fn check_verification(State(state): State<AppState>) -> Json<serde_json::Value> {
    let verification = state.coordinator.current_verification().await;
    match verification.identity {
        Some(identity) => Json(json!({ "status": "verified", "name": identity.name })),
        None => Json(json!({ "status": "not_verified" })),
    }
}

/// `POST /open_gate` — fire-and-forget gate trigger.
///
/// Always reports the trigger immediately; there is no actuator feedback
/// loop to wait on.
async fn open_gate(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.gate.open().await;
    Json(json!({ "status": "Gate opening triggered" }))
}
