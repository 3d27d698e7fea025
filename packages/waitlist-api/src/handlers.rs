//! HTTP handlers for the landing-page API

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::signup::{clean_source, is_valid_email, normalize_email, SignupPayload};
use crate::store::{NewSignup, StoreError};
use crate::AppState;

pub(crate) async fn healthz() -> Response {
    (StatusCode::OK, Json(json!({"status": "ok"}))).into_response()
}

/// POST /api/waitlist
pub(crate) async fn submit_signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Parsed by hand so a malformed payload gets the generic 500 contract
    // instead of the framework's rejection format.
    let payload: SignupPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "rejected malformed waitlist body");
            return internal_error("Something went wrong. Please try again later.");
        }
    };

    let Some(email) = normalize_email(payload.email.as_deref()) else {
        return bad_request("Email is required.");
    };
    if !is_valid_email(&email) {
        return bad_request("Please provide a valid email address.");
    }

    let signup = NewSignup {
        email,
        source: clean_source(payload.source.as_deref()),
        ip_address: first_forwarded_for(&headers),
        user_agent: header_value(&headers, "user-agent"),
    };

    match state.store.insert_signup(&signup).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "You're on the waitlist! We'll reach out with updates soon."
            })),
        )
            .into_response(),
        Err(StoreError::DuplicateEmail) => (
            StatusCode::OK,
            Json(json!({
                "message": "You're already on the waitlist. We'll be in touch soon!"
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to insert waitlist signup");
            internal_error("We couldn't add you to the waitlist. Please try again.")
        }
    }
}

/// First hop of `x-forwarded-for`, or None when the header is absent.
fn first_forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"error": message}))).into_response()
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": message})),
    )
        .into_response()
}
