#![forbid(unsafe_code)]

//! Lumen waitlist API - records landing-page signups
//!
//! One POST endpoint backed by a uniqueness-constrained SQLite table,
//! plus a health probe for deploy checks. Validation failures surface to
//! the caller; persistence failures are logged and kept generic.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

mod handlers;
pub mod signup;
pub mod store;

pub use store::{NewSignup, StoreError, WaitlistStore};

pub const CRATE_NAME: &str = "lumen-waitlist-api";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WaitlistStore>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/waitlist", post(handlers::submit_signup))
        .with_state(state)
}
