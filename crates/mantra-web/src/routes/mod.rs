//! Route definitions for the poster site.
//!
//! ## Routes
//!
//! - `GET /` - Poster page
//! - `POST /new` - Generate a new poster, redirect to `/`
//! - `GET /print` - Printable poster document
//! - `GET /health` - Health check (JSON)

mod health;
mod poster;
mod print;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the complete poster site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(poster::poster_page))
        .route("/new", post(poster::new_poster))
        .route("/print", get(print::print_page))
        .route("/health", get(health::health_check))
        .with_state(state)
}
