//! Mantra Web - HTTP front end for affirmation posters.
//!
//! This crate is presentation glue around the [`mantra_pipeline`] core: it
//! renders the current poster as an HTML page, offers the refresh trigger
//! and a printable document, and maps pipeline errors to user-visible error
//! pages. No pipeline logic lives here.
//!
//! # Routes
//!
//! - `GET /` - poster page (generates one on first visit)
//! - `POST /new` - refresh: generate a new poster, redirect to `/`
//! - `GET /print` - standalone printable poster document
//! - `GET /health` - health check (JSON)

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
