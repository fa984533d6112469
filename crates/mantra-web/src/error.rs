//! Error types for the web front end.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service. The page links back to `/`
//! so the user can retry manually; nothing is retried automatically.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Web service error type.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// A pipeline failure, surfaced unchanged.
    #[error(transparent)]
    Pipeline(#[from] mantra_pipeline::Error),

    /// Internal server error (rendering, state).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl WebError {
    /// The HTTP status this error maps to: Configuration and internal
    /// failures are ours (500), upstream failures are a bad gateway (502).
    fn status(&self) -> StatusCode {
        match self {
            Self::Pipeline(err) if err.is_upstream() => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, message) = match &self {
            Self::Pipeline(err) if err.is_configuration() => {
                tracing::error!(error = %err, "configuration error");
                (
                    "Not Configured",
                    format!("The service is missing a required setting: {err}."),
                )
            }
            Self::Pipeline(err) => {
                tracing::error!(error = %err, "upstream error");
                (
                    "Poster Unavailable",
                    format!("A remote service failed while generating the poster: {err}."),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " — Mantra" }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Try again" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
