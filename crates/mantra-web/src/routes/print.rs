//! Printable poster document handler.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::error::WebError;
use crate::render;
use crate::state::AppState;

/// Serve the printable document for the current poster.
///
/// Pure templating over state; never calls the pipeline. With no current
/// poster there is nothing to print, so the user is sent to `/` (which
/// generates one).
pub async fn print_page(State(state): State<AppState>) -> Result<Response, WebError> {
    let guard = state.current.read().await;
    match guard.as_ref() {
        Some(current) => Ok(render::print::print_page(current).into_response()),
        None => Ok(Redirect::to("/").into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use mantra_pipeline::mock::{MockImageHost, MockPhotoSource, MockQuoteSource};
    use mantra_pipeline::{PhotoRef, PosterPipeline};

    use crate::config::Config;

    fn mock_state() -> AppState {
        let pipeline = Arc::new(PosterPipeline::new(
            Arc::new(MockQuoteSource::returning("Breathe deeply")),
            Arc::new(MockPhotoSource::returning(PhotoRef {
                id: "p1".to_string(),
                full_url: "https://img/x.jpg".to_string(),
                width: 1600,
                height: 1200,
                description: None,
            })),
            Arc::new(MockImageHost::returning("affirmations/p1")),
        ));
        AppState::with_pipeline(
            pipeline,
            Config {
                bind_addr: "127.0.0.1:0".to_string(),
                site_name: "Mantra".to_string(),
                pipeline: mantra_pipeline::Config::default(),
            },
        )
    }

    #[tokio::test]
    async fn print_redirects_when_no_poster_exists() {
        let state = mock_state();
        let response = print_page(State(state)).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
    }

    #[tokio::test]
    async fn print_serves_document_for_current_poster() {
        let state = mock_state();
        state.refresh(None).await.unwrap();

        let response = print_page(State(state)).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
