//! Poster page and refresh handlers.
//!
//! `GET /` generates a poster only when none exists yet, so reloading the
//! page never mints another hosted copy. The explicit refresh is `POST /new`
//! followed by a redirect back to `/` (post/redirect/get), which keeps the
//! upload to at most one per refresh even across browser reloads.

use axum::extract::State;
use axum::response::Redirect;
use maud::Markup;

use crate::error::WebError;
use crate::render;
use crate::state::AppState;

/// Render the poster page, generating the first poster on demand.
pub async fn poster_page(State(state): State<AppState>) -> Result<Markup, WebError> {
    if state.current.read().await.is_none() {
        tracing::debug!("no current poster, generating");
        state.refresh(None).await?;
    }

    let guard = state.current.read().await;
    let current = guard
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("poster missing after refresh"))?;

    Ok(render::poster::poster_page(current, &state.config.site_name))
}

/// Generate a new poster and redirect to the poster page.
pub async fn new_poster(State(state): State<AppState>) -> Result<Redirect, WebError> {
    state.refresh(None).await?;
    Ok(Redirect::to("/"))
}
