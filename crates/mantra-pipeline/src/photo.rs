//! Photo acquisition from an Unsplash-style random-photo endpoint.
//!
//! One GET per fetch, `orientation=landscape`, with the topic list either
//! supplied by the caller or defaulting to [`DEFAULT_QUERY`]. Randomization
//! among matches is the upstream API's job, not ours.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result, Service};

/// Topic list used when the caller supplies no query.
pub const DEFAULT_QUERY: &str = "nature,landscape,peaceful";

/// Metadata for one landscape photograph.
///
/// `full_url` is the only field the pipeline consumes downstream; the rest
/// is kept for display and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    /// Upstream photo identifier.
    pub id: String,
    /// Full-resolution source URL.
    pub full_url: String,
    /// Pixel width of the original.
    pub width: u32,
    /// Pixel height of the original.
    pub height: u32,
    /// Author-supplied description, when present.
    pub description: Option<String>,
}

/// Source of landscape photographs.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Fetch one random photo matching `query` (or the default topics).
    async fn fetch_photo(&self, query: Option<&str>) -> Result<PhotoRef>;
}

/// Wire shape of the random-photo endpoint response.
#[derive(Debug, Deserialize)]
struct PhotoBody {
    id: String,
    urls: PhotoUrls,
    width: u32,
    height: u32,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    full: String,
}

/// Pick the query actually sent upstream. Blank caller input falls back to
/// the default topics rather than an empty filter.
fn effective_query(query: Option<&str>) -> &str {
    match query {
        Some(q) if !q.trim().is_empty() => q,
        _ => DEFAULT_QUERY,
    }
}

/// [`PhotoSource`] backed by the Unsplash API.
#[derive(Debug, Clone)]
pub struct UnsplashSource {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl UnsplashSource {
    /// Create a photo source for `base_url` authenticating with
    /// `access_key`. The key is checked per call, before any request.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_key: access_key.into(),
        }
    }
}

#[async_trait]
impl PhotoSource for UnsplashSource {
    async fn fetch_photo(&self, query: Option<&str>) -> Result<PhotoRef> {
        if self.access_key.is_empty() {
            return Err(Error::missing("Unsplash access key"));
        }

        let url = format!("{}/photos/random", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client_id", self.access_key.as_str()),
                ("orientation", "landscape"),
                ("query", effective_query(query)),
            ])
            .send()
            .await
            .map_err(|e| Error::upstream(Service::Photo, None, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::upstream(Service::Photo, Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            return Err(Error::upstream(
                Service::Photo,
                Some(status.as_u16()),
                body,
            ));
        }

        let parsed: PhotoBody = serde_json::from_str(&body).map_err(|e| {
            Error::upstream(
                Service::Photo,
                Some(status.as_u16()),
                format!("unparseable body ({e}): {body}"),
            )
        })?;

        tracing::debug!(
            photo_id = %parsed.id,
            width = parsed.width,
            height = parsed.height,
            "fetched photo"
        );

        Ok(PhotoRef {
            id: parsed.id,
            full_url: parsed.urls.full,
            width: parsed.width,
            height: parsed.height,
            description: parsed.description,
        })
    }
}
