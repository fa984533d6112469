//! Poster assembly: the orchestrator tying sources and host together.
//!
//! One [`PosterPipeline::generate`] call owns its whole result. The two
//! source fetches run concurrently and join before the upload; nothing
//! outlives the call and nothing is shared between concurrent calls, so
//! overlapping refreshes simply race to completion independently.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::host::{CloudinaryHost, ImageHost};
use crate::photo::{PhotoSource, UnsplashSource};
use crate::quote::{AffirmationApi, QuoteSource};

/// A fully assembled poster: transformed display URL plus quote text.
///
/// Re-created on every refresh; fields are never mixed across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterResult {
    /// Fully qualified display URL with the transformation recipe embedded.
    pub display_url: String,
    /// The quote text, verbatim from the source.
    pub quote_text: String,
}

/// Orchestrator for one poster generation.
pub struct PosterPipeline {
    quotes: Arc<dyn QuoteSource>,
    photos: Arc<dyn PhotoSource>,
    host: Arc<dyn ImageHost>,
}

impl PosterPipeline {
    /// Assemble a pipeline from explicit components.
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        photos: Arc<dyn PhotoSource>,
        host: Arc<dyn ImageHost>,
    ) -> Self {
        Self {
            quotes,
            photos,
            host,
        }
    }

    /// Assemble the production pipeline: affirmation endpoint, Unsplash,
    /// Cloudinary, all sharing one HTTP client.
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        let quotes = Arc::new(AffirmationApi::new(
            client.clone(),
            config.quote_endpoint.clone(),
        ));
        let photos = Arc::new(UnsplashSource::new(
            client.clone(),
            config.photo_api_url.clone(),
            config.photo_access_key.clone(),
        ));
        let host = Arc::new(CloudinaryHost::new(client, config));
        Self::new(quotes, photos, host)
    }

    /// Generate one poster.
    ///
    /// Fetches the quote and the photo concurrently and waits for both; the
    /// first failure fails the whole call before any upload happens. The
    /// photo is then uploaded and the display URL built from the returned
    /// identifier. No retries at any stage.
    pub async fn generate(&self, query: Option<&str>) -> Result<PosterResult> {
        let (quote, photo) =
            tokio::try_join!(self.quotes.fetch_quote(), self.photos.fetch_photo(query))?;

        let asset = self.host.upload(&photo.full_url).await?;
        let display_url = self.host.build_url(&asset.public_id)?;

        tracing::info!(
            photo_id = %photo.id,
            public_id = %asset.public_id,
            "poster generated"
        );

        Ok(PosterResult {
            display_url,
            quote_text: quote.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::mock::{MockImageHost, MockPhotoSource, MockQuoteSource};
    use crate::photo::PhotoRef;

    fn photo_ref(id: &str) -> PhotoRef {
        PhotoRef {
            id: id.to_string(),
            full_url: format!("https://img/{id}.jpg"),
            width: 1600,
            height: 1200,
            description: None,
        }
    }

    #[tokio::test]
    async fn generate_assembles_result_from_single_run() {
        let host = Arc::new(MockImageHost::returning("affirmations/p1"));
        let pipeline = PosterPipeline::new(
            Arc::new(MockQuoteSource::returning("You are capable of amazing things")),
            Arc::new(MockPhotoSource::returning(photo_ref("p1"))),
            host.clone(),
        );

        let poster = pipeline.generate(None).await.unwrap();
        assert_eq!(poster.quote_text, "You are capable of amazing things");
        assert_eq!(poster.display_url, "https://img.mock/affirmations/p1");
        assert_eq!(host.uploads(), vec!["https://img/p1.jpg".to_string()]);
    }

    #[tokio::test]
    async fn generate_passes_query_to_photo_source() {
        let photos = Arc::new(MockPhotoSource::returning(photo_ref("p2")));
        let pipeline = PosterPipeline::new(
            Arc::new(MockQuoteSource::returning("Breathe")),
            photos.clone(),
            Arc::new(MockImageHost::returning("affirmations/p2")),
        );

        pipeline.generate(Some("mountains")).await.unwrap();
        pipeline.generate(None).await.unwrap();
        assert_eq!(
            photos.queries(),
            vec![Some("mountains".to_string()), None]
        );
    }

    #[tokio::test]
    async fn quote_failure_skips_upload() {
        let host = Arc::new(MockImageHost::returning("affirmations/p1"));
        let pipeline = PosterPipeline::new(
            Arc::new(MockQuoteSource::failing()),
            Arc::new(MockPhotoSource::returning(photo_ref("p1"))),
            host.clone(),
        );

        let err = pipeline.generate(None).await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(host.upload_count(), 0);
    }

    #[tokio::test]
    async fn photo_failure_skips_upload() {
        let host = Arc::new(MockImageHost::returning("affirmations/p1"));
        let pipeline = PosterPipeline::new(
            Arc::new(MockQuoteSource::returning("Shine on")),
            Arc::new(MockPhotoSource::failing()),
            host.clone(),
        );

        let err = pipeline.generate(None).await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(host.upload_count(), 0);
    }

    #[tokio::test]
    async fn upload_failure_propagates() {
        let pipeline = PosterPipeline::new(
            Arc::new(MockQuoteSource::returning("Keep going")),
            Arc::new(MockPhotoSource::returning(photo_ref("p3"))),
            Arc::new(MockImageHost::failing()),
        );

        let err = pipeline.generate(None).await.unwrap_err();
        assert!(err.is_upstream());
        assert!(err.to_string().contains("image host"));
    }

    #[tokio::test]
    async fn missing_host_credentials_fail_before_any_request() {
        // Real host, no credentials: the preflight check must reject the
        // upload without touching the network.
        let host = Arc::new(CloudinaryHost::new(
            reqwest::Client::new(),
            &Config::default(),
        ));
        let pipeline = PosterPipeline::new(
            Arc::new(MockQuoteSource::returning("Trust yourself")),
            Arc::new(MockPhotoSource::returning(photo_ref("p4"))),
            host,
        );

        let err = pipeline.generate(None).await.unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
