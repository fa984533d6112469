//! Application state shared across all request handlers.

use std::sync::Arc;

use mantra_pipeline::{FeatureWord, PosterPipeline, PosterResult, derive_feature_word};
use tokio::sync::RwLock;

use crate::config::Config;

/// The most recently generated poster, held for display and printing.
///
/// Only the latest poster is retained; each refresh replaces it whole.
#[derive(Debug, Clone)]
pub struct CurrentPoster {
    /// The pipeline's output for this run.
    pub poster: PosterResult,
    /// Feature word derived from the quote text.
    pub feature_word: FeatureWord,
    /// When this poster was generated.
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The poster generation pipeline.
    pub pipeline: Arc<PosterPipeline>,

    /// Application configuration.
    pub config: Arc<Config>,

    /// The current poster, if one has been generated.
    pub current: Arc<RwLock<Option<CurrentPoster>>>,
}

impl AppState {
    /// Create application state from configuration, building the production
    /// pipeline with one shared HTTP client.
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::new();
        let pipeline = Arc::new(PosterPipeline::from_config(client, &config.pipeline));

        tracing::info!("application state initialized");

        Self::with_pipeline(pipeline, config)
    }

    /// Create application state around an existing pipeline (used by tests
    /// to inject mock components).
    pub fn with_pipeline(pipeline: Arc<PosterPipeline>, config: Config) -> Self {
        Self {
            pipeline,
            config: Arc::new(config),
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Generate a new poster and make it the current one.
    ///
    /// Derives the feature word here because typography is a presentation
    /// concern; the pipeline only produces the URL and text. Failure leaves
    /// the previous current poster in place.
    pub async fn refresh(&self, query: Option<&str>) -> Result<(), mantra_pipeline::Error> {
        let poster = self.pipeline.generate(query).await?;
        let feature_word = derive_feature_word(&poster.quote_text);

        let mut current = self.current.write().await;
        *current = Some(CurrentPoster {
            poster,
            feature_word,
            generated_at: chrono::Utc::now(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mantra_pipeline::PhotoRef;
    use mantra_pipeline::mock::{MockImageHost, MockPhotoSource, MockQuoteSource};

    fn mock_state(quote: MockQuoteSource) -> AppState {
        let pipeline = Arc::new(PosterPipeline::new(
            Arc::new(quote),
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
    async fn refresh_stores_poster_and_feature_word() {
        let state = mock_state(MockQuoteSource::returning("You are capable of amazing things"));
        assert!(state.current.read().await.is_none());

        state.refresh(None).await.unwrap();

        let guard = state.current.read().await;
        let current = guard.as_ref().unwrap();
        assert_eq!(current.poster.quote_text, "You are capable of amazing things");
        assert_eq!(
            current.poster.display_url,
            "https://img.mock/affirmations/p1"
        );
        // Longest word in the quote, decorated for display.
        assert_eq!(current.feature_word.raw, "CAPABLE");
        assert_eq!(current.feature_word.decorated, "C · A · P · A · B · L · E");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_poster() {
        let state = mock_state(MockQuoteSource::returning("Keep going"));
        state.refresh(None).await.unwrap();

        let failing = mock_state(MockQuoteSource::failing());
        // Move the stored poster into the failing state's slot to simulate a
        // refresh after a successful run.
        *failing.current.write().await = state.current.read().await.clone();

        let err = failing.refresh(None).await.unwrap_err();
        assert!(err.is_upstream());

        let guard = failing.current.read().await;
        assert_eq!(guard.as_ref().unwrap().poster.quote_text, "Keep going");
    }
}
