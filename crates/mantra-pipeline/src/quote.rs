//! Quote acquisition from a remote affirmation endpoint.
//!
//! The endpoint is a single unauthenticated GET returning
//! `{"affirmation": "..."}`. A non-success status or a body that does not
//! match that shape surfaces as [`Error::Upstream`] with the offending body
//! attached.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result, Service};

/// A short affirming text string, the textual content of the poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quote text.
    pub text: String,
}

/// Source of poster quotes.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch one quote. No retries; failure propagates to the caller.
    async fn fetch_quote(&self) -> Result<Quote>;
}

/// Wire shape of the affirmation endpoint response.
#[derive(Debug, Deserialize)]
struct AffirmationBody {
    affirmation: String,
}

/// [`QuoteSource`] backed by an affirmations.dev-style endpoint.
#[derive(Debug, Clone)]
pub struct AffirmationApi {
    client: reqwest::Client,
    endpoint: String,
}

impl AffirmationApi {
    /// Create a quote source reading from `endpoint`.
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl QuoteSource for AffirmationApi {
    async fn fetch_quote(&self) -> Result<Quote> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| Error::upstream(Service::Quote, None, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::upstream(Service::Quote, Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            return Err(Error::upstream(
                Service::Quote,
                Some(status.as_u16()),
                body,
            ));
        }

        let parsed: AffirmationBody = serde_json::from_str(&body).map_err(|e| {
            Error::upstream(
                Service::Quote,
                Some(status.as_u16()),
                format!("unparseable body ({e}): {body}"),
            )
        })?;

        tracing::debug!(chars = parsed.affirmation.chars().count(), "fetched quote");

        Ok(Quote {
            text: parsed.affirmation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmation_body_parses() {
        let body: AffirmationBody =
            serde_json::from_str(r#"{"affirmation":"You are enough"}"#).unwrap();
        assert_eq!(body.affirmation, "You are enough");
    }

    #[test]
    fn affirmation_body_ignores_extra_fields() {
        let body: AffirmationBody =
            serde_json::from_str(r#"{"affirmation":"Keep going","id":42}"#).unwrap();
        assert_eq!(body.affirmation, "Keep going");
    }

    #[test]
    fn affirmation_body_requires_field() {
        assert!(serde_json::from_str::<AffirmationBody>(r#"{"quote":"nope"}"#).is_err());
    }
}
