//! Image hosting: remote-fetch upload plus URL-based transformation.
//!
//! Upload hands the host a source URL and lets it fetch and store the image
//! server-side; the host answers with a path-like `public_id`. Display URLs
//! are then built locally by splicing a fixed transformation segment and the
//! `public_id` into the delivery URL. The `public_id`'s slashes are
//! structural, so it is inserted verbatim, never percent-encoded.
//!
//! Uploads are not safe to retry blindly: each call stores a fresh copy and
//! nothing here deduplicates or expires them. At most one call per refresh
//! is the caller's responsibility.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result, Service};

/// Logical folder every poster photo is stored under.
pub const UPLOAD_FOLDER: &str = "affirmations";

/// Fixed transformation segment: crop-fill to a 1200×800 canvas, automatic
/// format, automatic quality.
pub const TRANSFORMATION: &str = "c_fill,w_1200,h_800/f_auto/q_auto";

/// A stored copy of a photo, addressed by the host's identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedAsset {
    /// Opaque, provider-assigned, path-like identifier.
    pub public_id: String,
}

/// Durable image store with URL-based transformations.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Transfer the image at `source_url` into the hosted store.
    async fn upload(&self, source_url: &str) -> Result<HostedAsset>;

    /// Build the transformed display URL for a stored asset. Pure; no
    /// network call.
    fn build_url(&self, public_id: &str) -> Result<String>;
}

/// Wire shape of the upload endpoint response.
#[derive(Debug, Deserialize)]
struct UploadBody {
    public_id: String,
}

/// [`ImageHost`] backed by the Cloudinary upload and delivery APIs.
#[derive(Debug, Clone)]
pub struct CloudinaryHost {
    client: reqwest::Client,
    upload_api_url: String,
    delivery_base_url: String,
    identity: String,
    api_key: String,
    api_secret: String,
    upload_preset: String,
}

impl CloudinaryHost {
    /// Create an image host from the pipeline configuration.
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            upload_api_url: config.upload_api_url.clone(),
            delivery_base_url: config.delivery_base_url.clone(),
            identity: config.host_identity.clone(),
            api_key: config.host_key.clone(),
            api_secret: config.host_secret.clone(),
            upload_preset: config.upload_preset.clone(),
        }
    }

    /// Credential preflight shared by both operations. The key and secret
    /// are not sent with unsigned uploads but are still required
    /// configuration.
    ///
    /// TODO: sign uploads (SHA-1 of the sorted params plus the secret) so
    /// the unsigned preset can be retired.
    fn require_credentials(&self) -> Result<()> {
        if self.identity.is_empty() {
            return Err(Error::missing("Cloudinary cloud name"));
        }
        if self.api_key.is_empty() {
            return Err(Error::missing("Cloudinary API key"));
        }
        if self.api_secret.is_empty() {
            return Err(Error::missing("Cloudinary API secret"));
        }
        Ok(())
    }
}

#[async_trait]
impl ImageHost for CloudinaryHost {
    async fn upload(&self, source_url: &str) -> Result<HostedAsset> {
        self.require_credentials()?;

        let url = format!("{}/v1_1/{}/image/upload", self.upload_api_url, self.identity);
        let form = [
            ("file", source_url),
            ("upload_preset", self.upload_preset.as_str()),
            ("folder", UPLOAD_FOLDER),
        ];

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::upstream(Service::ImageHost, None, e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::upstream(Service::ImageHost, Some(status.as_u16()), e.to_string())
        })?;

        if !status.is_success() {
            return Err(Error::upstream(
                Service::ImageHost,
                Some(status.as_u16()),
                body,
            ));
        }

        let parsed: UploadBody = serde_json::from_str(&body).map_err(|e| {
            Error::upstream(
                Service::ImageHost,
                Some(status.as_u16()),
                format!("unparseable body ({e}): {body}"),
            )
        })?;

        tracing::info!(public_id = %parsed.public_id, "stored photo on image host");

        Ok(HostedAsset {
            public_id: parsed.public_id,
        })
    }

    fn build_url(&self, public_id: &str) -> Result<String> {
        if self.identity.is_empty() {
            return Err(Error::missing("Cloudinary cloud name"));
        }

        Ok(format!(
            "{}/{}/image/upload/{}/{}",
            self.delivery_base_url, self.identity, TRANSFORMATION, public_id
        ))
    }
}
