//! Pipeline configuration loaded from environment variables.
//!
//! The original deployment read provider credentials ad hoc inside each
//! fetch; here everything is collected once into an explicit [`Config`] that
//! is handed to each component at construction. [`Config::validate`] runs at
//! startup; the components still perform their own per-call credential
//! checks so a blanked-out value is reported as a configuration error at the
//! call site rather than a mysterious upstream rejection.

use crate::error::{Error, Result};

/// Default quote endpoint (affirmations.dev contract: `{"affirmation": …}`).
pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://www.affirmations.dev/";

/// Default photo API base URL.
pub const DEFAULT_PHOTO_API_URL: &str = "https://api.unsplash.com";

/// Default image-host upload API base URL.
pub const DEFAULT_UPLOAD_API_URL: &str = "https://api.cloudinary.com";

/// Default image-host delivery base URL (transformed display URLs).
pub const DEFAULT_DELIVERY_BASE_URL: &str = "https://res.cloudinary.com";

/// Default upload preset used when none is configured.
pub const DEFAULT_UPLOAD_PRESET: &str = "unsigned";

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Quote endpoint URL.
    pub quote_endpoint: String,

    /// Photo API access key (Unsplash `client_id`). Required.
    pub photo_access_key: String,

    /// Photo API base URL.
    pub photo_api_url: String,

    /// Image-host identity (Cloudinary cloud name). Required.
    pub host_identity: String,

    /// Image-host API key. Required.
    pub host_key: String,

    /// Image-host API secret. Required.
    pub host_secret: String,

    /// Upload preset name submitted with each upload.
    pub upload_preset: String,

    /// Image-host upload API base URL.
    pub upload_api_url: String,

    /// Image-host delivery base URL used for display URLs.
    pub delivery_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quote_endpoint: DEFAULT_QUOTE_ENDPOINT.to_string(),
            photo_access_key: String::new(),
            photo_api_url: DEFAULT_PHOTO_API_URL.to_string(),
            host_identity: String::new(),
            host_key: String::new(),
            host_secret: String::new(),
            upload_preset: DEFAULT_UPLOAD_PRESET.to_string(),
            upload_api_url: DEFAULT_UPLOAD_API_URL.to_string(),
            delivery_base_url: DEFAULT_DELIVERY_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `UNSPLASH_ACCESS_KEY`: photo API access key
    /// - `CLOUDINARY_CLOUD_NAME`: image-host identity
    /// - `CLOUDINARY_API_KEY`: image-host API key
    /// - `CLOUDINARY_API_SECRET`: image-host API secret
    ///
    /// Optional:
    /// - `AFFIRMATION_API_URL`: quote endpoint (default: affirmations.dev)
    /// - `CLOUDINARY_UPLOAD_PRESET`: upload preset (default: "unsigned")
    /// - `UNSPLASH_API_URL`, `CLOUDINARY_UPLOAD_URL`,
    ///   `CLOUDINARY_DELIVERY_URL`: provider base-URL overrides, mainly for
    ///   pointing the pipeline at a local server in tests
    ///
    /// Absent required values load as empty strings; [`Config::validate`]
    /// and the per-component checks report them.
    pub fn from_env() -> Self {
        let quote_endpoint = std::env::var("AFFIRMATION_API_URL")
            .unwrap_or_else(|_| DEFAULT_QUOTE_ENDPOINT.to_string());

        let photo_access_key = std::env::var("UNSPLASH_ACCESS_KEY").unwrap_or_default();

        let photo_api_url = std::env::var("UNSPLASH_API_URL")
            .unwrap_or_else(|_| DEFAULT_PHOTO_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let host_identity = std::env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_default();
        let host_key = std::env::var("CLOUDINARY_API_KEY").unwrap_or_default();
        let host_secret = std::env::var("CLOUDINARY_API_SECRET").unwrap_or_default();

        let upload_preset = std::env::var("CLOUDINARY_UPLOAD_PRESET")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_PRESET.to_string());

        let upload_api_url = std::env::var("CLOUDINARY_UPLOAD_URL")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let delivery_base_url = std::env::var("CLOUDINARY_DELIVERY_URL")
            .unwrap_or_else(|_| DEFAULT_DELIVERY_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        tracing::info!(
            quote_endpoint = %quote_endpoint,
            photo_api_url = %photo_api_url,
            host_identity = %host_identity,
            upload_preset = %upload_preset,
            photo_key_set = !photo_access_key.is_empty(),
            host_credentials_set =
                !host_key.is_empty() && !host_secret.is_empty(),
            "pipeline configuration loaded"
        );

        Self {
            quote_endpoint,
            photo_access_key,
            photo_api_url,
            host_identity,
            host_key,
            host_secret,
            upload_preset,
            upload_api_url,
            delivery_base_url,
        }
    }

    /// Check that every required credential is present.
    ///
    /// Returns the first missing setting as [`Error::Configuration`]. Meant
    /// to run once at startup so a misconfigured deployment fails before it
    /// serves anything.
    pub fn validate(&self) -> Result<()> {
        if self.photo_access_key.is_empty() {
            return Err(Error::missing("Unsplash access key"));
        }
        if self.host_identity.is_empty() {
            return Err(Error::missing("Cloudinary cloud name"));
        }
        if self.host_key.is_empty() {
            return Err(Error::missing("Cloudinary API key"));
        }
        if self.host_secret.is_empty() {
            return Err(Error::missing("Cloudinary API secret"));
        }
        Ok(())
    }
}
