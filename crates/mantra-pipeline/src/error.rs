//! Error types for the poster pipeline.

use std::fmt;

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The remote service an [`Error::Upstream`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// The affirmation/quote endpoint.
    Quote,
    /// The photo search API.
    Photo,
    /// The image hosting provider (upload and delivery).
    ImageHost,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quote => f.write_str("quote service"),
            Self::Photo => f.write_str("photo service"),
            Self::ImageHost => f.write_str("image host"),
        }
    }
}

/// Errors that can occur while assembling a poster.
///
/// The taxonomy is deliberately flat: a failure is either a missing piece of
/// local configuration (raised before any network I/O) or an upstream
/// failure from one of the three remote services. Stages never wrap or
/// translate each other's errors; whatever a component raises is what the
/// caller of [`crate::PosterPipeline::generate`] sees.
#[derive(Debug, Error)]
pub enum Error {
    /// A required credential or setting is absent from the configuration.
    ///
    /// Always detected synchronously, before the component issues any
    /// network request.
    #[error("{missing} is not configured")]
    Configuration {
        /// Human-readable name of the missing setting.
        missing: &'static str,
    },

    /// A remote service failed: the transport errored, the endpoint
    /// returned a non-success status, or the payload did not match the
    /// expected shape.
    #[error("{service} error{}: {detail}", status_suffix(.status))]
    Upstream {
        /// Which remote service failed.
        service: Service,
        /// HTTP status code, when the failure happened after a response
        /// arrived.
        status: Option<u16>,
        /// Transport error text, upstream response body, or a description
        /// of the malformed payload.
        detail: String,
    },
}

impl Error {
    /// Shorthand for a missing-configuration error.
    pub(crate) fn missing(missing: &'static str) -> Self {
        Self::Configuration { missing }
    }

    /// Shorthand for an upstream failure.
    pub(crate) fn upstream(
        service: Service,
        status: Option<u16>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Upstream {
            service,
            status,
            detail: detail.into(),
        }
    }

    /// True when the error is the configuration kind.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// True when the error is the upstream kind.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_display_names_the_missing_setting() {
        let err = Error::missing("Unsplash access key");
        assert_eq!(err.to_string(), "Unsplash access key is not configured");
        assert!(err.is_configuration());
        assert!(!err.is_upstream());
    }

    #[test]
    fn upstream_display_includes_status_when_present() {
        let err = Error::upstream(Service::Photo, Some(403), "rate limit exceeded");
        let msg = err.to_string();
        assert!(msg.contains("photo service"));
        assert!(msg.contains("status 403"));
        assert!(msg.contains("rate limit exceeded"));
        assert!(err.is_upstream());
    }

    #[test]
    fn upstream_display_without_status() {
        let err = Error::upstream(Service::Quote, None, "connection refused");
        let msg = err.to_string();
        assert!(msg.contains("quote service"));
        assert!(!msg.contains("status"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn service_display() {
        assert_eq!(Service::Quote.to_string(), "quote service");
        assert_eq!(Service::Photo.to_string(), "photo service");
        assert_eq!(Service::ImageHost.to_string(), "image host");
    }
}
