//! In-memory stand-ins for the remote services.
//!
//! Used by the pipeline's own tests and by downstream consumers that want
//! to exercise the poster flow without a network. Failing variants answer
//! with canned upstream errors; the host mock records every upload so tests
//! can assert the fail-fast path never reaches it.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result, Service};
use crate::host::{HostedAsset, ImageHost};
use crate::photo::{PhotoRef, PhotoSource};
use crate::quote::{Quote, QuoteSource};

/// Quote source answering with a fixed text.
pub struct MockQuoteSource {
    text: Option<String>,
}

impl MockQuoteSource {
    /// Always yields `text`.
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    /// Always fails with an upstream error.
    pub fn failing() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl QuoteSource for MockQuoteSource {
    async fn fetch_quote(&self) -> Result<Quote> {
        match &self.text {
            Some(text) => Ok(Quote { text: text.clone() }),
            None => Err(Error::upstream(
                Service::Quote,
                Some(500),
                "quote source down",
            )),
        }
    }
}

/// Photo source answering with a fixed photo, recording queries as they
/// arrive.
pub struct MockPhotoSource {
    photo: Option<PhotoRef>,
    queries: Mutex<Vec<Option<String>>>,
}

impl MockPhotoSource {
    /// Always yields `photo`.
    pub fn returning(photo: PhotoRef) -> Self {
        Self {
            photo: Some(photo),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with an upstream error.
    pub fn failing() -> Self {
        Self {
            photo: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries seen so far, in call order.
    pub fn queries(&self) -> Vec<Option<String>> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoSource for MockPhotoSource {
    async fn fetch_photo(&self, query: Option<&str>) -> Result<PhotoRef> {
        self.queries
            .lock()
            .unwrap()
            .push(query.map(str::to_string));
        match &self.photo {
            Some(photo) => Ok(photo.clone()),
            None => Err(Error::upstream(
                Service::Photo,
                Some(503),
                "photo source down",
            )),
        }
    }
}

/// Image host that stores nothing: records upload calls, answers with a
/// fixed public id, and builds `https://img.mock/<public_id>` display URLs.
pub struct MockImageHost {
    public_id: Option<String>,
    uploads: Mutex<Vec<String>>,
}

impl MockImageHost {
    /// Uploads succeed with `public_id`.
    pub fn returning(public_id: &str) -> Self {
        Self {
            public_id: Some(public_id.to_string()),
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Uploads are recorded, then rejected.
    pub fn failing() -> Self {
        Self {
            public_id: None,
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Source URLs submitted so far, in call order.
    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    /// Number of upload calls seen.
    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageHost for MockImageHost {
    async fn upload(&self, source_url: &str) -> Result<HostedAsset> {
        self.uploads.lock().unwrap().push(source_url.to_string());
        match &self.public_id {
            Some(id) => Ok(HostedAsset {
                public_id: id.clone(),
            }),
            None => Err(Error::upstream(
                Service::ImageHost,
                Some(400),
                "upload rejected",
            )),
        }
    }

    fn build_url(&self, public_id: &str) -> Result<String> {
        Ok(format!("https://img.mock/{public_id}"))
    }
}
