//! Acquisition-and-composition pipeline for affirmation posters.
//!
//! This crate provides:
//! - Quote acquisition from an affirmations endpoint
//! - Random landscape photo acquisition from the Unsplash API
//! - Remote-fetch upload to Cloudinary plus URL-based display transformation
//! - Deterministic feature-word derivation for poster typography
//! - The [`PosterPipeline`] orchestrator tying them together
//!
//! # Flow
//!
//! ```text
//! PosterPipeline::generate(query)
//!     ├── QuoteSource::fetch_quote     (concurrent, fail-fast)
//!     ├── PhotoSource::fetch_photo     (concurrent, fail-fast)
//!     ├── ImageHost::upload
//!     └── ImageHost::build_url  →  PosterResult
//! ```
//!
//! Errors split into exactly two kinds: [`Error::Configuration`] for a
//! missing credential (raised before any network call) and
//! [`Error::Upstream`] for a non-success response or unparseable payload
//! (carrying status and body). Nothing is retried; every failure propagates
//! to the caller unchanged.

pub mod config;
pub mod error;
pub mod feature_word;
pub mod host;
pub mod mock;
pub mod photo;
pub mod poster;
pub mod quote;

pub use config::Config;
pub use error::{Error, Result, Service};
pub use feature_word::{FeatureWord, derive_feature_word};
pub use host::{CloudinaryHost, HostedAsset, ImageHost};
pub use photo::{PhotoRef, PhotoSource, UnsplashSource};
pub use poster::{PosterPipeline, PosterResult};
pub use quote::{AffirmationApi, Quote, QuoteSource};
