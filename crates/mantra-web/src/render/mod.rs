//! HTML rendering for the poster site.
//!
//! All markup is maud, built from the current poster plus inline-CSS string
//! constants. Rendering is pure templating; nothing here calls the pipeline.

pub mod components;
pub mod poster;
pub mod print;
