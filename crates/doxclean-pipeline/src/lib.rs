//! Directory pipeline for doxclean.
//!
//! Discovers markdown files under a docs root and rewrites the doxide-generated
//! ones in place with [`doxclean_passes`].

mod pipeline;
mod scanner;

pub use pipeline::{Pipeline, PipelineConfig, PipelineError, PipelineReport};
