//! Run-input document loaders.

mod yaml;

pub use yaml::{DecodeError, YamlDocumentLoader};
