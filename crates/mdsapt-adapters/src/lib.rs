//! Infrastructure adapters for MDSAPT.
//!
//! This crate implements the ports defined in `mdsapt-core::application::ports`.
//! It contains all file I/O and format decoding.

pub mod document;
pub mod structure;

// Re-export commonly used adapters
pub use document::YamlDocumentLoader;
pub use structure::{
    FileCheckingProvider, InMemoryStructureProvider, ManifestError, ResidueFixture,
    StructureFixture, StructureManifest,
};
