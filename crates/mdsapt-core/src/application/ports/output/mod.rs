//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mdsapt-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::application::ApplicationError;
use crate::domain::{RawConfig, StructureHandle, StructureSource};

/// Port for reading run-input documents.
///
/// Implemented by:
/// - `mdsapt_adapters::document::YamlDocumentLoader` (YAML files)
#[cfg_attr(test, automock)]
pub trait DocumentLoader: Send + Sync {
    /// Read and decode the document at `path`.
    ///
    /// Fails with `ApplicationError::DocumentLoad` if the file is unreadable,
    /// malformed, or not a mapping at the top level.
    fn load(&self, path: &Path) -> Result<RawConfig, ApplicationError>;
}

/// Port for loading molecular structure data.
///
/// Implemented by:
/// - `mdsapt_adapters::structure::InMemoryStructureProvider` (registered fixtures)
/// - `mdsapt_adapters::structure::FileCheckingProvider` (existence check decorator)
#[cfg_attr(test, automock)]
pub trait StructureProvider: Send + Sync {
    /// Load the topology and trajectories of `source` as one handle.
    ///
    /// Fails with `ApplicationError::StructureLoad` if any file is missing,
    /// unreadable, or incompatible with the others.
    fn load(&self, source: &StructureSource)
    -> Result<Box<dyn StructureHandle>, ApplicationError>;
}
