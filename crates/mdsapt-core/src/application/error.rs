//! Application layer errors.
//!
//! These errors represent failures to read inputs, not rule violations.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::keys;
use crate::error::ErrorKind;

/// Errors that occur while gathering the inputs of a validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The run-input document could not be read or decoded.
    #[error("failed to load input file {path}: {reason}")]
    DocumentLoad { path: PathBuf, reason: String },

    /// Structure files could not be loaded.
    #[error("failed to load structure {structure}: {reason}")]
    StructureLoad { structure: String, reason: String },

    /// A docking document listed no structures.
    #[error("'{}' lists no structure files", keys::TOPOLOGY_DIRECTORY)]
    NoStructures,
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DocumentLoad { .. } => ErrorKind::Load,
            Self::StructureLoad { .. } | Self::NoStructures => ErrorKind::StructureLoad,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DocumentLoad { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "The input file must be a YAML mapping".into(),
            ],
            Self::StructureLoad { structure, .. } => vec![
                format!("Check the paths of {}", structure),
                "Topology and trajectory files must be readable and compatible".into(),
            ],
            Self::NoStructures => vec![format!(
                "Add at least one structure file to '{}'",
                keys::TOPOLOGY_DIRECTORY
            )],
        }
    }
}
