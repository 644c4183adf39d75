//! Unified error handling for MDSAPT Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, classifies them into the run-input error taxonomy, and carries
//! user-actionable suggestions.

use std::fmt;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for MDSAPT Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MdsaptError {
    /// The document broke a validation rule.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A document or structure could not be read.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl MdsaptError {
    /// Kind of the first violation carried.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            Self::Application(e) => e.kind(),
        }
    }

    /// Kinds of every violation, in report order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        match self {
            Self::Domain(e) => e.kinds(),
            Self::Application(e) => vec![e.kind()],
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// `true` if this error came from reading files rather than from
    /// the content of the document.
    pub fn is_load_failure(&self) -> bool {
        self.kind().is_load_failure()
    }
}

/// Classification of run-input failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The document could not be read or decoded.
    Load,
    /// A required key is absent or null.
    MissingKey,
    /// A key holds a value of the wrong shape.
    InvalidValue,
    /// Neither or both mode signature keys are present.
    ModeDetection,
    /// Structure files could not be loaded.
    StructureLoad,
    /// A residue selection resolved to nothing.
    Selection,
    /// A pair has the wrong arity or an undeclared member.
    PairIntegrity,
    /// The trajectory window is malformed.
    InvalidRange,
    /// The trajectory window overruns the trajectory.
    OutOfBounds,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "LoadError",
            Self::MissingKey => "MissingKeyError",
            Self::InvalidValue => "InvalidValueError",
            Self::ModeDetection => "ModeDetectionError",
            Self::StructureLoad => "StructureLoadError",
            Self::Selection => "SelectionError",
            Self::PairIntegrity => "PairIntegrityError",
            Self::InvalidRange => "InvalidRangeError",
            Self::OutOfBounds => "OutOfBoundsError",
        }
    }

    pub const fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load | Self::StructureLoad)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient result type alias.
pub type MdsaptResult<T> = Result<T, MdsaptError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn kinds_use_taxonomy_names() {
        assert_eq!(ErrorKind::MissingKey.to_string(), "MissingKeyError");
        assert_eq!(ErrorKind::OutOfBounds.to_string(), "OutOfBoundsError");
    }

    #[test]
    fn domain_errors_keep_their_message() {
        let err = MdsaptError::from(DomainError::MissingKey {
            key: "topology_path".into(),
        });
        assert_eq!(err.to_string(), "required key missing: 'topology_path'");
        assert_eq!(err.kind(), ErrorKind::MissingKey);
        assert!(!err.is_load_failure());
    }

    #[test]
    fn document_load_is_a_load_failure() {
        let err = MdsaptError::from(ApplicationError::DocumentLoad {
            path: PathBuf::from("input.yaml"),
            reason: "not found".into(),
        });
        assert_eq!(err.kinds(), vec![ErrorKind::Load]);
        assert!(err.is_load_failure());
        assert!(!err.suggestions().is_empty());
    }
}
