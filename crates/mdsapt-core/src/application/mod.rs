//! Application layer for MDSAPT.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InputReader and its per-mode pipelines)
//! - **Ports**: Interface definitions (traits) for document and structure loading
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{DockingInputValidator, InputReader, TrajectoryInputValidator};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentLoader, StructureProvider};

pub use error::ApplicationError;
