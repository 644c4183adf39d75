// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for MDSAPT run-input validation.
//!
//! This module contains the validation rules and the typed run model. It
//! never reads files: documents arrive as [`RawConfig`] and structure data
//! arrives behind [`StructureHandle`], both supplied through the ports of the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: no filesystem access, no logging
//! - **No format coupling**: documents are `serde_json::Value` trees
//! - **Immutable results**: a [`ValidatedConfig`] is never mutated after assembly
//!
pub mod assembler;
pub mod entities;
pub mod error;
pub mod mode;
pub mod raw;
pub mod schema;
pub mod structure;
pub mod validation;
pub mod value_objects;

pub use assembler::ConfigAssembler;
pub use entities::{
    ComputeSettings, ResourceSettings, RunInputs, TrajectoryWindow, ValidatedConfig,
};
pub use error::{DomainError, RangeFault};
pub use mode::ModeDetector;
pub use raw::{RawConfig, Section};
pub use schema::{DockingDocument, TrajectoryDocument, keys};
pub use structure::{AtomGroup, SelectionFailure, StructureHandle, StructureSource};
pub use validation::{
    ComputeSettingsValidator, SelectionValidator, SystemSettingsValidator,
    TrajectorySettingsValidator, Violations,
};
pub use value_objects::{AtomGroupPair, Mode, ResidueId, Scalar};
