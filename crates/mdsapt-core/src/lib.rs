//! MDSAPT Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for validating
//! MDSAPT run-input documents before any SAPT calculation is scheduled,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mdsapt-cli (CLI)              │
//! │     (validate, init, config)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (InputReader)                │
//! │   Trajectory / Docking pipelines        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (DocumentLoader, StructureProvider)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     mdsapt-adapters (Infrastructure)    │
//! │ (YamlDocumentLoader, InMemoryProvider)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Validators, ValidatedConfig, Mode)    │
//! │            No I/O, no logging           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mdsapt_core::application::InputReader;
//!
//! // Adapters are injected; see mdsapt-adapters for implementations.
//! let reader = InputReader::new(loader, provider);
//! let config = reader.read("input.yaml".as_ref())?;
//! println!("{} run over {:?}", config.mode(), config.structure_paths());
//! ```

// Domain layer (pure validation rules)
pub mod domain;

// Application layer (orchestration)
pub mod application;

// Error types
pub mod error;

#[cfg(test)]
mod testing;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InputReader,
        ports::{DocumentLoader, StructureProvider},
    };
    pub use crate::domain::{
        AtomGroup, AtomGroupPair, Mode, RawConfig, ResidueId, SelectionFailure, StructureHandle,
        StructureSource, ValidatedConfig,
    };
    pub use crate::error::{ErrorKind, MdsaptError, MdsaptResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
