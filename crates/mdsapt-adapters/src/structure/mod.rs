//! Structure providers.
//!
//! Topology and trajectory formats are not parsed here. Providers answer
//! from registered structure summaries ([`StructureFixture`]), usually loaded
//! from a TOML manifest, and can be wrapped to check that the referenced
//! files exist.

mod checked;
mod manifest;
mod memory;

pub use checked::FileCheckingProvider;
pub use manifest::{ManifestError, StructureManifest};
pub use memory::{InMemoryStructureProvider, ResidueFixture, StructureFixture};
