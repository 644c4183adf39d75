//! Read-only view of loaded molecular structure data.
//!
//! Validators only ever see a [`StructureHandle`]; how the data was read is
//! the business of the `StructureProvider` port in the application layer.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::domain::value_objects::ResidueId;

/// The files one structure handle is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StructureSource {
    topology: PathBuf,
    trajectories: Vec<PathBuf>,
}

impl StructureSource {
    /// A topology together with the trajectories sampled over it.
    pub fn with_trajectories(topology: impl Into<PathBuf>, trajectories: Vec<PathBuf>) -> Self {
        Self {
            topology: topology.into(),
            trajectories,
        }
    }

    /// A single-frame structure with no trajectory.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self::with_trajectories(path, Vec::new())
    }

    pub fn topology(&self) -> &std::path::Path {
        &self.topology
    }

    pub fn trajectories(&self) -> &[PathBuf] {
        &self.trajectories
    }

    /// Every file referenced, topology first.
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.topology).chain(self.trajectories.iter())
    }
}

impl fmt::Display for StructureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.topology.display())?;
        if !self.trajectories.is_empty() {
            let names: Vec<String> = self
                .trajectories
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            write!(f, " + [{}]", names.join(", "))?;
        }
        Ok(())
    }
}

/// Atoms resolved from one residue selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomGroup {
    residue: ResidueId,
    atom_count: usize,
}

impl AtomGroup {
    pub const fn new(residue: ResidueId, atom_count: usize) -> Self {
        Self {
            residue,
            atom_count,
        }
    }

    pub const fn residue(&self) -> ResidueId {
        self.residue
    }

    pub const fn atom_count(&self) -> usize {
        self.atom_count
    }

    pub const fn is_empty(&self) -> bool {
        self.atom_count == 0
    }
}

/// A selection query the structure data could not answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct SelectionFailure {
    pub reason: String,
}

impl SelectionFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Loaded structure data as seen by the validators.
pub trait StructureHandle {
    /// Files this handle was loaded from.
    fn source(&self) -> &StructureSource;

    /// Number of frames available; 1 for a single structure.
    fn frame_count(&self) -> usize;

    /// Resolve the atoms of `residue`, optionally restricted to protein atoms.
    fn select(&self, residue: ResidueId, protein_only: bool)
    -> Result<AtomGroup, SelectionFailure>;
}
