//! Deterministic structure doubles for unit tests.

use std::collections::BTreeMap;

use crate::domain::{AtomGroup, ResidueId, SelectionFailure, StructureHandle, StructureSource};

#[derive(Debug, Clone)]
pub(crate) struct FakeStructure {
    source: StructureSource,
    frames: usize,
    /// residue id -> (atom count, is protein)
    residues: BTreeMap<i64, (usize, bool)>,
}

impl FakeStructure {
    pub(crate) fn new(path: &str, frames: usize) -> Self {
        Self {
            source: StructureSource::single(path),
            frames,
            residues: BTreeMap::new(),
        }
    }

    pub(crate) fn with_residues(mut self, ids: &[i64]) -> Self {
        for id in ids {
            self.residues.insert(*id, (10, true));
        }
        self
    }

    pub(crate) fn with_ligand(mut self, id: i64) -> Self {
        self.residues.insert(id, (5, false));
        self
    }

    pub(crate) fn with_empty_residue(mut self, id: i64) -> Self {
        self.residues.insert(id, (0, true));
        self
    }
}

impl StructureHandle for FakeStructure {
    fn source(&self) -> &StructureSource {
        &self.source
    }

    fn frame_count(&self) -> usize {
        self.frames
    }

    fn select(
        &self,
        residue: ResidueId,
        protein_only: bool,
    ) -> Result<AtomGroup, SelectionFailure> {
        match self.residues.get(&residue.get()) {
            None => Err(SelectionFailure::new(format!("no residue {residue}"))),
            Some((_, false)) if protein_only => Ok(AtomGroup::new(residue, 0)),
            Some((atoms, _)) => Ok(AtomGroup::new(residue, *atoms)),
        }
    }
}
