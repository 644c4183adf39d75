//! In-memory structure provider.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use mdsapt_core::{
    application::{ApplicationError, ports::StructureProvider},
    domain::{AtomGroup, ResidueId, SelectionFailure, StructureHandle, StructureSource},
};

/// One residue of a registered structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueFixture {
    pub id: i64,
    pub atoms: usize,
    #[serde(default = "default_protein")]
    pub protein: bool,
}

fn default_protein() -> bool {
    true
}

fn default_frames() -> usize {
    1
}

/// Summary of one structure file: its frame count and residues.
///
/// Trajectory files only need `frames`; topology files carry the residues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureFixture {
    pub path: PathBuf,
    #[serde(default = "default_frames")]
    pub frames: usize,
    #[serde(default)]
    pub residues: Vec<ResidueFixture>,
}

impl StructureFixture {
    pub fn new(path: impl Into<PathBuf>, frames: usize) -> Self {
        Self {
            path: path.into(),
            frames,
            residues: Vec::new(),
        }
    }

    /// Add a protein residue.
    pub fn with_residue(mut self, id: i64, atoms: usize) -> Self {
        self.residues.push(ResidueFixture {
            id,
            atoms,
            protein: true,
        });
        self
    }

    /// Add a non-protein residue (ligand, solvent, ion).
    pub fn with_ligand(mut self, id: i64, atoms: usize) -> Self {
        self.residues.push(ResidueFixture {
            id,
            atoms,
            protein: false,
        });
        self
    }
}

/// Thread-safe in-memory structure provider.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStructureProvider {
    inner: Arc<RwLock<HashMap<PathBuf, StructureFixture>>>,
}

impl InMemoryStructureProvider {
    /// Create a new empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider holding `fixtures`; later entries replace earlier ones with the same path.
    pub fn with_fixtures(fixtures: impl IntoIterator<Item = StructureFixture>) -> Self {
        let map = fixtures
            .into_iter()
            .map(|f| (f.path.clone(), f))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Register or replace a fixture.
    pub fn register(&self, fixture: StructureFixture) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().map_err(|_| poisoned(&fixture.path))?;
        inner.insert(fixture.path.clone(), fixture);
        Ok(())
    }

    /// Get the number of registered structures.
    pub fn len(&self) -> usize {
        self.inner.read().map_or(0, |inner| inner.len())
    }

    /// Check if provider is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.contains_key(path))
    }
}

impl StructureProvider for InMemoryStructureProvider {
    #[instrument(skip_all, fields(source = %source))]
    fn load(
        &self,
        source: &StructureSource,
    ) -> Result<Box<dyn StructureHandle>, ApplicationError> {
        let inner = self.inner.read().map_err(|_| poisoned(source.topology()))?;
        let fail = |reason: String| ApplicationError::StructureLoad {
            structure: source.to_string(),
            reason,
        };
        let lookup = |path: &Path| {
            inner
                .get(path)
                .ok_or_else(|| fail(format!("no structure data for {}", path.display())))
        };

        let topology = lookup(source.topology())?;
        if topology.residues.is_empty() {
            return Err(fail(format!(
                "{} contains no atoms",
                source.topology().display()
            )));
        }

        let frames = if source.trajectories().is_empty() {
            topology.frames
        } else {
            let mut total: usize = 0;
            for path in source.trajectories() {
                total = total
                    .checked_add(lookup(path)?.frames)
                    .ok_or_else(|| fail("frame count overflows".into()))?;
            }
            total
        };
        debug!(frames, residues = topology.residues.len(), "Structure resolved");

        Ok(Box::new(MemoryStructure {
            source: source.clone(),
            frames,
            residues: topology
                .residues
                .iter()
                .map(|r| (r.id, r.clone()))
                .collect(),
        }))
    }
}

fn poisoned(path: &Path) -> ApplicationError {
    ApplicationError::StructureLoad {
        structure: path.display().to_string(),
        reason: "structure registry lock poisoned".into(),
    }
}

/// Handle over a registered structure.
#[derive(Debug)]
struct MemoryStructure {
    source: StructureSource,
    frames: usize,
    residues: HashMap<i64, ResidueFixture>,
}

impl StructureHandle for MemoryStructure {
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
        let fixture = self
            .residues
            .get(&residue.get())
            .ok_or_else(|| SelectionFailure::new(format!("no residue with resid {residue}")))?;

        let atoms = if protein_only && !fixture.protein {
            0
        } else {
            fixture.atoms
        };
        Ok(AtomGroup::new(residue, atoms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> InMemoryStructureProvider {
        InMemoryStructureProvider::with_fixtures([
            StructureFixture::new("a.pdb", 1)
                .with_residue(10, 14)
                .with_residue(20, 9)
                .with_ligand(900, 40),
            StructureFixture::new("a.dcd", 120),
            StructureFixture::new("b.dcd", 80),
            StructureFixture::new("empty.pdb", 1),
        ])
    }

    #[test]
    fn trajectory_frames_are_summed() {
        let source = StructureSource::with_trajectories(
            "a.pdb",
            vec![PathBuf::from("a.dcd"), PathBuf::from("b.dcd")],
        );
        let handle = provider().load(&source).unwrap();
        assert_eq!(handle.frame_count(), 200);
    }

    #[test]
    fn single_structure_uses_own_frames() {
        let handle = provider().load(&StructureSource::single("a.pdb")).unwrap();
        assert_eq!(handle.frame_count(), 1);
    }

    #[test]
    fn unregistered_trajectory_fails_to_load() {
        let source = StructureSource::with_trajectories("a.pdb", vec![PathBuf::from("c.dcd")]);
        let err = provider().load(&source).err().unwrap();
        assert!(err.to_string().contains("c.dcd"));
    }

    #[test]
    fn structure_without_atoms_is_empty_data() {
        let err = provider()
            .load(&StructureSource::single("empty.pdb"))
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ApplicationError::StructureLoad { ref reason, .. } if reason.contains("no atoms")
        ));
    }

    #[test]
    fn frame_total_overflow_is_a_load_error() {
        let provider = InMemoryStructureProvider::with_fixtures([
            StructureFixture::new("a.pdb", 1).with_residue(10, 14),
            StructureFixture::new("huge1.dcd", usize::MAX),
            StructureFixture::new("huge2.dcd", 2),
        ]);
        let source = StructureSource::with_trajectories(
            "a.pdb",
            vec![PathBuf::from("huge1.dcd"), PathBuf::from("huge2.dcd")],
        );

        let err = provider.load(&source).err().unwrap();
        assert!(matches!(
            err,
            ApplicationError::StructureLoad { ref reason, .. } if reason == "frame count overflows"
        ));
    }

    #[test]
    fn selection_respects_protein_flag() {
        let handle = provider().load(&StructureSource::single("a.pdb")).unwrap();

        assert_eq!(handle.select(ResidueId::new(10), true).unwrap().atom_count(), 14);
        assert_eq!(handle.select(ResidueId::new(900), false).unwrap().atom_count(), 40);
        assert!(handle.select(ResidueId::new(900), true).unwrap().is_empty());
        assert!(handle.select(ResidueId::new(11), false).is_err());
    }

    #[test]
    fn register_replaces_existing_entry() {
        let provider = provider();
        let before = provider.len();
        provider.register(StructureFixture::new("a.dcd", 10)).unwrap();

        assert_eq!(provider.len(), before);
        assert!(provider.contains(Path::new("a.dcd")));
    }
}
