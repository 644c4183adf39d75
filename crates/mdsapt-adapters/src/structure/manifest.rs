//! TOML structure manifests.
//!
//! # Format
//!
//! ```toml
//! [[structure]]
//! path = "system.pdb"
//! frames = 1
//! residues = [
//!     { id = 10, atoms = 14 },
//!     { id = 900, atoms = 40, protein = false },
//! ]
//!
//! [[structure]]
//! path = "run1.dcd"
//! frames = 200
//! ```
//!
//! Paths are matched exactly as written against the paths in the run input.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::structure::memory::{InMemoryStructureProvider, StructureFixture};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read structure manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid structure manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("structure {0} is listed more than once")]
    Duplicate(PathBuf),
}

/// Deserialised `[[structure]]` list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructureManifest {
    #[serde(rename = "structure", default)]
    pub structures: Vec<StructureFixture>,
}

impl StructureManifest {
    /// Parse manifest text; `origin` only names the file in errors.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(text).map_err(|source| ManifestError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        let mut seen = std::collections::HashSet::new();
        for fixture in &manifest.structures {
            if !seen.insert(&fixture.path) {
                return Err(ManifestError::Duplicate(fixture.path.clone()));
            }
        }
        Ok(manifest)
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&text, path)?;
        debug!(structures = manifest.structures.len(), "Manifest loaded");
        Ok(manifest)
    }

    pub fn into_provider(self) -> InMemoryStructureProvider {
        InMemoryStructureProvider::with_fixtures(self.structures)
    }
}

#[cfg(test)]
mod tests {
    use mdsapt_core::application::ports::StructureProvider;
    use mdsapt_core::domain::{ResidueId, StructureSource};

    use super::*;

    const MANIFEST: &str = r#"
[[structure]]
path = "system.pdb"
residues = [
    { id = 10, atoms = 14 },
    { id = 900, atoms = 40, protein = false },
]

[[structure]]
path = "run1.dcd"
frames = 200
"#;

    #[test]
    fn defaults_apply() {
        let manifest = StructureManifest::parse(MANIFEST, Path::new("m.toml")).unwrap();

        assert_eq!(manifest.structures.len(), 2);
        assert_eq!(manifest.structures[0].frames, 1);
        assert!(manifest.structures[0].residues[0].protein);
        assert!(!manifest.structures[0].residues[1].protein);
        assert!(manifest.structures[1].residues.is_empty());
    }

    #[test]
    fn provider_answers_from_manifest() {
        let provider = StructureManifest::parse(MANIFEST, Path::new("m.toml"))
            .unwrap()
            .into_provider();
        let source =
            StructureSource::with_trajectories("system.pdb", vec![PathBuf::from("run1.dcd")]);

        let handle = provider.load(&source).unwrap();
        assert_eq!(handle.frame_count(), 200);
        assert_eq!(handle.select(ResidueId::new(10), false).unwrap().atom_count(), 14);
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let text = "[[structure]]\npath = \"a.pdb\"\n[[structure]]\npath = \"a.pdb\"\n";
        assert!(matches!(
            StructureManifest::parse(text, Path::new("m.toml")),
            Err(ManifestError::Duplicate(_))
        ));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let err = StructureManifest::parse("[[structure]]\nframes = 3\n", Path::new("bad.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("structures.toml");
        std::fs::write(&path, MANIFEST).unwrap();

        assert_eq!(StructureManifest::load(&path).unwrap().structures.len(), 2);
        assert!(matches!(
            StructureManifest::load(&dir.path().join("nope.toml")),
            Err(ManifestError::Read { .. })
        ));
    }
}
