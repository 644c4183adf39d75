//! Decorator that refuses to load structures whose files are missing.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use mdsapt_core::{
    application::{ApplicationError, ports::StructureProvider},
    domain::{StructureHandle, StructureSource},
};

/// Checks every referenced file exists before delegating to `inner`.
///
/// Relative paths are resolved against `base` when one is set, so a run input
/// can name its structures relative to its own directory.
pub struct FileCheckingProvider<P> {
    inner: P,
    base: Option<PathBuf>,
}

impl<P: StructureProvider> FileCheckingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, base: None }
    }

    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl<P: StructureProvider> StructureProvider for FileCheckingProvider<P> {
    #[instrument(skip_all, fields(source = %source))]
    fn load(
        &self,
        source: &StructureSource,
    ) -> Result<Box<dyn StructureHandle>, ApplicationError> {
        for path in source.paths() {
            let resolved = self.resolve(path);
            if !resolved.is_file() {
                return Err(ApplicationError::StructureLoad {
                    structure: source.to_string(),
                    reason: format!("file not found: {}", resolved.display()),
                });
            }
        }
        debug!("All structure files present");
        self.inner.load(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{InMemoryStructureProvider, StructureFixture};

    fn inner() -> InMemoryStructureProvider {
        InMemoryStructureProvider::with_fixtures([
            StructureFixture::new("a.pdb", 1).with_residue(10, 12),
            StructureFixture::new("a.dcd", 50),
        ])
    }

    #[test]
    fn missing_file_is_reported_before_delegating() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.pdb"), "").unwrap();

        let provider = FileCheckingProvider::new(inner()).with_base(dir.path());
        let source = StructureSource::with_trajectories("a.pdb", vec![PathBuf::from("a.dcd")]);

        let err = provider.load(&source).err().unwrap();
        assert!(err.to_string().contains("a.dcd"));
    }

    #[test]
    fn present_files_are_delegated() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.pdb"), "").unwrap();
        std::fs::write(dir.path().join("a.dcd"), "").unwrap();

        let provider = FileCheckingProvider::new(inner()).with_base(dir.path());
        let source = StructureSource::with_trajectories("a.pdb", vec![PathBuf::from("a.dcd")]);

        assert_eq!(provider.load(&source).unwrap().frame_count(), 50);
    }
}
