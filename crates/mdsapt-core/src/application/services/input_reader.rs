//! Input Reader - main application entry point.
//!
//! Coordinates the whole validation of one run-input file:
//! 1. Load the document through the `DocumentLoader` port
//! 2. Detect its mode
//! 3. Run the trajectory or docking pipeline
//!
//! Every call is independent; the reader keeps no state between runs.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{DocumentLoader, StructureProvider},
        services::{DockingInputValidator, TrajectoryInputValidator},
    },
    domain::{Mode, ModeDetector, RawConfig, ValidatedConfig},
    error::MdsaptResult,
};

/// Turns run-input documents into [`ValidatedConfig`]s.
pub struct InputReader {
    loader: Box<dyn DocumentLoader>,
    provider: Box<dyn StructureProvider>,
}

impl InputReader {
    /// Create a new reader with the given adapters.
    pub fn new(loader: Box<dyn DocumentLoader>, provider: Box<dyn StructureProvider>) -> Self {
        Self { loader, provider }
    }

    /// Load and validate the document at `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read(&self, path: &Path) -> MdsaptResult<ValidatedConfig> {
        let raw = self.loader.load(path)?;
        info!(keys = raw.len(), "Document loaded");
        self.validate(&raw)
    }

    /// Validate an already decoded document.
    pub fn validate(&self, raw: &RawConfig) -> MdsaptResult<ValidatedConfig> {
        let mode = ModeDetector::detect(raw)?;
        info!(%mode, "Mode detected");

        let config = match mode {
            Mode::Trajectory => TrajectoryInputValidator::new(self.provider.as_ref()).validate(raw),
            Mode::Docking => DockingInputValidator::new(self.provider.as_ref()).validate(raw),
        }?;

        info!("Validation completed successfully");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockDocumentLoader, MockStructureProvider},
    };
    use crate::domain::DomainError;
    use crate::error::{ErrorKind, MdsaptError};
    use crate::testing::FakeStructure;

    fn trajectory_raw() -> RawConfig {
        RawConfig::from_value(json!({
            "topology_path": "a.pdb",
            "trajectory_paths": ["a.dcd"],
            "selection_resid_num": [10, 20],
            "int_pairs": [[10, 20]],
            "trajectory_settings": { "start": 0, "stop": 100, "step": 1, "pH": 7.0 },
            "system_settings": { "ncpus": 4, "memory": "8GB", "time": "2:00:00" },
            "opt_settings": { "pH": 7.0 },
            "sapt_settings": {
                "method": "sapt0",
                "basis": "jun-cc-pvdz",
                "settings": { "reference": "rhf" },
                "save_psi4_output": true
            }
        }))
        .unwrap()
    }

    fn loader_returning(raw: RawConfig) -> MockDocumentLoader {
        let mut loader = MockDocumentLoader::new();
        loader
            .expect_load()
            .returning(move |_| Ok(raw.clone()));
        loader
    }

    fn stable_provider() -> MockStructureProvider {
        let mut provider = MockStructureProvider::new();
        provider
            .expect_load()
            .returning(|_| Ok(Box::new(FakeStructure::new("a.pdb", 200).with_residues(&[10, 20]))));
        provider
    }

    #[test]
    fn reads_and_validates_a_trajectory_document() {
        let mut loader = MockDocumentLoader::new();
        let raw = trajectory_raw();
        loader
            .expect_load()
            .withf(|path| path == Path::new("input.yaml"))
            .times(1)
            .returning(move |_| Ok(raw.clone()));

        let reader = InputReader::new(Box::new(loader), Box::new(stable_provider()));
        let config = reader.read(Path::new("input.yaml")).unwrap();

        assert_eq!(config.mode(), Mode::Trajectory);
        assert_eq!(config.selections().len(), 2);
    }

    #[test]
    fn load_error_is_surfaced() {
        let mut loader = MockDocumentLoader::new();
        loader.expect_load().returning(|path| {
            Err(ApplicationError::DocumentLoad {
                path: path.to_path_buf(),
                reason: "No such file or directory".into(),
            })
        });
        let mut provider = MockStructureProvider::new();
        provider.expect_load().never();

        let reader = InputReader::new(Box::new(loader), Box::new(provider));
        let err = reader.read(Path::new("missing.yaml")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Load);
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn document_without_signature_key_fails_mode_detection() {
        let raw = RawConfig::from_value(json!({ "selection_resid_num": [10] })).unwrap();
        let mut provider = MockStructureProvider::new();
        provider.expect_load().never();

        let reader = InputReader::new(Box::new(loader_returning(raw)), Box::new(provider));
        let err = reader.read(Path::new("input.yaml")).unwrap_err();

        assert_eq!(err, MdsaptError::Domain(DomainError::UndetectableMode));
        assert_eq!(err.kind(), ErrorKind::ModeDetection);
    }

    #[test]
    fn document_with_both_signature_keys_is_rejected() {
        let mut value = serde_json::to_value(trajectory_raw().root().entries()).unwrap();
        value["topology_directory"] = json!(["d1.pdb"]);
        let raw = RawConfig::from_value(value).unwrap();

        let reader = InputReader::new(
            Box::new(MockDocumentLoader::new()),
            Box::new(MockStructureProvider::new()),
        );

        assert_eq!(
            reader.validate(&raw).unwrap_err(),
            MdsaptError::Domain(DomainError::AmbiguousMode)
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let reader = InputReader::new(
            Box::new(loader_returning(trajectory_raw())),
            Box::new(stable_provider()),
        );
        let path = PathBuf::from("input.yaml");

        let first = reader.read(&path).unwrap();
        let second = reader.read(&path).unwrap();
        assert_eq!(first, second);
    }
}
