//! Docking pipeline: several independent single-frame structures.
//!
//! Selections are resolved against every structure and reported together;
//! pairs, system settings and compute settings are checked once.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::StructureProvider},
    domain::{
        ComputeSettingsValidator, ConfigAssembler, DockingDocument, Mode, RawConfig,
        SelectionValidator, StructureSource, SystemSettingsValidator, ValidatedConfig, Violations,
    },
    error::MdsaptResult,
};

/// Validates docking-mode documents.
pub struct DockingInputValidator<'a> {
    provider: &'a dyn StructureProvider,
}

impl<'a> DockingInputValidator<'a> {
    pub fn new(provider: &'a dyn StructureProvider) -> Self {
        Self { provider }
    }

    #[instrument(skip_all, fields(mode = %Mode::Docking))]
    pub fn validate(&self, raw: &RawConfig) -> MdsaptResult<ValidatedConfig> {
        let document = DockingDocument::extract(raw)?;
        if document.structures.is_empty() {
            return Err(ApplicationError::NoStructures.into());
        }

        let mode = Mode::Docking;
        let mut violations = Violations::new();
        for path in &document.structures {
            let source = StructureSource::single(path);
            debug!(%source, "Loading structure");
            let handle = self.provider.load(&source)?;
            violations.take(SelectionValidator::validate_selections(
                handle.as_ref(),
                &document.selections,
                mode.protein_only(),
            ));
        }
        violations.take(SelectionValidator::validate_pairs(
            &document.selections,
            &document.pairs,
            mode.pair_arity(),
        ));
        violations.into_result()?;
        info!(
            structures = document.structures.len(),
            "Selections resolved in every structure"
        );

        let resources = SystemSettingsValidator::validate(&document.system_settings)?;
        let compute =
            ComputeSettingsValidator::validate(&document.opt_settings, &document.sapt_settings)?;

        Ok(ConfigAssembler::docking(document, resources, compute))
    }
}
