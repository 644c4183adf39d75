//! Trajectory pipeline: one topology plus a sampled trajectory window.
//!
//! Order of checks:
//! 1. Extract top-level keys (no structure data touched on failure)
//! 2. Load topology and trajectories through the provider
//! 3. Selections and pairs
//! 4. System settings
//! 5. Trajectory window
//! 6. Compute settings

use tracing::{debug, info, instrument};

use crate::{
    application::ports::StructureProvider,
    domain::{
        ComputeSettingsValidator, ConfigAssembler, Mode, RawConfig, SelectionValidator,
        StructureSource, SystemSettingsValidator, TrajectoryDocument,
        TrajectorySettingsValidator, ValidatedConfig,
    },
    error::MdsaptResult,
};

/// Validates trajectory-mode documents.
pub struct TrajectoryInputValidator<'a> {
    provider: &'a dyn StructureProvider,
}

impl<'a> TrajectoryInputValidator<'a> {
    pub fn new(provider: &'a dyn StructureProvider) -> Self {
        Self { provider }
    }

    #[instrument(skip_all, fields(mode = %Mode::Trajectory))]
    pub fn validate(&self, raw: &RawConfig) -> MdsaptResult<ValidatedConfig> {
        let document = TrajectoryDocument::extract(raw)?;

        let source =
            StructureSource::with_trajectories(&document.topology, document.trajectories.clone());
        debug!(%source, "Loading structure");
        let handle = self.provider.load(&source)?;
        info!(frames = handle.frame_count(), "Structure loaded");

        SelectionValidator::validate(
            handle.as_ref(),
            &document.selections,
            &document.pairs,
            Mode::Trajectory,
        )?;
        debug!(
            selections = document.selections.len(),
            pairs = document.pairs.len(),
            "Selections resolved"
        );

        let resources = SystemSettingsValidator::validate(&document.system_settings)?;
        let window =
            TrajectorySettingsValidator::validate(handle.as_ref(), &document.trajectory_settings)?;
        debug!(
            start = window.start(),
            stop = window.stop(),
            step = window.step(),
            "Trajectory window accepted"
        );
        let compute =
            ComputeSettingsValidator::validate(&document.opt_settings, &document.sapt_settings)?;

        Ok(ConfigAssembler::trajectory(document, window, resources, compute))
    }
}
