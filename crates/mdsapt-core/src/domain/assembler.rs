//! Builds the [`ValidatedConfig`] once every validator has passed.

use crate::domain::entities::{
    ComputeSettings, ResourceSettings, RunInputs, TrajectoryWindow, ValidatedConfig,
};
use crate::domain::schema::{DockingDocument, TrajectoryDocument};

/// Only constructor of [`ValidatedConfig`] outside the entities module.
pub struct ConfigAssembler;

impl ConfigAssembler {
    pub fn trajectory(
        document: TrajectoryDocument<'_>,
        window: TrajectoryWindow,
        resources: ResourceSettings,
        compute: ComputeSettings,
    ) -> ValidatedConfig {
        ValidatedConfig::new(
            RunInputs::Trajectory {
                topology: document.topology,
                trajectories: document.trajectories,
                window,
            },
            document.selections,
            document.pairs,
            resources,
            compute,
        )
    }

    pub fn docking(
        document: DockingDocument<'_>,
        resources: ResourceSettings,
        compute: ComputeSettings,
    ) -> ValidatedConfig {
        ValidatedConfig::new(
            RunInputs::Docking {
                structures: document.structures,
            },
            document.selections,
            document.pairs,
            resources,
            compute,
        )
    }
}
