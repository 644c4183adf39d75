//! The `ValidatedConfig` aggregate root.
//!
//! A `ValidatedConfig` is the only successful outcome of validating a run
//! input. It is built by `ConfigAssembler` from the outputs of the
//! validators and never mutated afterwards.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::settings::{ComputeSettings, ResourceSettings, TrajectoryWindow};
use crate::domain::value_objects::{AtomGroupPair, Mode, ResidueId};

/// Structure inputs of a run, tagged by mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RunInputs {
    Trajectory {
        topology: PathBuf,
        trajectories: Vec<PathBuf>,
        window: TrajectoryWindow,
    },
    Docking {
        structures: Vec<PathBuf>,
    },
}

impl RunInputs {
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Trajectory { .. } => Mode::Trajectory,
            Self::Docking { .. } => Mode::Docking,
        }
    }
}

/// A fully-validated run descriptor.
///
/// Guaranteed on construction:
/// - every selection resolved against every referenced structure
/// - every pair member appears in `selections`
/// - the trajectory window (trajectory mode only) fits the trajectory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedConfig {
    inputs: RunInputs,
    selections: Vec<ResidueId>,
    pairs: Vec<AtomGroupPair>,
    resources: ResourceSettings,
    compute: ComputeSettings,
}

impl ValidatedConfig {
    pub(crate) fn new(
        inputs: RunInputs,
        selections: Vec<ResidueId>,
        pairs: Vec<AtomGroupPair>,
        resources: ResourceSettings,
        compute: ComputeSettings,
    ) -> Self {
        Self {
            inputs,
            selections,
            pairs,
            resources,
            compute,
        }
    }

    pub const fn mode(&self) -> Mode {
        self.inputs.mode()
    }

    pub fn inputs(&self) -> &RunInputs {
        &self.inputs
    }

    /// Every structure file the run reads, in document order.
    pub fn structure_paths(&self) -> Vec<&PathBuf> {
        match &self.inputs {
            RunInputs::Trajectory {
                topology,
                trajectories,
                ..
            } => std::iter::once(topology).chain(trajectories.iter()).collect(),
            RunInputs::Docking { structures } => structures.iter().collect(),
        }
    }

    /// The trajectory window; `None` in docking mode.
    pub fn trajectory_window(&self) -> Option<&TrajectoryWindow> {
        match &self.inputs {
            RunInputs::Trajectory { window, .. } => Some(window),
            RunInputs::Docking { .. } => None,
        }
    }

    pub fn selections(&self) -> &[ResidueId] {
        &self.selections
    }

    pub fn pairs(&self) -> &[AtomGroupPair] {
        &self.pairs
    }

    pub fn resources(&self) -> &ResourceSettings {
        &self.resources
    }

    pub fn compute(&self) -> &ComputeSettings {
        &self.compute
    }
}
