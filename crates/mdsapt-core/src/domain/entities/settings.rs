//! Validated settings blocks.
//!
//! Values here only come out of the validators in `domain::validation`, so
//! holding one means its block passed. Fields are read-only.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::value_objects::Scalar;

/// Frame sampling window over a trajectory.
///
/// Invariants: `step != 0`, `start < stop`, `step < stop`, and `stop` does
/// not exceed the frame count of the trajectory it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TrajectoryWindow {
    start: i64,
    stop: i64,
    step: i64,
}

impl TrajectoryWindow {
    pub(crate) const fn new(start: i64, stop: i64, step: i64) -> Self {
        Self { start, stop, step }
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn stop(&self) -> i64 {
        self.stop
    }

    pub const fn step(&self) -> i64 {
        self.step
    }

    /// Number of frames the window visits.
    pub fn sampled_frames(&self) -> usize {
        if self.step > 0 && self.start < self.stop {
            let span = self.stop.abs_diff(self.start);
            let frames = span.div_ceil(self.step.unsigned_abs());
            usize::try_from(frames).unwrap_or(usize::MAX)
        } else {
            0
        }
    }
}

/// Scheduler resources requested for the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSettings {
    ncpus: Scalar,
    memory: Scalar,
    walltime: Scalar,
}

impl ResourceSettings {
    pub(crate) fn new(ncpus: Scalar, memory: Scalar, walltime: Scalar) -> Self {
        Self {
            ncpus,
            memory,
            walltime,
        }
    }

    pub fn ncpus(&self) -> &Scalar {
        &self.ncpus
    }

    pub fn memory(&self) -> &Scalar {
        &self.memory
    }

    pub fn walltime(&self) -> &Scalar {
        &self.walltime
    }
}

/// Quantum-chemistry settings handed to the SAPT stage.
///
/// `method` and `basis` are opaque; the chemistry backend is the authority
/// on which names exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputeSettings {
    #[serde(rename = "pH")]
    ph: f64,
    method: String,
    basis: String,
    settings: Map<String, Value>,
    save_output: bool,
}

impl ComputeSettings {
    pub(crate) fn new(
        ph: f64,
        method: String,
        basis: String,
        settings: Map<String, Value>,
        save_output: bool,
    ) -> Self {
        Self {
            ph,
            method,
            basis,
            settings,
            save_output,
        }
    }

    pub fn ph(&self) -> f64 {
        self.ph
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn basis(&self) -> &str {
        &self.basis
    }

    /// Free-form backend options, exactly as written.
    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    /// Whether intermediate backend output files are kept.
    pub fn save_output(&self) -> bool {
        self.save_output
    }
}
