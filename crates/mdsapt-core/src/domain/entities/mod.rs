pub mod run_config;
pub mod settings;

pub use run_config::{RunInputs, ValidatedConfig};
pub use settings::{ComputeSettings, ResourceSettings, TrajectoryWindow};
