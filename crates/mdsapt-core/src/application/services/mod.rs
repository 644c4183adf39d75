//! Application services - orchestrate use cases.
//!
//! [`InputReader`] is the entry point: it loads a document, detects its mode,
//! and hands it to the pipeline for that mode.

pub mod docking_input;
pub mod input_reader;
pub mod trajectory_input;

pub use docking_input::DockingInputValidator;
pub use input_reader::InputReader;
pub use trajectory_input::TrajectoryInputValidator;
