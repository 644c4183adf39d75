//! Classification of a document into its validation pipeline.

use crate::domain::error::DomainError;
use crate::domain::raw::RawConfig;
use crate::domain::value_objects::Mode;

/// Picks the [`Mode`] of a document from its signature keys.
pub struct ModeDetector;

impl ModeDetector {
    /// Exactly one signature key must be present; a null value counts as absent.
    pub fn detect(raw: &RawConfig) -> Result<Mode, DomainError> {
        let present: Vec<Mode> = Mode::ALL
            .into_iter()
            .filter(|mode| raw.contains_key(mode.signature_key()))
            .collect();

        match present.as_slice() {
            [mode] => Ok(*mode),
            [] => Err(DomainError::UndetectableMode),
            _ => Err(DomainError::AmbiguousMode),
        }
    }
}
