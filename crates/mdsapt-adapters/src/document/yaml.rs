//! YAML run-input loader.
//!
//! The document is decoded into a `serde_yaml::Value` first and converted to
//! JSON values, which is the representation `RawConfig` carries.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, instrument};

use mdsapt_core::{
    application::{ApplicationError, ports::DocumentLoader},
    domain::RawConfig,
};

/// Failure to turn text into a [`RawConfig`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported YAML value: {0}")]
    Convert(#[from] serde_json::Error),

    #[error("top level of the document must be a mapping, found {0}")]
    NotAMapping(&'static str),
}

/// Reads run-input documents from YAML files.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDocumentLoader;

impl YamlDocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Decode a document held in memory.
    pub fn parse_str(text: &str) -> Result<RawConfig, DecodeError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
        let value = serde_json::to_value(yaml)?;
        match value {
            serde_json::Value::Object(entries) => Ok(RawConfig::from_map(entries)),
            other => Err(DecodeError::NotAMapping(kind_of(&other))),
        }
    }
}

impl DocumentLoader for YamlDocumentLoader {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> Result<RawConfig, ApplicationError> {
        let text = std::fs::read_to_string(path).map_err(|e| ApplicationError::DocumentLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(bytes = text.len(), "Read input document");

        Self::parse_str(&text).map_err(|e| ApplicationError::DocumentLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "an empty document",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "a mapping",
    }
}
