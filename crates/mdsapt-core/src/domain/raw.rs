//! The untyped document as decoded from the run-input file.
//!
//! [`RawConfig`] is format-agnostic: adapters decode YAML (or anything else)
//! into a `serde_json::Value` tree and hand it over. Validators read it
//! through [`Section`], which names every key by its dotted path so error
//! messages point at the exact place in the document.

use serde_json::{Map, Value};

use crate::domain::error::DomainError;
use crate::domain::value_objects::Scalar;

/// Name used for the document root in error messages.
const ROOT: &str = "<document>";

/// Untyped mapping from top-level key to arbitrary value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    entries: Map<String, Value>,
}

impl RawConfig {
    /// Wrap a decoded document. Fails unless the root is a mapping.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(DomainError::InvalidValue {
                key: ROOT.into(),
                expected: "a mapping of keys to values",
                found: describe(&other),
            }),
        }
    }

    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// `true` if `key` is present with a non-null value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.root().get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View of the top level of the document.
    pub fn root(&self) -> Section<'_> {
        Section {
            path: String::new(),
            entries: &self.entries,
        }
    }
}

/// A borrowed mapping inside the document, addressed by dotted path.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    path: String,
    entries: &'a Map<String, Value>,
}

impl<'a> Section<'a> {
    /// Dotted path of this section (`<document>` for the root).
    pub fn name(&self) -> &str {
        if self.path.is_empty() { ROOT } else { self.path.as_str() }
    }

    /// Dotted path of `key` inside this section.
    pub fn qualify(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_owned()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub fn entries(&self) -> &'a Map<String, Value> {
        self.entries
    }

    /// Value of `key`, treating null as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.entries.get(key).filter(|v| !v.is_null())
    }

    pub fn require(&self, key: &str) -> Result<&'a Value, DomainError> {
        self.get(key).ok_or_else(|| DomainError::MissingKey {
            key: self.qualify(key),
        })
    }

    /// Nested mapping at `key`.
    pub fn section(&self, key: &str) -> Result<Section<'a>, DomainError> {
        let entries = self.require_mapping(key)?;
        Ok(Section {
            path: self.qualify(key),
            entries,
        })
    }

    pub fn require_mapping(&self, key: &str) -> Result<&'a Map<String, Value>, DomainError> {
        match self.require(key)? {
            Value::Object(map) => Ok(map),
            other => Err(self.invalid(key, "a mapping", other)),
        }
    }

    pub fn require_sequence(&self, key: &str) -> Result<&'a [Value], DomainError> {
        match self.require(key)? {
            Value::Array(items) => Ok(items),
            other => Err(self.invalid(key, "a list", other)),
        }
    }

    /// Like [`Section::require_sequence`] but an absent key yields `None`.
    pub fn optional_sequence(&self, key: &str) -> Result<Option<&'a [Value]>, DomainError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(other) => Err(self.invalid(key, "a list", other)),
        }
    }

    pub fn require_integer(&self, key: &str) -> Result<i64, DomainError> {
        let value = self.require(key)?;
        value
            .as_i64()
            .ok_or_else(|| self.invalid(key, "an integer", value))
    }

    /// Any number; integers are widened.
    pub fn require_number(&self, key: &str) -> Result<f64, DomainError> {
        let value = self.require(key)?;
        value
            .as_f64()
            .ok_or_else(|| self.invalid(key, "a number", value))
    }

    pub fn require_str(&self, key: &str) -> Result<&'a str, DomainError> {
        let value = self.require(key)?;
        value
            .as_str()
            .ok_or_else(|| self.invalid(key, "a string", value))
    }

    pub fn require_bool(&self, key: &str) -> Result<bool, DomainError> {
        let value = self.require(key)?;
        value
            .as_bool()
            .ok_or_else(|| self.invalid(key, "true or false", value))
    }

    pub fn require_scalar(&self, key: &str) -> Result<Scalar, DomainError> {
        let value = self.require(key)?;
        Scalar::from_value(value).ok_or_else(|| self.invalid(key, "a scalar value", value))
    }

    fn invalid(&self, key: &str, expected: &'static str, found: &Value) -> DomainError {
        DomainError::InvalidValue {
            key: self.qualify(key),
            expected,
            found: describe(found),
        }
    }
}

/// Short human description of a value for error messages.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(items) => format!("a list of {} items", items.len()),
        Value::Object(map) => format!("a mapping with {} keys", map.len()),
    }
}
