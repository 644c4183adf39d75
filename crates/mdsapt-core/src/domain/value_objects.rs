//! Domain value objects: Mode, ResidueId, AtomGroupPair, Scalar.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Mode
//! carries the per-mode schema facts (signature key, pair arity, selection
//! scope) so that no validator hardcodes them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::schema::keys;

// ── Mode ──────────────────────────────────────────────────────────────────────

/// Which validation pipeline applies to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One topology plus a sampled trajectory window.
    Trajectory,
    /// Several independent single-frame structures.
    Docking,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Trajectory, Mode::Docking];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trajectory => "trajectory",
            Self::Docking => "docking",
        }
    }

    /// The top-level key whose presence identifies this mode.
    pub const fn signature_key(self) -> &'static str {
        match self {
            Self::Trajectory => keys::TOPOLOGY_PATH,
            Self::Docking => keys::TOPOLOGY_DIRECTORY,
        }
    }

    /// Number of residue ids every `int_pairs` entry must have.
    pub const fn pair_arity(self) -> usize {
        match self {
            Self::Trajectory => 2,
            Self::Docking => 2,
        }
    }

    /// Whether residue selections are restricted to protein atoms.
    ///
    /// Docking structures carry ligands and solvent under the same residue
    /// numbering, so only protein atoms may satisfy a selection there.
    pub const fn protein_only(self) -> bool {
        matches!(self, Self::Docking)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trajectory" | "traj" | "md" => Ok(Self::Trajectory),
            "docking" | "dock" => Ok(Self::Docking),
            other => Err(DomainError::InvalidValue {
                key: "mode".into(),
                expected: "'trajectory' or 'docking'",
                found: format!("'{other}'"),
            }),
        }
    }
}

// ── ResidueId ─────────────────────────────────────────────────────────────────

/// Residue number naming one atom group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidueId(i64);

impl ResidueId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ResidueId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── AtomGroupPair ─────────────────────────────────────────────────────────────

/// An ordered group of residue ids designated for interaction analysis.
///
/// Arity is not enforced here; a pair holds whatever the document wrote and
/// the selection validator checks it against [`Mode::pair_arity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomGroupPair(Vec<ResidueId>);

impl AtomGroupPair {
    pub fn new(members: Vec<ResidueId>) -> Self {
        Self(members)
    }

    pub fn members(&self) -> &[ResidueId] {
        &self.0
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<ResidueId> for AtomGroupPair {
    fn from_iter<I: IntoIterator<Item = ResidueId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[i64; N]> for AtomGroupPair {
    fn from(ids: [i64; N]) -> Self {
        ids.into_iter().map(ResidueId::new).collect()
    }
}

impl fmt::Display for AtomGroupPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, member) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }
        f.write_str("]")
    }
}

// ── Scalar ────────────────────────────────────────────────────────────────────

/// A scalar document value kept without imposing a type policy.
///
/// Resource settings are only checked for presence; their interpretation
/// belongs to the scheduler that consumes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Convert a decoded document value; `None` for null, sequences, and mappings.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}
