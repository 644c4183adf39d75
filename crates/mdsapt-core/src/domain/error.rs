// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::domain::schema::keys;
use crate::domain::value_objects::{AtomGroupPair, ResidueId};
use crate::error::ErrorKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable and comparable (idempotence checks compare whole errors)
/// - Classifiable (each maps onto one [`ErrorKind`])
/// - Actionable (provides suggestions naming the offending key, id, or pair)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Document shape
    // ========================================================================
    #[error("required key missing: '{key}'")]
    MissingKey { key: String },

    #[error("invalid value for '{key}': expected {expected}, found {found}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        found: String,
    },

    // ========================================================================
    // Mode detection
    // ========================================================================
    #[error(
        "document contains both '{}' and '{}'; cannot tell a trajectory input from a docking input",
        keys::TOPOLOGY_PATH,
        keys::TOPOLOGY_DIRECTORY
    )]
    AmbiguousMode,

    #[error(
        "document contains neither '{}' (trajectory input) nor '{}' (docking input)",
        keys::TOPOLOGY_PATH,
        keys::TOPOLOGY_DIRECTORY
    )]
    UndetectableMode,

    // ========================================================================
    // Atom groups
    // ========================================================================
    #[error("selection 'resid {residue}' failed for {structure}: {reason}")]
    Selection {
        residue: ResidueId,
        structure: String,
        reason: String,
    },

    #[error("pair {pair} in int_pairs must have exactly {expected} members, found {found}")]
    PairArity {
        pair: AtomGroupPair,
        expected: usize,
        found: usize,
    },

    #[error("{member} in pair {pair} is not declared in selection_resid_num")]
    UndeclaredPairMember {
        pair: AtomGroupPair,
        member: ResidueId,
    },

    // ========================================================================
    // Trajectory window
    // ========================================================================
    #[error("invalid trajectory window: {fault} (start = {start}, stop = {stop}, step = {step})")]
    InvalidRange {
        start: i64,
        stop: i64,
        step: i64,
        fault: RangeFault,
    },

    #[error("stop frame {stop} exceeds the trajectory length of {frame_count} frames")]
    OutOfBounds { stop: i64, frame_count: usize },

    // ========================================================================
    // Aggregate
    // ========================================================================
    #[error("{}", format_all(.0))]
    Multiple(Vec<DomainError>),
}

/// The rule a trajectory window broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeFault {
    StartNotBeforeStop,
    StepNotBelowStop,
    ZeroStep,
}

impl fmt::Display for RangeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StartNotBeforeStop => "start is greater than or equal to stop",
            Self::StepNotBelowStop => "step is greater than or equal to stop",
            Self::ZeroStep => "step cannot be 0",
        })
    }
}

fn format_all(errors: &[DomainError]) -> String {
    let mut out = format!("{} problems found:", errors.len());
    for err in errors {
        out.push_str("\n  - ");
        out.push_str(&err.to_string());
    }
    out
}

impl DomainError {
    /// Collapse a list of violations into one error.
    ///
    /// A single violation is returned as itself so callers can match on it
    /// directly; nested `Multiple` values are flattened.
    pub fn from_violations(violations: Vec<DomainError>) -> Self {
        let mut flat = Vec::with_capacity(violations.len());
        for v in violations {
            match v {
                Self::Multiple(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            flat.remove(0)
        } else {
            Self::Multiple(flat)
        }
    }

    /// Kind of this error. `Multiple` reports the kind of its first member.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingKey { .. } => ErrorKind::MissingKey,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::AmbiguousMode | Self::UndetectableMode => ErrorKind::ModeDetection,
            Self::Selection { .. } => ErrorKind::Selection,
            Self::PairArity { .. } | Self::UndeclaredPairMember { .. } => {
                ErrorKind::PairIntegrity
            }
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::Multiple(errors) => errors
                .first()
                .map_or(ErrorKind::InvalidValue, DomainError::kind),
        }
    }

    /// Kinds of every violation carried by this error, in report order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(DomainError::kinds).collect(),
            other => vec![other.kind()],
        }
    }

    /// Individual violations, flattening `Multiple`.
    pub fn violations(&self) -> Vec<&DomainError> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(DomainError::violations).collect(),
            other => vec![other],
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingKey { key } => vec![
                format!("Add '{}' to the input file", key),
                "Generate a complete template with: mdsapt init <path>".into(),
            ],
            Self::InvalidValue { key, expected, .. } => {
                vec![format!("Set '{}' to {}", key, expected)]
            }
            Self::AmbiguousMode => vec![
                format!(
                    "Keep '{}' (+ '{}') for a trajectory run",
                    keys::TOPOLOGY_PATH,
                    keys::TRAJECTORY_PATHS
                ),
                format!(
                    "Or keep '{}' for a docking run, not both",
                    keys::TOPOLOGY_DIRECTORY
                ),
            ],
            Self::UndetectableMode => vec![
                format!(
                    "Trajectory runs need '{}' and '{}'",
                    keys::TOPOLOGY_PATH,
                    keys::TRAJECTORY_PATHS
                ),
                format!(
                    "Docking runs need '{}' (a list of structure files)",
                    keys::TOPOLOGY_DIRECTORY
                ),
            ],
            Self::Selection { residue, .. } => vec![
                format!("Check that residue {} exists in the structure", residue),
                "Residue ids are matched against the topology's resid field".into(),
            ],
            Self::PairArity { expected, .. } => vec![format!(
                "Write each entry of int_pairs as a list of {} residue ids, e.g. [10, 20]",
                expected
            )],
            Self::UndeclaredPairMember { member, .. } => vec![format!(
                "Add {} to selection_resid_num or remove it from int_pairs",
                member
            )],
            Self::InvalidRange { fault, .. } => match fault {
                RangeFault::StartNotBeforeStop => vec!["Make start smaller than stop".into()],
                RangeFault::StepNotBelowStop => vec!["Make step smaller than stop".into()],
                RangeFault::ZeroStep => vec!["Use a step of at least 1".into()],
            },
            Self::OutOfBounds { frame_count, .. } => vec![format!(
                "Set trajectory_settings.stop to at most {}",
                frame_count
            )],
            Self::Multiple(errors) => errors.iter().flat_map(DomainError::suggestions).collect(),
        }
    }
}
