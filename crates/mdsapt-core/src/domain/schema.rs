//! Document schema: key names and the per-mode top-level extraction.
//!
//! Extraction reads only the top level of the document. Settings blocks are
//! handed on as [`Section`]s for their own validators; everything else is
//! converted to typed values here. Every missing or mistyped top-level key
//! is reported together before any structure data is touched.

use std::path::PathBuf;

use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::raw::{RawConfig, Section, describe};
use crate::domain::validation::Violations;
use crate::domain::value_objects::{AtomGroupPair, ResidueId};

/// Key names as they appear in run-input documents.
pub mod keys {
    pub const TOPOLOGY_PATH: &str = "topology_path";
    pub const TRAJECTORY_PATHS: &str = "trajectory_paths";
    pub const TOPOLOGY_DIRECTORY: &str = "topology_directory";
    pub const SELECTION_RESID_NUM: &str = "selection_resid_num";
    pub const INT_PAIRS: &str = "int_pairs";
    pub const TRAJECTORY_SETTINGS: &str = "trajectory_settings";
    pub const SYSTEM_SETTINGS: &str = "system_settings";
    pub const OPT_SETTINGS: &str = "opt_settings";
    pub const SAPT_SETTINGS: &str = "sapt_settings";

    // trajectory_settings
    pub const START: &str = "start";
    pub const STOP: &str = "stop";
    pub const STEP: &str = "step";

    // system_settings
    pub const NCPUS: &str = "ncpus";
    pub const MEMORY: &str = "memory";
    pub const TIME: &str = "time";

    // opt_settings
    pub const PH: &str = "pH";

    // sapt_settings
    pub const METHOD: &str = "method";
    pub const BASIS: &str = "basis";
    pub const SETTINGS: &str = "settings";
    pub const SAVE_PSI4_OUTPUT: &str = "save_psi4_output";
}

/// Top-level contents of a trajectory-mode document.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryDocument<'a> {
    pub topology: PathBuf,
    pub trajectories: Vec<PathBuf>,
    pub selections: Vec<ResidueId>,
    pub pairs: Vec<AtomGroupPair>,
    pub trajectory_settings: Section<'a>,
    pub system_settings: Section<'a>,
    pub opt_settings: Section<'a>,
    pub sapt_settings: Section<'a>,
}

impl<'a> TrajectoryDocument<'a> {
    pub fn extract(raw: &'a RawConfig) -> Result<Self, DomainError> {
        let root = raw.root();
        let mut violations = Violations::new();

        let topology = violations.take(root.require_str(keys::TOPOLOGY_PATH).map(PathBuf::from));
        let trajectories = violations.take(parse_paths(&root, keys::TRAJECTORY_PATHS));
        let selections = violations.take(parse_residue_ids(&root, keys::SELECTION_RESID_NUM));
        let pairs = violations.take(parse_pairs(&root, keys::INT_PAIRS));
        let trajectory_settings = violations.take(root.section(keys::TRAJECTORY_SETTINGS));
        let system_settings = violations.take(root.section(keys::SYSTEM_SETTINGS));
        let opt_settings = violations.take(root.section(keys::OPT_SETTINGS));
        let sapt_settings = violations.take(root.section(keys::SAPT_SETTINGS));

        match (
            topology,
            trajectories,
            selections,
            pairs,
            trajectory_settings,
            system_settings,
            opt_settings,
            sapt_settings,
        ) {
            (
                Some(topology),
                Some(trajectories),
                Some(selections),
                Some(pairs),
                Some(trajectory_settings),
                Some(system_settings),
                Some(opt_settings),
                Some(sapt_settings),
            ) if violations.is_empty() => Ok(Self {
                topology,
                trajectories,
                selections,
                pairs,
                trajectory_settings,
                system_settings,
                opt_settings,
                sapt_settings,
            }),
            _ => Err(violations.into_error()),
        }
    }
}

/// Top-level contents of a docking-mode document.
#[derive(Debug, Clone, PartialEq)]
pub struct DockingDocument<'a> {
    pub structures: Vec<PathBuf>,
    pub selections: Vec<ResidueId>,
    pub pairs: Vec<AtomGroupPair>,
    pub system_settings: Section<'a>,
    pub opt_settings: Section<'a>,
    pub sapt_settings: Section<'a>,
}

impl<'a> DockingDocument<'a> {
    pub fn extract(raw: &'a RawConfig) -> Result<Self, DomainError> {
        let root = raw.root();
        let mut violations = Violations::new();

        let structures = violations.take(parse_paths(&root, keys::TOPOLOGY_DIRECTORY));
        let selections = violations.take(parse_residue_ids(&root, keys::SELECTION_RESID_NUM));
        let pairs = violations.take(parse_pairs(&root, keys::INT_PAIRS));
        let system_settings = violations.take(root.section(keys::SYSTEM_SETTINGS));
        let opt_settings = violations.take(root.section(keys::OPT_SETTINGS));
        let sapt_settings = violations.take(root.section(keys::SAPT_SETTINGS));

        match (
            structures,
            selections,
            pairs,
            system_settings,
            opt_settings,
            sapt_settings,
        ) {
            (
                Some(structures),
                Some(selections),
                Some(pairs),
                Some(system_settings),
                Some(opt_settings),
                Some(sapt_settings),
            ) if violations.is_empty() => Ok(Self {
                structures,
                selections,
                pairs,
                system_settings,
                opt_settings,
                sapt_settings,
            }),
            _ => Err(violations.into_error()),
        }
    }
}

// ── element parsers ───────────────────────────────────────────────────────────

fn element_key(section: &Section<'_>, key: &str, index: usize) -> String {
    format!("{}[{}]", section.qualify(key), index)
}

fn parse_paths(section: &Section<'_>, key: &str) -> Result<Vec<PathBuf>, DomainError> {
    let items = section.require_sequence(key)?;
    let mut violations = Violations::new();
    let mut paths = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(path) => paths.push(PathBuf::from(path)),
            None => violations.push(DomainError::InvalidValue {
                key: element_key(section, key, i),
                expected: "a file path string",
                found: describe(item),
            }),
        }
    }

    violations.into_result().map(|()| paths)
}

fn residue_id(value: &Value) -> Option<ResidueId> {
    value.as_i64().map(ResidueId::new)
}

fn parse_residue_ids(section: &Section<'_>, key: &str) -> Result<Vec<ResidueId>, DomainError> {
    let items = section.require_sequence(key)?;
    let mut violations = Violations::new();
    let mut ids = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        match residue_id(item) {
            Some(id) => ids.push(id),
            None => violations.push(DomainError::InvalidValue {
                key: element_key(section, key, i),
                expected: "an integer residue id",
                found: describe(item),
            }),
        }
    }

    violations.into_result().map(|()| ids)
}

/// `int_pairs` is optional; absence means no pairs.
fn parse_pairs(section: &Section<'_>, key: &str) -> Result<Vec<AtomGroupPair>, DomainError> {
    let Some(items) = section.optional_sequence(key)? else {
        return Ok(Vec::new());
    };
    let mut violations = Violations::new();
    let mut pairs = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let Some(members) = item.as_array() else {
            violations.push(DomainError::InvalidValue {
                key: element_key(section, key, i),
                expected: "a list of residue ids",
                found: describe(item),
            });
            continue;
        };

        let mut pair = Vec::with_capacity(members.len());
        for (j, member) in members.iter().enumerate() {
            match residue_id(member) {
                Some(id) => pair.push(id),
                None => violations.push(DomainError::InvalidValue {
                    key: format!("{}[{}]", element_key(section, key, i), j),
                    expected: "an integer residue id",
                    found: describe(member),
                }),
            }
        }
        pairs.push(AtomGroupPair::new(pair));
    }

    violations.into_result().map(|()| pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn raw(value: Value) -> RawConfig {
        RawConfig::from_value(value).unwrap()
    }

    fn settings() -> Value {
        json!({
            "trajectory_settings": { "start": 0, "stop": 100, "step": 1 },
            "system_settings": { "ncpus": 4, "memory": "12GB", "time": "24:00:00" },
            "opt_settings": { "pH": 7.0 },
            "sapt_settings": {
                "method": "sapt0",
                "basis": "jun-cc-pvdz",
                "settings": { "reference": "rhf" },
                "save_psi4_output": true
            }
        })
    }

    fn merge(mut base: Value, extra: Value) -> Value {
        if let (Value::Object(base), Value::Object(extra)) = (&mut base, extra) {
            base.extend(extra);
        }
        base
    }

    #[test]
    fn trajectory_document_extracts_typed_fields() {
        let cfg = raw(merge(
            settings(),
            json!({
                "topology_path": "a.pdb",
                "trajectory_paths": ["a.dcd", "b.dcd"],
                "selection_resid_num": [10, 20],
                "int_pairs": [[10, 20]]
            }),
        ));

        let doc = TrajectoryDocument::extract(&cfg).unwrap();
        assert_eq!(doc.topology, PathBuf::from("a.pdb"));
        assert_eq!(doc.trajectories.len(), 2);
        assert_eq!(doc.selections, vec![ResidueId::new(10), ResidueId::new(20)]);
        assert_eq!(doc.pairs, vec![AtomGroupPair::from([10, 20])]);
        assert_eq!(doc.system_settings.name(), "system_settings");
    }

    #[test]
    fn int_pairs_is_optional() {
        let cfg = raw(merge(
            settings(),
            json!({
                "topology_directory": ["d1.pdb"],
                "selection_resid_num": [10]
            }),
        ));

        let doc = DockingDocument::extract(&cfg).unwrap();
        assert!(doc.pairs.is_empty());
    }

    #[test]
    fn every_missing_top_level_key_is_reported() {
        let cfg = raw(json!({ "topology_path": "a.pdb" }));

        let err = TrajectoryDocument::extract(&cfg).unwrap_err();
        let missing: Vec<String> = err
            .violations()
            .into_iter()
            .filter_map(|v| match v {
                DomainError::MissingKey { key } => Some(key.clone()),
                _ => None,
            })
            .collect();

        assert_eq!(
            missing,
            vec![
                "trajectory_paths",
                "selection_resid_num",
                "trajectory_settings",
                "system_settings",
                "opt_settings",
                "sapt_settings",
            ]
        );
    }

    #[test]
    fn non_integer_residue_ids_are_rejected_with_position() {
        let cfg = raw(merge(
            settings(),
            json!({
                "topology_directory": ["d1.pdb"],
                "selection_resid_num": [10, "twenty"],
                "int_pairs": [[10, 2.5]]
            }),
        ));

        let err = DockingDocument::extract(&cfg).unwrap_err();
        assert_eq!(err.kinds(), vec![ErrorKind::InvalidValue, ErrorKind::InvalidValue]);
        let keys: Vec<String> = err
            .violations()
            .into_iter()
            .filter_map(|v| match v {
                DomainError::InvalidValue { key, .. } => Some(key.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec!["selection_resid_num[1]", "int_pairs[0][1]"]);
    }

    #[test]
    fn paths_must_be_strings() {
        let cfg = raw(merge(
            settings(),
            json!({
                "topology_directory": ["d1.pdb", 7],
                "selection_resid_num": [10]
            }),
        ));

        let err = DockingDocument::extract(&cfg).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidValue { ref key, .. } if key == "topology_directory[1]"
        ));
    }
}
