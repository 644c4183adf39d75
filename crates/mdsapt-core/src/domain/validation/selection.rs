use crate::domain::error::DomainError;
use crate::domain::structure::{AtomGroup, StructureHandle};
use crate::domain::validation::Violations;
use crate::domain::value_objects::{AtomGroupPair, Mode, ResidueId};

/// Checks residue selections against structure data and pair integrity
/// against the declared selections.
pub struct SelectionValidator;

impl SelectionValidator {
    /// Selections and pairs for one structure in the given mode.
    pub fn validate(
        handle: &dyn StructureHandle,
        selections: &[ResidueId],
        pairs: &[AtomGroupPair],
        mode: Mode,
    ) -> Result<(), DomainError> {
        let mut violations = Violations::new();
        violations.take(Self::validate_selections(
            handle,
            selections,
            mode.protein_only(),
        ));
        violations.take(Self::validate_pairs(selections, pairs, mode.pair_arity()));
        violations.into_result()
    }

    /// Resolve every selection. A selection that resolves to no atoms is
    /// reported the same way as one the structure cannot answer.
    pub fn validate_selections(
        handle: &dyn StructureHandle,
        selections: &[ResidueId],
        protein_only: bool,
    ) -> Result<Vec<AtomGroup>, DomainError> {
        let mut violations = Violations::new();
        let mut groups = Vec::with_capacity(selections.len());

        for &residue in selections {
            match handle.select(residue, protein_only) {
                Ok(group) if group.is_empty() => violations.push(DomainError::Selection {
                    residue,
                    structure: handle.source().to_string(),
                    reason: if protein_only {
                        "selection matched no protein atoms".into()
                    } else {
                        "selection matched no atoms".into()
                    },
                }),
                Ok(group) => groups.push(group),
                Err(failure) => violations.push(DomainError::Selection {
                    residue,
                    structure: handle.source().to_string(),
                    reason: failure.reason,
                }),
            }
        }

        violations.into_result().map(|()| groups)
    }

    /// Every pair must have `arity` members, each declared in `selections`.
    pub fn validate_pairs(
        selections: &[ResidueId],
        pairs: &[AtomGroupPair],
        arity: usize,
    ) -> Result<(), DomainError> {
        let mut violations = Violations::new();

        for pair in pairs {
            if pair.arity() != arity {
                violations.push(DomainError::PairArity {
                    pair: pair.clone(),
                    expected: arity,
                    found: pair.arity(),
                });
                continue;
            }
            for member in pair.members() {
                if !selections.contains(member) {
                    violations.push(DomainError::UndeclaredPairMember {
                        pair: pair.clone(),
                        member: *member,
                    });
                }
            }
        }

        violations.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::FakeStructure;

    fn ids(raw: &[i64]) -> Vec<ResidueId> {
        raw.iter().copied().map(ResidueId::new).collect()
    }

    #[test]
    fn resolvable_selections_pass() {
        let structure = FakeStructure::new("a.pdb", 1).with_residues(&[10, 20]);
        let groups =
            SelectionValidator::validate_selections(&structure, &ids(&[10, 20]), false).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].residue(), ResidueId::new(10));
    }

    #[test]
    fn every_unresolvable_selection_is_reported() {
        let structure = FakeStructure::new("a.pdb", 1).with_residues(&[10]);

        let err = SelectionValidator::validate_selections(&structure, &ids(&[30, 10, 40]), false)
            .unwrap_err();

        let residues: Vec<i64> = err
            .violations()
            .into_iter()
            .filter_map(|v| match v {
                DomainError::Selection { residue, .. } => Some(residue.get()),
                _ => None,
            })
            .collect();
        assert_eq!(residues, vec![30, 40]);
    }

    #[test]
    fn selection_error_names_structure() {
        let structure = FakeStructure::new("complex.pdb", 1);
        let err =
            SelectionValidator::validate_selections(&structure, &ids(&[5]), false).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Selection { ref structure, .. } if structure == "complex.pdb"
        ));
    }

    #[test]
    fn empty_groups_are_selection_errors() {
        let structure = FakeStructure::new("a.pdb", 1).with_empty_residue(10);
        let err =
            SelectionValidator::validate_selections(&structure, &ids(&[10]), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Selection);
    }

    #[test]
    fn protein_only_rejects_ligand_residues() {
        let structure = FakeStructure::new("dock.pdb", 1)
            .with_residues(&[10])
            .with_ligand(900);

        assert!(SelectionValidator::validate_selections(&structure, &ids(&[900]), false).is_ok());
        assert!(SelectionValidator::validate_selections(&structure, &ids(&[900]), true).is_err());
    }

    #[test]
    fn pair_member_must_be_declared() {
        let err = SelectionValidator::validate_pairs(
            &ids(&[10, 20]),
            &[AtomGroupPair::from([10, 99])],
            2,
        )
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::UndeclaredPairMember {
                pair: AtomGroupPair::from([10, 99]),
                member: ResidueId::new(99),
            }
        );
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn pair_arity_comes_from_caller() {
        let declared = ids(&[1, 2, 3, 4]);
        let four = [AtomGroupPair::from([1, 2, 3, 4])];

        assert!(SelectionValidator::validate_pairs(&declared, &four, 4).is_ok());
        assert!(matches!(
            SelectionValidator::validate_pairs(&declared, &four, 2),
            Err(DomainError::PairArity {
                expected: 2,
                found: 4,
                ..
            })
        ));
    }

    #[test]
    fn all_pairs_are_checked() {
        let pairs = [
            AtomGroupPair::from([10, 98]),
            AtomGroupPair::from([10]),
            AtomGroupPair::from([97, 20]),
        ];
        let err = SelectionValidator::validate_pairs(&ids(&[10, 20]), &pairs, 2).unwrap_err();
        assert_eq!(
            err.kinds(),
            vec![
                ErrorKind::PairIntegrity,
                ErrorKind::PairIntegrity,
                ErrorKind::PairIntegrity
            ]
        );
    }

    #[test]
    fn validate_combines_selections_and_pairs() {
        let structure = FakeStructure::new("a.pdb", 1).with_residues(&[10]);
        let err = SelectionValidator::validate(
            &structure,
            &ids(&[10, 20]),
            &[AtomGroupPair::from([10, 30])],
            Mode::Trajectory,
        )
        .unwrap_err();

        assert_eq!(err.kinds(), vec![ErrorKind::Selection, ErrorKind::PairIntegrity]);
    }
}
