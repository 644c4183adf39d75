use crate::domain::entities::ComputeSettings;
use crate::domain::error::DomainError;
use crate::domain::raw::Section;
use crate::domain::schema::keys;
use crate::domain::validation::Violations;

/// Requires the chemistry keys of `opt_settings` and `sapt_settings`.
///
/// Method and basis names are not checked against any registry.
pub struct ComputeSettingsValidator;

impl ComputeSettingsValidator {
    pub fn validate(
        opt_settings: &Section<'_>,
        sapt_settings: &Section<'_>,
    ) -> Result<ComputeSettings, DomainError> {
        let mut violations = Violations::new();
        let ph = violations.take(opt_settings.require_number(keys::PH));
        let method = violations.take(sapt_settings.require_str(keys::METHOD));
        let basis = violations.take(sapt_settings.require_str(keys::BASIS));
        let settings = violations.take(sapt_settings.require_mapping(keys::SETTINGS));
        let save_output = violations.take(sapt_settings.require_bool(keys::SAVE_PSI4_OUTPUT));

        match (ph, method, basis, settings, save_output) {
            (Some(ph), Some(method), Some(basis), Some(settings), Some(save_output))
                if violations.is_empty() =>
            {
                Ok(ComputeSettings::new(
                    ph,
                    method.to_owned(),
                    basis.to_owned(),
                    settings.clone(),
                    save_output,
                ))
            }
            _ => Err(violations.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawConfig;
    use crate::error::ErrorKind;
    use serde_json::{Value, json};

    fn check(opt: Value, sapt: Value) -> Result<ComputeSettings, DomainError> {
        let raw =
            RawConfig::from_value(json!({ "opt_settings": opt, "sapt_settings": sapt })).unwrap();
        let root = raw.root();
        ComputeSettingsValidator::validate(
            &root.section("opt_settings")?,
            &root.section("sapt_settings")?,
        )
    }

    #[test]
    fn complete_blocks_pass_through_verbatim() {
        let settings = check(
            json!({ "pH": 7 }),
            json!({
                "method": "sapt2+",
                "basis": "aug-cc-pvdz",
                "settings": { "reference": "rhf", "freeze_core": true },
                "save_psi4_output": false
            }),
        )
        .unwrap();

        assert_eq!(settings.ph(), 7.0);
        assert_eq!(settings.method(), "sapt2+");
        assert_eq!(settings.basis(), "aug-cc-pvdz");
        assert_eq!(settings.settings()["freeze_core"], json!(true));
        assert!(!settings.save_output());
    }

    #[test]
    fn unknown_method_names_are_accepted() {
        let settings = check(
            json!({ "pH": 6.5 }),
            json!({
                "method": "not-a-real-method",
                "basis": "made-up",
                "settings": {},
                "save_psi4_output": true
            }),
        );
        assert!(settings.is_ok());
    }

    #[test]
    fn every_missing_key_is_named() {
        let err = check(json!({}), json!({ "method": "sapt0" })).unwrap_err();
        let keys: Vec<String> = err
            .violations()
            .into_iter()
            .filter_map(|v| match v {
                DomainError::MissingKey { key } => Some(key.clone()),
                _ => None,
            })
            .collect();

        assert_eq!(
            keys,
            vec![
                "opt_settings.pH",
                "sapt_settings.basis",
                "sapt_settings.settings",
                "sapt_settings.save_psi4_output",
            ]
        );
    }

    #[test]
    fn settings_block_must_be_a_mapping() {
        let err = check(
            json!({ "pH": 7.0 }),
            json!({
                "method": "sapt0",
                "basis": "jun-cc-pvdz",
                "settings": "reference rhf",
                "save_psi4_output": true
            }),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
