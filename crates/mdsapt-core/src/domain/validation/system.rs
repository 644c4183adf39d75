use crate::domain::entities::ResourceSettings;
use crate::domain::error::DomainError;
use crate::domain::raw::Section;
use crate::domain::schema::keys;
use crate::domain::validation::Violations;

/// Requires the scheduler resource keys of `system_settings`.
///
/// Values are checked for presence only; limits are the scheduler's call.
pub struct SystemSettingsValidator;

impl SystemSettingsValidator {
    pub fn validate(settings: &Section<'_>) -> Result<ResourceSettings, DomainError> {
        let mut violations = Violations::new();
        let ncpus = violations.take(settings.require_scalar(keys::NCPUS));
        let memory = violations.take(settings.require_scalar(keys::MEMORY));
        let walltime = violations.take(settings.require_scalar(keys::TIME));

        match (ncpus, memory, walltime) {
            (Some(ncpus), Some(memory), Some(walltime)) if violations.is_empty() => {
                Ok(ResourceSettings::new(ncpus, memory, walltime))
            }
            _ => Err(violations.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawConfig, Scalar};
    use serde_json::{Value, json};

    fn check(block: Value) -> Result<ResourceSettings, DomainError> {
        let raw = RawConfig::from_value(json!({ "system_settings": block })).unwrap();
        let section = raw.root().section("system_settings")?;
        SystemSettingsValidator::validate(&section)
    }

    #[test]
    fn accepts_any_scalar_values() {
        let settings = check(json!({ "ncpus": 8, "memory": "16GB", "time": "24:00:00" })).unwrap();
        assert_eq!(settings.ncpus(), &Scalar::Integer(8));
        assert_eq!(settings.memory(), &Scalar::from("16GB"));
        assert_eq!(settings.walltime().to_string(), "24:00:00");
    }

    #[test]
    fn reports_every_missing_key() {
        let err = check(json!({ "memory": 12 })).unwrap_err();
        assert_eq!(
            err,
            DomainError::Multiple(vec![
                DomainError::MissingKey {
                    key: "system_settings.ncpus".into()
                },
                DomainError::MissingKey {
                    key: "system_settings.time".into()
                },
            ])
        );
    }

    #[test]
    fn rejects_nested_values() {
        let err = check(json!({ "ncpus": [4], "memory": 12, "time": 1 })).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidValue { ref key, .. } if key == "system_settings.ncpus"
        ));
    }
}
