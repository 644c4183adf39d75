//! Pure validators, one per settings concern.
//!
//! Each validator collects every violation it finds and reports them
//! together; the application services stop at the first validator that
//! fails.

mod compute;
mod selection;
mod system;
mod trajectory;

pub use compute::ComputeSettingsValidator;
pub use selection::SelectionValidator;
pub use system::SystemSettingsValidator;
pub use trajectory::TrajectorySettingsValidator;

use crate::domain::error::DomainError;

/// Accumulator for violations found by one validator.
#[derive(Debug, Default)]
pub struct Violations(Vec<DomainError>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation, flattening aggregates.
    pub fn push(&mut self, error: DomainError) {
        match error {
            DomainError::Multiple(inner) => self.0.extend(inner),
            other => self.0.push(other),
        }
    }

    /// Keep the value of `result`, recording its error instead if it failed.
    pub fn take<T>(&mut self, result: Result<T, DomainError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_error(self) -> DomainError {
        DomainError::from_violations(self.0)
    }

    pub fn into_result(self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(key: &str) -> DomainError {
        DomainError::MissingKey { key: key.into() }
    }

    #[test]
    fn empty_is_ok() {
        assert_eq!(Violations::new().into_result(), Ok(()));
    }

    #[test]
    fn single_violation_is_not_wrapped() {
        let mut v = Violations::new();
        v.push(missing("a"));
        assert_eq!(v.into_result(), Err(missing("a")));
    }

    #[test]
    fn aggregates_are_flattened() {
        let mut v = Violations::new();
        v.push(missing("a"));
        v.push(DomainError::Multiple(vec![missing("b"), missing("c")]));

        assert_eq!(v.len(), 3);
        assert_eq!(
            v.into_error(),
            DomainError::Multiple(vec![missing("a"), missing("b"), missing("c")])
        );
    }

    #[test]
    fn take_keeps_values_and_records_errors() {
        let mut v = Violations::new();
        assert_eq!(v.take(Ok::<_, DomainError>(5)), Some(5));
        assert_eq!(v.take::<i32>(Err(missing("x"))), None);
        assert_eq!(v.len(), 1);
    }
}
