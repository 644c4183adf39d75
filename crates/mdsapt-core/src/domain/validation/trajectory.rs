use crate::domain::entities::TrajectoryWindow;
use crate::domain::error::{DomainError, RangeFault};
use crate::domain::raw::Section;
use crate::domain::schema::keys;
use crate::domain::structure::StructureHandle;
use crate::domain::validation::Violations;

/// Checks the `trajectory_settings` sampling window against the length of
/// the loaded trajectory.
///
/// A `pH` in this block is optional and only type-checked; the run uses
/// `opt_settings.pH`.
pub struct TrajectorySettingsValidator;

impl TrajectorySettingsValidator {
    pub fn validate(
        handle: &dyn StructureHandle,
        settings: &Section<'_>,
    ) -> Result<TrajectoryWindow, DomainError> {
        let mut violations = Violations::new();
        let start = violations.take(settings.require_integer(keys::START));
        let step = violations.take(settings.require_integer(keys::STEP));
        let stop = violations.take(settings.require_integer(keys::STOP));
        if settings.get(keys::PH).is_some() {
            violations.take(settings.require_number(keys::PH));
        }

        match (start, stop, step) {
            (Some(start), Some(stop), Some(step)) if violations.is_empty() => {
                Self::check_window(start, stop, step, handle.frame_count())
            }
            _ => Err(violations.into_error()),
        }
    }

    /// Range rules for a window over `frame_count` frames, all reported.
    pub fn check_window(
        start: i64,
        stop: i64,
        step: i64,
        frame_count: usize,
    ) -> Result<TrajectoryWindow, DomainError> {
        let mut violations = Violations::new();
        let range = |fault| DomainError::InvalidRange {
            start,
            stop,
            step,
            fault,
        };

        if start >= stop {
            violations.push(range(RangeFault::StartNotBeforeStop));
        }
        if step >= stop {
            violations.push(range(RangeFault::StepNotBelowStop));
        }
        if step == 0 {
            violations.push(range(RangeFault::ZeroStep));
        }
        if i64::try_from(frame_count).is_ok_and(|frames| frames < stop) {
            violations.push(DomainError::OutOfBounds { stop, frame_count });
        }

        violations
            .into_result()
            .map(|()| TrajectoryWindow::new(start, stop, step))
    }
}
