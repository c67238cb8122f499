//! Submission lifecycle of a form
//!
//! ```text
//! Idle -> Validating -> Rejected -> Idle
//!                    -> Sending  -> Succeeded | Failed
//! ```
//!
//! `Idle`, `Succeeded` and `Failed` are stable; a new submission may start
//! from any of them. `Sending` is the only state that waits on I/O.

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Validating => "Validating",
            Self::Rejected => "Rejected",
            Self::Sending => "Sending",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
        }
    }

    /// States the form can rest in between submissions
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Idle | Self::Succeeded | Self::Failed)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn begin_validation(self) -> Result<Self, DomainError> {
        self.to(Self::Validating, self.is_stable())
    }

    /// Validation failed; the form settles back to `Idle` right away
    pub fn reject(self) -> Result<Self, DomainError> {
        self.to(Self::Rejected, self == Self::Validating)?;
        Ok(Self::Idle)
    }

    pub fn begin_sending(self) -> Result<Self, DomainError> {
        self.to(Self::Sending, self == Self::Validating)
    }

    pub fn succeed(self) -> Result<Self, DomainError> {
        self.to(Self::Succeeded, self == Self::Sending)
    }

    pub fn fail(self) -> Result<Self, DomainError> {
        self.to(Self::Failed, self == Self::Sending)
    }

    fn to(self, next: Self, allowed: bool) -> Result<Self, DomainError> {
        if allowed {
            Ok(next)
        } else {
            Err(DomainError::invalid_transition(self.name(), next.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let state = SubmissionState::Idle
            .begin_validation()
            .and_then(SubmissionState::begin_sending)
            .and_then(SubmissionState::succeed);
        assert_eq!(state, Ok(SubmissionState::Succeeded));
    }

    #[test]
    fn test_rejection_returns_to_idle() {
        let state = SubmissionState::Idle
            .begin_validation()
            .and_then(SubmissionState::reject);
        assert_eq!(state, Ok(SubmissionState::Idle));
    }

    #[test]
    fn test_outcome_states_allow_resubmission() {
        assert!(SubmissionState::Failed.begin_validation().is_ok());
        assert!(SubmissionState::Succeeded.begin_validation().is_ok());
    }

    #[test]
    fn test_no_new_submission_while_sending() {
        assert_eq!(
            SubmissionState::Sending.begin_validation(),
            Err(DomainError::invalid_transition("Sending", "Validating"))
        );
    }

    #[test]
    fn test_cannot_skip_validation() {
        assert!(SubmissionState::Idle.begin_sending().is_err());
        assert!(SubmissionState::Idle.succeed().is_err());
        assert!(SubmissionState::Validating.fail().is_err());
    }
}
