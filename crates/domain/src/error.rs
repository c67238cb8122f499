//! Unified error types for the domain layer
//!
//! Provides a common error type for form and page-effect rules so adapters
//! never have to fall back to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Operation referenced a field the form does not have
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// State transition not allowed
    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition {
        from: &'static str,
        to: &'static str,
    },
}

impl DomainError {
    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_transition(from: &'static str, to: &'static str) -> Self {
        Self::InvalidStateTransition { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DomainError::unknown_field("phone").to_string(),
            "Unknown field: phone"
        );
        assert_eq!(
            DomainError::invalid_transition("Idle", "Succeeded").to_string(),
            "Invalid state transition: Idle -> Succeeded"
        );
    }
}
