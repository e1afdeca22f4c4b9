//! Error types for perturbator configuration.

use thiserror::Error;

/// Errors raised when a perturbator is configured.
///
/// Perturbators validate everything at construction, so applying one never
/// fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerturbatorError {
    /// Probability outside `[0, 1]` (or NaN).
    #[error("Probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// Prefix or suffix perturbator configured with no strings.
    #[error("{0} set must not be empty")]
    EmptyAffixes(&'static str),

    /// Substitution rule with an empty search string.
    #[error("Substitution rule {index} has an empty search string")]
    EmptyPattern { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PerturbatorError::InvalidProbability(1.5).to_string(),
            "Probability must be within [0, 1], got 1.5"
        );
        assert_eq!(
            PerturbatorError::EmptyAffixes("Prefix").to_string(),
            "Prefix set must not be empty"
        );
        assert_eq!(
            PerturbatorError::EmptyPattern { index: 2 }.to_string(),
            "Substitution rule 2 has an empty search string"
        );
    }
}
