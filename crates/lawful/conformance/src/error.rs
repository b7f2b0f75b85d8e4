//! Failures of a single law case.

use lawful_types::LawfulError;
use thiserror::Error;

/// Why running one law case did not pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LawFailure {
    /// The property engine found inputs for which the law does not hold.
    #[error("{reason}; minimal failing input: {counterexample}")]
    Violation {
        reason: String,
        counterexample: String,
    },

    /// The property engine gave up before reaching a verdict.
    #[error("law check aborted: {0}")]
    Aborted(String),

    /// The check could not run at all.
    #[error(transparent)]
    Error(#[from] LawfulError),
}

impl LawFailure {
    /// The minimal failing input, for violations.
    pub fn counterexample(&self) -> Option<&str> {
        match self {
            Self::Violation { counterexample, .. } => Some(counterexample),
            _ => None,
        }
    }

    /// Whether the law itself was violated, as opposed to the check failing.
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_includes_counterexample() {
        let failure = LawFailure::Violation {
            reason: "c.map(identity) == c: Box(Int(2)) != Box(Int(1))".into(),
            counterexample: "[Box(Int(1))]".into(),
        };
        let text = failure.to_string();
        assert!(text.contains("Box(Int(2))"));
        assert!(text.ends_with("[Box(Int(1))]"));
        assert_eq!(failure.counterexample(), Some("[Box(Int(1))]"));
        assert!(failure.is_violation());
    }

    #[test]
    fn error_is_transparent() {
        let failure = LawFailure::from(LawfulError::Environment("no type identity".into()));
        assert_eq!(
            failure.to_string(),
            "environment cannot support law checks: no type identity"
        );
        assert!(failure.counterexample().is_none());
    }
}
