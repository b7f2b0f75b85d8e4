//! Error types for law verification.

use thiserror::Error;

/// Errors raised while building or running law checks.
///
/// Law violations are not errors: they are reported through
/// [`crate::LawViolation`] by the law definitions themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawfulError {
    /// The runtime cannot introspect the container well enough to check laws.
    #[error("environment cannot support law checks: {0}")]
    Environment(String),

    /// No generator can be synthesized for a container.
    #[error("cannot construct `{type_name}`: {reason}")]
    ConstructionImpossible { type_name: String, reason: String },

    /// No generator is bound for a type.
    #[error("no generator bound for {0}")]
    Unresolvable(String),

    /// A registry scope did not restore the bindings it found.
    #[error("type registry corrupted: {0}")]
    RegistryCorruption(String),

    /// An engine setting is unknown or has an unusable value.
    #[error("invalid engine setting `{key}`: {reason}")]
    InvalidSetting { key: String, reason: String },

    /// Two law cases derived the same name.
    #[error("duplicate law case `{0}`")]
    DuplicateCase(String),
}

impl LawfulError {
    /// Shorthand for [`LawfulError::ConstructionImpossible`].
    pub fn construction(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConstructionImpossible {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for law verification operations.
pub type LawfulResult<T> = Result<T, LawfulError>;
