//! Laws and their verdicts.

use std::fmt;

use thiserror::Error;

use crate::drawn::Args;
use crate::ty::Ty;

/// Why a law did not hold for one set of drawn arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawViolation {
    /// Two sides of an equation differ.
    #[error("{description}: {left} != {right}")]
    Unequal {
        description: String,
        left: String,
        right: String,
    },

    /// A non-equational property failed.
    #[error("{0}")]
    Failed(String),

    /// A drawn argument did not have the type the law expected.
    #[error("argument signature mismatch: {0}")]
    Signature(String),
}

/// Outcome of evaluating a law once.
pub type Verdict = Result<(), LawViolation>;

/// Definition of a law: consumes drawn arguments, returns a verdict.
pub type LawDefinition = fn(&mut Args) -> Verdict;

/// Holds when `left == right`.
pub fn check_eq<T: PartialEq + fmt::Debug>(left: &T, right: &T, description: &str) -> Verdict {
    if left == right {
        Ok(())
    } else {
        Err(LawViolation::Unequal {
            description: description.to_string(),
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        })
    }
}

/// Holds when `condition` is true.
pub fn check(condition: bool, description: &str) -> Verdict {
    if condition {
        Ok(())
    } else {
        Err(LawViolation::Failed(description.to_string()))
    }
}

/// A named, universally quantified property of an interface.
///
/// `params` is the law's signature: one type expression per argument the
/// definition pulls from [`Args`], in order.
#[derive(Clone)]
pub struct Law {
    name: &'static str,
    params: Vec<Ty>,
    definition: LawDefinition,
}

impl Law {
    pub fn new(
        name: &'static str,
        params: impl IntoIterator<Item = Ty>,
        definition: LawDefinition,
    ) -> Self {
        Self {
            name,
            params: params.into_iter().collect(),
            definition,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &[Ty] {
        &self.params
    }

    /// Evaluate the law against one set of drawn arguments.
    pub fn evaluate(&self, args: &mut Args) -> Verdict {
        (self.definition)(args)
    }
}

impl fmt::Debug for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Law")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish()
    }
}
