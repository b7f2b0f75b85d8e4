use serde::{Deserialize, Serialize};

use lawful_interfaces::{
    equable, result_like, swappable, Altable, Applicative, Bindable, Equable, Lashable, Mappable,
    Monad, ResultLike, Swappable,
};
use lawful_types::{ContainerDescriptor, ContainerId, Lawful, Value};

pub const OUTCOME: ContainerId = ContainerId::new("Outcome");

/// A success or a failure, each carrying a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success(Value),
    Failure(Value),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl Lawful for Outcome {
    fn descriptor() -> ContainerDescriptor {
        ContainerDescriptor::builder::<Outcome>(OUTCOME)
            .implements(result_like::<Outcome>())
            .implements(swappable::<Outcome>())
            .implements(equable::<Outcome>())
            .from_success(Outcome::Success)
            .from_failure(Outcome::Failure)
            .build()
    }
}

impl Equable for Outcome {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Mappable for Outcome {
    fn map<F: Fn(Value) -> Value>(self, f: F) -> Self {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            failure => failure,
        }
    }
}

impl Applicative for Outcome {
    fn from_value(value: Value) -> Self {
        Outcome::Success(value)
    }

    fn map2<F: Fn(Value, Value) -> Value>(self, other: Self, f: F) -> Self {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(f(a, b)),
            (Outcome::Failure(e), _) | (_, Outcome::Failure(e)) => Outcome::Failure(e),
        }
    }
}

impl Bindable for Outcome {
    fn bind<F: Fn(Value) -> Self>(self, f: F) -> Self {
        match self {
            Outcome::Success(value) => f(value),
            failure => failure,
        }
    }
}

impl Monad for Outcome {}

impl Altable for Outcome {
    fn alt<F: Fn(Value) -> Value>(self, f: F) -> Self {
        match self {
            Outcome::Failure(error) => Outcome::Failure(f(error)),
            success => success,
        }
    }
}

impl Lashable for Outcome {
    fn lash<F: Fn(Value) -> Self>(self, f: F) -> Self {
        match self {
            Outcome::Failure(error) => f(error),
            success => success,
        }
    }
}

impl ResultLike for Outcome {
    fn from_failure(error: Value) -> Self {
        Outcome::Failure(error)
    }
}

impl Swappable for Outcome {
    fn swap(self) -> Self {
        match self {
            Outcome::Success(value) => Outcome::Failure(value),
            Outcome::Failure(error) => Outcome::Success(error),
        }
    }
}
