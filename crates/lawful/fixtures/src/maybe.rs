use serde::{Deserialize, Serialize};

use lawful_interfaces::{maybe_like, Applicative, Bindable, Mappable, MaybeLike, Monad};
use lawful_types::{ContainerDescriptor, ContainerId, Lawful, Value};

pub const MAYBE: ContainerId = ContainerId::new("Maybe");

/// A value or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Maybe {
    Some(Value),
    Nothing,
}

impl Lawful for Maybe {
    fn descriptor() -> ContainerDescriptor {
        ContainerDescriptor::builder::<Maybe>(MAYBE)
            .implements(maybe_like::<Maybe>())
            .from_success(Maybe::Some)
            .from_optional(Maybe::from_optional)
            .build()
    }
}

impl Mappable for Maybe {
    fn map<F: Fn(Value) -> Value>(self, f: F) -> Self {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl Applicative for Maybe {
    fn from_value(value: Value) -> Self {
        Maybe::Some(value)
    }

    fn map2<F: Fn(Value, Value) -> Value>(self, other: Self, f: F) -> Self {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some(f(a, b)),
            _ => Maybe::Nothing,
        }
    }
}

impl Bindable for Maybe {
    fn bind<F: Fn(Value) -> Self>(self, f: F) -> Self {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl Monad for Maybe {}

impl MaybeLike for Maybe {
    fn from_optional(value: Option<Value>) -> Self {
        value.map_or(Maybe::Nothing, Maybe::Some)
    }
}

impl From<Option<Value>> for Maybe {
    fn from(value: Option<Value>) -> Self {
        <Maybe as MaybeLike>::from_optional(value)
    }
}
