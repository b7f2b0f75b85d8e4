use serde::{Deserialize, Serialize};

use lawful_interfaces::{equable, monad, Applicative, Bindable, Equable, Mappable, Monad};
use lawful_types::{ContainerDescriptor, ContainerId, Lawful, Ty, Value};

pub const IDENTITY: ContainerId = ContainerId::new("Identity");

/// The trivial container: exactly one value, no effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity(pub Value);

impl Lawful for Identity {
    fn descriptor() -> ContainerDescriptor {
        ContainerDescriptor::builder::<Identity>(IDENTITY)
            .implements(monad::<Identity>())
            .implements(equable::<Identity>())
            .from_success(Identity)
            .raw([Ty::var("A")], |args| Ok(Identity(args.next()?)))
            .build()
    }
}

impl Equable for Identity {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Mappable for Identity {
    fn map<F: Fn(Value) -> Value>(self, f: F) -> Self {
        Identity(f(self.0))
    }
}

impl Applicative for Identity {
    fn from_value(value: Value) -> Self {
        Identity(value)
    }

    fn map2<F: Fn(Value, Value) -> Value>(self, other: Self, f: F) -> Self {
        Identity(f(self.0, other.0))
    }
}

impl Bindable for Identity {
    fn bind<F: Fn(Value) -> Self>(self, f: F) -> Self {
        f(self.0)
    }
}

impl Monad for Identity {}
