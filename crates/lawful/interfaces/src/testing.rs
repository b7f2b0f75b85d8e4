//! Shared helpers for the law unit tests.

use proptest::prelude::*;

use lawful_types::{Args, ContainerDescriptor, ContainerId, Drawn, Lawful, PureFn, Value};

use crate::{
    equable, result_like, swappable, Altable, Applicative, Bindable, Equable, Lashable, Mappable,
    Monad, ResultLike, Swappable,
};

/// A well-behaved success-or-failure container.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Good(Value),
    Bad(Value),
}

impl Lawful for Sample {
    fn descriptor() -> ContainerDescriptor {
        ContainerDescriptor::builder::<Sample>(ContainerId::new("Sample"))
            .implements(result_like::<Sample>())
            .implements(equable::<Sample>())
            .implements(swappable::<Sample>())
            .from_success(Sample::Good)
            .from_failure(Sample::Bad)
            .build()
    }
}

impl Equable for Sample {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Mappable for Sample {
    fn map<F: Fn(Value) -> Value>(self, f: F) -> Self {
        match self {
            Sample::Good(v) => Sample::Good(f(v)),
            bad => bad,
        }
    }
}

impl Applicative for Sample {
    fn from_value(value: Value) -> Self {
        Sample::Good(value)
    }

    fn map2<F: Fn(Value, Value) -> Value>(self, other: Self, f: F) -> Self {
        match (self, other) {
            (Sample::Good(a), Sample::Good(b)) => Sample::Good(f(a, b)),
            (Sample::Bad(e), _) | (_, Sample::Bad(e)) => Sample::Bad(e),
        }
    }
}

impl Bindable for Sample {
    fn bind<F: Fn(Value) -> Self>(self, f: F) -> Self {
        match self {
            Sample::Good(v) => f(v),
            bad => bad,
        }
    }
}

impl Monad for Sample {}

impl Altable for Sample {
    fn alt<F: Fn(Value) -> Value>(self, f: F) -> Self {
        match self {
            Sample::Bad(e) => Sample::Bad(f(e)),
            good => good,
        }
    }
}

impl Lashable for Sample {
    fn lash<F: Fn(Value) -> Self>(self, f: F) -> Self {
        match self {
            Sample::Bad(e) => f(e),
            good => good,
        }
    }
}

impl ResultLike for Sample {
    fn from_failure(error: Value) -> Self {
        Sample::Bad(error)
    }
}

impl Swappable for Sample {
    fn swap(self) -> Self {
        match self {
            Sample::Good(v) => Sample::Bad(v),
            Sample::Bad(e) => Sample::Good(e),
        }
    }
}

pub fn args(values: impl IntoIterator<Item = Drawn>) -> Args {
    Args::new(values.into_iter().collect())
}

pub fn value(n: i64) -> Drawn {
    Drawn::new(Value::Int(n))
}

/// A drawn one-argument function whose outputs are `build(n)` for random `n`.
pub fn pure_fn(seed: u64, build: fn(i64) -> Drawn) -> Drawn {
    let returns = any::<i64>().prop_map(build).boxed();
    Drawn::new(PureFn::new(seed, 1, returns, "fn(A) -> B"))
}

pub fn value_fn(seed: u64) -> Drawn {
    pure_fn(seed, |n| Drawn::new(Value::Int(n)))
}

pub fn value_fn2(seed: u64) -> Drawn {
    let returns = any::<i64>().prop_map(|n| Drawn::new(Value::Int(n))).boxed();
    Drawn::new(PureFn::new(seed, 2, returns, "fn(A, B) -> C"))
}

/// Functions into `Sample`, failing on odd outputs.
pub fn sample_fn(seed: u64) -> Drawn {
    pure_fn(seed, |n| {
        let value = Value::Int(n);
        Drawn::new(if n % 2 == 0 {
            Sample::Good(value)
        } else {
            Sample::Bad(value)
        })
    })
}

#[test]
fn sample_chain_covers_every_law_bearing_interface() {
    let descriptor = Sample::descriptor();
    let names: Vec<_> = descriptor.laws().iter().map(|entry| entry.interface.as_str()).collect();
    assert_eq!(
        names,
        vec!["ResultLike", "Monad", "Applicative", "Mappable", "Altable", "Equable", "Swappable"]
    );
}
