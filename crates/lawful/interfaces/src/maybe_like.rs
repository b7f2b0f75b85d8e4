//! Containers that may hold no value at all.

use lawful_types::{check_eq, Args, InterfaceDescriptor, InterfaceId, Law, Ty, Value, Verdict};

use crate::applicative::Applicative;
use crate::mappable::Mappable;
use crate::monad::{monad, Bindable, Monad};

pub const MAYBE_LIKE: InterfaceId = InterfaceId::new("MaybeLike");

pub trait MaybeLike: Monad {
    /// `None` builds the empty container.
    fn from_optional(value: Option<Value>) -> Self;
}

fn map_short_circuit<C: MaybeLike>(args: &mut Args) -> Verdict {
    let f = args.function1::<Value, Value>()?;
    check_eq(
        &C::from_optional(None).map(|x| f.call(&x)),
        &C::from_optional(None),
        "empty.map(f) == empty",
    )
}

fn bind_short_circuit<C: MaybeLike>(args: &mut Args) -> Verdict {
    let f = args.function1::<Value, C>()?;
    check_eq(
        &C::from_optional(None).bind(|x| f.call(&x)),
        &C::from_optional(None),
        "empty.bind(f) == empty",
    )
}

fn unit_structure<C: MaybeLike>(args: &mut Args) -> Verdict {
    let a: Value = args.next()?;
    check_eq(
        &C::from_optional(Some(a.clone())),
        &C::from_value(a),
        "from_optional(Some(a)) == from_value(a)",
    )
}

pub fn maybe_like<C: MaybeLike>() -> InterfaceDescriptor {
    InterfaceDescriptor::new(MAYBE_LIKE)
        .extends(monad::<C>())
        .law(Law::new(
            "map_short_circuit",
            [Ty::function([Ty::var("A")], Ty::var("B"))],
            map_short_circuit::<C>,
        ))
        .law(Law::new(
            "bind_short_circuit",
            [Ty::function([Ty::var("A")], Ty::interface(MAYBE_LIKE))],
            bind_short_circuit::<C>,
        ))
        .law(Law::new("unit_structure", [Ty::var("A")], unit_structure::<C>))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{args, pure_fn, value, value_fn};
    use lawful_types::{ContainerDescriptor, ContainerId, Drawn, Lawful, LawViolation};

    /// Treats `Unit` as absence, so `from_value(Unit)` is empty.
    #[derive(Debug, Clone, PartialEq)]
    struct Slot(Option<Value>);

    impl Lawful for Slot {
        fn descriptor() -> ContainerDescriptor {
            ContainerDescriptor::builder::<Slot>(ContainerId::new("Slot"))
                .implements(maybe_like::<Slot>())
                .from_optional(Slot)
                .build()
        }
    }

    impl Mappable for Slot {
        fn map<F: Fn(Value) -> Value>(self, f: F) -> Self {
            Slot(self.0.map(f))
        }
    }

    impl Applicative for Slot {
        fn from_value(value: Value) -> Self {
            match value {
                Value::Unit => Slot(None),
                other => Slot(Some(other)),
            }
        }

        fn map2<F: Fn(Value, Value) -> Value>(self, other: Self, f: F) -> Self {
            Slot(self.0.zip(other.0).map(|(a, b)| f(a, b)))
        }
    }

    impl Bindable for Slot {
        fn bind<F: Fn(Value) -> Self>(self, f: F) -> Self {
            self.0.map_or(Slot(None), f)
        }
    }

    impl Monad for Slot {}

    impl MaybeLike for Slot {
        fn from_optional(value: Option<Value>) -> Self {
            Slot(value)
        }
    }

    #[test]
    fn empty_short_circuits() {
        let slot_fn = pure_fn(4, |n| Drawn::new(Slot(Some(Value::Int(n)))));
        assert_eq!(map_short_circuit::<Slot>(&mut args([value_fn(4)])), Ok(()));
        assert_eq!(bind_short_circuit::<Slot>(&mut args([slot_fn])), Ok(()));
        assert_eq!(unit_structure::<Slot>(&mut args([value(2)])), Ok(()));
    }

    #[test]
    fn unit_as_absence_breaks_unit_structure() {
        let verdict = unit_structure::<Slot>(&mut args([Drawn::new(Value::Unit)]));
        assert!(matches!(verdict, Err(LawViolation::Unequal { .. })));
    }
}
