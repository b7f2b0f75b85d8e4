//! Sequencing computations that produce containers.

use lawful_types::{check_eq, Args, InterfaceDescriptor, InterfaceId, Law, Lawful, Ty, Value, Verdict};

use crate::applicative::{applicative, Applicative};

pub const BINDABLE: InterfaceId = InterfaceId::new("Bindable");
pub const MONAD: InterfaceId = InterfaceId::new("Monad");

pub trait Bindable: Lawful {
    fn bind<F: Fn(Value) -> Self>(self, f: F) -> Self;
}

/// Marker for containers whose `bind` and `from_value` form a monad.
pub trait Monad: Applicative + Bindable {}

pub fn bindable<C: Bindable>() -> InterfaceDescriptor {
    InterfaceDescriptor::new(BINDABLE)
}

fn left_identity<C: Monad>(args: &mut Args) -> Verdict {
    let a: Value = args.next()?;
    let f = args.function1::<Value, C>()?;
    check_eq(
        &C::from_value(a.clone()).bind(|x| f.call(&x)),
        &f.call(&a),
        "from_value(a).bind(f) == f(a)",
    )
}

fn right_identity<C: Monad>(args: &mut Args) -> Verdict {
    let m: C = args.next()?;
    check_eq(&m.clone().bind(C::from_value), &m, "m.bind(from_value) == m")
}

fn associative<C: Monad>(args: &mut Args) -> Verdict {
    let m: C = args.next()?;
    let f = args.function1::<Value, C>()?;
    let g = args.function1::<Value, C>()?;
    let chained = m.clone().bind(|x| f.call(&x)).bind(|x| g.call(&x));
    let nested = m.bind(|x| f.call(&x).bind(|y| g.call(&y)));
    check_eq(&chained, &nested, "m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))")
}

pub fn monad<C: Monad>() -> InterfaceDescriptor {
    let kleisli = || Ty::function([Ty::var("A")], Ty::interface(MONAD));
    InterfaceDescriptor::new(MONAD)
        .extends(applicative::<C>())
        .extends(bindable::<C>())
        .law(Law::new("left_identity", [Ty::var("A"), kleisli()], left_identity::<C>))
        .law(Law::new("right_identity", [Ty::interface(MONAD)], right_identity::<C>))
        .law(Law::new(
            "associative",
            [Ty::interface(MONAD), kleisli(), kleisli()],
            associative::<C>,
        ))
}
