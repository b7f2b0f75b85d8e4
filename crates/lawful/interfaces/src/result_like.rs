//! Containers holding either a success or a failure.

use lawful_types::{check_eq, Args, InterfaceDescriptor, InterfaceId, Law, Ty, Value, Verdict};

use crate::alt::{altable, lashable, Altable, Lashable};
use crate::applicative::Applicative;
use crate::mappable::Mappable;
use crate::monad::{monad, Bindable, Monad};

pub const RESULT_LIKE: InterfaceId = InterfaceId::new("ResultLike");

/// Success-or-failure containers. Success-side operations leave failures
/// alone and failure-side operations leave successes alone.
pub trait ResultLike: Monad + Altable + Lashable {
    fn from_failure(error: Value) -> Self;
}

fn map_short_circuit<C: ResultLike>(args: &mut Args) -> Verdict {
    let e: Value = args.next()?;
    let f = args.function1::<Value, Value>()?;
    check_eq(
        &C::from_failure(e.clone()).map(|x| f.call(&x)),
        &C::from_failure(e),
        "from_failure(e).map(f) == from_failure(e)",
    )
}

fn bind_short_circuit<C: ResultLike>(args: &mut Args) -> Verdict {
    let e: Value = args.next()?;
    let f = args.function1::<Value, C>()?;
    check_eq(
        &C::from_failure(e.clone()).bind(|x| f.call(&x)),
        &C::from_failure(e),
        "from_failure(e).bind(f) == from_failure(e)",
    )
}

fn alt_short_circuit<C: ResultLike>(args: &mut Args) -> Verdict {
    let a: Value = args.next()?;
    let f = args.function1::<Value, Value>()?;
    check_eq(
        &C::from_value(a.clone()).alt(|x| f.call(&x)),
        &C::from_value(a),
        "from_value(a).alt(f) == from_value(a)",
    )
}

fn lash_short_circuit<C: ResultLike>(args: &mut Args) -> Verdict {
    let a: Value = args.next()?;
    let f = args.function1::<Value, C>()?;
    check_eq(
        &C::from_value(a.clone()).lash(|x| f.call(&x)),
        &C::from_value(a),
        "from_value(a).lash(f) == from_value(a)",
    )
}

pub fn result_like<C: ResultLike>() -> InterfaceDescriptor {
    let recovering = || Ty::function([Ty::var("E")], Ty::interface(RESULT_LIKE));
    InterfaceDescriptor::new(RESULT_LIKE)
        .extends(monad::<C>())
        .extends(altable::<C>())
        .extends(lashable::<C>())
        .law(Law::new(
            "map_short_circuit",
            [Ty::var("E"), Ty::function([Ty::var("A")], Ty::var("B"))],
            map_short_circuit::<C>,
        ))
        .law(Law::new(
            "bind_short_circuit",
            [Ty::var("E"), Ty::function([Ty::var("A")], Ty::interface(RESULT_LIKE))],
            bind_short_circuit::<C>,
        ))
        .law(Law::new(
            "alt_short_circuit",
            [Ty::var("A"), Ty::function([Ty::var("E")], Ty::var("F"))],
            alt_short_circuit::<C>,
        ))
        .law(Law::new(
            "lash_short_circuit",
            [Ty::var("A"), recovering()],
            lash_short_circuit::<C>,
        ))
}
