//! Mapping over success values.

use lawful_types::{check_eq, Args, InterfaceDescriptor, InterfaceId, Law, Lawful, Ty, Value, Verdict};

pub const MAPPABLE: InterfaceId = InterfaceId::new("Mappable");

/// Containers whose inner value can be transformed.
pub trait Mappable: Lawful {
    fn map<F: Fn(Value) -> Value>(self, f: F) -> Self;
}

fn identity<C: Mappable>(args: &mut Args) -> Verdict {
    let c: C = args.next()?;
    check_eq(&c.clone().map(|x| x), &c, "c.map(identity) == c")
}

fn associative<C: Mappable>(args: &mut Args) -> Verdict {
    let c: C = args.next()?;
    let f = args.function1::<Value, Value>()?;
    let g = args.function1::<Value, Value>()?;
    let chained = c.clone().map(|x| f.call(&x)).map(|x| g.call(&x));
    let composed = c.map(|x| g.call(&f.call(&x)));
    check_eq(&chained, &composed, "c.map(f).map(g) == c.map(g . f)")
}

pub fn mappable<C: Mappable>() -> InterfaceDescriptor {
    InterfaceDescriptor::new(MAPPABLE)
        .law(Law::new("identity", [Ty::interface(MAPPABLE)], identity::<C>))
        .law(Law::new(
            "associative",
            [
                Ty::interface(MAPPABLE),
                Ty::function([Ty::var("A")], Ty::var("B")),
                Ty::function([Ty::var("B")], Ty::var("C")),
            ],
            associative::<C>,
        ))
}
