//! The failure-side counterparts of mapping and binding.

use lawful_types::{check_eq, Args, InterfaceDescriptor, InterfaceId, Law, Lawful, Ty, Value, Verdict};

pub const ALTABLE: InterfaceId = InterfaceId::new("Altable");
pub const LASHABLE: InterfaceId = InterfaceId::new("Lashable");

/// Containers whose failure value can be transformed.
pub trait Altable: Lawful {
    fn alt<F: Fn(Value) -> Value>(self, f: F) -> Self;
}

/// Containers that can recover from a failure with a new container.
pub trait Lashable: Lawful {
    fn lash<F: Fn(Value) -> Self>(self, f: F) -> Self;
}

fn identity<C: Altable>(args: &mut Args) -> Verdict {
    let c: C = args.next()?;
    check_eq(&c.clone().alt(|x| x), &c, "c.alt(identity) == c")
}

fn associative<C: Altable>(args: &mut Args) -> Verdict {
    let c: C = args.next()?;
    let f = args.function1::<Value, Value>()?;
    let g = args.function1::<Value, Value>()?;
    let chained = c.clone().alt(|x| f.call(&x)).alt(|x| g.call(&x));
    let composed = c.alt(|x| g.call(&f.call(&x)));
    check_eq(&chained, &composed, "c.alt(f).alt(g) == c.alt(g . f)")
}

pub fn altable<C: Altable>() -> InterfaceDescriptor {
    InterfaceDescriptor::new(ALTABLE)
        .law(Law::new("identity", [Ty::interface(ALTABLE)], identity::<C>))
        .law(Law::new(
            "associative",
            [
                Ty::interface(ALTABLE),
                Ty::function([Ty::var("E")], Ty::var("F")),
                Ty::function([Ty::var("F")], Ty::var("G")),
            ],
            associative::<C>,
        ))
}

pub fn lashable<C: Lashable>() -> InterfaceDescriptor {
    InterfaceDescriptor::new(LASHABLE)
}
