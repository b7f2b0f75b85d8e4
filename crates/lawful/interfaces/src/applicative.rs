//! Lifting plain values and combining containers.

use lawful_types::{check_eq, Args, InterfaceDescriptor, InterfaceId, Law, Ty, Value, Verdict};

use crate::mappable::{mappable, Mappable};

pub const APPLICATIVE: InterfaceId = InterfaceId::new("Applicative");

pub trait Applicative: Mappable {
    /// Lift a plain value into the container's success case.
    fn from_value(value: Value) -> Self;

    /// Combine two containers' values with `f`.
    fn map2<F: Fn(Value, Value) -> Value>(self, other: Self, f: F) -> Self;
}

fn homomorphism<C: Applicative>(args: &mut Args) -> Verdict {
    let a: Value = args.next()?;
    let f = args.function1::<Value, Value>()?;
    check_eq(
        &C::from_value(a.clone()).map(|x| f.call(&x)),
        &C::from_value(f.call(&a)),
        "from_value(a).map(f) == from_value(f(a))",
    )
}

fn map2_homomorphism<C: Applicative>(args: &mut Args) -> Verdict {
    let a: Value = args.next()?;
    let b: Value = args.next()?;
    let f = args.function2::<Value, Value, Value>()?;
    check_eq(
        &C::from_value(a.clone()).map2(C::from_value(b.clone()), |x, y| f.call(&x, &y)),
        &C::from_value(f.call(&a, &b)),
        "from_value(a).map2(from_value(b), f) == from_value(f(a, b))",
    )
}

pub fn applicative<C: Applicative>() -> InterfaceDescriptor {
    InterfaceDescriptor::new(APPLICATIVE)
        .extends(mappable::<C>())
        .law(Law::new(
            "homomorphism",
            [Ty::var("A"), Ty::function([Ty::var("A")], Ty::var("B"))],
            homomorphism::<C>,
        ))
        .law(Law::new(
            "map2_homomorphism",
            [
                Ty::var("A"),
                Ty::var("B"),
                Ty::function([Ty::var("A"), Ty::var("B")], Ty::var("C")),
            ],
            map2_homomorphism::<C>,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{args, value, value_fn, value_fn2, Sample};

    #[test]
    fn success_lifting_is_a_homomorphism() {
        for seed in 0..20 {
            let verdict = homomorphism::<Sample>(&mut args([value(seed as i64), value_fn(seed)]));
            assert_eq!(verdict, Ok(()));
            let verdict = map2_homomorphism::<Sample>(&mut args([
                value(seed as i64),
                value(-(seed as i64)),
                value_fn2(seed),
            ]));
            assert_eq!(verdict, Ok(()));
        }
    }

    #[test]
    fn descriptor_extends_mappable() {
        let descriptor = applicative::<Sample>();
        let parents: Vec<_> = descriptor.parents().iter().map(|parent| parent.id()).collect();
        assert_eq!(parents, vec![crate::MAPPABLE]);
    }
}
