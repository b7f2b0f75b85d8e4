//! Value-level equality.

use lawful_types::{check, Args, InterfaceDescriptor, InterfaceId, Law, Lawful, Ty, Verdict};

pub const EQUABLE: InterfaceId = InterfaceId::new("Equable");

/// Containers with an equality of their own, which must be an equivalence.
pub trait Equable: Lawful {
    fn equals(&self, other: &Self) -> bool;
}

fn reflexive<C: Equable>(args: &mut Args) -> Verdict {
    let a: C = args.next()?;
    check(a.equals(&a), "a.equals(a)")
}

fn symmetry<C: Equable>(args: &mut Args) -> Verdict {
    let a: C = args.next()?;
    let b: C = args.next()?;
    check(a.equals(&b) == b.equals(&a), "a.equals(b) == b.equals(a)")
}

fn transitivity<C: Equable>(args: &mut Args) -> Verdict {
    let a: C = args.next()?;
    let b: C = args.next()?;
    let c: C = args.next()?;
    check(
        !(a.equals(&b) && b.equals(&c)) || a.equals(&c),
        "a.equals(b) && b.equals(c) implies a.equals(c)",
    )
}

pub fn equable<C: Equable>() -> InterfaceDescriptor {
    let this = || Ty::interface(EQUABLE);
    InterfaceDescriptor::new(EQUABLE)
        .law(Law::new("reflexive", [this()], reflexive::<C>))
        .law(Law::new("symmetry", [this(), this()], symmetry::<C>))
        .law(Law::new("transitivity", [this(), this(), this()], transitivity::<C>))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{args, Sample};
    use lawful_types::{ContainerDescriptor, ContainerId, Drawn, LawViolation, Value};

    /// Equal only to values strictly smaller than itself.
    #[derive(Debug, Clone, PartialEq)]
    struct Smaller(i64);

    impl Lawful for Smaller {
        fn descriptor() -> ContainerDescriptor {
            ContainerDescriptor::builder::<Smaller>(ContainerId::new("Smaller"))
                .implements(equable::<Smaller>())
                .build()
        }
    }

    impl Equable for Smaller {
        fn equals(&self, other: &Self) -> bool {
            other.0 < self.0
        }
    }

    #[test]
    fn equality_by_value_holds() {
        let good = Sample::Good(Value::Int(1));
        let bad = Sample::Bad(Value::Int(1));
        for (a, b) in [(good.clone(), good.clone()), (good, bad)] {
            let mut drawn = args([Drawn::new(a.clone()), Drawn::new(b.clone())]);
            assert_eq!(symmetry::<Sample>(&mut drawn), Ok(()));
            assert_eq!(reflexive::<Sample>(&mut args([Drawn::new(a)])), Ok(()));
        }
    }

    #[test]
    fn strict_ordering_is_not_reflexive() {
        let verdict = reflexive::<Smaller>(&mut args([Drawn::new(Smaller(3))]));
        assert!(matches!(verdict, Err(LawViolation::Failed(_))));
        let verdict = symmetry::<Smaller>(&mut args([Drawn::new(Smaller(3)), Drawn::new(Smaller(1))]));
        assert!(verdict.is_err());
    }

    #[test]
    fn descriptor_lists_three_laws() {
        let names: Vec<_> = equable::<Sample>().laws().iter().map(Law::name).collect();
        assert_eq!(names, vec!["reflexive", "symmetry", "transitivity"]);
        assert_eq!(equable::<Sample>().laws()[2].params().len(), 3);
    }
}
