//! Exchanging the success and failure sides.

use lawful_types::{check_eq, Args, InterfaceDescriptor, InterfaceId, Law, Lawful, Ty, Verdict};

pub const SWAPPABLE: InterfaceId = InterfaceId::new("Swappable");

pub trait Swappable: Lawful {
    fn swap(self) -> Self;
}

fn double_swap<C: Swappable>(args: &mut Args) -> Verdict {
    let c: C = args.next()?;
    check_eq(&c.clone().swap().swap(), &c, "c.swap().swap() == c")
}

pub fn swappable<C: Swappable>() -> InterfaceDescriptor {
    InterfaceDescriptor::new(SWAPPABLE).law(Law::new(
        "double_swap",
        [Ty::interface(SWAPPABLE)],
        double_swap::<C>,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{args, Sample};
    use lawful_types::{ContainerDescriptor, ContainerId, Drawn, Value};

    /// Swapping loses the failure value.
    #[derive(Debug, Clone, PartialEq)]
    enum Lossy {
        Left(Value),
        Right(Value),
    }

    impl Lawful for Lossy {
        fn descriptor() -> ContainerDescriptor {
            ContainerDescriptor::builder::<Lossy>(ContainerId::new("Lossy"))
                .implements(swappable::<Lossy>())
                .from_success(Lossy::Right)
                .from_failure(Lossy::Left)
                .build()
        }
    }

    impl Swappable for Lossy {
        fn swap(self) -> Self {
            match self {
                Lossy::Left(_) => Lossy::Right(Value::Unit),
                Lossy::Right(v) => Lossy::Left(v),
            }
        }
    }

    #[test]
    fn sample_swaps_back() {
        for c in [Sample::Good(Value::Int(1)), Sample::Bad(Value::Bool(false))] {
            assert_eq!(double_swap::<Sample>(&mut args([Drawn::new(c)])), Ok(()));
        }
    }

    #[test]
    fn lossy_swap_is_caught() {
        let verdict = double_swap::<Lossy>(&mut args([Drawn::new(Lossy::Right(Value::Int(3)))]));
        assert!(verdict.is_err());
    }
}
