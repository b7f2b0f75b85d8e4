//! Resolution of free type variables.

use std::rc::Rc;

use proptest::prelude::*;

use lawful_types::{Drawn, LawfulError, LawfulResult, Ty, TypeVar, Value};

use crate::registry::{GeneratorFactory, TypeRegistry};
use crate::values::value_strategy;

/// Values for `tv` that are equal to themselves.
///
/// Laws compare with `==`; a `NaN` drawn for a type variable would make
/// even the identity law fail, so such values are rejected here.
pub fn resolve_type_variable(tv: &TypeVar) -> BoxedStrategy<Drawn> {
    value_strategy(tv.bound)
        .prop_filter("type variables must be self-equal", Value::is_self_equal)
        .prop_map(Drawn::new)
        .boxed()
}

/// The resolver active while laws run.
pub fn self_equal_type_vars() -> GeneratorFactory {
    Rc::new(|ty: &Ty, _: &TypeRegistry| match ty {
        Ty::Var(tv) => Ok(resolve_type_variable(tv)),
        other => not_a_variable(other),
    })
}

/// The registry's base resolver: any value of the bound, `NaN` included.
pub fn default_type_vars() -> GeneratorFactory {
    Rc::new(|ty: &Ty, _: &TypeRegistry| match ty {
        Ty::Var(tv) => Ok(value_strategy(tv.bound).prop_map(Drawn::new).boxed()),
        other => not_a_variable(other),
    })
}

fn not_a_variable(ty: &Ty) -> LawfulResult<BoxedStrategy<Drawn>> {
    Err(LawfulError::Unresolvable(format!(
        "`{}` is not a type variable",
        ty
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawful_types::VarBound;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    #[test]
    fn resolved_values_are_self_equal() {
        let tv = TypeVar {
            name: "A",
            bound: VarBound::Numeric,
        };
        let strategy = resolve_type_variable(&tv);
        let mut runner = TestRunner::deterministic();
        for _ in 0..500 {
            let drawn = strategy.new_tree(&mut runner).unwrap().current();
            let value = drawn.downcast_ref::<Value>().unwrap();
            assert_eq!(value, value);
        }
    }

    #[test]
    fn factory_rejects_other_types() {
        let registry = TypeRegistry::new();
        let factory = self_equal_type_vars();
        let err = factory(&Ty::named::<i64>(), &registry).unwrap_err();
        assert!(matches!(err, LawfulError::Unresolvable(_)));
    }
}
