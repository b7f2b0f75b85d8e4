//! Default generators for [`Value`], by type-variable bound.

use proptest::collection::vec;
use proptest::prelude::*;

use lawful_types::{Value, VarBound};

/// Values a type variable with `bound` may take, before any filtering.
///
/// Floats include `NaN` on purpose: it is a legitimate `f64`, and laws must
/// be protected from it by the self-equality filter, not by luck.
pub fn value_strategy(bound: VarBound) -> BoxedStrategy<Value> {
    match bound {
        VarBound::Any => scalar()
            .prop_recursive(2, 8, 4, |inner| vec(inner, 0..4).prop_map(Value::List))
            .boxed(),
        VarBound::Scalar => scalar(),
        VarBound::Numeric => prop_oneof![int(), float()].boxed(),
        VarBound::Text => text(),
    }
}

fn scalar() -> BoxedStrategy<Value> {
    prop_oneof![
        Just(Value::Unit),
        any::<bool>().prop_map(Value::Bool),
        int(),
        float(),
        text(),
    ]
    .boxed()
}

fn int() -> BoxedStrategy<Value> {
    any::<i64>().prop_map(Value::Int).boxed()
}

fn float() -> BoxedStrategy<Value> {
    prop_oneof![4 => any::<f64>(), 1 => Just(f64::NAN)]
        .prop_map(Value::Float)
        .boxed()
}

fn text() -> BoxedStrategy<Value> {
    "[a-z0-9 ]{0,12}".prop_map(Value::Text).boxed()
}
