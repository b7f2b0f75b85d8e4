//! Synthesis of pure functions for function-typed law parameters.

use std::rc::Rc;

use proptest::prelude::*;
use tracing::trace;

use lawful_types::{Drawn, LawfulError, LawfulResult, PureFn, Ty};

use crate::registry::{GeneratorFactory, TypeRegistry};

/// Generator of pure functions of type `ty`.
///
/// The return type is resolved through `registry` once, up front; each drawn
/// function then derives its outputs from its seed and its arguments only.
pub fn resolve_function_type(
    ty: &Ty,
    registry: &TypeRegistry,
) -> LawfulResult<BoxedStrategy<Drawn>> {
    let Ty::Function { params, returns } = ty else {
        return Err(LawfulError::Unresolvable(format!(
            "`{}` is not a function type",
            ty
        )));
    };
    let arity = params.len();
    let outputs = registry.resolve(returns)?;
    let signature = ty.to_string();
    trace!(%signature, arity, "Synthesizing pure functions");
    Ok(any::<u64>()
        .prop_map(move |seed| Drawn::new(PureFn::new(seed, arity, outputs.clone(), signature.clone())))
        .boxed())
}

pub fn pure_functions() -> GeneratorFactory {
    Rc::new(resolve_function_type)
}
