//! # lawful-strategy
//!
//! Generator synthesis for law verification.
//!
//! Law parameters are abstract types: type variables, function types,
//! interfaces and containers. This crate turns them into property-engine
//! generators through a scoped [`TypeRegistry`]:
//!
//! - [`resolve_type_variable`] draws values that are equal to themselves.
//! - [`resolve_function_type`] draws pure functions of the right arity.
//! - [`container_generator`] draws container values through every
//!   construction capability the container declares.
//! - [`bind_container`] and [`bind_default_container`] push all of the above
//!   for the duration of a check and restore the registry afterwards.

#![deny(unsafe_code)]

pub mod container;
pub mod functions;
pub mod registry;
pub mod scope;
pub mod type_vars;
pub mod values;

pub use container::{construction_plan, container_generator};
pub use functions::{pure_functions, resolve_function_type};
pub use registry::{
    sequence, BindingId, GeneratorFactory, RegistrySnapshot, RegistryToken, TypeRegistry,
    MAX_RESOLUTION_DEPTH,
};
pub use scope::{
    activate_resolvers, bind_container, bind_default_container, with_container_bound,
    with_default_container_bound, DefaultContainerScope, RegistryScope,
};
pub use type_vars::{default_type_vars, resolve_type_variable, self_equal_type_vars};
pub use values::value_strategy;
