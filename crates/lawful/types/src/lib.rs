//! # lawful-types
//!
//! The model shared by every lawful crate: laws grouped under interfaces,
//! container descriptors with their construction capabilities, the type
//! expressions laws are written against, and the erased values the property
//! engine draws for them.
//!
//! ## Key Principles
//!
//! - **Explicit conformance**: a container states which interfaces it
//!   implements through [`Lawful::descriptor`]; nothing is inferred.
//! - **Laws are written once**: a law is a plain function over [`Args`],
//!   instantiated per container by generic descriptor functions.
//! - **Type variables are values**: every free type variable is drawn as a
//!   [`Value`].
//! - **Functions are pure**: a drawn [`PureFn`] returns the same output for
//!   the same input, by construction.

#![deny(unsafe_code)]

pub mod descriptor;
pub mod drawn;
pub mod error;
pub mod function;
pub mod law;
pub mod settings;
pub mod ty;
pub mod value;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use descriptor::{
    capability_chain, laws_of, Construction, Constructors, ContainerDescriptor,
    DescriptorBuilder, InterfaceDescriptor, InterfaceLaws, Lawful, Lifting, RawConstructor,
};
pub use drawn::{Args, Drawn};
pub use error::{LawfulError, LawfulResult};
pub use function::{Fn1, Fn2, PureFn};
pub use law::{check, check_eq, Law, LawDefinition, LawViolation, Verdict};
pub use settings::{EngineOptions, LawSettings, DEFAULT_TAG, ENGINE_KEYS};
pub use ty::{ContainerId, InterfaceId, NamedType, Ty, TypeKey, TypeVar, VarBound};
pub use value::Value;
