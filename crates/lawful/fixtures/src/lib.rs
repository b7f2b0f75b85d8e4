//! # lawful-fixtures
//!
//! Reference containers for the standard interfaces. They are the usage
//! documentation for declaring conformance and the known-good inputs of the
//! conformance tests.
//!
//! - [`Identity`]: `Monad` and `Equable`, success and raw construction.
//! - [`Maybe`]: `MaybeLike`, success and optional construction.
//! - [`Outcome`]: `ResultLike`, `Swappable` and `Equable`, success and
//!   failure construction.
//! - [`Opaque`]: `Mappable`, raw construction only.

#![deny(unsafe_code)]

mod identity;
mod maybe;
mod opaque;
mod outcome;

pub use identity::{Identity, IDENTITY};
pub use maybe::{Maybe, MAYBE};
pub use opaque::{Opaque, OPAQUE};
pub use outcome::{Outcome, OUTCOME};
