//! # lawful-interfaces
//!
//! Standard capability interfaces and their laws.
//!
//! Each interface is a trait over a container instantiated at [`Value`],
//! paired with a descriptor function that lists its laws for one concrete
//! container. A container states conformance by implementing the traits and
//! naming the descriptor functions in its [`Lawful::descriptor`]:
//!
//! ```ignore
//! impl Lawful for Identity {
//!     fn descriptor() -> ContainerDescriptor {
//!         ContainerDescriptor::builder::<Identity>(ContainerId::new("Identity"))
//!             .implements(monad::<Identity>())
//!             .from_success(Identity)
//!             .build()
//!     }
//! }
//! ```
//!
//! | interface     | extends                       | laws |
//! |---------------|-------------------------------|------|
//! | `Equable`     |                               | reflexive, symmetry, transitivity |
//! | `Mappable`    |                               | identity, associative |
//! | `Bindable`    |                               | |
//! | `Applicative` | `Mappable`                    | homomorphism, map2_homomorphism |
//! | `Monad`       | `Applicative`, `Bindable`     | left_identity, right_identity, associative |
//! | `Altable`     |                               | identity, associative |
//! | `Lashable`    |                               | |
//! | `ResultLike`  | `Monad`, `Altable`, `Lashable` | map/bind/alt/lash short circuits |
//! | `MaybeLike`   | `Monad`                       | map/bind short circuits, unit_structure |
//! | `Swappable`   |                               | double_swap |
//!
//! [`Value`]: lawful_types::Value
//! [`Lawful::descriptor`]: lawful_types::Lawful::descriptor

#![deny(unsafe_code)]

pub mod alt;
pub mod applicative;
pub mod equable;
pub mod mappable;
pub mod maybe_like;
pub mod monad;
pub mod result_like;
pub mod swappable;

#[cfg(test)]
mod testing;

pub use alt::{altable, lashable, Altable, Lashable, ALTABLE, LASHABLE};
pub use applicative::{applicative, Applicative, APPLICATIVE};
pub use equable::{equable, Equable, EQUABLE};
pub use mappable::{mappable, Mappable, MAPPABLE};
pub use maybe_like::{maybe_like, MaybeLike, MAYBE_LIKE};
pub use monad::{bindable, monad, Bindable, Monad, BINDABLE, MONAD};
pub use result_like::{result_like, ResultLike, RESULT_LIKE};
pub use swappable::{swappable, Swappable, SWAPPABLE};
