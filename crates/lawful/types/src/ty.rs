//! Type expressions used in law and constructor signatures.
//!
//! A [`Ty`] is what a law says about one of its parameters ("any `Mappable`",
//! "a function `A -> B`", "a free type variable"). The registry resolves a
//! `Ty` to a generator through its [`TypeKey`].

use std::any::{type_name, TypeId};
use std::fmt;

use serde::Serialize;

/// Name of a capability interface, e.g. `Mappable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct InterfaceId(&'static str);

impl InterfaceId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Name of a container type, e.g. `Box`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ContainerId(&'static str);

impl ContainerId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Constraint on the values a type variable may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum VarBound {
    /// Any value, including nested lists.
    #[default]
    Any,
    /// Unit, booleans, numbers and text.
    Scalar,
    /// Integers and floats.
    Numeric,
    /// Text only.
    Text,
}

/// A free generic type parameter of a law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeVar {
    pub name: &'static str,
    pub bound: VarBound,
}

/// A concrete Rust type, identified at runtime by its `TypeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedType {
    pub type_id: TypeId,
    pub name: &'static str,
}

impl NamedType {
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    Var(TypeVar),
    Interface(InterfaceId),
    Container(ContainerId),
    Function { params: Vec<Ty>, returns: Box<Ty> },
    Optional(Box<Ty>),
    Named(NamedType),
}

impl Ty {
    /// An unconstrained type variable.
    pub fn var(name: &'static str) -> Self {
        Ty::Var(TypeVar {
            name,
            bound: VarBound::Any,
        })
    }

    pub fn bounded_var(name: &'static str, bound: VarBound) -> Self {
        Ty::Var(TypeVar { name, bound })
    }

    pub fn interface(id: InterfaceId) -> Self {
        Ty::Interface(id)
    }

    pub fn container(id: ContainerId) -> Self {
        Ty::Container(id)
    }

    /// A function type `params... -> returns`.
    pub fn function(params: impl IntoIterator<Item = Ty>, returns: Ty) -> Self {
        Ty::Function {
            params: params.into_iter().collect(),
            returns: Box::new(returns),
        }
    }

    pub fn optional(inner: Ty) -> Self {
        Ty::Optional(Box::new(inner))
    }

    pub fn named<T: 'static>() -> Self {
        Ty::Named(NamedType::of::<T>())
    }

    /// Number of parameters of a function type, `None` for other types.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Ty::Function { params, .. } => Some(params.len()),
            _ => None,
        }
    }

    /// Registry key this type resolves through.
    ///
    /// `Optional` has no key: it is resolved from its inner type.
    pub fn key(&self) -> Option<TypeKey> {
        match self {
            Ty::Var(_) => Some(TypeKey::TypeVar),
            Ty::Function { .. } => Some(TypeKey::Function),
            Ty::Interface(id) => Some(TypeKey::Interface(*id)),
            Ty::Container(id) => Some(TypeKey::Container(*id)),
            Ty::Named(named) => Some(TypeKey::Named(named.type_id)),
            Ty::Optional(_) => None,
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Var(tv) => f.write_str(tv.name),
            Ty::Interface(id) => write!(f, "impl {}", id),
            Ty::Container(id) => write!(f, "{}", id),
            Ty::Function { params, returns } => {
                write!(f, "fn(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ") -> {}", returns)
            }
            Ty::Optional(inner) => write!(f, "Option<{}>", inner),
            Ty::Named(named) => f.write_str(named.name),
        }
    }
}

/// Key of a binding in the type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKey {
    /// All free type variables share one resolver.
    TypeVar,
    /// All function types share one synthesizer.
    Function,
    Interface(InterfaceId),
    Container(ContainerId),
    Named(TypeId),
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKey::TypeVar => f.write_str("type variables"),
            TypeKey::Function => f.write_str("function types"),
            TypeKey::Interface(id) => write!(f, "interface {}", id),
            TypeKey::Container(id) => write!(f, "container {}", id),
            TypeKey::Named(type_id) => write!(f, "type {:?}", type_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAPPABLE: InterfaceId = InterfaceId::new("Mappable");

    #[test]
    fn keys_group_variables_and_functions() {
        assert_eq!(Ty::var("A").key(), Ty::var("B").key());
        assert_eq!(
            Ty::function([Ty::var("A")], Ty::var("B")).key(),
            Some(TypeKey::Function)
        );
        assert_eq!(
            Ty::interface(MAPPABLE).key(),
            Some(TypeKey::Interface(MAPPABLE))
        );
        assert_eq!(Ty::optional(Ty::var("A")).key(), None);
    }

    #[test]
    fn named_types_key_by_type_id() {
        assert_eq!(
            Ty::named::<i64>().key(),
            Some(TypeKey::Named(TypeId::of::<i64>()))
        );
        assert_ne!(Ty::named::<i64>().key(), Ty::named::<u32>().key());
    }

    #[test]
    fn arity_of_functions() {
        assert_eq!(Ty::function([Ty::var("A")], Ty::var("B")).arity(), Some(1));
        assert_eq!(
            Ty::function([Ty::var("A"), Ty::var("B")], Ty::var("C")).arity(),
            Some(2)
        );
        assert_eq!(Ty::var("A").arity(), None);
    }

    #[test]
    fn display_reads_like_a_signature() {
        let ty = Ty::function(
            [Ty::var("A"), Ty::optional(Ty::var("B"))],
            Ty::interface(MAPPABLE),
        );
        assert_eq!(ty.to_string(), "fn(A, Option<B>) -> impl Mappable");
    }
}
