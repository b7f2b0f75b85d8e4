//! Interface and container descriptors.
//!
//! A container declares, at definition time, the interfaces it implements and
//! how values of it can be built. Interfaces carry their laws and the
//! interfaces they extend. Nothing here is discovered by reflection.

use std::any::{type_name, Any, TypeId};
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use serde::Serialize;
use tracing::warn;

use crate::drawn::{Args, Drawn};
use crate::law::{Law, LawViolation};
use crate::ty::{ContainerId, InterfaceId, Ty};
use crate::value::Value;

// ── Interfaces ──────────────────────────────────────────────────────────

/// A capability interface: its laws and the interfaces it extends.
#[derive(Debug, Clone)]
pub struct InterfaceDescriptor {
    id: InterfaceId,
    extends: Vec<InterfaceDescriptor>,
    laws: Vec<Law>,
}

impl InterfaceDescriptor {
    pub fn new(id: InterfaceId) -> Self {
        Self {
            id,
            extends: Vec::new(),
            laws: Vec::new(),
        }
    }

    /// Declare a parent interface.
    pub fn extends(mut self, parent: InterfaceDescriptor) -> Self {
        self.extends.push(parent);
        self
    }

    /// Declare a law owned by this interface.
    pub fn law(mut self, law: Law) -> Self {
        self.laws.push(law);
        self
    }

    pub fn id(&self) -> InterfaceId {
        self.id
    }

    pub fn parents(&self) -> &[InterfaceDescriptor] {
        &self.extends
    }

    /// Laws declared by this interface itself, in declaration order.
    pub fn laws(&self) -> &[Law] {
        &self.laws
    }
}

// ── Construction capabilities ───────────────────────────────────────────

/// Ways a container value can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Construction {
    /// The type's own constructor, fed with generated fields.
    Raw,
    /// Wrapping a success value.
    FromSuccess,
    /// Wrapping a failure value.
    FromFailure,
    /// Wrapping an optional value.
    FromOptional,
}

type BuildFn = Rc<dyn Fn(&Drawn) -> Option<Drawn>>;
type RawBuildFn = Rc<dyn Fn(Vec<Drawn>) -> Option<Drawn>>;

/// A constructor taking one generated input.
#[derive(Clone)]
pub struct Lifting {
    input: Ty,
    build: BuildFn,
}

impl Lifting {
    /// Type of the value this constructor wraps.
    pub fn input(&self) -> &Ty {
        &self.input
    }

    /// Build a container from a drawn input; `None` if the input has the wrong type.
    pub fn build(&self, input: &Drawn) -> Option<Drawn> {
        (self.build)(input)
    }
}

impl fmt::Debug for Lifting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifting").field("input", &self.input).finish()
    }
}

/// The container's raw constructor, fed with generated fields.
#[derive(Clone)]
pub struct RawConstructor {
    fields: Vec<Ty>,
    build: RawBuildFn,
}

impl RawConstructor {
    pub fn fields(&self) -> &[Ty] {
        &self.fields
    }

    pub fn build(&self, fields: Vec<Drawn>) -> Option<Drawn> {
        (self.build)(fields)
    }
}

impl fmt::Debug for RawConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawConstructor")
            .field("fields", &self.fields)
            .finish()
    }
}

/// Every construction capability a container declared.
#[derive(Debug, Clone, Default)]
pub struct Constructors {
    pub raw: Option<RawConstructor>,
    pub from_success: Option<Lifting>,
    pub from_failure: Option<Lifting>,
    pub from_optional: Option<Lifting>,
}

impl Constructors {
    /// Declared capabilities, in a fixed order.
    pub fn capabilities(&self) -> Vec<Construction> {
        let mut found = Vec::new();
        if self.raw.is_some() {
            found.push(Construction::Raw);
        }
        if self.from_success.is_some() {
            found.push(Construction::FromSuccess);
        }
        if self.from_failure.is_some() {
            found.push(Construction::FromFailure);
        }
        if self.from_optional.is_some() {
            found.push(Construction::FromOptional);
        }
        found
    }
}

// ── Containers ──────────────────────────────────────────────────────────

/// A container type that declares its interfaces and constructors.
pub trait Lawful: Any + Clone + fmt::Debug + PartialEq {
    fn descriptor() -> ContainerDescriptor;
}

/// Everything the verification engine knows about one container type.
#[derive(Debug, Clone)]
pub struct ContainerDescriptor {
    id: ContainerId,
    type_id: TypeId,
    type_name: &'static str,
    interfaces: Vec<InterfaceDescriptor>,
    constructors: Constructors,
}

impl ContainerDescriptor {
    /// Start describing the container type `C`.
    pub fn builder<C: Any + fmt::Debug>(id: ContainerId) -> DescriptorBuilder<C> {
        DescriptorBuilder {
            descriptor: ContainerDescriptor {
                id,
                type_id: TypeId::of::<C>(),
                type_name: type_name::<C>(),
                interfaces: Vec::new(),
                constructors: Constructors::default(),
            },
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Interfaces declared directly on the container.
    pub fn interfaces(&self) -> &[InterfaceDescriptor] {
        &self.interfaces
    }

    pub fn constructors(&self) -> &Constructors {
        &self.constructors
    }

    /// Whether this descriptor describes the Rust type `C`.
    pub fn describes<C: Any>(&self) -> bool {
        self.type_id == TypeId::of::<C>()
    }

    /// See [`capability_chain`].
    pub fn capability_chain(&self) -> Vec<&InterfaceDescriptor> {
        capability_chain(self)
    }

    /// See [`laws_of`].
    pub fn laws(&self) -> Vec<InterfaceLaws> {
        laws_of(self)
    }
}

/// Builder returned by [`ContainerDescriptor::builder`].
pub struct DescriptorBuilder<C> {
    descriptor: ContainerDescriptor,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Any + fmt::Debug> DescriptorBuilder<C> {
    /// Declare an implemented interface (its parents come along).
    pub fn implements(mut self, interface: InterfaceDescriptor) -> Self {
        self.descriptor.interfaces.push(interface);
        self
    }

    /// Values can be built from a success value of any type.
    pub fn from_success(self, build: fn(Value) -> C) -> Self {
        self.from_success_with(Ty::var("A"), build)
    }

    /// Values can be built from a success value of type `input`.
    pub fn from_success_with<A, F>(mut self, input: Ty, build: F) -> Self
    where
        A: Any + Clone,
        F: Fn(A) -> C + 'static,
    {
        let lifting = lift(input, build);
        replace(&mut self.descriptor.constructors.from_success, lifting, "from_success");
        self
    }

    /// Values can be built from a failure value of any type.
    pub fn from_failure(self, build: fn(Value) -> C) -> Self {
        self.from_failure_with(Ty::var("E"), build)
    }

    pub fn from_failure_with<A, F>(mut self, input: Ty, build: F) -> Self
    where
        A: Any + Clone,
        F: Fn(A) -> C + 'static,
    {
        let lifting = lift(input, build);
        replace(&mut self.descriptor.constructors.from_failure, lifting, "from_failure");
        self
    }

    /// Values can be built from an optional value of any type.
    pub fn from_optional(mut self, build: fn(Option<Value>) -> C) -> Self {
        let lifting = Lifting {
            input: Ty::optional(Ty::var("A")),
            build: Rc::new(move |drawn: &Drawn| {
                let optional = drawn.downcast_ref::<Option<Drawn>>()?;
                let inner = match optional {
                    Some(value) => Some(value.downcast::<Value>()?),
                    None => None,
                };
                Some(Drawn::new(build(inner)))
            }),
        };
        replace(&mut self.descriptor.constructors.from_optional, lifting, "from_optional");
        self
    }

    /// The type's raw constructor, fed with generated `fields`.
    ///
    /// Only used when settings allow raw construction.
    pub fn raw<F>(mut self, fields: impl IntoIterator<Item = Ty>, build: F) -> Self
    where
        F: Fn(&mut Args) -> Result<C, LawViolation> + 'static,
    {
        let raw = RawConstructor {
            fields: fields.into_iter().collect(),
            build: Rc::new(move |values: Vec<Drawn>| {
                let mut args = Args::new(values);
                build(&mut args).ok().map(Drawn::new)
            }),
        };
        replace(&mut self.descriptor.constructors.raw, raw, "raw");
        self
    }

    pub fn build(self) -> ContainerDescriptor {
        self.descriptor
    }
}

fn lift<A, C, F>(input: Ty, build: F) -> Lifting
where
    A: Any + Clone,
    C: Any + fmt::Debug,
    F: Fn(A) -> C + 'static,
{
    Lifting {
        input,
        build: Rc::new(move |drawn: &Drawn| drawn.downcast::<A>().map(|a| Drawn::new(build(a)))),
    }
}

fn replace<T>(slot: &mut Option<T>, value: T, capability: &str) {
    if slot.replace(value).is_some() {
        warn!(capability, "Construction capability declared twice, keeping the last one");
    }
}

// ── Capability chain and laws ───────────────────────────────────────────

/// Laws owned by one interface of a container's capability chain.
#[derive(Debug, Clone)]
pub struct InterfaceLaws {
    pub interface: InterfaceId,
    pub laws: Vec<Law>,
}

/// Every interface reachable from the container's declarations.
///
/// Preorder (an interface before its parents, parents in declaration
/// order), each interface once.
pub fn capability_chain(descriptor: &ContainerDescriptor) -> Vec<&InterfaceDescriptor> {
    fn visit<'a>(
        interface: &'a InterfaceDescriptor,
        seen: &mut HashSet<InterfaceId>,
        chain: &mut Vec<&'a InterfaceDescriptor>,
    ) {
        if !seen.insert(interface.id) {
            return;
        }
        chain.push(interface);
        for parent in &interface.extends {
            visit(parent, seen, chain);
        }
    }

    let mut seen = HashSet::new();
    let mut chain = Vec::new();
    for interface in &descriptor.interfaces {
        visit(interface, &mut seen, &mut chain);
    }
    chain
}

/// The law-bearing interfaces of the capability chain, with their laws.
///
/// Order follows [`capability_chain`], so repeated calls agree and derived
/// case names stay stable.
pub fn laws_of(descriptor: &ContainerDescriptor) -> Vec<InterfaceLaws> {
    capability_chain(descriptor)
        .into_iter()
        .filter(|interface| !interface.laws.is_empty())
        .map(|interface| InterfaceLaws {
            interface: interface.id,
            laws: interface.laws.clone(),
        })
        .collect()
}
