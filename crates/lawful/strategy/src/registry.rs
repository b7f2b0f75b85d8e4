//! The scoped type registry.
//!
//! Scoped bindings live on a stack. Lookup returns the most recent binding
//! for a key, so a push shadows and the matching pop restores whatever was
//! visible before. Tokens must be popped in reverse push order; anything else
//! is reported as registry corruption, never silently repaired.
//!
//! Installed bindings sit in a separate base layer below the stack. They
//! have no token and can be added at any time without disturbing open scopes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use proptest::prelude::*;
use tracing::{debug, trace};

use lawful_types::{Drawn, LawfulError, LawfulResult, Ty, TypeKey, Value, VarBound};

use crate::functions::pure_functions;
use crate::type_vars::default_type_vars;
use crate::values::value_strategy;

/// Nested resolutions deeper than this are treated as a recursive type.
pub const MAX_RESOLUTION_DEPTH: usize = 16;

/// Produces a generator for a type, resolving nested types through the
/// registry it is handed.
pub type GeneratorFactory = Rc<dyn Fn(&Ty, &TypeRegistry) -> LawfulResult<BoxedStrategy<Drawn>>>;

static NEXT_BINDING: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique id of one pushed binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u64);

impl BindingId {
    fn fresh() -> Self {
        Self(NEXT_BINDING.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Proof of one push. Consumed by [`TypeRegistry::pop`].
#[must_use = "a pushed binding must be popped to restore the registry"]
#[derive(Debug)]
pub struct RegistryToken {
    id: BindingId,
    key: TypeKey,
}

impl RegistryToken {
    pub fn id(&self) -> BindingId {
        self.id
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }
}

struct Binding {
    id: BindingId,
    key: TypeKey,
    origin: String,
    factory: GeneratorFactory,
}

/// Observable state of a registry, for before/after comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySnapshot {
    bindings: Vec<(TypeKey, BindingId)>,
}

impl RegistrySnapshot {
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn contains_key(&self, key: TypeKey) -> bool {
        self.bindings.iter().any(|(bound, _)| *bound == key)
    }
}

/// Mapping from abstract types to generator factories.
///
/// Single-threaded: factories are `Rc`s and the layers sit in `RefCell`s,
/// so a registry can never be shared between concurrently running suites.
pub struct TypeRegistry {
    base: RefCell<Vec<Binding>>,
    stack: RefCell<Vec<Binding>>,
    depth: Cell<usize>,
}

/// Restores the resolution depth even if a factory panics.
struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
    restore: usize,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.restore);
    }
}

impl TypeRegistry {
    /// An empty registry. Nothing resolves until something is bound.
    pub fn new() -> Self {
        Self {
            base: RefCell::new(Vec::new()),
            stack: RefCell::new(Vec::new()),
            depth: Cell::new(0),
        }
    }

    /// A registry with the engine's base bindings: unfiltered type
    /// variables, pure functions and a few primitive types.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.install(TypeKey::TypeVar, default_type_vars(), "default type variables");
        registry.install(TypeKey::Function, pure_functions(), "default pure functions");
        registry.install_primitive::<i64>(any::<i64>().boxed());
        registry.install_primitive::<u32>(any::<u32>().boxed());
        registry.install_primitive::<bool>(any::<bool>().boxed());
        registry.install_primitive::<String>(".{0,16}".boxed());
        registry.install_primitive::<Value>(value_strategy(VarBound::Any));
        registry
    }

    /// Bind `factory` for `key` permanently.
    ///
    /// The binding goes into the base layer, so any scoped binding for `key`
    /// keeps shadowing it until popped.
    pub fn install(&self, key: TypeKey, factory: GeneratorFactory, origin: impl Into<String>) {
        let id = BindingId::fresh();
        let origin = origin.into();
        debug!(%key, binding = %id, origin = %origin, "Installing generator");
        self.base.borrow_mut().push(Binding {
            id,
            key,
            origin,
            factory,
        });
    }

    /// Bind a concrete type to a fixed strategy permanently.
    pub fn install_primitive<T>(&self, strategy: BoxedStrategy<T>)
    where
        T: fmt::Debug + Clone + 'static,
    {
        let key = TypeKey::Named(std::any::TypeId::of::<T>());
        let factory: GeneratorFactory = Rc::new(
            move |_: &Ty, _: &TypeRegistry| -> LawfulResult<BoxedStrategy<Drawn>> {
                Ok(strategy.clone().prop_map(Drawn::new).boxed())
            },
        );
        self.install(key, factory, std::any::type_name::<T>());
    }

    /// Shadow the binding for `key` until the returned token is popped.
    pub fn push(
        &self,
        key: TypeKey,
        factory: GeneratorFactory,
        origin: impl Into<String>,
    ) -> RegistryToken {
        let id = BindingId::fresh();
        let origin = origin.into();
        debug!(%key, binding = %id, origin = %origin, "Binding generator");
        self.stack.borrow_mut().push(Binding {
            id,
            key,
            origin,
            factory,
        });
        RegistryToken { id, key }
    }

    /// Remove the binding `token` proves, restoring the previous one.
    ///
    /// The token must belong to the most recent binding of this registry.
    pub fn pop(&self, token: RegistryToken) -> LawfulResult<()> {
        let mut stack = self.stack.borrow_mut();
        let depth = stack.len();
        match stack.iter().rposition(|binding| binding.id == token.id) {
            Some(index) if index + 1 == depth => {
                if let Some(binding) = stack.pop() {
                    debug!(key = %token.key, binding = %token.id, origin = %binding.origin, "Releasing generator");
                }
                Ok(())
            }
            Some(_) => {
                let top = &stack[depth - 1];
                Err(LawfulError::RegistryCorruption(format!(
                    "binding {} for {} released out of order; {} for {} is still on top",
                    token.id, token.key, top.id, top.key
                )))
            }
            None => Err(LawfulError::RegistryCorruption(format!(
                "binding {} for {} is not held by this registry",
                token.id, token.key
            ))),
        }
    }

    pub fn contains(&self, key: TypeKey) -> bool {
        let held = |layer: &RefCell<Vec<Binding>>| layer.borrow().iter().any(|binding| binding.key == key);
        held(&self.stack) || held(&self.base)
    }

    /// The visible factory for `key`, if any. Scoped bindings win over
    /// installed ones.
    pub fn lookup(&self, key: TypeKey) -> Option<GeneratorFactory> {
        let newest = |layer: &RefCell<Vec<Binding>>| {
            layer
                .borrow()
                .iter()
                .rev()
                .find(|binding| binding.key == key)
                .map(|binding| binding.factory.clone())
        };
        newest(&self.stack).or_else(|| newest(&self.base))
    }

    /// Number of bindings across both layers.
    pub fn len(&self) -> usize {
        self.base.borrow().len() + self.stack.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.borrow().is_empty() && self.stack.borrow().is_empty()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let base = self.base.borrow();
        let stack = self.stack.borrow();
        RegistrySnapshot {
            bindings: base
                .iter()
                .chain(stack.iter())
                .map(|binding| (binding.key, binding.id))
                .collect(),
        }
    }

    /// A generator for `ty` under the current bindings.
    pub fn resolve(&self, ty: &Ty) -> LawfulResult<BoxedStrategy<Drawn>> {
        let depth = self.depth.get();
        if depth >= MAX_RESOLUTION_DEPTH {
            return Err(LawfulError::construction(
                ty.to_string(),
                format!("type resolution nested deeper than {}", MAX_RESOLUTION_DEPTH),
            ));
        }
        self.depth.set(depth + 1);
        let _guard = DepthGuard {
            depth: &self.depth,
            restore: depth,
        };
        self.resolve_at_depth(ty)
    }

    /// Generators for several types, drawn together in order.
    pub fn resolve_all(&self, types: &[Ty]) -> LawfulResult<BoxedStrategy<Vec<Drawn>>> {
        let strategies = types
            .iter()
            .map(|ty| self.resolve(ty))
            .collect::<LawfulResult<Vec<_>>>()?;
        Ok(sequence(strategies))
    }

    fn resolve_at_depth(&self, ty: &Ty) -> LawfulResult<BoxedStrategy<Drawn>> {
        if let Ty::Optional(inner) = ty {
            let inner = self.resolve(inner)?;
            return Ok(prop_oneof![Just(None::<Drawn>), inner.prop_map(Some)]
                .prop_map(Drawn::new)
                .boxed());
        }
        let Some(key) = ty.key() else {
            return Err(LawfulError::Unresolvable(ty.to_string()));
        };
        // Clone the factory out so no borrow is held while it resolves
        // nested types, possibly through this same registry.
        let factory = self
            .lookup(key)
            .ok_or_else(|| LawfulError::Unresolvable(format!("{} ({})", ty, key)))?;
        trace!(ty = %ty, %key, "Resolving type");
        factory(ty, self)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base.borrow();
        let stack = self.stack.borrow();
        f.debug_list()
            .entries(
                base.iter()
                    .chain(stack.iter())
                    .map(|binding| format!("{} {} <- {}", binding.id, binding.key, binding.origin)),
            )
            .finish()
    }
}

/// Draw every strategy in order into one vector.
pub fn sequence(strategies: Vec<BoxedStrategy<Drawn>>) -> BoxedStrategy<Vec<Drawn>> {
    strategies
        .into_iter()
        .fold(Just(Vec::new()).boxed(), |drawn, next| {
            (drawn, next)
                .prop_map(|(mut values, value)| {
                    values.push(value);
                    values
                })
                .boxed()
        })
}
