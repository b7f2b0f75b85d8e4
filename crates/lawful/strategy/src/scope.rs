//! Scoped registry bindings.
//!
//! A scope owns the tokens of every binding it pushed and releases them in
//! reverse order when closed, or when dropped during a panic. Closing reports
//! corruption as an error; dropping a corrupted scope outside a panic panics.

use tracing::{debug, error};

use lawful_types::{ContainerDescriptor, LawSettings, LawfulResult, TypeKey};

use crate::container::container_generator;
use crate::functions::pure_functions;
use crate::registry::{GeneratorFactory, RegistryToken, TypeRegistry};
use crate::type_vars::self_equal_type_vars;

/// Bindings pushed onto one registry, released together.
#[must_use = "dropping a scope releases its bindings immediately"]
pub struct RegistryScope<'r> {
    registry: &'r TypeRegistry,
    label: String,
    tokens: Vec<RegistryToken>,
}

impl<'r> RegistryScope<'r> {
    pub fn new(registry: &'r TypeRegistry, label: impl Into<String>) -> Self {
        Self {
            registry,
            label: label.into(),
            tokens: Vec::new(),
        }
    }

    pub fn bind(&mut self, key: TypeKey, factory: GeneratorFactory, origin: impl Into<String>) {
        let token = self.registry.push(key, factory, origin);
        self.tokens.push(token);
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of bindings currently held.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Release every binding, most recent first.
    pub fn close(mut self) -> LawfulResult<()> {
        self.release()
    }

    fn release(&mut self) -> LawfulResult<()> {
        let mut first_error = None;
        while let Some(token) = self.tokens.pop() {
            if let Err(err) = self.registry.pop(token) {
                error!(scope = %self.label, error = %err, "Failed to release binding");
                first_error.get_or_insert(err);
            }
        }
        debug!(scope = %self.label, "Scope released");
        first_error.map_or(Ok(()), Err)
    }
}

impl Drop for RegistryScope<'_> {
    fn drop(&mut self) {
        if self.tokens.is_empty() {
            return;
        }
        if let Err(err) = self.release() {
            if std::thread::panicking() {
                error!(scope = %self.label, error = %err, "Registry left corrupted while unwinding");
            } else {
                panic!("{}", err);
            }
        }
    }
}

/// Bind the resolvers laws run under: self-equal type variables and pure
/// functions.
pub fn activate_resolvers(scope: &mut RegistryScope<'_>) {
    scope.bind(TypeKey::TypeVar, self_equal_type_vars(), "self-equal type variables");
    scope.bind(TypeKey::Function, pure_functions(), "pure functions");
}

/// Bind the container, its whole capability chain and the law resolvers.
///
/// The container's generator is synthesized before anything is pushed, so a
/// construction error leaves the registry untouched.
pub fn bind_container<'r>(
    registry: &'r TypeRegistry,
    descriptor: &ContainerDescriptor,
    settings: &LawSettings,
) -> LawfulResult<RegistryScope<'r>> {
    let factory = container_generator(descriptor, settings.use_raw_construction)?;
    let mut scope = RegistryScope::new(registry, format!("container {}", descriptor.id()));
    activate_resolvers(&mut scope);
    let origin = format!("{} generator", descriptor.id());
    for interface in descriptor.capability_chain() {
        scope.bind(TypeKey::Interface(interface.id()), factory.clone(), origin.clone());
    }
    scope.bind(TypeKey::Container(descriptor.id()), factory, origin);
    Ok(scope)
}

/// The law resolvers plus a container binding, unless one is already visible.
pub struct DefaultContainerScope<'r> {
    scope: RegistryScope<'r>,
    owns_binding: bool,
}

impl DefaultContainerScope<'_> {
    /// Whether this scope bound the container itself.
    pub fn owns_binding(&self) -> bool {
        self.owns_binding
    }

    pub fn close(self) -> LawfulResult<()> {
        self.scope.close()
    }
}

/// Bind the law resolvers, and the container only if nothing already binds
/// it. An existing binding, for instance a user-provided generator, wins and
/// is left in place on release.
pub fn bind_default_container<'r>(
    registry: &'r TypeRegistry,
    descriptor: &ContainerDescriptor,
    settings: &LawSettings,
) -> LawfulResult<DefaultContainerScope<'r>> {
    let key = TypeKey::Container(descriptor.id());
    let factory = if registry.contains(key) {
        None
    } else {
        Some(container_generator(descriptor, settings.use_raw_construction)?)
    };
    let mut scope = RegistryScope::new(registry, format!("default {}", descriptor.id()));
    activate_resolvers(&mut scope);
    let owns_binding = factory.is_some();
    if let Some(factory) = factory {
        scope.bind(key, factory, format!("default {} generator", descriptor.id()));
    }
    Ok(DefaultContainerScope {
        scope,
        owns_binding,
    })
}

/// Run `body` with [`bind_container`] in effect.
///
/// Corruption found while releasing takes precedence over `body`'s result.
pub fn with_container_bound<R>(
    registry: &TypeRegistry,
    descriptor: &ContainerDescriptor,
    settings: &LawSettings,
    body: impl FnOnce(&TypeRegistry) -> R,
) -> LawfulResult<R> {
    let scope = bind_container(registry, descriptor, settings)?;
    let result = body(registry);
    scope.close()?;
    Ok(result)
}

/// Run `body` with [`bind_default_container`] in effect.
pub fn with_default_container_bound<R>(
    registry: &TypeRegistry,
    descriptor: &ContainerDescriptor,
    settings: &LawSettings,
    body: impl FnOnce(&TypeRegistry) -> R,
) -> LawfulResult<R> {
    let scope = bind_default_container(registry, descriptor, settings)?;
    let result = body(registry);
    scope.close()?;
    Ok(result)
}
