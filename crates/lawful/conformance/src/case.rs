//! Law cases: one named, runnable property check per container law.

use std::fmt;
use std::rc::Rc;

use proptest::test_runner::{Config, TestCaseError, TestError, TestRunner};
use tracing::{debug, error};

use lawful_strategy::{bind_container, bind_default_container, TypeRegistry};
use lawful_types::{
    Args, ContainerDescriptor, ContainerId, InterfaceId, Law, LawSettings, LawfulError,
    LawfulResult, Lawful,
};

use crate::environment::check_environment;
use crate::error::LawFailure;

type Check = Rc<dyn Fn() -> Result<(), LawFailure>>;

/// A named property check for one law of one container.
#[derive(Clone)]
pub struct LawCase {
    name: String,
    container: ContainerId,
    interface: InterfaceId,
    law: &'static str,
    tags: Vec<String>,
    cases: u32,
    check: Check,
}

impl LawCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn container(&self) -> ContainerId {
        self.container
    }

    pub fn interface(&self) -> InterfaceId {
        self.interface
    }

    pub fn law(&self) -> &'static str {
        self.law
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of passing inputs the property engine requires.
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Run the property check.
    pub fn run(&self) -> Result<(), LawFailure> {
        (self.check)()
    }
}

impl fmt::Debug for LawCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LawCase")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("cases", &self.cases)
            .finish()
    }
}

/// `test_<container>_<interface>_<law>`, lowercased, with anything that is
/// not ASCII alphanumeric turned into `_`.
pub fn case_name(container: ContainerId, interface: InterfaceId, law: &str) -> String {
    let raw = format!("test_{}_{}_{}", container, interface, law);
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Build the case checking `law` of `interface` for the container `C`.
///
/// Every argument type of the law is resolved once under the same scopes the
/// check will use, so a law that cannot be generated fails here instead of
/// producing a case that can never pass.
pub fn build_case<C: Lawful>(
    registry: &Rc<TypeRegistry>,
    descriptor: &Rc<ContainerDescriptor>,
    interface: InterfaceId,
    law: &Law,
    settings: &Rc<LawSettings>,
    config: &Config,
) -> LawfulResult<LawCase> {
    let name = case_name(descriptor.id(), interface, law.name());
    dry_resolve(registry, descriptor, law, settings)?;
    debug!(case = %name, params = law.params().len(), "Law case built");

    let check: Check = {
        let registry = Rc::clone(registry);
        let descriptor = Rc::clone(descriptor);
        let settings = Rc::clone(settings);
        let law = law.clone();
        let config = config.clone();
        let name = name.clone();
        Rc::new(move || {
            run_case::<C>(&name, &registry, &descriptor, &law, &settings, &config)
        })
    };

    Ok(LawCase {
        name,
        container: descriptor.id(),
        interface,
        law: law.name(),
        tags: settings.tags.clone(),
        cases: config.cases,
        check,
    })
}

fn dry_resolve(
    registry: &TypeRegistry,
    descriptor: &ContainerDescriptor,
    law: &Law,
    settings: &LawSettings,
) -> LawfulResult<()> {
    let container = bind_container(registry, descriptor, settings)?;
    let defaults = bind_default_container(registry, descriptor, settings)?;
    let resolved = registry.resolve_all(law.params()).map(drop);
    defaults.close()?;
    container.close()?;
    resolved
}

fn run_case<C: Lawful>(
    name: &str,
    registry: &TypeRegistry,
    descriptor: &ContainerDescriptor,
    law: &Law,
    settings: &LawSettings,
    config: &Config,
) -> Result<(), LawFailure> {
    check_environment::<C>(descriptor)?;
    let before = registry.snapshot();
    let outcome = run_scoped(registry, descriptor, law, settings, config);
    if registry.snapshot() != before {
        error!(case = %name, "Registry not restored after law check");
        return Err(LawfulError::RegistryCorruption(format!(
            "bindings changed while running `{}`",
            name
        ))
        .into());
    }
    if let Err(failure) = &outcome {
        error!(case = %name, %failure, "Law check failed");
    }
    outcome
}

fn run_scoped(
    registry: &TypeRegistry,
    descriptor: &ContainerDescriptor,
    law: &Law,
    settings: &LawSettings,
    config: &Config,
) -> Result<(), LawFailure> {
    let container = bind_container(registry, descriptor, settings)?;
    let defaults = bind_default_container(registry, descriptor, settings)?;
    let arguments = registry.resolve_all(law.params())?;

    let mut runner = TestRunner::new(config.clone());
    let result = runner.run(&arguments, |values| {
        law.evaluate(&mut Args::new(values))
            .map_err(|violation| TestCaseError::fail(violation.to_string()))
    });

    defaults.close()?;
    container.close()?;
    match result {
        Ok(()) => Ok(()),
        Err(TestError::Fail(reason, values)) => Err(LawFailure::Violation {
            reason: reason.to_string(),
            counterexample: format!("{:?}", values),
        }),
        Err(TestError::Abort(reason)) => Err(LawFailure::Aborted(reason.to_string())),
    }
}
