//! Test harness for checking containers from ordinary tests.

use std::rc::Rc;

use lawful_strategy::TypeRegistry;
use lawful_types::{LawSettings, LawfulResult, Lawful};

use crate::config::SuiteConfig;
use crate::report::LawReport;
use crate::runner::LawRunner;
use crate::suite::{verify_laws, LawSuite};

/// Builds and runs law suites against one registry.
pub struct LawHarness {
    registry: Rc<TypeRegistry>,
    settings: LawSettings,
    runner: LawRunner,
}

impl LawHarness {
    /// Default registry, default settings, suite selection from the environment.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(TypeRegistry::with_defaults()),
            settings: LawSettings::default(),
            runner: LawRunner::with_config(SuiteConfig::from_env()),
        }
    }

    pub fn with_settings(mut self, settings: LawSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_config(mut self, config: SuiteConfig) -> Self {
        self.runner = LawRunner::with_config(config);
        self
    }

    /// Use a caller-provided registry, for example one with extra bindings.
    pub fn with_registry(mut self, registry: Rc<TypeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &Rc<TypeRegistry> {
        &self.registry
    }

    /// Build the law suite of `C` without running it.
    pub fn suite<C: Lawful>(&self) -> LawfulResult<LawSuite> {
        verify_laws::<C>(&self.registry, self.settings.clone())
    }

    /// Build and run the law suite of `C`.
    pub fn check<C: Lawful>(&self) -> LawfulResult<LawReport> {
        let suite = self.suite::<C>()?;
        Ok(self.runner.run(&suite))
    }

    /// Build and run the law suite of `C`, panicking with the report if any
    /// law fails.
    ///
    /// # Panics
    ///
    /// If the suite cannot be built or a case fails.
    pub fn assert_lawful<C: Lawful>(&self) {
        let report = match self.check::<C>() {
            Ok(report) => report,
            Err(err) => panic!("cannot check laws of `{}`: {}", std::any::type_name::<C>(), err),
        };
        if !report.is_lawful() {
            panic!(
                "Container '{}' is not lawful:\n{}",
                report.container,
                report.to_text()
            );
        }
    }
}

impl Default for LawHarness {
    fn default() -> Self {
        Self::new()
    }
}
