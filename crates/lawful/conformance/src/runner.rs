//! Sequential execution of law suites.

use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};

use crate::config::SuiteConfig;
use crate::report::{CaseResult, LawReport};
use crate::suite::LawSuite;

/// Runs the cases of a suite one after another.
#[derive(Debug, Clone, Default)]
pub struct LawRunner {
    config: SuiteConfig,
}

impl LawRunner {
    /// A runner that runs every case and never stops early.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SuiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Run `suite` and report every case, run or skipped.
    pub fn run(&self, suite: &LawSuite) -> LawReport {
        let started_at = Utc::now();
        let mut results = Vec::with_capacity(suite.len());
        let mut stopped = false;

        for case in suite {
            let interface = case.interface().to_string();
            if stopped {
                results.push(CaseResult::skipped(
                    case.name(),
                    interface,
                    case.law(),
                    "an earlier case failed",
                ));
                continue;
            }
            if let Some(reason) = self.config.skip_reason(case.name(), case.tags()) {
                warn!(case = case.name(), %reason, "Skipping law case");
                results.push(CaseResult::skipped(case.name(), interface, case.law(), reason));
                continue;
            }

            let start = Instant::now();
            let outcome = case.run();
            let duration = start.elapsed();
            match outcome {
                Ok(()) => {
                    results.push(CaseResult::passed(case.name(), interface, case.law(), duration))
                }
                Err(failure) => {
                    results.push(CaseResult::failed(
                        case.name(),
                        interface,
                        case.law(),
                        &failure,
                        duration,
                    ));
                    stopped = self.config.fail_fast;
                }
            }
        }

        let report = LawReport::from_results(
            suite.container().to_string(),
            results,
            started_at,
            Utc::now(),
        );
        info!(
            container = %suite.container(),
            run_id = %report.run_id,
            passed = report.summary.passed,
            failed = report.summary.failed,
            skipped = report.summary.skipped,
            "Law suite finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use lawful_strategy::TypeRegistry;
    use lawful_types::{
        check, check_eq, Args, ContainerDescriptor, ContainerId, InterfaceDescriptor, InterfaceId,
        Law, LawSettings, Lawful, Ty, Value, Verdict,
    };

    use crate::report::CaseStatus;
    use crate::suite::verify_laws;

    #[derive(Debug, Clone, PartialEq)]
    struct Tally(Value);

    const CHECKS: InterfaceId = InterfaceId::new("Checks");

    fn holds(_: &mut Args) -> Verdict {
        check(true, "always")
    }

    fn never_unit(args: &mut Args) -> Verdict {
        let tally: Tally = args.next()?;
        check_eq(&tally.0.kind(), &"int", "tally holds an int")
    }

    impl Lawful for Tally {
        fn descriptor() -> ContainerDescriptor {
            let checks = InterfaceDescriptor::new(CHECKS)
                .law(Law::new("first", [], holds))
                .law(Law::new("broken", [Ty::interface(CHECKS)], never_unit))
                .law(Law::new("last", [], holds));
            ContainerDescriptor::builder::<Tally>(ContainerId::new("Tally"))
                .implements(checks)
                .from_success(|_| Tally(Value::Unit))
                .build()
        }
    }

    fn suite() -> LawSuite {
        let registry = Rc::new(TypeRegistry::with_defaults());
        verify_laws::<Tally>(&registry, LawSettings::with_cases(8)).unwrap()
    }

    fn statuses(report: &LawReport) -> Vec<CaseStatus> {
        report.results.iter().map(|r| r.status).collect()
    }

    #[test]
    fn runs_every_case_by_default() {
        let report = LawRunner::new().run(&suite());
        assert_eq!(
            statuses(&report),
            vec![CaseStatus::Passed, CaseStatus::Failed, CaseStatus::Passed]
        );
        assert!(!report.is_lawful());
        let failed = report.result("test_tally_checks_broken").unwrap();
        assert!(failed.counterexample.as_deref().unwrap().contains("Tally(Unit)"));
    }

    #[test]
    fn fail_fast_skips_the_rest() {
        let runner = LawRunner::with_config(SuiteConfig {
            fail_fast: true,
            ..SuiteConfig::default()
        });
        let report = runner.run(&suite());
        assert_eq!(
            statuses(&report),
            vec![CaseStatus::Passed, CaseStatus::Failed, CaseStatus::Skipped]
        );
    }

    #[test]
    fn filter_and_skip_tags() {
        let filtered = LawRunner::with_config(SuiteConfig {
            name_filter: Some("first".into()),
            ..SuiteConfig::default()
        })
        .run(&suite());
        assert_eq!(filtered.summary.passed, 1);
        assert_eq!(filtered.summary.skipped, 2);
        assert!(filtered.is_lawful());

        let tagged = LawRunner::with_config(SuiteConfig {
            skip_tags: vec!["lawful".into()],
            ..SuiteConfig::default()
        })
        .run(&suite());
        assert_eq!(tagged.summary.skipped, 3);
    }
}
