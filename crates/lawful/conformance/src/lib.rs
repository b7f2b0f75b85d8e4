//! # lawful-conformance
//!
//! Turns the laws a container declares into named, runnable property checks.
//!
//! [`verify_laws`] walks the container's capability chain and builds one
//! [`LawCase`] per law, named `test_<container>_<interface>_<law>`. Running a
//! case binds the container's generators into the registry, lets the
//! property engine draw the law's arguments and evaluate it, then restores
//! the registry. A violated law is reported with the engine's minimal
//! failing input.
//!
//! # Example
//!
//! ```rust,ignore
//! use lawful_conformance::{LawHarness, LawRunner, verify_laws};
//! use lawful_strategy::TypeRegistry;
//! use lawful_types::LawSettings;
//! use std::rc::Rc;
//!
//! let registry = Rc::new(TypeRegistry::with_defaults());
//! let suite = verify_laws::<Identity>(&registry, LawSettings::default())?;
//! let report = LawRunner::new().run(&suite);
//! println!("{}", report.to_text());
//!
//! // Or, from a test:
//! LawHarness::new().assert_lawful::<Identity>();
//! ```
//!
//! # Threading
//!
//! Registries, suites and cases are `!Send`. Build and run each suite on
//! the thread that owns its registry; separate test threads each use their
//! own registry.

#![deny(unsafe_code)]

pub mod case;
pub mod config;
pub mod environment;
pub mod error;
pub mod harness;
pub mod report;
pub mod runner;
pub mod suite;

pub use case::{build_case, case_name, LawCase};
pub use config::{SuiteConfig, FILTER_VAR, SKIP_TAGS_VAR};
pub use environment::check_environment;
pub use error::LawFailure;
pub use harness::LawHarness;
pub use report::{CaseResult, CaseStatus, LawReport, ReportSummary};
pub use runner::LawRunner;
pub use suite::{verify_laws, LawSuite};
