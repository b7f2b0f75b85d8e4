//! Settings threaded into every generated law check.

use std::collections::BTreeMap;

use proptest::test_runner::Config;
use serde::{Deserialize, Serialize};

use crate::error::{LawfulError, LawfulResult};

/// Tag attached to every generated case unless overridden.
pub const DEFAULT_TAG: &str = "lawful";

/// Engine keys understood by [`EngineOptions::to_config`].
pub const ENGINE_KEYS: &[&str] = &[
    "cases",
    "max_local_rejects",
    "max_global_rejects",
    "max_flat_map_regens",
    "max_shrink_iters",
    "max_shrink_time",
    "verbose",
];

/// Opaque property-engine options, `key -> JSON value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngineOptions(BTreeMap<String, serde_json::Value>);

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Translate into a proptest configuration.
    ///
    /// Starts from `Config::default()` (which honours `PROPTEST_*`
    /// environment variables) with regression files disabled.
    pub fn to_config(&self) -> LawfulResult<Config> {
        let mut config = Config {
            failure_persistence: None,
            ..Config::default()
        };

        for (key, value) in &self.0 {
            let slot = match key.as_str() {
                "cases" => &mut config.cases,
                "max_local_rejects" => &mut config.max_local_rejects,
                "max_global_rejects" => &mut config.max_global_rejects,
                "max_flat_map_regens" => &mut config.max_flat_map_regens,
                "max_shrink_iters" => &mut config.max_shrink_iters,
                "max_shrink_time" => &mut config.max_shrink_time,
                "verbose" => &mut config.verbose,
                _ => return Err(invalid(key, "unknown engine setting")),
            };
            let n = value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| {
                    invalid(key, format!("expected an unsigned 32-bit integer, got {}", value))
                })?;
            if key == "cases" && n == 0 {
                return Err(invalid(key, "at least one case is required"));
            }
            *slot = n;
        }

        Ok(config)
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> LawfulError {
    LawfulError::InvalidSetting {
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Settings for one verification run. Immutable once handed to
/// `verify_laws`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawSettings {
    /// Property-engine options.
    pub engine: EngineOptions,
    /// Allow generating containers through their raw constructor.
    pub use_raw_construction: bool,
    /// Tags attached to every generated case.
    pub tags: Vec<String>,
}

impl Default for LawSettings {
    fn default() -> Self {
        Self {
            engine: EngineOptions::default(),
            use_raw_construction: false,
            tags: vec![DEFAULT_TAG.to_string()],
        }
    }
}

impl LawSettings {
    /// Default settings with a fixed number of cases per law.
    pub fn with_cases(cases: u32) -> Self {
        Self {
            engine: EngineOptions::new().set("cases", cases),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> LawfulResult<Self> {
        serde_json::from_str(json).map_err(|err| invalid("<settings>", err.to_string()))
    }
}
