//! Runner configuration.

use serde::{Deserialize, Serialize};

/// Environment variable listing tags whose cases are skipped, comma separated.
pub const SKIP_TAGS_VAR: &str = "LAWFUL_SKIP_TAGS";
/// Environment variable holding a case-name substring to select.
pub const FILTER_VAR: &str = "LAWFUL_FILTER";

/// Which cases a [`crate::LawRunner`] runs, and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Cases carrying any of these tags are skipped.
    pub skip_tags: Vec<String>,

    /// Only cases whose name contains this substring run.
    pub name_filter: Option<String>,

    /// Stop after the first failing case.
    pub fail_fast: bool,
}

impl SuiteConfig {
    /// Defaults overridden by `LAWFUL_SKIP_TAGS` and `LAWFUL_FILTER`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SuiteConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let skip_tags = lookup(SKIP_TAGS_VAR)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        let name_filter = lookup(FILTER_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|filter| !filter.is_empty());
        Self {
            skip_tags,
            name_filter,
            fail_fast: false,
        }
    }

    /// Why a case with `name` and `tags` should not run, if it shouldn't.
    pub fn skip_reason(&self, name: &str, tags: &[String]) -> Option<String> {
        if let Some(tag) = tags.iter().find(|tag| self.skip_tags.contains(tag)) {
            return Some(format!("tag `{}` is skipped", tag));
        }
        match &self.name_filter {
            Some(filter) if !name.contains(filter.as_str()) => {
                Some(format!("name does not match filter `{}`", filter))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(SuiteConfig::from_lookup(lookup(&[])), SuiteConfig::default());
    }

    #[test]
    fn skip_tags_are_split_and_trimmed() {
        let config = SuiteConfig::from_lookup(lookup(&[(SKIP_TAGS_VAR, " lawful, slow ,,")]));
        assert_eq!(config.skip_tags, vec!["lawful".to_string(), "slow".to_string()]);
    }

    #[test]
    fn skip_reason_checks_tags_then_filter() {
        let config = SuiteConfig {
            skip_tags: vec!["slow".into()],
            name_filter: Some("mappable".into()),
            fail_fast: false,
        };
        let lawful = vec!["lawful".to_string()];
        assert!(config
            .skip_reason("test_box_mappable_identity", &lawful)
            .is_none());
        assert!(config
            .skip_reason("test_box_monad_left_identity", &lawful)
            .unwrap()
            .contains("filter"));
        assert!(config
            .skip_reason("test_box_mappable_identity", &["slow".to_string()])
            .unwrap()
            .contains("slow"));
    }

    #[test]
    fn blank_filter_is_ignored() {
        let config = SuiteConfig::from_lookup(lookup(&[(FILTER_VAR, "  ")]));
        assert!(config.name_filter.is_none());
    }
}
