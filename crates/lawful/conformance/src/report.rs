//! Law run reporting.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LawFailure;

/// Outcome of one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Passed,
    Failed,
    Skipped,
}

/// Result of one law case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub name: String,
    pub interface: String,
    pub law: String,
    pub status: CaseStatus,
    pub duration: Duration,
    /// Failure message, for failed cases.
    pub failure: Option<String>,
    /// Minimal failing input, for violated laws.
    pub counterexample: Option<String>,
    /// Why the case did not run, for skipped cases.
    pub skip_reason: Option<String>,
}

impl CaseResult {
    pub fn passed(
        name: impl Into<String>,
        interface: impl Into<String>,
        law: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            interface: interface.into(),
            law: law.into(),
            status: CaseStatus::Passed,
            duration,
            failure: None,
            counterexample: None,
            skip_reason: None,
        }
    }

    pub fn failed(
        name: impl Into<String>,
        interface: impl Into<String>,
        law: impl Into<String>,
        failure: &LawFailure,
        duration: Duration,
    ) -> Self {
        Self {
            status: CaseStatus::Failed,
            failure: Some(failure.to_string()),
            counterexample: failure.counterexample().map(String::from),
            ..Self::passed(name, interface, law, duration)
        }
    }

    pub fn skipped(
        name: impl Into<String>,
        interface: impl Into<String>,
        law: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            status: CaseStatus::Skipped,
            skip_reason: Some(reason.into()),
            ..Self::passed(name, interface, law, Duration::ZERO)
        }
    }
}

/// Report summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub lawful: bool,
}

/// Everything one run of a law suite produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawReport {
    pub run_id: Uuid,
    pub container: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub results: Vec<CaseResult>,
    pub summary: ReportSummary,
}

impl LawReport {
    /// Build a report and compute its summary.
    pub fn from_results(
        container: impl Into<String>,
        results: Vec<CaseResult>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let count = |status| results.iter().filter(|r| r.status == status).count();
        let summary = ReportSummary {
            total: results.len(),
            passed: count(CaseStatus::Passed),
            failed: count(CaseStatus::Failed),
            skipped: count(CaseStatus::Skipped),
            lawful: count(CaseStatus::Failed) == 0,
        };
        Self {
            run_id: Uuid::new_v4(),
            container: container.into(),
            started_at,
            completed_at,
            results,
            summary,
        }
    }

    /// No case failed. Skipped cases do not count against the container.
    pub fn is_lawful(&self) -> bool {
        self.summary.lawful
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|r| r.status == CaseStatus::Failed)
    }

    pub fn result(&self, name: &str) -> Option<&CaseResult> {
        self.results.iter().find(|r| r.name == name)
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }

    /// Generate a text report
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str("╔════════════════════════════════════════════════════════════╗\n");
        output.push_str("║  Law Verification Report                                   ║\n");
        output.push_str("╠════════════════════════════════════════════════════════════╣\n");
        output.push_str(&format!("║  Container: {:<46} ║\n", self.container));
        output.push_str(&format!("║  Run: {:<52} ║\n", self.run_id));
        output.push_str(&format!(
            "║  Started: {:<48} ║\n",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!(
            "║  Duration: {:<47} ║\n",
            format!("{}ms", self.elapsed().num_milliseconds())
        ));
        output.push_str("╠════════════════════════════════════════════════════════════╣\n");
        output.push_str(&format!(
            "║  Total: {:<4} Passed: {:<4} Failed: {:<4} Skipped: {:<7} ║\n",
            self.summary.total, self.summary.passed, self.summary.failed, self.summary.skipped
        ));
        output.push_str(&format!(
            "║  Status: {:<49} ║\n",
            if self.is_lawful() { "LAWFUL" } else { "NOT LAWFUL" }
        ));
        output.push_str("╚════════════════════════════════════════════════════════════╝\n");

        for result in &self.results {
            let mark = match result.status {
                CaseStatus::Passed => "✓",
                CaseStatus::Failed => "✗",
                CaseStatus::Skipped => "○",
            };
            output.push_str(&format!("  {} {} ({:?})\n", mark, result.name, result.duration));
            if let Some(failure) = &result.failure {
                output.push_str(&format!("      {}\n", failure));
            }
            if let Some(reason) = &result.skip_reason {
                output.push_str(&format!("      skipped: {}\n", reason));
            }
        }
        output
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
