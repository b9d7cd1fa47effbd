// system-tests/src/runner.rs
// ============================================================================
// Module: Scenario Runner
// Description: Runs one operation across all configured report fixtures.
// Purpose: Accumulate per-fixture verdicts into a scenario report.
// Dependencies: docstream-contract, serde, tracing
// ============================================================================

//! ## Overview
//! A scenario is the full run of one operation across the configured report
//! entries, in declaration order. Each fixture is processed independently:
//! resolve fixture, build request, execute via the transport, validate the
//! decoded payload. Failures are accumulated rather than short-circuited so
//! the report names every broken fixture.

// ============================================================================
// SECTION: Imports
// ============================================================================

use docstream_contract::HarnessConfig;
use docstream_contract::Operation;
use docstream_contract::ReportEntry;
use docstream_contract::ReportFixture;
use docstream_contract::build_request;
use docstream_contract::evaluate;
use serde::Serialize;

use crate::client::DocStreamClient;

// ============================================================================
// SECTION: Report Types
// ============================================================================

/// Outcome of one fixture under one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureOutcome {
    /// Configuration key of the report entry.
    pub key: String,
    /// Fixture label (`patient/document`), or the raw path when unresolved.
    pub label: String,
    /// True when the fixture met the operation's expectation.
    pub passed: bool,
    /// Verdict message or error description.
    pub detail: String,
}

/// Accumulated outcomes for one operation across all configured fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// Operation the scenario exercised.
    pub operation: Operation,
    /// Per-fixture outcomes in configuration order.
    pub outcomes: Vec<FixtureOutcome>,
}

impl ScenarioReport {
    /// Returns true when every fixture passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    /// Returns the failing outcomes in configuration order.
    #[must_use]
    pub fn failures(&self) -> Vec<&FixtureOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed).collect()
    }

    /// Renders a summary naming every failing fixture, or `None` when all
    /// fixtures passed.
    #[must_use]
    pub fn failure_summary(&self) -> Option<String> {
        let failures = self.failures();
        if failures.is_empty() {
            return None;
        }
        let lines: Vec<String> = failures
            .iter()
            .map(|outcome| format!("[{}] {}", outcome.key, outcome.detail))
            .collect();
        Some(format!("{} failing fixture(s): {}", failures.len(), lines.join("; ")))
    }
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Runs one operation across all configured report entries.
///
/// Fixture-level failures (malformed path, missing document, transport or
/// validation failure) are recorded in the report and never abort the
/// remaining fixtures.
pub async fn run_scenario(
    config: &HarnessConfig,
    operation: Operation,
    client: &DocStreamClient,
) -> ScenarioReport {
    let mut outcomes = Vec::with_capacity(config.reports.len());
    for entry in &config.reports {
        let outcome = run_fixture(config, operation, client, entry).await;
        if outcome.passed {
            tracing::debug!(operation = %operation, key = %outcome.key, "fixture passed");
        } else {
            tracing::warn!(
                operation = %operation,
                key = %outcome.key,
                detail = %outcome.detail,
                "fixture failed"
            );
        }
        outcomes.push(outcome);
    }
    ScenarioReport {
        operation,
        outcomes,
    }
}

/// Processes a single report entry through resolve, build, execute, validate.
async fn run_fixture(
    config: &HarnessConfig,
    operation: Operation,
    client: &DocStreamClient,
    entry: &ReportEntry,
) -> FixtureOutcome {
    let fixture = match ReportFixture::from_report_path(&entry.relative_path) {
        Ok(fixture) => fixture,
        Err(err) => {
            return FixtureOutcome {
                key: entry.key.clone(),
                label: entry.relative_path.clone(),
                passed: false,
                detail: err.to_string(),
            };
        }
    };
    let label = fixture.label();

    let request = match build_request(config, operation, &fixture) {
        Ok(request) => request,
        Err(err) => {
            return FixtureOutcome {
                key: entry.key.clone(),
                label,
                passed: false,
                detail: format!("{operation}: fixture {}: {err}", fixture.label()),
            };
        }
    };

    let payload = match client.execute(&request).await {
        Ok(payload) => payload,
        Err(err) => {
            return FixtureOutcome {
                key: entry.key.clone(),
                label,
                passed: false,
                detail: format!("{operation}: fixture {}: {err}", fixture.label()),
            };
        }
    };

    let verdict = evaluate(operation, &fixture, &payload);
    FixtureOutcome {
        key: entry.key.clone(),
        label,
        passed: verdict.passed,
        detail: verdict.message,
    }
}
