// docstream-contract/src/expectation.rs
// ============================================================================
// Module: Response Expectations
// Description: Per-operation predicates over decoded JSON response payloads.
// Purpose: Judge pass/fail per fixture with fixture-naming messages.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Each operation has a pure predicate over `(fixture, payload)` producing a
//! verdict with a human-readable message. Failure messages name the fixture
//! and the expected vs. observed condition so a failing run enumerates every
//! broken fixture.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::fixture::ReportFixture;
use crate::operation::Operation;

// ============================================================================
// SECTION: Verdict Types
// ============================================================================

/// Boolean verdict plus the message used as assertion failure text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// True when the payload met the operation's expectation.
    pub passed: bool,
    /// Human-readable outcome description.
    pub message: String,
}

impl Verdict {
    /// Builds a passing verdict.
    fn pass(message: String) -> Self {
        Self {
            passed: true,
            message,
        }
    }

    /// Builds a failing verdict.
    fn fail(message: String) -> Self {
        Self {
            passed: false,
            message,
        }
    }
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Returns the exact confirmation string the queue operation must echo.
#[must_use]
pub fn queue_confirmation(fixture: &ReportFixture) -> String {
    format!(
        "Added {} {} to the Text Processing Queue.",
        fixture.patient_id, fixture.document_id
    )
}

/// Evaluates the operation's expectation against a decoded JSON payload.
#[must_use]
pub fn evaluate(operation: Operation, fixture: &ReportFixture, payload: &Value) -> Verdict {
    match operation {
        Operation::SummarizeDoc => expect_id(operation, fixture, payload, &fixture.document_id),
        Operation::SummarizePatientDoc | Operation::SummarizePatient => {
            expect_id(operation, fixture, payload, &fixture.patient_id)
        }
        Operation::QueuePatientDoc => expect_queue_confirmation(fixture, payload),
    }
}

/// Checks that `payload.id` is present and equals the expected identifier.
fn expect_id(
    operation: Operation,
    fixture: &ReportFixture,
    payload: &Value,
    expected: &str,
) -> Verdict {
    match payload.get("id").and_then(Value::as_str) {
        Some(observed) if observed == expected => {
            Verdict::pass(format!("{operation}: {} summarized", fixture.label()))
        }
        Some(observed) => Verdict::fail(format!(
            "{operation}: fixture {} expected id `{expected}`, observed `{observed}`",
            fixture.label()
        )),
        None => Verdict::fail(format!(
            "{operation}: fixture {} expected id `{expected}`, payload has no string `id` key",
            fixture.label()
        )),
    }
}

/// Checks the queue response: `name` key present and `value` matching the
/// exact confirmation string.
fn expect_queue_confirmation(fixture: &ReportFixture, payload: &Value) -> Verdict {
    let operation = Operation::QueuePatientDoc;
    if payload.get("name").is_none() {
        return Verdict::fail(format!(
            "{operation}: fixture {} response has no `name` key",
            fixture.label()
        ));
    }
    let expected = queue_confirmation(fixture);
    match payload.get("value").and_then(Value::as_str) {
        Some(observed) if observed == expected => {
            Verdict::pass(format!("{operation}: {} queued up", fixture.label()))
        }
        Some(observed) => Verdict::fail(format!(
            "{operation}: fixture {} expected value `{expected}`, observed `{observed}`",
            fixture.label()
        )),
        None => Verdict::fail(format!(
            "{operation}: fixture {} expected value `{expected}`, payload has no string `value` key",
            fixture.label()
        )),
    }
}
