// docstream-contract/src/fixture.rs
// ============================================================================
// Module: Report Fixtures
// Description: Patient/document fixtures derived from configured report paths.
// Purpose: Resolve declarative report entries into typed identifiers.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Each configured report entry names a relative path of the shape
//! `<root>/<patient_id>/<document_id>`. The resolver takes the second and
//! third segments as the patient and document identifiers. Paths that do not
//! carry both identifiers fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Fixture Types
// ============================================================================

/// One (patient, document) pair plus its source path, resolved from a single
/// configured report entry. Immutable for the duration of a test invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportFixture {
    /// Patient identifier (second path segment).
    pub patient_id: String,
    /// Document identifier (third path segment).
    pub document_id: String,
    /// Relative source path as declared in configuration.
    pub source_path: String,
}

impl ReportFixture {
    /// Resolves a fixture from a configured relative report path.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when the path has fewer than three segments
    /// or when the patient or document segment is empty.
    pub fn from_report_path(report_path: &str) -> Result<Self, FixtureError> {
        let segments: Vec<&str> = report_path.split('/').collect();
        if segments.len() < 3 {
            return Err(FixtureError::MalformedPath(report_path.to_string()));
        }
        let patient_id = segments[1];
        let document_id = segments[2];
        if patient_id.is_empty() || document_id.is_empty() {
            return Err(FixtureError::EmptySegment(report_path.to_string()));
        }
        Ok(Self {
            patient_id: patient_id.to_string(),
            document_id: document_id.to_string(),
            source_path: report_path.to_string(),
        })
    }

    /// Returns a short `patient/document` label for diagnostics.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.patient_id, self.document_id)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while resolving a report path into a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// Path carries fewer than `<root>/<patient>/<document>` segments.
    #[error("malformed report path `{0}`: expected <root>/<patient>/<document>")]
    MalformedPath(String),
    /// Patient or document segment is present but empty.
    #[error("malformed report path `{0}`: empty patient or document segment")]
    EmptySegment(String),
}
