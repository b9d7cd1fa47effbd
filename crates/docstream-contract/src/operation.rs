// docstream-contract/src/operation.rs
// ============================================================================
// Module: Remote Operations
// Description: The four DocStream REST operations and their request shapes.
// Purpose: Provide method, endpoint path, and body policy per operation.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every remote action the harness exercises is one of four fixed operations.
//! Each variant carries its HTTP method, its endpoint-path template, and
//! whether the source document is sent as the request body. URL construction
//! strips trailing separators from the base URL so configured bases with and
//! without a trailing slash produce identical request URLs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;

use crate::fixture::ReportFixture;

// ============================================================================
// SECTION: Operation Types
// ============================================================================

/// HTTP method used by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP PUT.
    Put,
}

impl HttpMethod {
    /// Returns the canonical method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
        }
    }
}

/// One of the four remote operations exercised by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    /// Summarize a single document.
    SummarizeDoc,
    /// Summarize a single document in the context of a patient.
    SummarizePatientDoc,
    /// Enqueue a document for asynchronous processing.
    QueuePatientDoc,
    /// Summarize all processed documents for a patient.
    SummarizePatient,
}

impl Operation {
    /// All operations in scenario order.
    pub const ALL: [Self; 4] = [
        Self::SummarizeDoc,
        Self::SummarizePatientDoc,
        Self::QueuePatientDoc,
        Self::SummarizePatient,
    ];

    /// Returns the endpoint name as it appears in request URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SummarizeDoc => "summarizeDoc",
            Self::SummarizePatientDoc => "summarizePatientDoc",
            Self::QueuePatientDoc => "queuePatientDoc",
            Self::SummarizePatient => "summarizePatient",
        }
    }

    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::SummarizeDoc | Self::SummarizePatient => HttpMethod::Get,
            Self::SummarizePatientDoc | Self::QueuePatientDoc => HttpMethod::Put,
        }
    }

    /// Returns true when the operation sends the source document as its body.
    #[must_use]
    pub const fn sends_document_body(self) -> bool {
        match self {
            Self::SummarizeDoc | Self::SummarizePatientDoc | Self::QueuePatientDoc => true,
            Self::SummarizePatient => false,
        }
    }

    /// Builds the endpoint path for a fixture, without the base URL.
    #[must_use]
    pub fn endpoint_path(self, fixture: &ReportFixture) -> String {
        match self {
            Self::SummarizeDoc => format!("summarizeDoc/doc/{}", fixture.document_id),
            Self::SummarizePatientDoc => format!(
                "summarizePatientDoc/patient/{}/doc/{}",
                fixture.patient_id, fixture.document_id
            ),
            Self::QueuePatientDoc => format!(
                "queuePatientDoc/patient/{}/doc/{}",
                fixture.patient_id, fixture.document_id
            ),
            Self::SummarizePatient => format!("summarizePatient/patient/{}", fixture.patient_id),
        }
    }

    /// Builds the full request URL for a fixture against a base URL.
    ///
    /// Trailing separators on the base URL are stripped before joining, so
    /// `http://x/api` and `http://x/api/` yield the same result.
    #[must_use]
    pub fn target_url(self, base_url: &str, fixture: &ReportFixture) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.endpoint_path(fixture))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
