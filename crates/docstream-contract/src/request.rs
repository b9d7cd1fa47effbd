// docstream-contract/src/request.rs
// ============================================================================
// Module: Request Construction
// Description: Fully specified request descriptors for harness operations.
// Purpose: Build method, URL, headers, and body bytes per operation/fixture.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A request descriptor is everything the transport needs: method, target
//! URL, bearer token, optional content type, and optional body bytes. Body
//! bytes are the fixture's source document, read from the document root with
//! strict UTF-8 validation so multi-byte text is never mangled by a fallback
//! encoding. Missing or non-UTF-8 documents fail closed before any network
//! call is attempted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;

use thiserror::Error;

use crate::config::HarnessConfig;
use crate::fixture::ReportFixture;
use crate::operation::HttpMethod;
use crate::operation::Operation;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Content type sent with document bodies.
pub const DOCUMENT_CONTENT_TYPE: &str = "text/plain";
/// Authorization scheme for the bearer token header.
pub const AUTH_SCHEME: &str = "Bearer";

// ============================================================================
// SECTION: Request Types
// ============================================================================

/// A fully specified HTTP request, independent of the transport in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: HttpMethod,
    /// Full target URL.
    pub url: String,
    /// Bearer token for the Authorization header.
    pub bearer_token: String,
    /// Content type, present exactly when a body is sent.
    pub content_type: Option<&'static str>,
    /// UTF-8 body bytes, present exactly when the operation sends one.
    pub body: Option<Vec<u8>>,
}

impl RequestDescriptor {
    /// Returns the Authorization header value.
    ///
    /// The single space between scheme and token is load-bearing.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("{AUTH_SCHEME} {}", self.bearer_token)
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builds the request descriptor for one operation against one fixture.
///
/// Operations that send a body read the fixture's source document from the
/// configured document root.
///
/// # Errors
///
/// Returns [`RequestError`] when the source document is missing, unreadable,
/// or not valid UTF-8.
pub fn build_request(
    config: &HarnessConfig,
    operation: Operation,
    fixture: &ReportFixture,
) -> Result<RequestDescriptor, RequestError> {
    let body = if operation.sends_document_body() {
        Some(read_document(config, fixture)?)
    } else {
        None
    };
    let content_type = body.as_ref().map(|_| DOCUMENT_CONTENT_TYPE);
    Ok(RequestDescriptor {
        method: operation.method(),
        url: operation.target_url(&config.base_url, fixture),
        bearer_token: config.auth_token.clone(),
        content_type,
        body,
    })
}

/// Reads a fixture's source document and enforces UTF-8 validity.
fn read_document(config: &HarnessConfig, fixture: &ReportFixture) -> Result<Vec<u8>, RequestError> {
    let path = config.document_path(&fixture.source_path);
    let bytes = fs::read(&path).map_err(|err| RequestError::MissingSourceDocument {
        path: path.display().to_string(),
        detail: err.to_string(),
    })?;
    let text = String::from_utf8(bytes).map_err(|_| RequestError::InvalidEncoding {
        path: path.display().to_string(),
    })?;
    Ok(text.into_bytes())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while constructing a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Source document absent or unreadable.
    #[error("missing source document `{path}`: {detail}")]
    MissingSourceDocument {
        /// Resolved document path.
        path: String,
        /// Underlying I/O failure.
        detail: String,
    },
    /// Source document is not valid UTF-8.
    #[error("source document `{path}` is not valid utf-8")]
    InvalidEncoding {
        /// Resolved document path.
        path: String,
    },
}
