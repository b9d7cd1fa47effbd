// system-tests/src/client.rs
// ============================================================================
// Module: DocStream HTTP Client
// Description: Transport for executing contract request descriptors.
// Purpose: Issue harness requests over HTTP and decode JSON payloads.
// Dependencies: docstream-contract, reqwest, serde_json
// ============================================================================

//! ## Overview
//! Thin wrapper over `reqwest` that executes a [`RequestDescriptor`] exactly
//! as specified: method, URL, bearer Authorization header, optional
//! `text/plain` content type, optional UTF-8 body bytes. Responses with a
//! non-2xx status are rejected before JSON interpretation so an error body
//! can never satisfy a validator predicate. No retries; the harness assumes
//! a reachable, already-running service.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use docstream_contract::HttpMethod;
use docstream_contract::RequestDescriptor;
use reqwest::Client;
use reqwest::Method;
use serde_json::Value;

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client for the DocStream service under test.
#[derive(Debug, Clone)]
pub struct DocStreamClient {
    /// Underlying reqwest client with a fixed timeout.
    client: Client,
}

impl DocStreamClient {
    /// Creates a new client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;
        Ok(Self {
            client,
        })
    }

    /// Executes a request descriptor and decodes the JSON response payload.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, a non-2xx status, or a
    /// response body that is not valid JSON.
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<Value, String> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
        };
        let mut http_request = self
            .client
            .request(method, &request.url)
            .header(reqwest::header::AUTHORIZATION, request.authorization_value());
        if let Some(content_type) = request.content_type {
            http_request = http_request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(body) = &request.body {
            http_request = http_request.body(body.clone());
        }

        let response = http_request
            .send()
            .await
            .map_err(|err| format!("http request to {} failed: {err}", request.url))?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("http status {status} for {}", request.url));
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| format!("response from {} is not valid json: {err}", request.url))
    }
}
