// docstream-contract/src/lib.rs
// ============================================================================
// Module: DocStream Contract Library
// Description: Canonical contract definitions for the DocStream REST API.
// Purpose: Provide fixtures, operations, requests, and response expectations.
// Dependencies: serde, serde_json, thiserror, toml, url
// ============================================================================

//! ## Overview
//! The contract library defines the verifiable contract of the DocStream
//! summarization and queueing service: how report fixtures are derived from
//! configuration, how each remote operation's request is constructed, and
//! which response payloads count as conforming. The `system-tests` harness
//! drives these definitions against a running service.
//!
//! Invariants:
//! - Fixtures and configuration are immutable once resolved.
//! - Request construction fails closed before any network activity.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod expectation;
pub mod fixture;
pub mod operation;
pub mod request;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::HarnessConfig;
pub use config::ReportEntry;
pub use expectation::Verdict;
pub use expectation::evaluate;
pub use expectation::queue_confirmation;
pub use fixture::FixtureError;
pub use fixture::ReportFixture;
pub use operation::HttpMethod;
pub use operation::Operation;
pub use request::RequestDescriptor;
pub use request::RequestError;
pub use request::build_request;
