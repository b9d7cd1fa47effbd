// system-tests/src/lib.rs
// ============================================================================
// Module: DocStream System Tests Library
// Description: Shared client, runner, and configuration for system tests.
// Purpose: Provide common utilities for DocStream contract-test binaries.
// Dependencies: docstream-contract, reqwest, serde_json, tracing
// ============================================================================

//! ## Overview
//! This crate hosts the HTTP client, scenario runner, and shared
//! configuration used by the DocStream contract-test binaries in
//! `system-tests/tests`. Scenarios iterate the configured report fixtures
//! against a running service and accumulate per-fixture verdicts.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod logging;
pub mod runner;
