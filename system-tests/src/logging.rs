// system-tests/src/logging.rs
// ============================================================================
// Module: Test Logging
// Description: Tracing subscriber setup for system-test binaries.
// Purpose: Route harness diagnostics through an env-filtered subscriber.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! Test binaries opt into harness diagnostics with `RUST_LOG` (for example
//! `RUST_LOG=system_tests=debug,docstream_contract=debug`). Initialization is
//! idempotent so every test can call it without coordinating.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Initialization
// ============================================================================

/// Initializes the env-filtered tracing subscriber for tests.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
