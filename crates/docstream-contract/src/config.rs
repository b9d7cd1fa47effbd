// docstream-contract/src/config.rs
// ============================================================================
// Module: Harness Configuration
// Description: Configuration loading and validation for the contract harness.
// Purpose: Provide strict, fail-closed config parsing for tokens and reports.
// Dependencies: serde, toml, url
// ============================================================================

//! ## Overview
//! Configuration is loaded once from a TOML file with a `[TEST]` section
//! (auth token and base URL) and a `[REPORTS]` section mapping arbitrary keys
//! to relative report paths. Report declaration order is preserved. The
//! directory containing the config file becomes the document root against
//! which report paths are resolved. Missing or invalid configuration fails
//! closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Section holding the auth token and base URL.
const TEST_SECTION: &str = "TEST";
/// Section holding the report table.
const REPORTS_SECTION: &str = "REPORTS";

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// One configured report entry, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Configuration key for the entry.
    pub key: String,
    /// Relative report path (`<root>/<patient>/<document>`).
    pub relative_path: String,
}

/// Harness configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Bearer token shared read-only by all requests.
    pub auth_token: String,
    /// REST API base URL with trailing separators stripped.
    pub base_url: String,
    /// Directory against which relative report paths are resolved.
    pub document_root: PathBuf,
    /// Configured report entries in declaration order.
    pub reports: Vec<ReportEntry>,
}

/// Raw `[TEST]` section prior to validation.
#[derive(Debug, Deserialize)]
struct RawTestSection {
    /// Bearer token for the Authorization header.
    #[serde(rename = "AUTH_TOKEN")]
    auth_token: String,
    /// Base URL of the service under test.
    #[serde(rename = "REST_API_BASE_URL")]
    rest_api_base_url: String,
}

/// Raw configuration file prior to validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    /// `[TEST]` section.
    #[serde(rename = "TEST")]
    test: RawTestSection,
    /// `[REPORTS]` section; order is preserved by the TOML table.
    #[serde(rename = "REPORTS")]
    reports: toml::Table,
}

impl HarnessConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// The parent directory of `path` becomes the document root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let document_root = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        Self::from_toml_str(content, document_root)
    }

    /// Parses and validates configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str, document_root: PathBuf) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let auth_token = raw.test.auth_token.trim().to_string();
        if auth_token.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{TEST_SECTION}.AUTH_TOKEN must not be empty"
            )));
        }
        // Strip trailing slashes up front to avoid "//" in request URLs.
        let base_url = raw.test.rest_api_base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|err| ConfigError::Invalid(format!("invalid REST_API_BASE_URL: {err}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::Invalid(format!(
                "REST_API_BASE_URL must use http or https, got `{}`",
                parsed.scheme()
            )));
        }
        let reports = collect_reports(&raw.reports)?;
        let config = Self {
            auth_token,
            base_url,
            document_root,
            reports,
        };
        tracing::debug!(report_count = config.reports.len(), "loaded harness configuration");
        for entry in &config.reports {
            tracing::debug!(key = %entry.key, path = %entry.relative_path, "configured report");
        }
        Ok(config)
    }

    /// Resolves a relative report path against the document root.
    #[must_use]
    pub fn document_path(&self, relative_path: &str) -> PathBuf {
        self.document_root.join(relative_path)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates the report table and collects entries in declaration order.
fn collect_reports(table: &toml::Table) -> Result<Vec<ReportEntry>, ConfigError> {
    let mut reports = Vec::with_capacity(table.len());
    for (key, value) in table {
        let toml::Value::String(path) = value else {
            return Err(ConfigError::Invalid(format!(
                "{REPORTS_SECTION}.{key} must be a string path"
            )));
        };
        if path.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{REPORTS_SECTION}.{key} must not be empty"
            )));
        }
        reports.push(ReportEntry {
            key: key.clone(),
            relative_path: path.clone(),
        });
    }
    Ok(reports)
}
