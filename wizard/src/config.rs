//! Configuration for the wizard binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Log filter (trace, debug, info, warn, error)
    pub log_level: String,
    /// Pretty-print the deployed configuration JSON
    pub pretty_deploy_log: bool,
}

impl WizardConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            pretty_deploy_log: env::var("TICKETFORGE_PRETTY_DEPLOY_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }
}
