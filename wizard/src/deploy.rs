//! Contract deployment hand-off.
//!
//! Actual chain interaction lives behind [`ContractDeployer`]; the wizard
//! only ever hands over a finished [`ContractConfig`] and records whether
//! the collaborator accepted it. The bundled [`LoggingDeployer`] writes the
//! configuration to the log, which is all the demo binary needs.

use crate::types::ContractConfig;

/// Errors from the deployment collaborator
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// The configuration could not be serialized for hand-off
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The deployment backend rejected the configuration
    #[error("deployment rejected: {0}")]
    Rejected(String),
}

/// Accepts a finished configuration for deployment
#[async_trait::async_trait]
pub trait ContractDeployer: Send + Sync {
    /// Hands over a configuration
    ///
    /// # Errors
    ///
    /// Returns a [`DeployError`] when the collaborator cannot accept the
    /// configuration.
    async fn deploy(&self, config: ContractConfig) -> Result<(), DeployError>;
}

/// Deployer that logs the configuration instead of deploying it
#[derive(Debug, Clone, Copy)]
pub struct LoggingDeployer {
    /// Pretty-print the configuration JSON
    pub pretty: bool,
}

impl LoggingDeployer {
    /// Creates a deployer with compact JSON output
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }
}

impl Default for LoggingDeployer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ContractDeployer for LoggingDeployer {
    async fn deploy(&self, config: ContractConfig) -> Result<(), DeployError> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(&config)?
        } else {
            serde_json::to_string(&config)?
        };
        tracing::info!(
            event = %config.event_details.name,
            chain = %config.event_details.chain,
            tiers = config.tiers.len(),
            "deploying contract configuration"
        );
        tracing::info!("{payload}");
        Ok(())
    }
}
