//! Environment for the wizard reducer.
//!
//! All side-effecting collaborators are injected here as trait objects so
//! tests can swap in fixed clocks and stub deployers.

use crate::deploy::ContractDeployer;
use crate::geocode::Geocoder;
use std::sync::Arc;
use ticketforge_core::environment::Clock;

/// Injected dependencies for [`WizardReducer`]
///
/// [`WizardReducer`]: crate::reducer::WizardReducer
#[derive(Clone)]
pub struct WizardEnvironment {
    /// Time source
    pub clock: Arc<dyn Clock>,
    /// Address resolution for the location step
    pub geocoder: Arc<dyn Geocoder>,
    /// Deployment hand-off
    pub deployer: Arc<dyn ContractDeployer>,
}

impl WizardEnvironment {
    /// Creates an environment from its collaborators
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        geocoder: Arc<dyn Geocoder>,
        deployer: Arc<dyn ContractDeployer>,
    ) -> Self {
        Self {
            clock,
            geocoder,
            deployer,
        }
    }
}

impl std::fmt::Debug for WizardEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardEnvironment").finish_non_exhaustive()
    }
}
