//! Actions for the wizard reducer.
//!
//! Commands carry user intent from the outside; events record what actually
//! happened and are the only thing that mutates state. Replaying the event
//! history through the reducer reconstructs the exact same [`WizardState`],
//! which is what keeps the tests deterministic.
//!
//! [`WizardState`]: crate::types::WizardState

use crate::geocode::Coordinates;
use crate::types::{
    ContractConfig, EventDetails, LocationSettings, MarketRulesInput, MarketSettings,
    SecuritySettings, TicketTier, WizardStep,
};
use crate::validate::FieldErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ticketforge_macros::Action;

/// All actions the wizard reducer understands
#[derive(Action, Clone, Debug, Serialize, Deserialize)]
pub enum WizardAction {
    // ========================================================================
    // Commands (user intent)
    // ========================================================================
    /// Submit the event-details form
    #[command]
    SubmitEventDetails {
        /// Raw form payload
        details: EventDetails,
    },

    /// Submit the ticket-tiers form
    #[command]
    SubmitTicketTiers {
        /// Raw form payload
        tiers: Vec<TicketTier>,
    },

    /// Submit the security form
    #[command]
    SubmitSecurity {
        /// Raw form payload
        settings: SecuritySettings,
    },

    /// Submit the location form
    #[command]
    SubmitLocation {
        /// Raw form payload
        settings: LocationSettings,
    },

    /// Submit the market-rules form
    #[command]
    SubmitMarketRules {
        /// Raw form payload
        rules: MarketRulesInput,
    },

    /// Navigate to the previous step
    #[command]
    GoBack,

    /// Toggle the review-step confirmation checkbox
    #[command]
    SetConfirmed {
        /// New checkbox value
        confirmed: bool,
    },

    /// Hand the finished configuration to the deployer
    #[command]
    Deploy,

    /// Resolve a street address into zone coordinates
    #[command]
    LookupAddress {
        /// Free-text address
        address: String,
    },

    // ========================================================================
    // Events (facts)
    // ========================================================================
    /// The event-details step was accepted
    #[event]
    EventDetailsAccepted {
        /// Normalized payload
        details: EventDetails,
    },

    /// The ticket-tiers step was accepted
    #[event]
    TicketTiersAccepted {
        /// Accepted tiers
        tiers: Vec<TicketTier>,
    },

    /// The security step was accepted
    #[event]
    SecurityAccepted {
        /// Accepted settings
        settings: SecuritySettings,
    },

    /// The location step was accepted
    #[event]
    LocationAccepted {
        /// Normalized settings
        settings: LocationSettings,
    },

    /// The market-rules step was accepted
    #[event]
    MarketRulesAccepted {
        /// Normalized settings
        settings: MarketSettings,
    },

    /// A step submission failed validation
    #[event]
    StepRejected {
        /// The step that rejected the payload
        step: WizardStep,
        /// Per-field messages
        errors: FieldErrors,
    },

    /// The user navigated backwards
    #[event]
    SteppedBack {
        /// Step navigated away from
        from: WizardStep,
        /// Step navigated to
        to: WizardStep,
    },

    /// The review confirmation checkbox changed
    #[event]
    ConfirmationSet {
        /// New checkbox value
        confirmed: bool,
    },

    /// A complete, confirmed configuration was handed to the deployer
    #[event]
    DeployRequested {
        /// The assembled configuration
        config: ContractConfig,
        /// When the hand-off happened
        requested_at: DateTime<Utc>,
    },

    /// The deployer acknowledged the configuration
    #[event]
    DeployCompleted,

    /// The deployer rejected the configuration
    #[event]
    DeployFailed {
        /// Deployer error, already rendered
        error: String,
    },

    /// An address lookup resolved
    #[event]
    AddressResolved {
        /// The address that was looked up
        address: String,
        /// Resolved coordinates
        coordinates: Coordinates,
    },

    /// A command arrived that the current step cannot handle
    #[event]
    ValidationFailed {
        /// What went wrong
        error: String,
    },
}
