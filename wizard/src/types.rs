//! Domain types for the contract-configuration wizard.
//!
//! Every type here is a plain value record: there is no cross-entity
//! identity and nothing is ever persisted. The aggregate only exists in the
//! wizard's in-memory state while a configuration session is running.

use crate::geocode::AddressLookup;
use crate::validate::FieldErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of an event symbol, in characters
pub const MAX_SYMBOL_LEN: usize = 6;

/// Minimum number of ticket tiers per contract
pub const MIN_TIERS: usize = 1;

/// Maximum number of ticket tiers per contract
pub const MAX_TIERS: usize = 3;

/// Minimum number of benefits per tier
pub const MIN_BENEFITS: usize = 1;

/// Maximum number of benefits per tier
pub const MAX_BENEFITS: usize = 5;

/// Minimum number of geofence zones when location gating is enabled
pub const MIN_ZONES: usize = 1;

/// Maximum number of geofence zones
pub const MAX_ZONES: usize = 5;

/// Minimum zone radius in meters (inclusive)
pub const MIN_ZONE_RADIUS_M: f64 = 200.0;

/// Maximum resale royalty, in percent
pub const MAX_ROYALTY_PERCENT: f64 = 15.0;

/// The fixed set of accepted payment token symbols
pub const PAYMENT_TOKENS: [&str; 4] = ["ETH", "USDC", "USDT", "DAI"];

/// Supported deployment chains
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Ethereum mainnet
    Ethereum,
    /// Polygon PoS
    Polygon,
    /// BNB Smart Chain
    Bsc,
    /// Arbitrum One
    Arbitrum,
}

impl Chain {
    /// All supported chains, in display order
    pub const ALL: [Self; 4] = [Self::Ethereum, Self::Polygon, Self::Bsc, Self::Arbitrum];

    /// Lowercase wire name of the chain
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "polygon",
            Self::Bsc => "bsc",
            Self::Arbitrum => "arbitrum",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic event metadata collected on the first step
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event name
    pub name: String,
    /// Collection symbol, normalized to uppercase on acceptance
    pub symbol: String,
    /// Free-text event description
    pub description: String,
    /// Chain the contract deploys to
    pub chain: Chain,
    /// Total NFT supply across all tiers
    pub total_supply: u64,
    /// Payment token symbol, one of [`PAYMENT_TOKENS`]
    pub payment_token: String,
}

/// A single perk attached to a ticket tier
///
/// Benefits are owned exclusively by their parent tier and have no identity
/// outside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    /// Short benefit name
    pub name: String,
    /// What the benefit grants
    pub details: String,
}

/// A priced class of ticket with its own supply cap and benefits
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketTier {
    /// Tier name, e.g. "VIP Access"
    pub name: String,
    /// Price in units of the payment token
    pub price: f64,
    /// Number of tickets in this tier
    pub supply: u32,
    /// Per-wallet purchase cap
    pub max_per_wallet: u32,
    /// Ordered benefits, between [`MIN_BENEFITS`] and [`MAX_BENEFITS`]
    pub benefits: Vec<Benefit>,
}

/// Security toggles for the contract
///
/// The four flags are fully independent; there are no invariants between
/// them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Require KYC verification before minting
    pub require_kyc: bool,
    /// Gate admin operations behind a multi-signature wallet
    pub enable_multi_sig: bool,
    /// Throttle mint transactions per address
    pub enable_rate_limiting: bool,
    /// Allow the contract to be paused by its owner
    pub enable_pausable: bool,
}

/// A circular geofenced area used to gate minting by location
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoZone {
    /// Zone name, e.g. "Event Venue"
    pub name: String,
    /// Center latitude, -90..=90
    pub latitude: f64,
    /// Center longitude, -180..=180
    pub longitude: f64,
    /// Radius in meters, at least [`MIN_ZONE_RADIUS_M`]
    pub radius_m: f64,
}

/// Location-gating settings for the contract
///
/// When `enabled` is false the zones list is not validated; acceptance
/// clears it so the normalized value never carries unchecked data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationSettings {
    /// Whether minting is restricted to geofenced zones
    pub enabled: bool,
    /// Zones, between [`MIN_ZONES`] and [`MAX_ZONES`] when enabled
    pub zones: Vec<GeoZone>,
}

/// Raw market-rules payload as submitted on the market step
///
/// The royalty is optional here because it is only required when resale is
/// enabled and the tickets are not soulbound.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketRulesInput {
    /// Tickets are non-transferable after initial purchase
    pub soulbound: bool,
    /// Holders may resell their tickets on the secondary market
    pub enable_resale: bool,
    /// Creator royalty on resales, 0..=15 percent, one decimal of precision
    pub royalty_percent: Option<f64>,
}

/// Accepted market rules
///
/// Normalization zeroes the fields that do not apply: a soulbound contract
/// never has resale enabled, and a contract without resale has no royalty.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketSettings {
    /// Tickets are non-transferable after initial purchase
    pub soulbound: bool,
    /// Holders may resell their tickets on the secondary market
    pub enable_resale: bool,
    /// Creator royalty on resales, rounded to one decimal
    pub royalty_percent: f64,
}

/// The finished configuration handed to the deployment collaborator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Event metadata
    pub event_details: EventDetails,
    /// Ticket tiers
    pub tiers: Vec<TicketTier>,
    /// Security toggles
    pub security: SecuritySettings,
    /// Location gating
    pub location: LocationSettings,
    /// Resale and royalty rules
    pub market: MarketSettings,
}

/// The partial aggregate built up step by step
///
/// Slices are only ever added or replaced, never partially cleared, so a
/// completed step stays completed when the user navigates backwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractDraft {
    /// Output of the event-details step
    pub event_details: Option<EventDetails>,
    /// Output of the ticket-tiers step
    pub tiers: Option<Vec<TicketTier>>,
    /// Output of the security step
    pub security: Option<SecuritySettings>,
    /// Output of the location step
    pub location: Option<LocationSettings>,
    /// Output of the market-rules step
    pub market: Option<MarketSettings>,
}

impl ContractDraft {
    /// True once every step has been completed at least once
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.event_details.is_some()
            && self.tiers.is_some()
            && self.security.is_some()
            && self.location.is_some()
            && self.market.is_some()
    }

    /// Assembles the finished configuration, or `None` while incomplete
    #[must_use]
    pub fn to_config(&self) -> Option<ContractConfig> {
        Some(ContractConfig {
            event_details: self.event_details.clone()?,
            tiers: self.tiers.clone()?,
            security: self.security?,
            location: self.location.clone()?,
            market: self.market?,
        })
    }
}

/// One screen of the wizard
///
/// The order is fixed and linear; there is no skipping, branching, or
/// conditional step insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Event metadata
    EventDetails,
    /// Ticket tiers and benefits
    TicketTiers,
    /// Security toggles
    Security,
    /// Geofenced minting zones
    Location,
    /// Resale and royalty rules
    MarketRules,
    /// Final review and deploy
    Review,
}

impl WizardStep {
    /// All steps, in wizard order
    pub const ALL: [Self; 6] = [
        Self::EventDetails,
        Self::TicketTiers,
        Self::Security,
        Self::Location,
        Self::MarketRules,
        Self::Review,
    ];

    /// Zero-based position of this step
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::EventDetails => 0,
            Self::TicketTiers => 1,
            Self::Security => 2,
            Self::Location => 3,
            Self::MarketRules => 4,
            Self::Review => 5,
        }
    }

    /// The step after this one; the review step is terminal
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::EventDetails => Self::TicketTiers,
            Self::TicketTiers => Self::Security,
            Self::Security => Self::Location,
            Self::Location => Self::MarketRules,
            Self::MarketRules | Self::Review => Self::Review,
        }
    }

    /// The step before this one, bounded at the first step
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::EventDetails | Self::TicketTiers => Self::EventDetails,
            Self::Security => Self::TicketTiers,
            Self::Location => Self::Security,
            Self::MarketRules => Self::Location,
            Self::Review => Self::MarketRules,
        }
    }

    /// True for the first step
    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::EventDetails)
    }

    /// True for the terminal review step
    #[must_use]
    pub const fn is_review(self) -> bool {
        matches!(self, Self::Review)
    }

    /// Human-readable step title, matching the step indicator copy
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::EventDetails => "Event Details",
            Self::TicketTiers => "Ticket Config",
            Self::Security => "Security",
            Self::Location => "Location",
            Self::MarketRules => "Market Rules",
            Self::Review => "Review",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::EventDetails
    }
}

/// State of a configuration session
///
/// Created empty when the wizard starts and discarded when it ends; nothing
/// here survives the session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WizardState {
    /// The step currently shown
    pub step: WizardStep,
    /// The partially-built configuration
    pub draft: ContractDraft,
    /// Review-step confirmation toggle
    pub confirmed: bool,
    /// Field errors from the most recent rejected submission
    pub last_errors: Option<FieldErrors>,
    /// Most recent out-of-order command error
    pub last_error: Option<String>,
    /// Most recent successful address lookup on the location step
    pub last_lookup: Option<AddressLookup>,
    /// When deployment was requested, if it was
    pub deploy_requested_at: Option<DateTime<Utc>>,
    /// Whether the deployment collaborator acknowledged the hand-off
    pub deployed: bool,
}

impl WizardState {
    /// Creates a fresh session at the first step
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the most recent submission was rejected
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.last_errors.is_some() || self.last_error.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn step_order_is_linear() {
        let mut step = WizardStep::EventDetails;
        for expected in WizardStep::ALL {
            assert_eq!(step, expected);
            step = step.next();
        }
        // Review is terminal
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
    }

    #[test]
    fn previous_is_bounded_at_first_step() {
        assert_eq!(
            WizardStep::EventDetails.previous(),
            WizardStep::EventDetails
        );
        assert_eq!(WizardStep::Review.previous(), WizardStep::MarketRules);
    }

    #[test]
    fn step_indices_match_wizard_order() {
        for (i, step) in WizardStep::ALL.into_iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn chain_serializes_lowercase() {
        let json = serde_json::to_string(&Chain::Arbitrum).unwrap();
        assert_eq!(json, "\"arbitrum\"");
        let chain: Chain = serde_json::from_str("\"bsc\"").unwrap();
        assert_eq!(chain, Chain::Bsc);
    }

    #[test]
    fn draft_completeness() {
        let mut draft = ContractDraft::default();
        assert!(!draft.is_complete());
        assert!(draft.to_config().is_none());

        draft.event_details = Some(EventDetails {
            name: "Demo".to_string(),
            symbol: "DEMO".to_string(),
            description: "x".to_string(),
            chain: Chain::Ethereum,
            total_supply: 100,
            payment_token: "ETH".to_string(),
        });
        draft.tiers = Some(vec![TicketTier {
            name: "GA".to_string(),
            price: 0.1,
            supply: 100,
            max_per_wallet: 2,
            benefits: vec![Benefit {
                name: "Entry".to_string(),
                details: "Admission".to_string(),
            }],
        }]);
        draft.security = Some(SecuritySettings::default());
        draft.location = Some(LocationSettings::default());
        assert!(!draft.is_complete());

        draft.market = Some(MarketSettings {
            soulbound: false,
            enable_resale: true,
            royalty_percent: 5.0,
        });
        assert!(draft.is_complete());
        let config = draft.to_config().unwrap();
        assert_eq!(config.event_details.symbol, "DEMO");
        assert_eq!(config.tiers.len(), 1);
    }
}
