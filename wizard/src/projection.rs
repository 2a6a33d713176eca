//! Review projection.
//!
//! Renders a finished configuration into the grouped, expandable summary
//! shown on the review step. The projection is read-only: it never touches
//! the draft, it only decides which groups are open and formats their rows.

use crate::types::{Chain, ContractConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One collapsible group on the review screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewGroup {
    /// Event metadata
    EventDetails,
    /// Tiers and benefits
    TicketConfig,
    /// Security toggles
    Security,
    /// Location gating
    Location,
    /// Resale and royalty rules
    Market,
}

impl ReviewGroup {
    /// All groups, in display order
    pub const ALL: [Self; 5] = [
        Self::EventDetails,
        Self::TicketConfig,
        Self::Security,
        Self::Location,
        Self::Market,
    ];

    /// Group heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::EventDetails => "Event Details",
            Self::TicketConfig => "Ticket Configuration",
            Self::Security => "Security Settings",
            Self::Location => "Location Settings",
            Self::Market => "Market Rules",
        }
    }
}

/// Expand/collapse state for the review screen
///
/// Starts with only the first group open, matching the review screen's
/// initial presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProjection {
    expanded: BTreeSet<ReviewGroup>,
}

impl ReviewProjection {
    /// Creates a projection with only the event-details group expanded
    #[must_use]
    pub fn new() -> Self {
        let mut expanded = BTreeSet::new();
        expanded.insert(ReviewGroup::EventDetails);
        Self { expanded }
    }

    /// Toggles a group open or closed
    pub fn toggle(&mut self, group: ReviewGroup) {
        if !self.expanded.remove(&group) {
            self.expanded.insert(group);
        }
    }

    /// Whether a group is currently expanded
    #[must_use]
    pub fn is_expanded(&self, group: ReviewGroup) -> bool {
        self.expanded.contains(&group)
    }

    /// Renders the summary as display lines
    ///
    /// Collapsed groups render only their heading. Rows mirror the review
    /// screen: a soulbound contract shows no resale or royalty rows, and the
    /// royalty row only appears when resale is enabled.
    #[must_use]
    pub fn render(&self, config: &ContractConfig) -> Vec<String> {
        let mut lines = Vec::new();
        for group in ReviewGroup::ALL {
            let marker = if self.is_expanded(group) { "v" } else { ">" };
            lines.push(format!("{marker} {}", group.title()));
            if self.is_expanded(group) {
                Self::render_group(group, config, &mut lines);
            }
        }
        lines
    }

    fn render_group(group: ReviewGroup, config: &ContractConfig, lines: &mut Vec<String>) {
        match group {
            ReviewGroup::EventDetails => {
                let details = &config.event_details;
                lines.push(row("Event Name", &details.name));
                lines.push(row("Symbol", &details.symbol));
                lines.push(row("Chain", &chain_display(details.chain)));
                lines.push(row("Total Supply", &details.total_supply.to_string()));
                lines.push(row("Payment Token", &details.payment_token));
            }
            ReviewGroup::TicketConfig => {
                for (i, tier) in config.tiers.iter().enumerate() {
                    lines.push(format!("  Tier {}: {}", i + 1, tier.name));
                    lines.push(row(
                        "Price",
                        &format!("{} {}", tier.price, config.event_details.payment_token),
                    ));
                    lines.push(row("Supply", &tier.supply.to_string()));
                    lines.push(row("Max Per Wallet", &tier.max_per_wallet.to_string()));
                    lines.push("    Benefits".to_string());
                    for benefit in &tier.benefits {
                        lines.push(format!("      {}: {}", benefit.name, benefit.details));
                    }
                }
            }
            ReviewGroup::Security => {
                let security = &config.security;
                lines.push(row("KYC Required", toggle_display(security.require_kyc)));
                lines.push(row(
                    "Multi-Signature",
                    toggle_display(security.enable_multi_sig),
                ));
                lines.push(row(
                    "Rate Limiting",
                    toggle_display(security.enable_rate_limiting),
                ));
                lines.push(row("Pausable", toggle_display(security.enable_pausable)));
            }
            ReviewGroup::Location => {
                let location = &config.location;
                lines.push(row(
                    "Location Restrictions",
                    toggle_display(location.enabled),
                ));
                if location.enabled {
                    for (i, zone) in location.zones.iter().enumerate() {
                        lines.push(format!("  Zone {}: {}", i + 1, zone.name));
                        lines.push(row(
                            "Coordinates",
                            &format!("{}, {}", zone.latitude, zone.longitude),
                        ));
                        lines.push(row("Radius", &format!("{}m", zone.radius_m)));
                    }
                }
            }
            ReviewGroup::Market => {
                let market = &config.market;
                lines.push(row("Soulbound", toggle_display(market.soulbound)));
                if !market.soulbound {
                    lines.push(row(
                        "Resale Enabled",
                        toggle_display(market.enable_resale),
                    ));
                    if market.enable_resale {
                        lines.push(row(
                            "Royalty Percentage",
                            &format!("{}%", market.royalty_percent),
                        ));
                    }
                }
            }
        }
    }
}

impl Default for ReviewProjection {
    fn default() -> Self {
        Self::new()
    }
}

fn row(label: &str, value: &str) -> String {
    format!("    {label}: {value}")
}

fn chain_display(chain: Chain) -> String {
    chain.as_str().to_uppercase()
}

const fn toggle_display(enabled: bool) -> &'static str {
    if enabled { "Enabled" } else { "Disabled" }
}
