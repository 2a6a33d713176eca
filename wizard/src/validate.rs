//! Per-step validation for the wizard.
//!
//! Every validator is synchronous, pure, and total: given a candidate
//! payload it returns either an accepted normalized value or a mapping from
//! field path to a human-readable message. Validators collect every failure
//! in one pass rather than stopping at the first, so a form can surface all
//! of its errors at once.

use crate::types::{
    EventDetails, GeoZone, LocationSettings, MAX_BENEFITS, MAX_ROYALTY_PERCENT, MAX_SYMBOL_LEN,
    MAX_TIERS, MAX_ZONES, MIN_BENEFITS, MIN_TIERS, MIN_ZONE_RADIUS_M, MIN_ZONES,
    MarketRulesInput, MarketSettings, PAYMENT_TOKENS, SecuritySettings, TicketTier,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-level validation errors, keyed by field path
///
/// Paths use bracket indexing for list items, e.g.
/// `tiers[1].benefits[0].name`. Iteration order is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty error set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records an error for a field path
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.insert(path.into(), message.into());
    }

    /// True when no errors were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message recorded for a field path, if any
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Iterates over `(path, message)` pairs in path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the set if it holds any errors
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when at least one error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (path, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{path}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validates and normalizes the event-details payload
///
/// Normalization uppercases the symbol; everything else passes through
/// unchanged.
///
/// # Errors
///
/// Returns the per-field messages for every failing constraint.
pub fn event_details(details: &EventDetails) -> Result<EventDetails, FieldErrors> {
    let mut errors = FieldErrors::new();

    if details.name.trim().is_empty() {
        errors.push("name", "Event name is required");
    }

    // Uppercasing can grow the string (e.g. "ß" -> "SS"), so the length
    // limit applies to the normalized form.
    let symbol = details.symbol.to_uppercase();
    let symbol_len = symbol.chars().count();
    if symbol_len == 0 {
        errors.push("symbol", "Symbol is required");
    } else if symbol_len > MAX_SYMBOL_LEN {
        errors.push("symbol", "Symbol must be 6 characters or less");
    }

    if details.description.trim().is_empty() {
        errors.push("description", "Description is required");
    }

    if details.total_supply < 1 {
        errors.push("total_supply", "Total supply must be greater than 0");
    }

    if details.payment_token.trim().is_empty() {
        errors.push("payment_token", "Payment token is required");
    } else if !PAYMENT_TOKENS.contains(&details.payment_token.as_str()) {
        errors.push(
            "payment_token",
            format!("Payment token must be one of {}", PAYMENT_TOKENS.join(", ")),
        );
    }

    errors.into_result()?;

    Ok(EventDetails {
        symbol,
        ..details.clone()
    })
}

/// Validates the ticket-tiers payload
///
/// # Errors
///
/// Returns the per-field messages for every failing constraint, including
/// nested benefit fields.
pub fn ticket_tiers(tiers: &[TicketTier]) -> Result<Vec<TicketTier>, FieldErrors> {
    let mut errors = FieldErrors::new();

    if tiers.len() < MIN_TIERS {
        errors.push("tiers", "At least one tier is required");
    } else if tiers.len() > MAX_TIERS {
        errors.push("tiers", "Maximum 3 tiers allowed");
    }

    for (i, tier) in tiers.iter().enumerate() {
        if tier.name.trim().is_empty() {
            errors.push(format!("tiers[{i}].name"), "Tier name is required");
        }

        if !tier.price.is_finite() || tier.price < 0.0 {
            errors.push(format!("tiers[{i}].price"), "Price must be 0 or greater");
        }

        if tier.supply < 1 {
            errors.push(
                format!("tiers[{i}].supply"),
                "Supply must be greater than 0",
            );
        }

        if tier.max_per_wallet < 1 {
            errors.push(
                format!("tiers[{i}].max_per_wallet"),
                "Max per wallet must be greater than 0",
            );
        }

        if tier.benefits.len() < MIN_BENEFITS {
            errors.push(
                format!("tiers[{i}].benefits"),
                "At least one benefit is required",
            );
        } else if tier.benefits.len() > MAX_BENEFITS {
            errors.push(
                format!("tiers[{i}].benefits"),
                "Maximum 5 benefits allowed",
            );
        }

        for (j, benefit) in tier.benefits.iter().enumerate() {
            if benefit.name.trim().is_empty() {
                errors.push(
                    format!("tiers[{i}].benefits[{j}].name"),
                    "Benefit name is required",
                );
            }
            if benefit.details.trim().is_empty() {
                errors.push(
                    format!("tiers[{i}].benefits[{j}].details"),
                    "Benefit details are required",
                );
            }
        }
    }

    errors.into_result()?;
    Ok(tiers.to_vec())
}

/// Validates the security payload
///
/// The four toggles are independent booleans, so this always succeeds; it
/// exists to keep the step contract uniform.
///
/// # Errors
///
/// Never fails today; the signature matches the other step validators.
pub fn security(settings: &SecuritySettings) -> Result<SecuritySettings, FieldErrors> {
    Ok(*settings)
}

/// Validates the location payload
///
/// Zones are only validated when location gating is enabled; a disabled
/// payload is accepted as-is with its zones cleared.
///
/// # Errors
///
/// Returns the per-field messages for every failing zone constraint.
pub fn location(settings: &LocationSettings) -> Result<LocationSettings, FieldErrors> {
    if !settings.enabled {
        return Ok(LocationSettings {
            enabled: false,
            zones: Vec::new(),
        });
    }

    let mut errors = FieldErrors::new();

    if settings.zones.len() < MIN_ZONES {
        errors.push("zones", "At least one zone is required");
    } else if settings.zones.len() > MAX_ZONES {
        errors.push("zones", "Maximum 5 zones allowed");
    }

    for (i, zone) in settings.zones.iter().enumerate() {
        validate_zone(&mut errors, i, zone);
    }

    errors.into_result()?;
    Ok(settings.clone())
}

fn validate_zone(errors: &mut FieldErrors, i: usize, zone: &GeoZone) {
    if zone.name.trim().is_empty() {
        errors.push(format!("zones[{i}].name"), "Zone name is required");
    }

    if !zone.latitude.is_finite() || !(-90.0..=90.0).contains(&zone.latitude) {
        errors.push(
            format!("zones[{i}].latitude"),
            "Latitude must be between -90 and 90",
        );
    }

    if !zone.longitude.is_finite() || !(-180.0..=180.0).contains(&zone.longitude) {
        errors.push(
            format!("zones[{i}].longitude"),
            "Longitude must be between -180 and 180",
        );
    }

    if !zone.radius_m.is_finite() || zone.radius_m < MIN_ZONE_RADIUS_M {
        errors.push(format!("zones[{i}].radius_m"), "Minimum radius is 200 meters");
    }
}

/// Validates and normalizes the market-rules payload
///
/// A soulbound contract cannot have resale, so `enable_resale` and the
/// royalty are zeroed when `soulbound` is set. The royalty is only required
/// (and only validated) when resale applies, and is rounded to one decimal
/// of precision on acceptance.
///
/// # Errors
///
/// Returns the per-field messages for every failing constraint.
pub fn market_rules(input: &MarketRulesInput) -> Result<MarketSettings, FieldErrors> {
    if input.soulbound {
        return Ok(MarketSettings {
            soulbound: true,
            enable_resale: false,
            royalty_percent: 0.0,
        });
    }

    if !input.enable_resale {
        return Ok(MarketSettings {
            soulbound: false,
            enable_resale: false,
            royalty_percent: 0.0,
        });
    }

    let mut errors = FieldErrors::new();

    let royalty = match input.royalty_percent {
        None => {
            errors.push(
                "royalty_percent",
                "Royalty percentage is required when resale is enabled",
            );
            0.0
        }
        Some(royalty) if !royalty.is_finite() || royalty < 0.0 => {
            errors.push("royalty_percent", "Royalty must be at least 0%");
            0.0
        }
        Some(royalty) if royalty > MAX_ROYALTY_PERCENT => {
            errors.push("royalty_percent", "Royalty cannot exceed 15%");
            0.0
        }
        Some(royalty) => royalty,
    };

    errors.into_result()?;

    Ok(MarketSettings {
        soulbound: false,
        enable_resale: true,
        royalty_percent: round_to_one_decimal(royalty),
    })
}

/// Rounds a percentage to one decimal of precision
fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
