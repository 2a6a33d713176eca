//! Scripted CLI demo for the contract-configuration wizard.
//!
//! Runs a full session against the in-memory store: a failing submission to
//! show field errors, a back/forward round trip, an address lookup, the
//! review summary, and the final deploy hand-off.

#![allow(clippy::print_stdout)]

use std::sync::Arc;
use ticketforge_core::environment::SystemClock;
use ticketforge_wizard::config::WizardConfig;
use ticketforge_wizard::deploy::LoggingDeployer;
use ticketforge_wizard::geocode::StaticGeocoder;
use ticketforge_wizard::projection::{ReviewGroup, ReviewProjection};
use ticketforge_wizard::types::{
    Benefit, Chain, EventDetails, GeoZone, LocationSettings, MarketRulesInput, SecuritySettings,
    TicketTier,
};
use ticketforge_wizard::{WizardAction, WizardEnvironment, WizardStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = WizardConfig::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    println!("=== Contract Configuration Wizard ===\n");

    let env = WizardEnvironment::new(
        Arc::new(SystemClock),
        Arc::new(StaticGeocoder::with_known_cities()),
        Arc::new(LoggingDeployer {
            pretty: config.pretty_deploy_log,
        }),
    );
    let store = WizardStore::new(env);

    // A submission with a bad symbol shows collected field errors
    println!("Submitting event details with an oversized symbol...");
    store
        .dispatch(WizardAction::SubmitEventDetails {
            details: EventDetails {
                name: "Summer Fest".to_string(),
                symbol: "SUMMERFEST".to_string(),
                description: "Three days of music".to_string(),
                chain: Chain::Polygon,
                total_supply: 5000,
                payment_token: "USDC".to_string(),
            },
        })
        .await;
    let state = store.state().await;
    if let Some(errors) = &state.last_errors {
        for (path, message) in errors.iter() {
            println!("  error at {path}: {message}");
        }
    }

    println!("\nSubmitting corrected event details...");
    store
        .dispatch(WizardAction::SubmitEventDetails {
            details: EventDetails {
                name: "Summer Fest".to_string(),
                symbol: "fest".to_string(),
                description: "Three days of music".to_string(),
                chain: Chain::Polygon,
                total_supply: 5000,
                payment_token: "USDC".to_string(),
            },
        })
        .await;
    let state = store.state().await;
    println!(
        "  accepted; now on step {} with symbol {:?}",
        state.step,
        state
            .draft
            .event_details
            .as_ref()
            .map(|d| d.symbol.as_str())
    );

    // Backwards and forwards again: the completed slice survives
    println!("\nGoing back and resubmitting...");
    store.dispatch(WizardAction::GoBack).await;
    let state = store.state().await;
    println!(
        "  back on step {}; details still present: {}",
        state.step,
        state.draft.event_details.is_some()
    );
    store
        .dispatch(WizardAction::SubmitEventDetails {
            details: EventDetails {
                name: "Summer Fest".to_string(),
                symbol: "FEST".to_string(),
                description: "Three days of music".to_string(),
                chain: Chain::Polygon,
                total_supply: 5000,
                payment_token: "USDC".to_string(),
            },
        })
        .await;

    println!("\nConfiguring ticket tiers...");
    store
        .dispatch(WizardAction::SubmitTicketTiers {
            tiers: vec![
                TicketTier {
                    name: "General Admission".to_string(),
                    price: 0.05,
                    supply: 4500,
                    max_per_wallet: 4,
                    benefits: vec![Benefit {
                        name: "Entry".to_string(),
                        details: "Festival grounds access".to_string(),
                    }],
                },
                TicketTier {
                    name: "VIP".to_string(),
                    price: 0.5,
                    supply: 500,
                    max_per_wallet: 2,
                    benefits: vec![
                        Benefit {
                            name: "Entry".to_string(),
                            details: "Festival grounds access".to_string(),
                        },
                        Benefit {
                            name: "Backstage".to_string(),
                            details: "Backstage tours daily".to_string(),
                        },
                    ],
                },
            ],
        })
        .await;

    println!("Configuring security...");
    store
        .dispatch(WizardAction::SubmitSecurity {
            settings: SecuritySettings {
                require_kyc: true,
                enable_pausable: true,
                ..SecuritySettings::default()
            },
        })
        .await;

    // Geocode the venue before drawing the zone
    println!("Looking up the venue address...");
    store
        .dispatch(WizardAction::LookupAddress {
            address: "new york".to_string(),
        })
        .await;
    let state = store.state().await;
    let coordinates = state
        .last_lookup
        .as_ref()
        .map_or((40.7128, -74.0060), |lookup| {
            (lookup.coordinates.latitude, lookup.coordinates.longitude)
        });
    println!("  resolved to {coordinates:?}");

    store
        .dispatch(WizardAction::SubmitLocation {
            settings: LocationSettings {
                enabled: true,
                zones: vec![GeoZone {
                    name: "Event Venue".to_string(),
                    latitude: coordinates.0,
                    longitude: coordinates.1,
                    radius_m: 500.0,
                }],
            },
        })
        .await;

    println!("Configuring market rules...");
    store
        .dispatch(WizardAction::SubmitMarketRules {
            rules: MarketRulesInput {
                soulbound: false,
                enable_resale: true,
                royalty_percent: Some(5.0),
            },
        })
        .await;

    // Review summary with the market group opened up
    let state = store.state().await;
    println!("\nReached step: {}", state.step);
    if let Some(config) = state.draft.to_config() {
        let mut projection = ReviewProjection::new();
        projection.toggle(ReviewGroup::Market);
        println!("\n--- Review ---");
        for line in projection.render(&config) {
            println!("{line}");
        }
    }

    println!("\nConfirming and deploying...");
    store
        .dispatch(WizardAction::SetConfirmed { confirmed: true })
        .await;
    store.dispatch(WizardAction::Deploy).await;

    let state = store.state().await;
    println!(
        "  deployed: {} (requested at {:?})",
        state.deployed, state.deploy_requested_at
    );

    println!("\n=== Demo Complete ===");
}
