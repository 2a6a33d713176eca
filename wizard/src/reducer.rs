//! Reducer for the contract-configuration wizard.
//!
//! Commands are validated against the current step, turned into events, and
//! the events are applied to state. Replaying the emitted events through
//! [`WizardReducer::apply_event`] reconstructs the same state, so the whole
//! session is deterministic given its inputs.

use crate::actions::WizardAction;
use crate::environment::WizardEnvironment;
use crate::types::{WizardState, WizardStep};
use crate::validate;
use smallvec::{SmallVec, smallvec};
use ticketforge_core::{effect::Effect, reducer::Reducer};

/// Reducer driving a configuration session
///
/// Enforces:
/// - Step gating: a submission is only accepted on its own step
/// - Forward motion: an accepted step always lands on its fixed successor
/// - Deploy preconditions: review step, confirmation, complete draft
#[derive(Clone, Debug)]
pub struct WizardReducer;

impl WizardReducer {
    /// Creates a new `WizardReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Rejects a command that arrived on the wrong step
    fn wrong_step(state: &mut WizardState, expected: WizardStep) -> SmallVec<[Effect<WizardAction>; 4]> {
        let error = format!(
            "{} can only be submitted on the {} step (current: {})",
            expected.title(),
            expected.title(),
            state.step
        );
        tracing::warn!(current = %state.step, expected = %expected, "out-of-order submission");
        Self::apply_event(state, &WizardAction::ValidationFailed { error });
        SmallVec::new()
    }

    /// Applies an event to state
    ///
    /// Events carry the step they belong to implicitly: an accepted
    /// submission always advances to that step's fixed successor, never to
    /// "current step plus one", so replays land in the same place no matter
    /// what the state looked like in between.
    pub fn apply_event(state: &mut WizardState, event: &WizardAction) {
        match event {
            WizardAction::EventDetailsAccepted { details } => {
                state.draft.event_details = Some(details.clone());
                state.step = WizardStep::EventDetails.next();
                Self::clear_errors(state);
            }
            WizardAction::TicketTiersAccepted { tiers } => {
                state.draft.tiers = Some(tiers.clone());
                state.step = WizardStep::TicketTiers.next();
                Self::clear_errors(state);
            }
            WizardAction::SecurityAccepted { settings } => {
                state.draft.security = Some(*settings);
                state.step = WizardStep::Security.next();
                Self::clear_errors(state);
            }
            WizardAction::LocationAccepted { settings } => {
                state.draft.location = Some(settings.clone());
                state.step = WizardStep::Location.next();
                Self::clear_errors(state);
            }
            WizardAction::MarketRulesAccepted { settings } => {
                state.draft.market = Some(*settings);
                state.step = WizardStep::MarketRules.next();
                Self::clear_errors(state);
            }
            WizardAction::StepRejected { errors, .. } => {
                state.last_errors = Some(errors.clone());
                state.last_error = None;
            }
            WizardAction::SteppedBack { from, to } => {
                state.step = *to;
                if from.is_review() {
                    state.confirmed = false;
                }
                Self::clear_errors(state);
            }
            WizardAction::ConfirmationSet { confirmed } => {
                state.confirmed = *confirmed;
                Self::clear_errors(state);
            }
            WizardAction::DeployRequested { requested_at, .. } => {
                state.deploy_requested_at = Some(*requested_at);
                Self::clear_errors(state);
            }
            WizardAction::DeployCompleted => {
                state.deployed = true;
                Self::clear_errors(state);
            }
            WizardAction::DeployFailed { error } => {
                // A failed hand-off can be retried
                state.deploy_requested_at = None;
                state.last_error = Some(error.clone());
            }
            WizardAction::AddressResolved {
                address,
                coordinates,
            } => {
                state.last_lookup = Some(crate::geocode::AddressLookup {
                    address: address.clone(),
                    coordinates: *coordinates,
                });
            }
            WizardAction::ValidationFailed { error } => {
                state.last_error = Some(error.clone());
            }
            // Commands don't modify state
            WizardAction::SubmitEventDetails { .. }
            | WizardAction::SubmitTicketTiers { .. }
            | WizardAction::SubmitSecurity { .. }
            | WizardAction::SubmitLocation { .. }
            | WizardAction::SubmitMarketRules { .. }
            | WizardAction::GoBack
            | WizardAction::SetConfirmed { .. }
            | WizardAction::Deploy
            | WizardAction::LookupAddress { .. } => {}
        }
    }

    fn clear_errors(state: &mut WizardState) {
        state.last_errors = None;
        state.last_error = None;
    }
}

impl Default for WizardReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for WizardReducer {
    type State = WizardState;
    type Action = WizardAction;
    type Environment = WizardEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            WizardAction::SubmitEventDetails { details } => {
                if state.step != WizardStep::EventDetails {
                    return Self::wrong_step(state, WizardStep::EventDetails);
                }
                match validate::event_details(&details) {
                    Ok(details) => {
                        Self::apply_event(state, &WizardAction::EventDetailsAccepted { details });
                    }
                    Err(errors) => {
                        Self::apply_event(
                            state,
                            &WizardAction::StepRejected {
                                step: WizardStep::EventDetails,
                                errors,
                            },
                        );
                    }
                }
                SmallVec::new()
            }

            WizardAction::SubmitTicketTiers { tiers } => {
                if state.step != WizardStep::TicketTiers {
                    return Self::wrong_step(state, WizardStep::TicketTiers);
                }
                match validate::ticket_tiers(&tiers) {
                    Ok(tiers) => {
                        Self::apply_event(state, &WizardAction::TicketTiersAccepted { tiers });
                    }
                    Err(errors) => {
                        Self::apply_event(
                            state,
                            &WizardAction::StepRejected {
                                step: WizardStep::TicketTiers,
                                errors,
                            },
                        );
                    }
                }
                SmallVec::new()
            }

            WizardAction::SubmitSecurity { settings } => {
                if state.step != WizardStep::Security {
                    return Self::wrong_step(state, WizardStep::Security);
                }
                match validate::security(&settings) {
                    Ok(settings) => {
                        Self::apply_event(state, &WizardAction::SecurityAccepted { settings });
                    }
                    Err(errors) => {
                        Self::apply_event(
                            state,
                            &WizardAction::StepRejected {
                                step: WizardStep::Security,
                                errors,
                            },
                        );
                    }
                }
                SmallVec::new()
            }

            WizardAction::SubmitLocation { settings } => {
                if state.step != WizardStep::Location {
                    return Self::wrong_step(state, WizardStep::Location);
                }
                match validate::location(&settings) {
                    Ok(settings) => {
                        Self::apply_event(state, &WizardAction::LocationAccepted { settings });
                    }
                    Err(errors) => {
                        Self::apply_event(
                            state,
                            &WizardAction::StepRejected {
                                step: WizardStep::Location,
                                errors,
                            },
                        );
                    }
                }
                SmallVec::new()
            }

            WizardAction::SubmitMarketRules { rules } => {
                if state.step != WizardStep::MarketRules {
                    return Self::wrong_step(state, WizardStep::MarketRules);
                }
                match validate::market_rules(&rules) {
                    Ok(settings) => {
                        Self::apply_event(state, &WizardAction::MarketRulesAccepted { settings });
                    }
                    Err(errors) => {
                        Self::apply_event(
                            state,
                            &WizardAction::StepRejected {
                                step: WizardStep::MarketRules,
                                errors,
                            },
                        );
                    }
                }
                SmallVec::new()
            }

            WizardAction::GoBack => {
                // Silent no-op on the first step
                if !state.step.is_first() {
                    let event = WizardAction::SteppedBack {
                        from: state.step,
                        to: state.step.previous(),
                    };
                    Self::apply_event(state, &event);
                }
                SmallVec::new()
            }

            WizardAction::SetConfirmed { confirmed } => {
                if !state.step.is_review() {
                    let error = format!(
                        "Confirmation can only be toggled on the Review step (current: {})",
                        state.step
                    );
                    Self::apply_event(state, &WizardAction::ValidationFailed { error });
                    return SmallVec::new();
                }
                Self::apply_event(state, &WizardAction::ConfirmationSet { confirmed });
                SmallVec::new()
            }

            WizardAction::Deploy => {
                if !state.step.is_review() {
                    let error = format!(
                        "Deploy is only available on the Review step (current: {})",
                        state.step
                    );
                    Self::apply_event(state, &WizardAction::ValidationFailed { error });
                    return SmallVec::new();
                }
                if !state.confirmed {
                    let error =
                        "Configuration must be confirmed before deploying".to_string();
                    Self::apply_event(state, &WizardAction::ValidationFailed { error });
                    return SmallVec::new();
                }
                if state.deploy_requested_at.is_some() {
                    let error = "Deployment has already been requested".to_string();
                    Self::apply_event(state, &WizardAction::ValidationFailed { error });
                    return SmallVec::new();
                }
                let Some(config) = state.draft.to_config() else {
                    let error = "Configuration is incomplete".to_string();
                    Self::apply_event(state, &WizardAction::ValidationFailed { error });
                    return SmallVec::new();
                };

                let event = WizardAction::DeployRequested {
                    config: config.clone(),
                    requested_at: env.clock.now(),
                };
                Self::apply_event(state, &event);

                let deployer = env.deployer.clone();
                smallvec![Effect::future(async move {
                    match deployer.deploy(config).await {
                        Ok(()) => Some(WizardAction::DeployCompleted),
                        Err(error) => Some(WizardAction::DeployFailed {
                            error: error.to_string(),
                        }),
                    }
                })]
            }

            WizardAction::LookupAddress { address } => {
                if state.step != WizardStep::Location {
                    let error = format!(
                        "Address lookup is only available on the Location step (current: {})",
                        state.step
                    );
                    Self::apply_event(state, &WizardAction::ValidationFailed { error });
                    return SmallVec::new();
                }
                let geocoder = env.geocoder.clone();
                smallvec![Effect::future(async move {
                    match geocoder.resolve(&address).await {
                        Ok(coordinates) => Some(WizardAction::AddressResolved {
                            address,
                            coordinates,
                        }),
                        Err(error) => {
                            tracing::error!(%address, %error, "address lookup failed");
                            None
                        }
                    }
                })]
            }

            // ========== Events (replay) ==========
            event => {
                Self::apply_event(state, &event);
                SmallVec::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::deploy::{ContractDeployer, DeployError, LoggingDeployer};
    use crate::geocode::StaticGeocoder;
    use crate::types::{
        Benefit, Chain, ContractConfig, EventDetails, GeoZone, LocationSettings,
        MarketRulesInput, SecuritySettings, TicketTier,
    };
    use std::sync::Arc;
    use ticketforge_core::environment::Clock;
    use ticketforge_testing::{ReducerTest, assertions, test_clock};

    fn test_environment() -> WizardEnvironment {
        WizardEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(StaticGeocoder::with_known_cities()),
            Arc::new(LoggingDeployer::new()),
        )
    }

    struct RejectingDeployer;

    #[async_trait::async_trait]
    impl ContractDeployer for RejectingDeployer {
        async fn deploy(&self, _config: ContractConfig) -> Result<(), DeployError> {
            Err(DeployError::Rejected("chain unavailable".to_string()))
        }
    }

    fn details() -> EventDetails {
        EventDetails {
            name: "Summer Fest".to_string(),
            symbol: "fest".to_string(),
            description: "Three days of music".to_string(),
            chain: Chain::Polygon,
            total_supply: 5000,
            payment_token: "USDC".to_string(),
        }
    }

    fn tiers() -> Vec<TicketTier> {
        vec![TicketTier {
            name: "General Admission".to_string(),
            price: 0.05,
            supply: 4500,
            max_per_wallet: 4,
            benefits: vec![Benefit {
                name: "Entry".to_string(),
                details: "Festival grounds access".to_string(),
            }],
        }]
    }

    fn location() -> LocationSettings {
        LocationSettings {
            enabled: true,
            zones: vec![GeoZone {
                name: "Venue".to_string(),
                latitude: 40.7128,
                longitude: -74.0060,
                radius_m: 500.0,
            }],
        }
    }

    fn market() -> MarketRulesInput {
        MarketRulesInput {
            soulbound: false,
            enable_resale: true,
            royalty_percent: Some(5.0),
        }
    }

    /// Drives a fresh state through all five steps
    fn completed_state(env: &WizardEnvironment) -> WizardState {
        let reducer = WizardReducer::new();
        let mut state = WizardState::new();
        for action in [
            WizardAction::SubmitEventDetails { details: details() },
            WizardAction::SubmitTicketTiers { tiers: tiers() },
            WizardAction::SubmitSecurity {
                settings: SecuritySettings::default(),
            },
            WizardAction::SubmitLocation {
                settings: location(),
            },
            WizardAction::SubmitMarketRules { rules: market() },
        ] {
            let _ = reducer.reduce(&mut state, action, env);
        }
        assert_eq!(state.step, WizardStep::Review);
        assert!(state.draft.is_complete());
        state
    }

    #[test]
    fn accepted_details_advance_and_normalize() {
        ReducerTest::new(WizardReducer::new())
            .with_env(test_environment())
            .given_state(WizardState::new())
            .when_action(WizardAction::SubmitEventDetails { details: details() })
            .then_state(|state| {
                assert_eq!(state.step, WizardStep::TicketTiers);
                let accepted = state.draft.event_details.as_ref().unwrap();
                assert_eq!(accepted.symbol, "FEST");
                assert!(!state.has_errors());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn rejected_details_stay_on_step_with_errors() {
        let mut bad = details();
        bad.symbol = "SEVENCH".to_string();
        ReducerTest::new(WizardReducer::new())
            .with_env(test_environment())
            .given_state(WizardState::new())
            .when_action(WizardAction::SubmitEventDetails { details: bad })
            .then_state(|state| {
                assert_eq!(state.step, WizardStep::EventDetails);
                assert!(state.draft.event_details.is_none());
                let errors = state.last_errors.as_ref().unwrap();
                assert_eq!(
                    errors.get("symbol"),
                    Some("Symbol must be 6 characters or less")
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn zero_tiers_are_rejected() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = WizardState::new();
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitEventDetails { details: details() },
            &env,
        );
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitTicketTiers { tiers: Vec::new() },
            &env,
        );
        assert_eq!(state.step, WizardStep::TicketTiers);
        assert_eq!(
            state.last_errors.as_ref().unwrap().get("tiers"),
            Some("At least one tier is required")
        );
    }

    #[test]
    fn three_tiers_are_accepted() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = WizardState::new();
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitEventDetails { details: details() },
            &env,
        );
        let three: Vec<TicketTier> = tiers().into_iter().cycle().take(3).collect();
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitTicketTiers { tiers: three },
            &env,
        );
        assert_eq!(state.step, WizardStep::Security);
        assert_eq!(state.draft.tiers.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn out_of_order_submission_is_rejected() {
        ReducerTest::new(WizardReducer::new())
            .with_env(test_environment())
            .given_state(WizardState::new())
            .when_action(WizardAction::SubmitMarketRules { rules: market() })
            .then_state(|state| {
                assert_eq!(state.step, WizardStep::EventDetails);
                assert!(state.draft.market.is_none());
                assert!(state.last_error.is_some());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn go_back_is_a_no_op_on_the_first_step() {
        ReducerTest::new(WizardReducer::new())
            .with_env(test_environment())
            .given_state(WizardState::new())
            .when_action(WizardAction::GoBack)
            .then_state(|state| {
                assert_eq!(state.step, WizardStep::EventDetails);
                assert!(!state.has_errors());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn go_back_round_trip_keeps_completed_slices() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = WizardState::new();
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitEventDetails { details: details() },
            &env,
        );
        assert_eq!(state.step, WizardStep::TicketTiers);

        let _ = reducer.reduce(&mut state, WizardAction::GoBack, &env);
        assert_eq!(state.step, WizardStep::EventDetails);
        assert!(state.draft.event_details.is_some());

        // Resubmitting lands back on the same step with the same draft
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitEventDetails { details: details() },
            &env,
        );
        assert_eq!(state.step, WizardStep::TicketTiers);
        assert_eq!(
            state.draft.event_details.as_ref().unwrap().symbol,
            "FEST"
        );
    }

    #[test]
    fn leaving_review_clears_confirmation() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = completed_state(&env);
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SetConfirmed { confirmed: true },
            &env,
        );
        assert!(state.confirmed);

        let _ = reducer.reduce(&mut state, WizardAction::GoBack, &env);
        assert_eq!(state.step, WizardStep::MarketRules);
        assert!(!state.confirmed);
    }

    #[test]
    fn confirmation_requires_review_step() {
        ReducerTest::new(WizardReducer::new())
            .with_env(test_environment())
            .given_state(WizardState::new())
            .when_action(WizardAction::SetConfirmed { confirmed: true })
            .then_state(|state| {
                assert!(!state.confirmed);
                assert!(state.last_error.is_some());
            })
            .run();
    }

    #[test]
    fn deploy_requires_confirmation() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = completed_state(&env);
        let effects = reducer.reduce(&mut state, WizardAction::Deploy, &env);
        assertions::assert_no_effects(&effects);
        assert!(state.deploy_requested_at.is_none());
        assert_eq!(
            state.last_error.as_deref(),
            Some("Configuration must be confirmed before deploying")
        );
    }

    #[test]
    fn deploy_emits_future_effect_and_stamps_time() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = completed_state(&env);
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SetConfirmed { confirmed: true },
            &env,
        );
        let effects = reducer.reduce(&mut state, WizardAction::Deploy, &env);
        assertions::assert_has_future_effect(&effects);
        assert_eq!(state.deploy_requested_at, Some(test_clock().now()));
    }

    #[test]
    fn deploy_cannot_be_requested_twice() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = completed_state(&env);
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SetConfirmed { confirmed: true },
            &env,
        );
        let _ = reducer.reduce(&mut state, WizardAction::Deploy, &env);
        let effects = reducer.reduce(&mut state, WizardAction::Deploy, &env);
        assertions::assert_no_effects(&effects);
        assert_eq!(
            state.last_error.as_deref(),
            Some("Deployment has already been requested")
        );
    }

    #[tokio::test]
    async fn deploy_future_reports_completion() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = completed_state(&env);
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SetConfirmed { confirmed: true },
            &env,
        );
        let mut effects = reducer.reduce(&mut state, WizardAction::Deploy, &env);
        let Some(Effect::Future(fut)) = effects.pop() else {
            unreachable!("deploy must emit a future effect");
        };
        let followup = fut.await.unwrap();
        let _ = reducer.reduce(&mut state, followup, &env);
        assert!(state.deployed);
    }

    #[tokio::test]
    async fn failed_deploy_can_be_retried() {
        let env = WizardEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(StaticGeocoder::with_known_cities()),
            Arc::new(RejectingDeployer),
        );
        let reducer = WizardReducer::new();
        let mut state = completed_state(&env);
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SetConfirmed { confirmed: true },
            &env,
        );
        let mut effects = reducer.reduce(&mut state, WizardAction::Deploy, &env);
        let Some(Effect::Future(fut)) = effects.pop() else {
            unreachable!("deploy must emit a future effect");
        };
        let followup = fut.await.unwrap();
        let _ = reducer.reduce(&mut state, followup, &env);
        assert!(!state.deployed);
        assert!(state.deploy_requested_at.is_none());
        assert_eq!(
            state.last_error.as_deref(),
            Some("deployment rejected: chain unavailable")
        );

        // The deploy gate reopens after the failure
        let effects = reducer.reduce(&mut state, WizardAction::Deploy, &env);
        assertions::assert_has_future_effect(&effects);
    }

    #[tokio::test]
    async fn address_lookup_resolves_on_location_step() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = WizardState::new();
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitEventDetails { details: details() },
            &env,
        );
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitTicketTiers { tiers: tiers() },
            &env,
        );
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitSecurity {
                settings: SecuritySettings::default(),
            },
            &env,
        );
        assert_eq!(state.step, WizardStep::Location);

        let mut effects = reducer.reduce(
            &mut state,
            WizardAction::LookupAddress {
                address: "new york".to_string(),
            },
            &env,
        );
        let Some(Effect::Future(fut)) = effects.pop() else {
            unreachable!("lookup must emit a future effect");
        };
        let followup = fut.await.unwrap();
        let _ = reducer.reduce(&mut state, followup, &env);
        let lookup = state.last_lookup.as_ref().unwrap();
        assert_eq!(lookup.address, "new york");
        assert!((lookup.coordinates.latitude - 40.7128).abs() < 1e-9);
    }

    #[tokio::test]
    async fn failed_address_lookup_yields_no_action() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = WizardState::new();
        state.step = WizardStep::Location;

        let mut effects = reducer.reduce(
            &mut state,
            WizardAction::LookupAddress {
                address: "atlantis".to_string(),
            },
            &env,
        );
        let Some(Effect::Future(fut)) = effects.pop() else {
            unreachable!("lookup must emit a future effect");
        };
        assert!(fut.await.is_none());
    }

    #[test]
    fn address_lookup_requires_location_step() {
        ReducerTest::new(WizardReducer::new())
            .with_env(test_environment())
            .given_state(WizardState::new())
            .when_action(WizardAction::LookupAddress {
                address: "new york".to_string(),
            })
            .then_state(|state| {
                assert!(state.last_error.is_some());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn soulbound_market_rules_disable_resale() {
        let env = test_environment();
        let reducer = WizardReducer::new();
        let mut state = WizardState::new();
        for action in [
            WizardAction::SubmitEventDetails { details: details() },
            WizardAction::SubmitTicketTiers { tiers: tiers() },
            WizardAction::SubmitSecurity {
                settings: SecuritySettings::default(),
            },
            WizardAction::SubmitLocation {
                settings: location(),
            },
        ] {
            let _ = reducer.reduce(&mut state, action, &env);
        }
        let _ = reducer.reduce(
            &mut state,
            WizardAction::SubmitMarketRules {
                rules: MarketRulesInput {
                    soulbound: true,
                    enable_resale: true,
                    royalty_percent: None,
                },
            },
            &env,
        );
        let market = state.draft.market.unwrap();
        assert!(market.soulbound);
        assert!(!market.enable_resale);
        assert_eq!(market.royalty_percent, 0.0);
    }

    #[test]
    fn replaying_events_reconstructs_state() {
        let env = test_environment();
        let reducer = WizardReducer::new();

        // Events as the session would have emitted them
        let events = [
            WizardAction::EventDetailsAccepted {
                details: EventDetails {
                    symbol: "FEST".to_string(),
                    ..details()
                },
            },
            WizardAction::TicketTiersAccepted { tiers: tiers() },
            WizardAction::SecurityAccepted {
                settings: SecuritySettings::default(),
            },
        ];

        let mut replayed = WizardState::new();
        for event in events {
            let effects = reducer.reduce(&mut replayed, event, &env);
            assertions::assert_no_effects(&effects);
        }
        assert_eq!(replayed.step, WizardStep::Location);
        assert!(replayed.draft.event_details.is_some());
        assert!(replayed.draft.tiers.is_some());
        assert!(replayed.draft.security.is_some());
    }
}
