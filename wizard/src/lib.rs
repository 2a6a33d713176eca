//! # Ticketforge Wizard
//!
//! A headless step-wizard for configuring NFT event-ticketing contracts.
//!
//! The wizard walks a linear sequence of steps (event details, ticket
//! tiers, security, location, market rules, review), validating each
//! submission and accumulating an immutable [`types::ContractDraft`]. Once
//! every step is complete and the user confirms on the review step, the
//! finished [`types::ContractConfig`] is handed to a
//! [`deploy::ContractDeployer`].
//!
//! The whole flow is a pure reducer over [`actions::WizardAction`] values;
//! side effects (geocoding, deployment) are returned as effect descriptions
//! and executed by [`store::WizardStore`].
//!
//! ## Example
//!
//! ```ignore
//! let env = WizardEnvironment::new(
//!     Arc::new(SystemClock),
//!     Arc::new(StaticGeocoder::with_known_cities()),
//!     Arc::new(LoggingDeployer::new()),
//! );
//! let store = WizardStore::new(env);
//! store.dispatch(WizardAction::SubmitEventDetails { details }).await;
//! ```

pub mod actions;
pub mod config;
pub mod deploy;
pub mod environment;
pub mod geocode;
pub mod projection;
pub mod reducer;
pub mod store;
pub mod types;
pub mod validate;

pub use actions::WizardAction;
pub use environment::WizardEnvironment;
pub use reducer::WizardReducer;
pub use store::WizardStore;
pub use types::{ContractConfig, ContractDraft, WizardState, WizardStep};
pub use validate::FieldErrors;
