//! Store for wizard sessions.
//!
//! The store owns the session state behind an async lock and runs the
//! reducer for every dispatched action. Effects returned by the reducer are
//! executed to completion before `dispatch` returns, feeding any follow-up
//! actions back through the reducer, so callers always observe the settled
//! state.

use crate::actions::WizardAction;
use crate::environment::WizardEnvironment;
use crate::reducer::WizardReducer;
use crate::types::WizardState;
use std::collections::VecDeque;
use std::sync::Arc;
use ticketforge_core::{effect::Effect, reducer::Reducer};
use tokio::sync::RwLock;

/// Store driving one configuration session
pub struct WizardStore {
    state: Arc<RwLock<WizardState>>,
    reducer: WizardReducer,
    env: WizardEnvironment,
}

impl WizardStore {
    /// Creates a store with a fresh session
    #[must_use]
    pub fn new(env: WizardEnvironment) -> Self {
        Self {
            state: Arc::new(RwLock::new(WizardState::new())),
            reducer: WizardReducer::new(),
            env,
        }
    }

    /// Dispatches an action and executes its effects to completion
    ///
    /// Follow-up actions produced by effects are reduced in turn until the
    /// queue drains.
    pub async fn dispatch(&self, action: WizardAction) {
        let mut queue = VecDeque::from([action]);

        while let Some(action) = queue.pop_front() {
            let effects = {
                let mut state = self.state.write().await;
                self.reducer.reduce(&mut state, action, &self.env)
            };
            for effect in effects {
                Self::execute(effect, &mut queue).await;
            }
        }
    }

    /// Executes one effect, pushing any produced actions onto the queue
    ///
    /// Composite effects are flattened iteratively; `Parallel` is executed
    /// in order here since the wizard has no throughput requirements.
    async fn execute(effect: Effect<WizardAction>, queue: &mut VecDeque<WizardAction>) {
        let mut worklist = VecDeque::from([effect]);

        while let Some(effect) = worklist.pop_front() {
            match effect {
                Effect::None => {}
                Effect::Parallel(effects) | Effect::Sequential(effects) => {
                    for nested in effects.into_iter().rev() {
                        worklist.push_front(nested);
                    }
                }
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    queue.push_back(*action);
                }
                Effect::Future(fut) => {
                    if let Some(action) = fut.await {
                        queue.push_back(action);
                    }
                }
            }
        }
    }

    /// Snapshot of the current session state
    pub async fn state(&self) -> WizardState {
        self.state.read().await.clone()
    }
}
