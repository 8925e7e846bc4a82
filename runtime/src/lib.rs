//! # Shopkeep Runtime
//!
//! Runtime implementation for Shopkeep reducers.
//!
//! This crate provides the Store runtime that owns state, coordinates reducer
//! execution and drains effects.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Event Loop**: The action → reducer → effects → action feedback loop,
//!   run to completion inside every `send`
//!
//! ## Example
//!
//! ```ignore
//! use shopkeep_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use shopkeep_core::{effect::Effect, reducer::Reducer};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store module - the runtime coordinator
pub mod store {
    use super::{Arc, Effect, Reducer, RwLock, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, written only while the reducer runs)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// Every `send` runs to completion: the reducer, every effect it returns,
    /// and every action those effects feed back. Readers calling
    /// [`Store::state`] afterwards always observe the settled state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(
    ///     ShoppingListState::default(),
    ///     ShoppingListReducer::new(),
    ///     ShoppingListEnvironment::production(),
    /// );
    ///
    /// store.send(ShoppingAction::AddItem { name: "bread".into() }).await;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer under the state write lock, then executes the
        /// returned effects. Actions produced by `Effect::Future` are queued
        /// and reduced in FIFO order before this method returns.
        ///
        /// # Returns
        ///
        /// The number of actions reduced, including the one sent and any fed
        /// back by effects.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> usize {
            let mut queue = VecDeque::from([action]);
            let mut reduced = 0;

            while let Some(action) = queue.pop_front() {
                tracing::debug!(?action, "Processing action");
                metrics::counter!("store.commands.total").increment(1);

                let effects = {
                    let mut state = self.state.write().await;
                    tracing::trace!("Acquired write lock on state");

                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();

                    let start = std::time::Instant::now();
                    let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                    metrics::histogram!("store.reducer.duration_seconds")
                        .record(start.elapsed().as_secs_f64());

                    tracing::trace!("Reducer completed, returned {} effects", effects.len());
                    effects
                };
                reduced += 1;

                for effect in effects {
                    match effect {
                        Effect::None => {
                            tracing::trace!("Executing Effect::None (no-op)");
                            metrics::counter!("store.effects.executed", "type" => "none")
                                .increment(1);
                        },
                        Effect::Future(fut) => {
                            tracing::trace!("Executing Effect::Future");
                            metrics::counter!("store.effects.executed", "type" => "future")
                                .increment(1);
                            if let Some(next) = fut.await {
                                tracing::trace!("Effect::Future produced an action, queueing");
                                queue.push_back(next);
                            }
                        },
                    }
                }
            }

            tracing::debug!(reduced, "Action processing completed");
            reduced
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let item_count = store.state(|s| s.items.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
