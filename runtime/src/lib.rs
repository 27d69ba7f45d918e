//! # Taskflow Runtime
//!
//! Runtime implementation for the Taskflow architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to reducers
//! - **Action Broadcast**: Lets the presentation layer observe every processed action
//!
//! ## Example
//!
//! ```ignore
//! use taskflow_runtime::Store;
//! use taskflow_core::reducer::Reducer;
//!
//! let store = Store::new(
//!     initial_state,
//!     my_reducer,
//!     environment,
//! );
//!
//! // Send an action
//! store.send(Action::RowTapped).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use taskflow_core::{effect::Effect, reducer::Reducer};
use tokio::sync::{RwLock, broadcast};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Feature reducers never produce errors - invalid input is silently
    /// suppressed inside the reducer. These errors exist only at the store
    /// lifecycle boundary.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        ///
        /// Some effects were still running when the timeout elapsed.
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),
    }
}

pub use error::StoreError;

/// Decrements the pending-effect counter when a spawned effect finishes,
/// including when its task panics.
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (feature logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with feedback loop)
///
/// Actions serialize at the state write lock: each reduction runs to
/// completion before the next action is processed, which is the
/// run-to-completion guarantee UI event handling relies on.
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
///     TodoListState::new(),
///     TodoListReducer::new(),
///     environment,
/// );
///
/// store.send(TodoListAction::AddPressed).await?;
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
    pending_effects: Arc<AtomicUsize>,
    /// Broadcast channel observers use to learn which actions were processed.
    ///
    /// A presentation layer subscribes here to know when to re-read state and
    /// re-render. Every action that passed through the reducer is broadcast,
    /// including actions produced by effects.
    action_broadcast: broadcast::Sender<A>,
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
            shutdown: Arc::clone(&self.shutdown),
            pending_effects: Arc::clone(&self.pending_effects),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// Creates a Store with the default action broadcast capacity of 16
    /// (increase with [`Store::with_broadcast_capacity`]).
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (feature logic)
    /// - `environment`: Injected dependencies
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Create a new Store with custom action broadcast capacity
    ///
    /// Use this constructor when observers may lag behind a burst of actions
    /// (a keystroke stream into a text input, for example).
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (feature logic)
    /// - `environment`: Injected dependencies
    /// - `capacity`: Action broadcast channel capacity (number of actions buffered)
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
            action_broadcast,
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires write lock on state
    /// 2. Calls reducer with (state, action, environment)
    /// 3. Broadcasts the processed action to observers
    /// 4. Executes returned effects asynchronously
    ///
    /// Multiple concurrent `send()` calls serialize at the reducer level.
    /// `send()` returns after starting effect execution, not completion.
    ///
    /// # Arguments
    ///
    /// - `action`: The action to process
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<(), StoreError>
    where
        R: Clone,
        E: Clone,
    {
        if self.shutdown.load(Ordering::Acquire) {
            tracing::warn!("Rejected action: store is shutting down");
            return Err(StoreError::ShutdownInProgress);
        }

        tracing::debug!("Processing action");

        let effects = {
            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");
            self.reducer
                .reduce(&mut *state, action.clone(), &self.environment)
        };

        // Observers only see an action once it has been applied to state
        let _ = self.action_broadcast.send(action);

        tracing::trace!("Executing {} effects", effects.len());
        for effect in effects {
            self.execute_effect(effect);
        }

        Ok(())
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let item_count = store.state(|s| s.items.len()).await;
    /// ```
    ///
    /// # Arguments
    ///
    /// - `f`: Closure that receives a reference to state and returns a value
    ///
    /// # Returns
    ///
    /// The value returned by the closure
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&*state)
    }

    /// Subscribe to processed actions
    ///
    /// Returns a receiver that yields every action after the reducer has
    /// applied it. The presentation layer uses this as its re-render signal.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Initiate graceful shutdown of the store
    ///
    /// Used when the owning screen unmounts. This method:
    /// 1. Sets the shutdown flag (rejecting new actions)
    /// 2. Waits for pending effects to complete (with timeout)
    ///
    /// Actions produced by effects that complete during shutdown are dropped,
    /// not applied.
    ///
    /// # Arguments
    ///
    /// - `timeout`: Maximum time to wait for effects to complete
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before
    /// all pending effects complete.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("Initiating graceful shutdown");

        self.shutdown.store(true, Ordering::Release);

        let start = std::time::Instant::now();
        let poll_interval = Duration::from_millis(10);

        loop {
            let pending = self.pending_effects.load(Ordering::Acquire);

            if pending == 0 {
                tracing::info!("All effects completed, shutdown successful");
                return Ok(());
            }

            if start.elapsed() >= timeout {
                tracing::error!(
                    pending_effects = pending,
                    "Shutdown timeout: {} effects still running",
                    pending
                );
                return Err(StoreError::ShutdownTimeout(pending));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Execute an effect
    ///
    /// # Effect Types
    ///
    /// - `None`: No-op
    /// - `Future`: Executes async computation, sends resulting action if `Some`
    /// - `Delay`: Waits for duration, then sends action
    /// - `Parallel`: Executes effects concurrently
    ///
    /// Effect execution failures never halt the store: effects are
    /// fire-and-forget, and the [`PendingGuard`] keeps the pending counter
    /// accurate even when an effect task panics.
    fn execute_effect(&self, effect: Effect<A>)
    where
        R: Clone,
        E: Clone,
    {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
            },
            Effect::Future(fut) => {
                tracing::trace!("Executing Effect::Future");
                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let pending_guard = PendingGuard(Arc::clone(&self.pending_effects));
                let store = self.clone();

                tokio::spawn(async move {
                    let _pending = pending_guard;

                    if let Some(action) = fut.await {
                        tracing::trace!("Effect::Future produced an action, sending to store");
                        let _ = store.send(action).await;
                    } else {
                        tracing::trace!("Effect::Future completed with no action");
                    }
                });
            },
            Effect::Delay { duration, action } => {
                tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let pending_guard = PendingGuard(Arc::clone(&self.pending_effects));
                let store = self.clone();

                tokio::spawn(async move {
                    let _pending = pending_guard;

                    tokio::time::sleep(duration).await;
                    tracing::trace!("Effect::Delay completed, sending action");
                    let _ = store.send(*action).await;
                });
            },
            Effect::Parallel(effects) => {
                tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                for effect in effects {
                    self.execute_effect(effect);
                }
            },
        }
    }
}
