//! # Taskflow Core
//!
//! Core traits and types for the Taskflow unidirectional architecture.
//!
//! This crate provides the fundamental abstractions for building screen-local,
//! event-driven state machines using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (a screen's data)
//! - **Action**: All possible inputs to a reducer (user-interaction events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use taskflow_core::*;
//!
//! // Define your state
//! #[derive(Clone, Debug)]
//! struct ScreenState {
//!     entries: Vec<Entry>,
//! }
//!
//! // Define your actions
//! #[derive(Clone, Debug)]
//! enum ScreenAction {
//!     EntryTapped { id: EntryId },
//!     RefreshPressed,
//! }
//!
//! // Implement the reducer
//! impl Reducer for ScreenReducer {
//!     type State = ScreenState;
//!     type Action = ScreenAction;
//!     type Environment = ScreenEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ScreenState,
//!         action: ScreenAction,
//!         env: &ScreenEnvironment,
//!     ) -> SmallVec<[Effect<ScreenAction>; 4]> {
//!         // Feature logic goes here
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export so consumers share one smallvec version
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for feature logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all feature logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for feature logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for ScreenReducer {
    ///     type State = ScreenState;
    ///     type Action = ScreenAction;
    ///     type Environment = ScreenEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut ScreenState,
    ///         action: ScreenAction,
    ///         env: &ScreenEnvironment,
    ///     ) -> SmallVec<[Effect<ScreenAction>; 4]> {
    ///         match action {
    ///             ScreenAction::RefreshPressed => {
    ///                 // Feature logic here
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should
    /// happen, returned from reducers and executed by the Store runtime.
    ///
    /// A pure state machine (such as a screen with no background work) returns
    /// `Effect::None` from every reduction.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Delayed action (for timeouts, debounce)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter. Identifier generation is the one
/// dependency a screen-local list needs; screens with more I/O add their
/// own traits alongside it.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};

    /// IdGenerator trait - abstracts identifier generation for testability
    ///
    /// Record identifiers are opaque strings assigned at creation time and
    /// stable for the record's lifetime. Injecting the generator keeps
    /// reducers deterministic under test.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskflow_core::environment::{IdGenerator, SequentialIds};
    ///
    /// let ids = SequentialIds::starting_at(3);
    /// assert_eq!(ids.next_id(), "03");
    /// assert_eq!(ids.next_id(), "04");
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce the next identifier
        fn next_id(&self) -> String;
    }

    /// Monotonically increasing identifier source
    ///
    /// Identifiers are decimal strings, zero-padded to two digits so short
    /// lists sort lexicographically. The counter only moves forward, so an
    /// identifier handed out once is never handed out again - deletions do
    /// not open gaps for reuse.
    #[derive(Debug)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        /// Create a generator whose first identifier is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }
    }

    impl Default for SequentialIds {
        fn default() -> Self {
            Self::starting_at(1)
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            format!("{n:02}")
        }
    }
}
