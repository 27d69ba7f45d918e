//! # Taskflow Testing
//!
//! Testing utilities and helpers for the Taskflow architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - Assertion helpers for reducers
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use taskflow_testing::{ReducerTest, assertions, test_ids};
//!
//! #[test]
//! fn add_appends_an_item() {
//!     ReducerTest::new(TodoListReducer::new())
//!         .with_env(TodoListEnvironment::new(test_ids(3)))
//!         .given_state(TodoListState::new().with_draft("Buy milk"))
//!         .when_action(TodoListAction::AddPressed)
//!         .then_state(|state| assert_eq!(state.count(), 3))
//!         .then_effects(assertions::assert_no_effects)
//!         .run();
//! }
//! ```

/// Ergonomic Given-When-Then harness for reducers
pub mod reducer_test;

/// Mock implementations of Environment traits
///
/// Identifier generation is the one injected dependency the feature reducers
/// in this workspace use, so the mocks here are id sources: a plain shared
/// sequence for deterministic ids, and a recording wrapper for asserting on
/// the ids a reducer consumed.
pub mod mocks {
    use std::sync::{Arc, Mutex};

    use taskflow_core::environment::{IdGenerator, SequentialIds};

    /// Id source that records every identifier it hands out
    ///
    /// Wraps [`SequentialIds`] so tests can assert both on the state a
    /// reducer produced and on the exact ids it consumed along the way.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use taskflow_core::environment::IdGenerator;
    /// use taskflow_testing::mocks::RecordingIds;
    ///
    /// let ids = Arc::new(RecordingIds::starting_at(3));
    /// let _ = ids.next_id();
    /// let _ = ids.next_id();
    /// assert_eq!(ids.issued(), vec!["03".to_string(), "04".to_string()]);
    /// ```
    #[derive(Debug)]
    pub struct RecordingIds {
        inner: SequentialIds,
        issued: Mutex<Vec<String>>,
    }

    impl RecordingIds {
        /// Create a recording generator whose first identifier is `first`
        #[must_use]
        pub fn starting_at(first: u64) -> Self {
            Self {
                inner: SequentialIds::starting_at(first),
                issued: Mutex::new(Vec::new()),
            }
        }

        /// Identifiers handed out so far, in order
        #[must_use]
        pub fn issued(&self) -> Vec<String> {
            self.issued.lock().map(|guard| guard.clone()).unwrap_or_default()
        }
    }

    impl IdGenerator for RecordingIds {
        fn next_id(&self) -> String {
            let id = self.inner.next_id();
            if let Ok(mut issued) = self.issued.lock() {
                issued.push(id.clone());
            }
            id
        }
    }

    /// Create a shared sequential id source for tests
    ///
    /// A screen seeded with records "01" and "02" pairs with `test_ids(3)`.
    #[must_use]
    pub fn test_ids(first: u64) -> Arc<SequentialIds> {
        Arc::new(SequentialIds::starting_at(first))
    }
}

/// Property-based testing strategies
///
/// Draft-text strategies for the universal properties of input-driven list
/// screens: anything with a non-blank trim must be accepted by the add path,
/// anything blank must be suppressed by it.
pub mod properties {
    use proptest::prelude::*;

    /// Strategy producing strings whose trim is non-empty
    ///
    /// Generated values may carry leading and trailing whitespace; the body
    /// always starts with a printable character.
    pub fn non_blank_text() -> impl Strategy<Value = String> {
        ("[ \t]{0,3}", "[0-9A-Za-z][ 0-9A-Za-z]{0,24}", "[ \t]{0,3}")
            .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
    }

    /// Strategy producing strings whose trim is empty
    pub fn blank_text() -> impl Strategy<Value = String> {
        "[ \t]{0,8}"
    }
}

// Re-export commonly used items
pub use mocks::{RecordingIds, test_ids};
pub use reducer_test::{ReducerTest, assertions};
