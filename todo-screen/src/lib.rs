//! Todo screen state built on the Taskflow architecture.
//!
//! This crate implements the state of a single mobile screen that lets a
//! user add, edit, and delete items in an in-memory list. It demonstrates:
//!
//! - A screen-local domain model (records, draft text, editing target)
//! - A pure reducer handling all user-interaction events
//! - Id generation injected through the environment
//! - Testing with `ReducerTest` and property tests
//!
//! There is no persistence and no networking; the list lives exactly as
//! long as the screen does.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use taskflow_core::environment::SequentialIds;
//! use todo_screen::{
//!     TodoListAction, TodoListEnvironment, TodoListReducer, TodoListState, TodoListStore,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Seed records occupy ids "01" and "02", so fresh ids start at 3
//! let env = TodoListEnvironment::new(Arc::new(SequentialIds::starting_at(3)));
//! let store = TodoListStore::new(TodoListState::new(), TodoListReducer::new(), env);
//!
//! // Type into the input and press Add
//! store
//!     .send(TodoListAction::DraftChanged("Buy milk".to_string()))
//!     .await?;
//! store.send(TodoListAction::AddPressed).await?;
//!
//! // Read state for rendering
//! let count = store.state(|s| s.count()).await;
//! println!("Records on screen: {count}");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoListEnvironment, TodoListReducer};
pub use types::{ListDisplay, TodoId, TodoItem, TodoListAction, TodoListState};

/// The store owning one screen's todo list state
///
/// Created when the screen mounts and shut down when it unmounts.
pub type TodoListStore =
    taskflow_runtime::Store<TodoListState, TodoListAction, TodoListEnvironment, TodoListReducer>;
