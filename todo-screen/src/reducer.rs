//! Reducer logic for the todo screen.
//!
//! Every operation is a total function over the state: it either performs
//! its effect or silently suppresses invalid input. There is no error
//! reporting at this level.

use std::sync::Arc;

use taskflow_core::{
    SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec,
};

use crate::types::{TodoId, TodoItem, TodoListAction, TodoListState};

/// Environment dependencies for the todo list reducer
#[derive(Clone)]
pub struct TodoListEnvironment {
    /// Source of record identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoListEnvironment {
    /// Creates a new `TodoListEnvironment`
    ///
    /// A screen starting from the seeded state pairs with an id source
    /// starting at 3, since the seeds occupy "01" and "02".
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

/// Reducer for the todo screen
///
/// A pure state machine: reductions mutate state in place and produce no
/// effects. The screen has no background work.
#[derive(Clone, Debug)]
pub struct TodoListReducer;

impl TodoListReducer {
    /// Creates a new `TodoListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TodoListReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoListReducer {
    type State = TodoListState;
    type Action = TodoListAction;
    type Environment = TodoListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::trace!(action = action.kind(), "Reducing todo screen action");

        match action {
            TodoListAction::DraftChanged(text) => {
                state.draft = text;
            },

            TodoListAction::AddPressed => {
                // Blank input is suppressed; an accepted title is stored untrimmed
                if !state.draft.trim().is_empty() {
                    let id = TodoId::new(env.ids.next_id());
                    let title = std::mem::take(&mut state.draft);
                    state.items.push(TodoItem::new(id, title));
                }
            },

            TodoListAction::DeletePressed { id } => {
                state.items.retain(|item| item.id != id);

                // Deleting the record under edit returns the screen to Idle;
                // the draft is left as the user typed it
                if state.editing.as_ref() == Some(&id) {
                    state.editing = None;
                }
            },

            TodoListAction::EditPressed { id } => {
                // Loading the row's title clobbers any unsaved draft
                if let Some(title) = state.get(&id).map(|item| item.title.clone()) {
                    state.draft = title;
                    state.editing = Some(id);
                }
            },

            TodoListAction::SavePressed => {
                // Externally guarded: the Save button only shows while editing.
                // No trim and no empty check on the committed title.
                if let Some(target) = state.editing.take() {
                    let title = std::mem::take(&mut state.draft);
                    if let Some(item) = state.items.iter_mut().find(|item| item.id == target) {
                        item.title = title;
                    }
                }
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}
