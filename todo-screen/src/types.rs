//! Domain types for the todo screen.
//!
//! A todo list is an ordered collection of records plus the two pieces of
//! transient input state a single-screen editor needs: the draft text in the
//! shared input field, and the record currently selected for editing.

use serde::{Deserialize, Serialize};
use taskflow_macros::Action;

/// Unique identifier for a todo record
///
/// Opaque string, assigned at creation time, stable for the record's
/// lifetime. Identifiers come from the environment's id source and are
/// never reused, even after deletions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(String);

impl TodoId {
    /// Creates a `TodoId` from a raw string
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Display text of the record
    pub title: String,
}

impl TodoItem {
    /// Creates a new todo record
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// What the presentation layer should render for the list area
///
/// A pure function of the item count: an empty list swaps the scrolling
/// list out for the placeholder view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListDisplay<'a> {
    /// Render these records, in stored order
    Items(&'a [TodoItem]),
    /// The list is empty; show the placeholder view
    Fallback,
}

/// State of the todo screen
///
/// Display order is insertion order; no two records ever share an id. When
/// `editing` is set it always names a record currently present in `items` -
/// deletion of the editing target clears it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoListState {
    /// All records, in display order
    pub items: Vec<TodoItem>,
    /// Current value of the shared text input; may be empty
    pub draft: String,
    /// The record selected for in-place editing, or `None` (Idle)
    pub editing: Option<TodoId>,
}

impl TodoListState {
    /// Creates the screen's initial state: two seed records, empty draft,
    /// nothing being edited
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(vec![
            TodoItem::new(TodoId::new("01"), "Assignment"),
            TodoItem::new(TodoId::new("02"), "Wash Dishes"),
        ])
    }

    /// Creates a state holding the given records, with an empty draft and
    /// nothing being edited
    #[must_use]
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            draft: String::new(),
            editing: None,
        }
    }

    /// Returns this state with the draft preset, for hosts restoring input
    #[must_use]
    pub fn with_draft(mut self, draft: impl Into<String>) -> Self {
        self.draft = draft.into();
        self
    }

    /// Returns the records in display order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Returns the number of records
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns a record by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Checks if a record exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the current draft text
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Returns true when a record is selected for editing
    ///
    /// Drives the action button: Save while editing, Add otherwise.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Returns the id of the record being edited, if any
    #[must_use]
    pub fn editing_target(&self) -> Option<&TodoId> {
        self.editing.as_ref()
    }

    /// Derives what the list area should show
    #[must_use]
    pub fn display(&self) -> ListDisplay<'_> {
        if self.items.is_empty() {
            ListDisplay::Fallback
        } else {
            ListDisplay::Items(&self.items)
        }
    }
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

/// User-interaction events for the todo screen
///
/// Variants marked `#[mutation]` can change the rendered list; the rest only
/// affect the input field or the edit selection. Every event is handled to
/// completion before the next one is processed.
#[derive(Action, Clone, Debug, Serialize, Deserialize)]
pub enum TodoListAction {
    /// Keystroke into the shared text input; replaces the draft wholesale
    DraftChanged(String),

    /// The Add button: commits the draft as a new record
    #[mutation]
    AddPressed,

    /// The per-row delete button
    #[mutation]
    DeletePressed {
        /// Record to remove
        id: TodoId,
    },

    /// The per-row edit button: loads the row's title into the input
    EditPressed {
        /// Record to edit
        id: TodoId,
    },

    /// The Save button: commits the draft into the record being edited
    #[mutation]
    SavePressed,
}
