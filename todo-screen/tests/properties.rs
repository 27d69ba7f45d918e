//! Property tests for the todo screen reducer
//!
//! The universal properties of the screen: any draft with a non-blank trim
//! is accepted by the add path exactly once, any blank draft is suppressed,
//! and saving rewrites only the target record's title.

use proptest::prelude::*;
use taskflow_core::reducer::Reducer;
use taskflow_testing::properties::{blank_text, non_blank_text};
use taskflow_testing::test_ids;
use todo_screen::{TodoId, TodoListAction, TodoListEnvironment, TodoListReducer, TodoListState};

fn test_env() -> TodoListEnvironment {
    TodoListEnvironment::new(test_ids(3))
}

proptest! {
    #[test]
    fn adding_any_non_blank_draft_appends_exactly_one(s in non_blank_text()) {
        let env = test_env();
        let reducer = TodoListReducer::new();
        let mut state = TodoListState::new().with_draft(s.clone());
        let before = state.count();

        let _ = reducer.reduce(&mut state, TodoListAction::AddPressed, &env);

        prop_assert_eq!(state.count(), before + 1);
        // The stored title is the draft verbatim, whitespace included
        prop_assert_eq!(
            state.items().last().map(|item| item.title.as_str()),
            Some(s.as_str())
        );
        prop_assert_eq!(state.draft(), "");
        prop_assert!(!state.is_editing());
    }

    #[test]
    fn adding_any_blank_draft_changes_nothing(s in blank_text()) {
        let env = test_env();
        let reducer = TodoListReducer::new();
        let mut state = TodoListState::new().with_draft(s.clone());
        let items_before = state.items().to_vec();

        let _ = reducer.reduce(&mut state, TodoListAction::AddPressed, &env);

        prop_assert_eq!(state.items(), items_before.as_slice());
        prop_assert_eq!(state.draft(), s.as_str());
        prop_assert!(!state.is_editing());
    }

    #[test]
    fn deleting_a_present_id_removes_exactly_that_record(idx in 0usize..2) {
        let env = test_env();
        let reducer = TodoListReducer::new();
        let mut state = TodoListState::new();
        let id = state.items()[idx].id.clone();

        let _ = reducer.reduce(
            &mut state,
            TodoListAction::DeletePressed { id: id.clone() },
            &env,
        );

        prop_assert_eq!(state.count(), 1);
        prop_assert!(!state.exists(&id));
    }

    #[test]
    fn saving_preserves_id_and_position(s in non_blank_text()) {
        let env = test_env();
        let reducer = TodoListReducer::new();
        let mut state = TodoListState::new();

        let _ = reducer.reduce(
            &mut state,
            TodoListAction::EditPressed { id: TodoId::new("01") },
            &env,
        );
        let _ = reducer.reduce(&mut state, TodoListAction::DraftChanged(s.clone()), &env);
        let _ = reducer.reduce(&mut state, TodoListAction::SavePressed, &env);

        prop_assert_eq!(state.count(), 2);
        prop_assert_eq!(&state.items()[0].id, &TodoId::new("01"));
        prop_assert_eq!(state.items()[0].title.as_str(), s.as_str());
        prop_assert_eq!(state.items()[1].title.as_str(), "Wash Dishes");
        prop_assert!(!state.is_editing());
        prop_assert_eq!(state.draft(), "");
    }

    #[test]
    fn added_records_always_get_fresh_ids(a in non_blank_text(), b in non_blank_text()) {
        let env = test_env();
        let reducer = TodoListReducer::new();
        let mut state = TodoListState::new();

        let _ = reducer.reduce(&mut state, TodoListAction::DraftChanged(a), &env);
        let _ = reducer.reduce(&mut state, TodoListAction::AddPressed, &env);
        let _ = reducer.reduce(&mut state, TodoListAction::DraftChanged(b), &env);
        let _ = reducer.reduce(&mut state, TodoListAction::AddPressed, &env);

        let ids: Vec<&TodoId> = state.items().iter().map(|item| &item.id).collect();
        for (i, left) in ids.iter().enumerate() {
            for right in &ids[i + 1..] {
                prop_assert_ne!(*left, *right);
            }
        }
    }
}
