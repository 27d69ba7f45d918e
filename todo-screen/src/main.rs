//! CLI demo for the todo screen.
//!
//! Drives the seeded screen through a full session: typing, adding,
//! editing, and deleting down to the placeholder view. The binary plays the
//! presentation layer's role: it re-renders the list after every mutation
//! and picks the placeholder when the list empties.

use std::sync::Arc;
use std::time::Duration;

use taskflow_core::environment::SequentialIds;
use todo_screen::{
    ListDisplay, TodoId, TodoListAction, TodoListEnvironment, TodoListReducer, TodoListState,
    TodoListStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_screen=debug,taskflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Screen ===");

    // Seed records occupy ids "01" and "02", so fresh ids start at 3
    let env = TodoListEnvironment::new(Arc::new(SequentialIds::starting_at(3)));
    let store = TodoListStore::new(TodoListState::new(), TodoListReducer::new(), env);

    println!("\nInitial screen:");
    store.state(render).await;

    // Type a task into the input and press Add
    dispatch(&store, TodoListAction::DraftChanged("Buy milk".to_string())).await?;
    dispatch(&store, TodoListAction::AddPressed).await?;

    // Rework an existing task: the edit button loads its title into the input
    dispatch(
        &store,
        TodoListAction::EditPressed {
            id: TodoId::new("02"),
        },
    )
    .await?;
    let draft = store.state(|s| s.draft().to_string()).await;
    println!("(input now reads {draft:?}; the action button shows Save)");
    dispatch(
        &store,
        TodoListAction::DraftChanged("Wash and dry dishes".to_string()),
    )
    .await?;
    dispatch(&store, TodoListAction::SavePressed).await?;

    // Clear the list record by record; the last delete reveals the placeholder
    for raw in ["01", "02", "03"] {
        dispatch(&store, TodoListAction::DeletePressed { id: TodoId::new(raw) }).await?;
    }

    store.shutdown(Duration::from_secs(1)).await?;
    println!("\n=== Screen unmounted ===");
    Ok(())
}

/// Send one user-interaction event and re-render the list if it changed
async fn dispatch(
    store: &TodoListStore,
    action: TodoListAction,
) -> Result<(), taskflow_runtime::StoreError> {
    let mutation = action.is_mutation();
    println!("\n>>> {}", action.kind());
    store.send(action).await?;
    if mutation {
        store.state(render).await;
    }
    Ok(())
}

/// Print what the list area shows for this state
fn render(state: &TodoListState) {
    match state.display() {
        ListDisplay::Items(items) => {
            for item in items {
                println!("  [{}] {}", item.id, item.title);
            }
        },
        ListDisplay::Fallback => println!("  (no tasks yet - placeholder view)"),
    }
}
