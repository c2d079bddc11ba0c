//! Subscription lifecycle: weak subscribers, include_current, unsubscribe

use std::sync::Arc;
use stockpot::{Action, Reducer, Store, StoreSubscriber};

#[derive(Clone, PartialEq, Debug)]
struct AppState {
    active_todos: usize,
}

struct CompleteTodo;

impl Action for CompleteTodo {}

struct CompleteTodoReducer;

impl Reducer for CompleteTodoReducer {
    type Action = CompleteTodo;
    type State = AppState;

    fn apply(&self, _action: &CompleteTodo, state: &AppState) -> AppState {
        AppState {
            active_todos: state.active_todos.saturating_sub(1),
        }
    }
}

struct BadgeCounter {
    name: &'static str,
}

impl StoreSubscriber<AppState> for BadgeCounter {
    fn on_state(&self, state: &AppState) {
        println!("   [{}] active todos: {}", self.name, state.active_todos);
    }
}

fn main() {
    println!("=== Subscription Lifecycle ===\n");

    let store = Store::new(AppState { active_todos: 3 });
    store.register(CompleteTodoReducer);

    // include_current notifies immediately with the current state.
    println!("1. Subscribing the sidebar badge (include_current = true)");
    let sidebar = Arc::new(BadgeCounter { name: "sidebar" });
    store.subscribe(&sidebar, true);

    println!("\n2. Subscribing the titlebar badge");
    let titlebar = Arc::new(BadgeCounter { name: "titlebar" });
    store.subscribe(&titlebar, false);

    println!("\n3. Completing a todo - both badges update");
    store.dispatch(CompleteTodo);

    println!("\n4. Dropping the titlebar badge - it vanishes on its own");
    drop(titlebar);
    store.dispatch(CompleteTodo);

    println!("\n5. Unsubscribing the sidebar badge explicitly");
    store.unsubscribe(&sidebar);
    store.dispatch(CompleteTodo);
    println!("   (no badge updates)");

    println!("\nFinal state: {:?}", store.state());
}
