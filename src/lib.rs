//! # Stockpot
//!
//! A minimal unidirectional state-management library for Rust.
//!
//! All application state lives in a single [`Store`] and changes only through
//! dispatched actions:
//!
//! ## Contracts (what you implement)
//!
//! - [`Action`] - a typed intent to mutate state; routed by its concrete type
//! - [`Reducer`] - a pure mutation handler bound to one action type
//! - [`StoreSubscriber`] - an observer notified after each committed change
//!
//! ## Store (what the library provides)
//!
//! - [`Store<S>`](Store) - owns the state, the reducer registry, and the
//!   subscriber set
//! - Change detection by value equality: a reduction that produces an equal
//!   state commits nothing and notifies no one
//! - Weakly-held subscribers: dropping your last `Arc` to a subscriber
//!   silently removes it

pub mod action;
pub mod reducer;
pub mod store;
pub mod subscriber;

// Re-export main types for convenience
pub use action::Action;
pub use reducer::Reducer;
pub use store::Store;
pub use subscriber::StoreSubscriber;

#[cfg(test)]
mod tests {
    use super::*;

    struct Add {
        amount: i32,
    }

    impl Action for Add {}

    struct AddReducer;

    impl Reducer for AddReducer {
        type Action = Add;
        type State = i32;

        fn apply(&self, action: &Add, state: &i32) -> i32 {
            state + action.amount
        }
    }

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = Store::new(0);
        store.register(AddReducer);
        store.dispatch(Add { amount: 42 });
        assert_eq!(store.state(), 42);
    }
}
