//! The reducer contract.
//!
//! Reducers are pure mutation handlers, each bound to a single action type.

mod reducer;

pub use reducer::Reducer;
