//! The state container.
//!
//! The store owns the state value, the reducer registry, and the subscriber
//! set, and mediates every mutation: actions go in through [`Store::dispatch`],
//! subscribers hear about committed changes through their `on_state` method.

mod store;

pub use store::Store;
