//! The subscriber contract.

mod subscriber;

pub use subscriber::StoreSubscriber;
