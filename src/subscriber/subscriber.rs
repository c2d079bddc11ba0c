/// An observer notified after every committed state change.
///
/// The store holds subscribers through weak references: keep your own `Arc`
/// to the subscriber for as long as it should stay subscribed. Once the last
/// outside `Arc` is dropped, the subscriber silently disappears from the
/// store's notification set.
///
/// Any `Fn(&S) + Send + Sync` closure is a valid subscriber through the
/// blanket implementation below, so ad-hoc observers need no named type:
///
/// ```
/// use std::sync::Arc;
/// use stockpot::Store;
///
/// let store = Store::new(0);
/// let logger = Arc::new(|state: &i32| println!("state is now {state}"));
/// store.subscribe(&logger, false);
/// ```
pub trait StoreSubscriber<S>: Send + Sync {
    /// Notify the subscriber of a state change.
    ///
    /// Called with the new state every time the store commits a change, and
    /// once immediately at subscribe time when `include_current` is set.
    fn on_state(&self, state: &S);
}

impl<S, F> StoreSubscriber<S> for F
where
    F: Fn(&S) + Send + Sync,
{
    fn on_state(&self, state: &S) {
        self(state)
    }
}
