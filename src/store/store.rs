use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::ptr;
use std::sync::{Arc, RwLock, Weak};

use crate::action::Action;
use crate::reducer::Reducer;
use crate::subscriber::StoreSubscriber;

/// Type-erased registry entry for a registered reducer.
///
/// The registry is keyed by the `TypeId` of the action the reducer handles;
/// this trait recovers the concrete action type on the way back out.
trait RegisteredReducer<S>: Send + Sync {
    fn apply(&self, action: &dyn Any, state: &S) -> Option<S>;
}

struct Registered<R>(R);

impl<R> RegisteredReducer<R::State> for Registered<R>
where
    R: Reducer,
{
    fn apply(&self, action: &dyn Any, state: &R::State) -> Option<R::State> {
        action
            .downcast_ref::<R::Action>()
            .map(|action| self.0.apply(action, state))
    }
}

/// The centralized manager of application state.
///
/// A store owns a single state value and mutates it only through registered
/// [`Reducer`]s: call [`dispatch`](Store::dispatch) with an action, and the
/// reducer registered for that action type computes the next state. When the
/// result differs from the current state, the store commits it and notifies
/// every live subscriber through
/// [`StoreSubscriber::on_state`].
///
/// Stores are cheap shared handles: cloning one yields another handle to the
/// same state, registry, and subscriber set.
///
/// Make sure reducers are registered before dispatching actions - dispatching
/// an action with no matching reducer is a silent no-op.
///
/// # Example
///
/// ```
/// use stockpot::{Action, Reducer, Store};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct State {
///     counter: i32,
/// }
///
/// struct AddToCounter {
///     value: i32,
/// }
///
/// impl Action for AddToCounter {}
///
/// struct AddToCounterReducer;
///
/// impl Reducer for AddToCounterReducer {
///     type Action = AddToCounter;
///     type State = State;
///
///     fn apply(&self, action: &AddToCounter, state: &State) -> State {
///         State {
///             counter: state.counter + action.value,
///         }
///     }
/// }
///
/// let store = Store::new(State { counter: 0 });
/// store.register(AddToCounterReducer);
/// store.dispatch(AddToCounter { value: 42 });
/// assert_eq!(store.state().counter, 42);
/// ```
pub struct Store<S: 'static> {
    state: Arc<RwLock<S>>,
    reducers: Arc<RwLock<HashMap<TypeId, Arc<dyn RegisteredReducer<S>>>>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn StoreSubscriber<S>>>>>,
}

impl<S> Store<S>
where
    S: Clone + PartialEq + 'static,
{
    /// Create a new store with the given initial state.
    ///
    /// The reducer registry and the subscriber set start out empty.
    pub fn new(initial_state: S) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducers: Arc::new(RwLock::new(HashMap::new())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get a clone of the current state.
    pub fn state(&self) -> S {
        self.state.read().unwrap().clone()
    }

    /// Read the current state without cloning.
    ///
    /// Treat the borrowed value as a read-only snapshot; the next committed
    /// dispatch replaces it wholesale.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Register a reducer.
    ///
    /// When an action of type `R::Action` is dispatched, `reducer.apply` is
    /// called to perform the mutation. Registering another reducer for the
    /// same action type overwrites the previous one. The store keeps a strong
    /// reference to the reducer.
    pub fn register<R>(&self, reducer: R)
    where
        R: Reducer<State = S>,
    {
        let entry: Arc<dyn RegisteredReducer<S>> = Arc::new(Registered(reducer));
        self.reducers
            .write()
            .unwrap()
            .insert(TypeId::of::<R::Action>(), entry);
    }

    /// Dispatch an action to the store.
    ///
    /// Looks up the reducer registered for the action's type and applies it
    /// to the current state. If the result differs from the current state
    /// (by `PartialEq`), the store commits it and notifies all current
    /// subscribers. Dispatching an action with no registered reducer is a
    /// no-op.
    ///
    /// The reducer and the subscribers run with no store locks held, so both
    /// may call back into this store (dispatch further actions, subscribe,
    /// unsubscribe). A panic in either propagates to the caller; subscribers
    /// later in the same notification round are then not notified.
    pub fn dispatch<A>(&self, action: A)
    where
        A: Action,
    {
        let reducer = {
            let reducers = self.reducers.read().unwrap();
            match reducers.get(&TypeId::of::<A>()) {
                Some(reducer) => Arc::clone(reducer),
                None => return,
            }
        };

        let current = self.state.read().unwrap().clone();
        let new_state = match reducer.apply(&action, &current) {
            Some(new_state) => new_state,
            None => return,
        };

        {
            let mut state = self.state.write().unwrap();
            if new_state == *state {
                return;
            }
            *state = new_state.clone();
        }

        self.notify(&new_state);
    }

    /// Subscribe to state updates.
    ///
    /// After every committed state change, `subscriber.on_state` is called
    /// with the new state. If `include_current` is true, the subscriber is
    /// additionally notified once, immediately, with the current state -
    /// whether or not it was already subscribed.
    ///
    /// Subscribing is idempotent: multiple calls with the same subscriber
    /// yield a single membership.
    ///
    /// The store keeps only a weak reference. Hold on to the `Arc` for as
    /// long as the subscriber should stay subscribed; once the last outside
    /// reference is dropped it silently stops being notified.
    pub fn subscribe<T>(&self, subscriber: &Arc<T>, include_current: bool)
    where
        T: StoreSubscriber<S> + 'static,
    {
        let arc: Arc<dyn StoreSubscriber<S>> = subscriber.clone();
        let weak: Weak<dyn StoreSubscriber<S>> = Arc::downgrade(&arc);
        {
            let mut subscribers = self.subscribers.write().unwrap();
            subscribers.retain(|existing| existing.strong_count() > 0);
            let present = subscribers
                .iter()
                .any(|existing| ptr::addr_eq(existing.as_ptr(), weak.as_ptr()));
            if !present {
                subscribers.push(weak);
            }
        }

        if include_current {
            subscriber.on_state(&self.state());
        }
    }

    /// Unsubscribe from state updates.
    ///
    /// The subscriber will no longer be notified when the state changes.
    /// Unsubscribing an entity that is not subscribed is a no-op.
    pub fn unsubscribe<T>(&self, subscriber: &Arc<T>)
    where
        T: StoreSubscriber<S> + 'static,
    {
        let ptr = Arc::as_ptr(subscriber);
        self.subscribers
            .write()
            .unwrap()
            .retain(|existing| !ptr::addr_eq(existing.as_ptr(), ptr));
    }

    /// Notify all live subscribers of a committed state change.
    ///
    /// Iterates a snapshot of the subscriber set so that subscribers may
    /// mutate it (e.g. unsubscribe themselves) from within `on_state`. Dead
    /// weak references are pruned along the way.
    fn notify(&self, state: &S) {
        let snapshot: Vec<Arc<dyn StoreSubscriber<S>>> = {
            let mut subscribers = self.subscribers.write().unwrap();
            subscribers.retain(|existing| existing.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in snapshot {
            subscriber.on_state(state);
        }
    }
}

impl<S: 'static> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducers: Arc::clone(&self.reducers),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}
