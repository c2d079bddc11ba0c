//! Complete counter application driven by actions and reducers

use std::sync::Arc;
use stockpot::{Action, Reducer, Store};

#[derive(Clone, PartialEq, Debug)]
struct CounterState {
    count: i32,
    step: i32,
    history: Vec<i32>,
}

impl CounterState {
    fn new() -> Self {
        Self {
            count: 0,
            step: 1,
            history: vec![0],
        }
    }

    fn with_count(&self, count: i32) -> Self {
        let mut history = self.history.clone();
        history.push(count);
        Self {
            count,
            step: self.step,
            history,
        }
    }
}

struct Increment;
struct Decrement;
struct SetStep {
    step: i32,
}
struct Reset;

impl Action for Increment {}
impl Action for Decrement {}
impl Action for SetStep {}
impl Action for Reset {}

struct IncrementReducer;

impl Reducer for IncrementReducer {
    type Action = Increment;
    type State = CounterState;

    fn apply(&self, _action: &Increment, state: &CounterState) -> CounterState {
        state.with_count(state.count + state.step)
    }
}

struct DecrementReducer;

impl Reducer for DecrementReducer {
    type Action = Decrement;
    type State = CounterState;

    fn apply(&self, _action: &Decrement, state: &CounterState) -> CounterState {
        state.with_count(state.count - state.step)
    }
}

struct SetStepReducer;

impl Reducer for SetStepReducer {
    type Action = SetStep;
    type State = CounterState;

    fn apply(&self, action: &SetStep, state: &CounterState) -> CounterState {
        CounterState {
            step: action.step,
            ..state.clone()
        }
    }
}

struct ResetReducer;

impl Reducer for ResetReducer {
    type Action = Reset;
    type State = CounterState;

    fn apply(&self, _action: &Reset, state: &CounterState) -> CounterState {
        state.with_count(0)
    }
}

fn main() {
    println!("=== Complete Counter Application ===\n");

    println!("1. Initializing counter store and registering reducers");
    let store = Store::new(CounterState::new());
    store.register(IncrementReducer);
    store.register(DecrementReducer);
    store.register(SetStepReducer);
    store.register(ResetReducer);

    println!("\n2. Subscribing a logger");
    let logger = Arc::new(|state: &CounterState| {
        println!("   [State] Count: {}, Step: {}", state.count, state.step);
    });
    store.subscribe(&logger, true);

    println!("\n3. Incrementing...");
    store.dispatch(Increment);
    store.dispatch(Increment);
    store.dispatch(Increment);

    println!("\n4. Changing step size to 5");
    store.dispatch(SetStep { step: 5 });

    println!("\n5. Incrementing with new step...");
    store.dispatch(Increment);

    println!("\n6. Decrementing...");
    store.dispatch(Decrement);
    store.dispatch(Decrement);

    println!("\n7. History:");
    store.read(|state| {
        println!("   {:?}", state.history);
    });

    println!("\n8. Resetting...");
    store.dispatch(Reset);

    println!("\n9. Final history:");
    store.read(|state| {
        println!("   {:?}", state.history);
    });

    println!("\n✓ Counter application complete!");
}
