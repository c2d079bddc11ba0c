use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

use stockpot::{Action, Reducer, Store};

#[derive(Clone, PartialEq)]
struct State {
    value: u64,
}

struct SetValue {
    value: u64,
}

impl Action for SetValue {}

struct SetValueReducer;

impl Reducer for SetValueReducer {
    type Action = SetValue;
    type State = State;

    fn apply(&self, action: &SetValue, _state: &State) -> State {
        State {
            value: action.value,
        }
    }
}

fn store_creation_benchmark(c: &mut Criterion) {
    c.bench_function("store_creation", |b| {
        b.iter(|| {
            let store = Store::new(State {
                value: black_box(42),
            });
            store
        });
    });
}

fn register_benchmark(c: &mut Criterion) {
    let store = Store::new(State { value: 0 });

    c.bench_function("register", |b| {
        b.iter(|| {
            store.register(SetValueReducer);
        });
    });
}

fn dispatch_benchmark(c: &mut Criterion) {
    let store = Store::new(State { value: 0 });
    store.register(SetValueReducer);

    c.bench_function("dispatch", |b| {
        let mut i = 1;
        b.iter(|| {
            store.dispatch(SetValue {
                value: black_box(i),
            });
            i += 1;
        });
    });
}

fn dispatch_unchanged_benchmark(c: &mut Criterion) {
    let store = Store::new(State { value: 0 });
    store.register(SetValueReducer);

    // Every dispatch produces a state equal to the current one, so the
    // equality gate stops it before commit and notification.
    c.bench_function("dispatch_unchanged", |b| {
        b.iter(|| {
            store.dispatch(SetValue {
                value: black_box(0),
            });
        });
    });
}

fn dispatch_fanout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_fanout");

    for subscriber_count in [1, 10, 100].iter() {
        let store = Store::new(State { value: 0 });
        store.register(SetValueReducer);

        let mut subscribers = Vec::with_capacity(*subscriber_count);
        for _ in 0..*subscriber_count {
            let subscriber = Arc::new(|_: &State| {
                // Empty subscriber
            });
            store.subscribe(&subscriber, false);
            subscribers.push(subscriber);
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(subscriber_count),
            subscriber_count,
            |b, _| {
                let mut i = 1;
                b.iter(|| {
                    store.dispatch(SetValue {
                        value: black_box(i),
                    });
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    store_creation_benchmark,
    register_benchmark,
    dispatch_benchmark,
    dispatch_unchanged_benchmark,
    dispatch_fanout_benchmark,
);
criterion_main!(benches);
