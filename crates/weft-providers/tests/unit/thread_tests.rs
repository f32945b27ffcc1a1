//! Tests the correctness of the thread scope

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use weft_domain::ports::{Scope, Value};
use weft_domain::{Dependency, Error, Result, Type};
use weft_providers::ThreadScope;

fn provide_counted(scope: &ThreadScope, serial_id: usize, calls: &AtomicUsize) -> Value {
    scope
        .provide(serial_id, 2, &Dependency::of_type(Type::named("Counter")), &|| {
            Ok(Arc::new(calls.fetch_add(1, Ordering::SeqCst)) as Value)
        })
        .unwrap()
}

#[test]
fn test_same_thread_gets_same_value() {
    let scope = ThreadScope::new();
    let calls = AtomicUsize::new(0);
    let first = provide_counted(&scope, 0, &calls);
    let second = provide_counted(&scope, 0, &calls);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_resources_are_cached_independently() {
    let scope = ThreadScope::new();
    let calls = AtomicUsize::new(0);
    let first = provide_counted(&scope, 0, &calls);
    let second = provide_counted(&scope, 1, &calls);
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_each_thread_gets_its_own_value() {
    let scope = Arc::new(ThreadScope::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let main = provide_counted(&scope, 0, &calls);

    let (other_scope, other_calls) = (Arc::clone(&scope), Arc::clone(&calls));
    let other = thread::spawn(move || {
        let first = provide_counted(&other_scope, 0, &other_calls);
        let second = provide_counted(&other_scope, 0, &other_calls);
        assert!(Arc::ptr_eq(&first, &second));
        first
    })
    .join()
    .unwrap();

    assert!(!Arc::ptr_eq(&main, &other));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_failed_supply_is_not_cached() {
    let scope = ThreadScope::new();
    let dependency = Dependency::of_type(Type::named("Counter"));
    let failed = scope.provide(0, 1, &dependency, &|| -> Result<Value> {
        Err(Error::supply_failed("not yet"))
    });
    assert!(failed.is_err());
    let value = scope
        .provide(0, 1, &dependency, &|| Ok(Arc::new(7_u32) as Value))
        .unwrap();
    assert_eq!(*value.downcast::<u32>().unwrap(), 7);
}

struct Tracked(Arc<AtomicUsize>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn provide_tracked(scope: &ThreadScope, dropped: &Arc<AtomicUsize>) {
    let dropped = Arc::clone(dropped);
    scope
        .provide(0, 1, &Dependency::of_type(Type::named("Tracked")), &move || {
            Ok(Arc::new(Tracked(Arc::clone(&dropped))) as Value)
        })
        .unwrap();
}

#[test]
fn test_values_are_released_when_threads_exit() {
    let scope = Arc::new(ThreadScope::new());
    let dropped = Arc::new(AtomicUsize::new(0));

    for _ in 0..64 {
        let (scope, dropped) = (Arc::clone(&scope), Arc::clone(&dropped));
        thread::spawn(move || provide_tracked(&scope, &dropped))
            .join()
            .unwrap();
    }

    assert_eq!(dropped.load(Ordering::SeqCst), 64);
}

#[test]
fn test_dropping_the_scope_releases_values_of_the_current_thread() {
    let dropped = Arc::new(AtomicUsize::new(0));
    let scope = ThreadScope::new();
    provide_tracked(&scope, &dropped);
    assert_eq!(dropped.load(Ordering::SeqCst), 0);

    drop(scope);
    assert_eq!(dropped.load(Ordering::SeqCst), 1);
}

#[test]
fn test_scope_instances_do_not_share_values() {
    let calls = AtomicUsize::new(0);
    let first = provide_counted(&ThreadScope::new(), 0, &calls);
    let second = provide_counted(&ThreadScope::new(), 0, &calls);
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
