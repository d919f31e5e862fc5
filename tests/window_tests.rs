// Host-side tests for the floating window stack.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bus {
    include!("../src/bus.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod windows {
    include!("../src/windows.rs");
}

use constants::{WINDOW_Z_BASE, WINDOW_Z_STEP};
use std::cell::RefCell;
use std::rc::Rc;
use windows::*;

#[test]
fn register_is_idempotent() {
    let mut stack = WindowStack::new();
    assert_eq!(stack.register("experience"), WINDOW_Z_BASE);
    assert_eq!(stack.register("experience"), WINDOW_Z_BASE);
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.active(), None);
}

#[test]
fn unknown_ids_report_baseline() {
    let stack = WindowStack::new();
    assert_eq!(stack.z_order_of("nobody"), WINDOW_Z_BASE);
    assert!(!stack.is_active("nobody"));
}

#[test]
fn bring_to_front_is_strictly_increasing() {
    let mut stack = WindowStack::new();
    let ids = ["a", "b", "a", "c", "c", "b", "a"];
    let mut prev = 0;
    for id in ids {
        let z = stack.bring_to_front(id);
        assert!(z > prev, "{id}: {z} <= {prev}");
        prev = z;
        assert!(stack.is_active(id));
        let max = stack.windows().values().copied().max().unwrap();
        assert_eq!(stack.z_order_of(id), max);
    }
    assert_eq!(prev, WINDOW_Z_BASE + WINDOW_Z_STEP * ids.len() as u64);
}

#[test]
fn bring_to_front_registers_unseen_ids() {
    let mut stack = WindowStack::new();
    let z = stack.bring_to_front("portfolio");
    assert_eq!(z, WINDOW_Z_BASE + WINDOW_Z_STEP);
    assert_eq!(stack.register("portfolio"), z);
    assert_eq!(stack.active(), Some("portfolio"));
}

#[test]
fn unregister_active_clears_designation() {
    let mut stack = WindowStack::new();
    stack.bring_to_front("a");
    stack.bring_to_front("b");
    stack.unregister("a");
    assert_eq!(stack.active(), Some("b"));
    stack.unregister("b");
    assert_eq!(stack.active(), None);
    assert!(stack.is_empty());
    // no replacement is chosen, and the running max is kept
    let z = stack.bring_to_front("a");
    assert_eq!(z, WINDOW_Z_BASE + 3 * WINDOW_Z_STEP);
}

#[test]
fn active_stream_reports_changes() {
    let mut stack = WindowStack::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    stack.subscribe(move |ev| sink.borrow_mut().push(ev.clone()));

    stack.register("a");
    stack.bring_to_front("a");
    stack.bring_to_front("b");
    stack.unregister("a");
    stack.unregister("b");

    assert_eq!(
        *seen.borrow(),
        vec![
            WindowEvent::ActiveChanged(Some("a".into())),
            WindowEvent::ActiveChanged(Some("b".into())),
            WindowEvent::ActiveChanged(None),
        ]
    );
}

#[test]
fn repeated_bring_to_front_publishes_once() {
    let mut stack = WindowStack::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    stack.subscribe(move |ev| sink.borrow_mut().push(ev.clone()));

    let first = stack.bring_to_front("a");
    let second = stack.bring_to_front("a");
    assert!(second > first);
    assert_eq!(stack.z_order_of("a"), second);
    assert_eq!(*seen.borrow(), vec![WindowEvent::ActiveChanged(Some("a".into()))]);
}
