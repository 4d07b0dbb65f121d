#![cfg(not(feature = "disable-test-cases"))]
mod unit_a;
mod unit_b;

use std::sync::atomic::Ordering;

use futures::executor::block_on;
use pretty_assertions::assert_eq;
use testcase_registry::{enumerate, registry, Registration, TestDescriptor, REGISTRATION};

fn find(name: &str) -> Vec<&'static TestDescriptor> {
    enumerate().filter(|d| d.name() == name).collect()
}

fn find_one(name: &str) -> &'static TestDescriptor {
    let found = find(name);
    assert_eq!(found.len(), 1, "expected exactly one {name}");
    found[0]
}

#[test]
fn registration_is_enabled() {
    assert_eq!(REGISTRATION, Registration::Enabled);
}

#[test]
fn every_declaration_is_registered() {
    // b/1 a/1 a/2, c/1 c/2 dup dup fresh/state fails.
    assert_eq!(registry().len(), 9);
}

#[test]
fn scenario_names_and_lines() {
    let expected = [
        ("b/1", unit_a::B1_LINE),
        ("a/1", unit_a::A1_LINE),
        ("a/2", unit_a::A2_LINE),
        ("c/1", unit_b::C1_LINE),
        ("c/2", unit_b::C2_LINE),
    ];

    for (name, line) in expected {
        let d = find_one(name);
        assert_eq!(d.line(), line, "{d}");
    }

    assert!(find_one("b/1").file().ends_with("unit_a.rs"));
    assert!(find_one("c/1").file().ends_with("unit_b.rs"));
}

#[test]
fn one_unit_keeps_file_order() {
    let unit_a = enumerate()
        .filter(|d| d.file().ends_with("unit_a.rs"))
        .map(|d| d.name())
        .collect::<Vec<_>>();
    assert_eq!(unit_a, vec!["b/1", "a/1", "a/2"]);
}

#[test]
fn enumeration_is_stable() {
    let first = enumerate().map(|d| d as *const TestDescriptor).collect::<Vec<_>>();
    let second = enumerate().map(|d| d as *const TestDescriptor).collect::<Vec<_>>();
    assert_eq!(first, second);
}

#[test]
fn same_name_on_different_lines_does_not_collide() {
    let dups = find("dup");
    assert_eq!(
        dups.iter().map(|d| d.line()).collect::<Vec<_>>(),
        vec![unit_b::DUP_FIRST_LINE, unit_b::DUP_SECOND_LINE]
    );
    for d in dups {
        assert!(block_on(d.start()).is_ok());
    }
}

#[test]
fn bodies_resolve() {
    for name in ["b/1", "a/1", "a/2", "c/1", "c/2"] {
        let d = find_one(name);
        assert!(block_on(d.start()).is_ok(), "{d}");
    }
}

#[test]
fn failures_are_returned_untouched() {
    let err = block_on(find_one("fails").start()).unwrap_err();
    assert_eq!(err.to_string(), "this test fails on purpose");
}

#[test]
fn repeated_runs_are_independent() {
    let d = find_one("fresh/state");
    let before = unit_b::FRESH_STATE_CALLS.load(Ordering::SeqCst);

    let first = d.start();
    let second = d.start();
    assert!(block_on(second).is_ok());
    assert!(block_on(first).is_ok());

    assert_eq!(unit_b::FRESH_STATE_CALLS.load(Ordering::SeqCst) - before, 2);
}

#[test]
fn body_pointer_is_the_registered_callable() {
    let d = find_one("c/1");
    let body = d.body();
    assert!(block_on(body()).is_ok());
}
