#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn new_debounce_is_idle() {
    let mut d = Debounce::new(500.0);
    assert!(!d.is_pending());
    assert!(!d.take_due(1_000_000.0));
}

#[test]
fn arm_returns_delay() {
    let mut d = Debounce::new(500.0);
    assert_eq!(d.arm(10.0), 500.0);
    assert!(d.is_pending());
}

#[test]
fn not_due_before_quiet_period() {
    let mut d = Debounce::new(500.0);
    d.arm(1000.0);
    assert!(!d.take_due(1499.0));
    assert!(d.is_pending());
}

#[test]
fn due_exactly_at_quiet_period() {
    let mut d = Debounce::new(500.0);
    d.arm(1000.0);
    assert!(d.take_due(1500.0));
    assert!(!d.is_pending());
}

#[test]
fn fires_only_once() {
    let mut d = Debounce::new(500.0);
    d.arm(0.0);
    assert!(d.take_due(600.0));
    assert!(!d.take_due(700.0));
}

#[test]
fn rearm_pushes_deadline_back() {
    let mut d = Debounce::new(500.0);
    d.arm(0.0);
    d.arm(300.0);
    // The wake-up scheduled by the first arm lands at 500 and finds nothing due.
    assert!(!d.take_due(500.0));
    assert!(d.take_due(800.0));
}

#[test]
fn cancel_clears_deadline() {
    let mut d = Debounce::new(500.0);
    d.arm(0.0);
    d.cancel();
    assert!(!d.is_pending());
    assert!(!d.take_due(10_000.0));
}

#[test]
fn remaining_counts_down_to_zero() {
    let mut d = Debounce::new(500.0);
    assert_eq!(d.remaining_ms(0.0), None);
    d.arm(100.0);
    assert_eq!(d.remaining_ms(350.0), Some(250.0));
    assert_eq!(d.remaining_ms(900.0), Some(0.0));
}
