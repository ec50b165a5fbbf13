//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Selector::new(vec![...]))`,
//! you can use shorter functions like `selector(vec![...])`.

use crate::{Behavior, Branch, Dispatch, Gate, Selector, Sequence};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates a dispatch node.
///
/// Shorthand for `Box::new(Dispatch::new(key, arms))`.
#[inline]
pub fn dispatch<C: 'static, K: PartialEq + Send + Sync + 'static>(
    key: impl Fn(&C) -> K + Send + Sync + 'static,
    arms: Vec<(K, Box<dyn Behavior<C>>)>,
) -> Box<dyn Behavior<C>> {
    Box::new(Dispatch::new(key, arms))
}

/// Creates a branch node.
///
/// Shorthand for `Box::new(Branch::new(pred, when_true, when_false))`.
#[inline]
pub fn branch<C: 'static>(
    pred: impl Fn(&C) -> bool + Send + Sync + 'static,
    when_true: Box<dyn Behavior<C>>,
    when_false: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Branch::new(pred, when_true, when_false))
}

/// Creates a gate node.
///
/// Shorthand for `Box::new(Gate::new(gate, trigger, child))`.
#[inline]
pub fn gate<C: 'static>(
    gate: impl Fn(&C) -> bool + Send + Sync + 'static,
    trigger: impl Fn(&C) -> bool + Send + Sync + 'static,
    child: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Gate::new(gate, trigger, child))
}
