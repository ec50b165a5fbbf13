//! Frame-ticked behavior tree engine for game agents.
//!
//! This library provides a minimal behavior tree implementation for agents
//! that are re-evaluated once per simulation frame.
//!
//! - **One tick per frame**: the whole tree is re-run from the root every
//!   frame; no node suspends or blocks inside a tick
//! - **Claim semantics**: nodes return whether they took the tick, not
//!   whether they "succeeded" (see [`Status`])
//! - **Borrowed blackboard**: the tree owns the blackboard and lends it
//!   into each tick; nodes never store references to it
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Claimed or Pass (see the type docs for the exact reading)
//! - Composite nodes: [`Sequence`], [`Selector`], [`Dispatch`], [`Branch`]
//! - Decorator nodes: [`Gate`]
//! - [`BehaviorTree`]: root node plus owned blackboard, ticked per frame

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Branch, Dispatch, Selector, Sequence};
pub use decorator::Gate;
pub use status::Status;
pub use tree::BehaviorTree;
