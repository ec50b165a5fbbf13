//! Reusable behavior subtrees.
//!
//! Free functions returning boxed subtrees, organized in two layers:
//!
//! - **[`patterns`]**: small condition/action pairings and gated wrappers
//! - **[`tactics`]**: combat behaviors combining several patterns
//!
//! The complete per-archetype trees live in [`presets`](crate::presets)
//! and are assembled from these layers. Shared subtrees are generic over
//! [`AgentView`](crate::AgentView); the cover-fight tactics are
//! boss-specific.
//!
//! # Example
//!
//! ```rust,ignore
//! use behavior_tree::builder::selector;
//! use agent_ai::subtrees::{patterns, tactics};
//!
//! // Custom enemy: engage on sight, never patrol
//! let root = selector(vec![
//!     patterns::backtrack_when_target_dead(),
//!     patterns::engage_when_spotted(tactics::chase_or_attack()),
//! ]);
//! ```

pub mod patterns;
pub mod tactics;
