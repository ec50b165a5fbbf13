//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides [`Sequence`] (step chains), [`Selector`] (priority
//! lists), [`Dispatch`] (keyed multi-way switching) and [`Branch`] (boolean
//! two-way switching).

use crate::{Behavior, Status};

/// Type alias for a predicate evaluated against the blackboard.
type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// Runs child behaviors in order until one yields.
///
/// # Semantics
///
/// A `Sequence` evaluates its children from left to right:
/// - If a child returns `Claimed`, the step is satisfied and the sequence
///   **continues** to the next child
/// - If a child returns `Pass`, the sequence **aborts immediately** and
///   returns `Pass`
/// - If every child claims, the sequence returns `Claimed`
///
/// Use this for condition-then-action chains: the conditions claim when
/// they hold, and the trailing action only runs once every step before it
/// was satisfied.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn run(&mut self, ctx: &mut C) -> Status {
        // Advance through the chain until a step yields
        for child in &mut self.children {
            match child.run(ctx) {
                Status::Claimed => continue,         // Step satisfied
                Status::Pass => return Status::Pass, // Abort the chain
            }
        }
        // Every step claimed
        Status::Claimed
    }
}

/// Runs child behaviors in priority order until one claims the tick.
///
/// # Semantics
///
/// A `Selector` evaluates its children from left to right:
/// - If a child returns `Claimed`, the selector **stops immediately** and
///   returns `Claimed`; later siblings are not run this tick
/// - If a child returns `Pass`, the selector **continues** to the next child
/// - If every child passes, the selector returns `Pass`
///
/// Child order encodes priority. The two-child form expresses fallback
/// pairs such as "pursue while out of range, attack once the pursuit
/// yields"; longer lists express idle/patrol style priority ladders.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn run(&mut self, ctx: &mut C) -> Status {
        // Try children in priority order until one takes the tick
        for child in &mut self.children {
            match child.run(ctx) {
                Status::Claimed => return Status::Claimed, // Tick taken
                Status::Pass => continue,                  // Next candidate
            }
        }
        // Nobody wanted the tick
        Status::Pass
    }
}

/// Forwards each tick to exactly one child, selected by a blackboard key.
///
/// # Semantics
///
/// A `Dispatch` evaluates its key function against the blackboard and runs
/// the first arm whose key compares equal:
/// - The matched child's status is returned as-is
/// - No other arm runs that tick
/// - A key with no matching arm is an **inert tick**: nothing runs and the
///   dispatch returns `Pass`
///
/// The unmatched case is deliberately not an error. New key values (a new
/// fight phase, say) may exist before a subtree is wired for them, and the
/// agent should simply do nothing on those ticks.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_tree::Dispatch;
///
/// let tree = Dispatch::new(
///     |ctx: &FightContext| ctx.phase,
///     vec![
///         (Phase::Opening, opening_subtree()),
///         (Phase::Enraged, enraged_subtree()),
///     ],
/// );
/// ```
pub struct Dispatch<C, K> {
    key: Box<dyn Fn(&C) -> K + Send + Sync>,
    arms: Vec<(K, Box<dyn Behavior<C>>)>,
}

impl<C, K: PartialEq> Dispatch<C, K> {
    /// Creates a new dispatch from a key function and `(key, child)` arms.
    ///
    /// # Panics
    ///
    /// Panics if `arms` is empty.
    pub fn new(
        key: impl Fn(&C) -> K + Send + Sync + 'static,
        arms: Vec<(K, Box<dyn Behavior<C>>)>,
    ) -> Self {
        assert!(!arms.is_empty(), "Dispatch must have at least one arm");
        Self {
            key: Box::new(key),
            arms,
        }
    }
}

impl<C, K: PartialEq + Send + Sync> Behavior<C> for Dispatch<C, K> {
    fn run(&mut self, ctx: &mut C) -> Status {
        let current = (self.key)(ctx);
        for (key, child) in &mut self.arms {
            if *key == current {
                return child.run(ctx);
            }
        }
        // No subtree wired for this key: inert tick
        Status::Pass
    }
}

/// Switches between two subtrees on a blackboard predicate.
///
/// # Semantics
///
/// Each tick, the predicate is evaluated against the blackboard:
/// - `true` runs the `when_true` child and returns its status
/// - `false` runs the `when_false` child and returns its status
///
/// Exactly one side runs per tick. The switched-out side is simply not
/// evaluated; any state it holds is frozen until the predicate flips back.
/// Typical use is a stunned/normal split where the stunned subtree itself
/// owns the countdown that eventually clears the flag.
pub struct Branch<C> {
    pred: Predicate<C>,
    when_true: Box<dyn Behavior<C>>,
    when_false: Box<dyn Behavior<C>>,
}

impl<C> Branch<C> {
    /// Creates a new branch from a predicate and the two subtrees.
    pub fn new(
        pred: impl Fn(&C) -> bool + Send + Sync + 'static,
        when_true: Box<dyn Behavior<C>>,
        when_false: Box<dyn Behavior<C>>,
    ) -> Self {
        Self {
            pred: Box::new(pred),
            when_true,
            when_false,
        }
    }
}

impl<C> Behavior<C> for Branch<C> {
    fn run(&mut self, ctx: &mut C) -> Status {
        if (self.pred)(ctx) {
            self.when_true.run(ctx)
        } else {
            self.when_false.run(ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestContext {
        runs: Vec<&'static str>,
        phase: u8,
        flag: bool,
    }

    struct Claim(&'static str);
    impl Behavior<TestContext> for Claim {
        fn run(&mut self, ctx: &mut TestContext) -> Status {
            ctx.runs.push(self.0);
            Status::Claimed
        }
    }

    struct Yield(&'static str);
    impl Behavior<TestContext> for Yield {
        fn run(&mut self, ctx: &mut TestContext) -> Status {
            ctx.runs.push(self.0);
            Status::Pass
        }
    }

    #[test]
    fn sequence_claims_when_all_steps_claim() {
        let mut seq = Sequence::new(vec![Box::new(Claim("a")), Box::new(Claim("b"))]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.run(&mut ctx), Status::Claimed);
        assert_eq!(ctx.runs, vec!["a", "b"]);
    }

    #[test]
    fn sequence_aborts_on_first_yield() {
        let mut seq = Sequence::new(vec![
            Box::new(Claim("a")),
            Box::new(Yield("b")),
            Box::new(Claim("c")), // Must not run
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.run(&mut ctx), Status::Pass);
        assert_eq!(ctx.runs, vec!["a", "b"]);
    }

    #[test]
    fn selector_stops_at_first_claim() {
        let mut sel = Selector::new(vec![
            Box::new(Yield("a")),
            Box::new(Claim("b")),
            Box::new(Claim("c")), // Must not run
        ]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.run(&mut ctx), Status::Claimed);
        assert_eq!(ctx.runs, vec!["a", "b"]);
    }

    #[test]
    fn selector_claiming_child_suppresses_all_siblings() {
        // Priority pair: while the first child claims, the second must
        // never be invoked that tick.
        let mut sel = Selector::new(vec![Box::new(Claim("idle")), Box::new(Claim("patrol"))]);

        let mut ctx = TestContext::default();
        for _ in 0..3 {
            sel.run(&mut ctx);
        }
        assert_eq!(ctx.runs, vec!["idle", "idle", "idle"]);
    }

    #[test]
    fn selector_passes_when_all_yield() {
        let mut sel = Selector::new(vec![Box::new(Yield("a")), Box::new(Yield("b"))]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.run(&mut ctx), Status::Pass);
    }

    #[test]
    fn dispatch_runs_exactly_the_mapped_arm() {
        let mut disp = Dispatch::new(
            |ctx: &TestContext| ctx.phase,
            vec![
                (0u8, Box::new(Claim("zero")) as Box<dyn Behavior<_>>),
                (1u8, Box::new(Claim("one"))),
                (2u8, Box::new(Claim("two"))),
            ],
        );

        let mut ctx = TestContext {
            phase: 1,
            ..Default::default()
        };
        assert_eq!(disp.run(&mut ctx), Status::Claimed);
        assert_eq!(ctx.runs, vec!["one"]);
    }

    #[test]
    fn dispatch_unmatched_key_is_inert() {
        let mut disp = Dispatch::new(
            |ctx: &TestContext| ctx.phase,
            vec![(0u8, Box::new(Claim("zero")) as Box<dyn Behavior<_>>)],
        );

        let mut ctx = TestContext {
            phase: 7,
            ..Default::default()
        };
        assert_eq!(disp.run(&mut ctx), Status::Pass);
        assert!(ctx.runs.is_empty());
    }

    #[test]
    fn branch_routes_on_predicate() {
        let mut branch = Branch::new(
            |ctx: &TestContext| ctx.flag,
            Box::new(Claim("stunned")),
            Box::new(Claim("normal")),
        );

        let mut ctx = TestContext::default();
        branch.run(&mut ctx);
        ctx.flag = true;
        branch.run(&mut ctx);
        assert_eq!(ctx.runs, vec!["normal", "stunned"]);
    }
}
