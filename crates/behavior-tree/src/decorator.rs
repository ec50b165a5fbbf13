//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its execution. This
//! module provides [`Gate`], the activation decorator used to hold a branch
//! in an armed-but-idle state.

use crate::{Behavior, Status};

/// Holds a branch inert while a gate flag is down, and fires its child when
/// both the gate and a trigger flag are up.
///
/// # Semantics
///
/// Two predicates are evaluated against the blackboard each tick:
///
/// - Gate `false`: returns `Claimed` **without running the child**. The
///   branch stays logically active and suppresses its siblings, but nothing
///   progresses; downstream state is frozen until the gate reopens.
/// - Gate `true`, trigger `true`: forwards to the child unconditionally and
///   returns its status.
/// - Gate `true`, trigger `false`: returns `Pass`.
///
/// The typical wiring is gate = "weapon ready" and trigger = "target
/// spotted": an agent mid-cooldown holds position instead of wandering off
/// to lower-priority behavior, while an agent with no target yields the
/// tick to idle or patrol siblings.
pub struct Gate<C> {
    gate: Box<dyn Fn(&C) -> bool + Send + Sync>,
    trigger: Box<dyn Fn(&C) -> bool + Send + Sync>,
    child: Box<dyn Behavior<C>>,
}

impl<C> Gate<C> {
    /// Creates a new gate around the given child behavior.
    pub fn new(
        gate: impl Fn(&C) -> bool + Send + Sync + 'static,
        trigger: impl Fn(&C) -> bool + Send + Sync + 'static,
        child: Box<dyn Behavior<C>>,
    ) -> Self {
        Self {
            gate: Box::new(gate),
            trigger: Box::new(trigger),
            child,
        }
    }
}

impl<C> Behavior<C> for Gate<C> {
    fn run(&mut self, ctx: &mut C) -> Status {
        if !(self.gate)(ctx) {
            // Hold the branch without progressing it
            return Status::Claimed;
        }
        if (self.trigger)(ctx) {
            self.child.run(ctx)
        } else {
            Status::Pass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestContext {
        gate: bool,
        trigger: bool,
        child_runs: u32,
    }

    struct CountingChild;
    impl Behavior<TestContext> for CountingChild {
        fn run(&mut self, ctx: &mut TestContext) -> Status {
            ctx.child_runs += 1;
            Status::Claimed
        }
    }

    fn gate() -> Gate<TestContext> {
        Gate::new(
            |ctx: &TestContext| ctx.gate,
            |ctx: &TestContext| ctx.trigger,
            Box::new(CountingChild),
        )
    }

    #[test]
    fn closed_gate_claims_without_running_child() {
        let mut node = gate();
        let mut ctx = TestContext {
            trigger: true,
            ..Default::default()
        };

        // However many ticks pass, a closed gate holds the branch and the
        // child never advances.
        for _ in 0..10 {
            assert_eq!(node.run(&mut ctx), Status::Claimed);
        }
        assert_eq!(ctx.child_runs, 0);
    }

    #[test]
    fn open_gate_with_trigger_forwards_to_child() {
        let mut node = gate();
        let mut ctx = TestContext {
            gate: true,
            trigger: true,
            ..Default::default()
        };

        assert_eq!(node.run(&mut ctx), Status::Claimed);
        assert_eq!(ctx.child_runs, 1);
    }

    #[test]
    fn open_gate_without_trigger_passes() {
        let mut node = gate();
        let mut ctx = TestContext {
            gate: true,
            ..Default::default()
        };

        assert_eq!(node.run(&mut ctx), Status::Pass);
        assert_eq!(ctx.child_runs, 0);
    }
}
