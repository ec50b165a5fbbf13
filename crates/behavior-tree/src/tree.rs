//! Behavior tree root.
//!
//! A [`BehaviorTree`] pairs one root node with one owned blackboard. The
//! surrounding simulation writes perception into the blackboard between
//! frames and calls [`tick`](BehaviorTree::tick) once per frame.

use crate::{Behavior, Status};

/// One root node plus the blackboard its subtree operates on.
///
/// Exactly one tree/blackboard pair exists per agent; trees never reference
/// each other. The tree is constructed once when the owning agent
/// initializes, ticked every simulation frame thereafter, and dropped with
/// the agent. There is no serialized form.
///
/// # Example
///
/// ```rust,ignore
/// let mut tree = BehaviorTree::new(root, blackboard);
/// loop {
///     sensing.write_percepts(tree.blackboard_mut());
///     tree.tick();
/// }
/// ```
pub struct BehaviorTree<C> {
    root: Box<dyn Behavior<C>>,
    blackboard: C,
}

impl<C> BehaviorTree<C> {
    /// Creates a tree from a root node and the blackboard it will own.
    pub fn new(root: Box<dyn Behavior<C>>, blackboard: C) -> Self {
        Self { root, blackboard }
    }

    /// Runs the root node for one tick, lending it the blackboard.
    ///
    /// The returned status is informative only; callers driving a frame
    /// loop are free to ignore it. It exists for composition, not for
    /// external control flow.
    pub fn tick(&mut self) -> Status {
        self.root.run(&mut self.blackboard)
    }

    /// Read access to the blackboard, for inspection and validation.
    pub fn blackboard(&self) -> &C {
        &self.blackboard
    }

    /// Write access to the blackboard.
    ///
    /// External systems (sensing, room transitions, damage handling) use
    /// this between ticks to update perception flags and behavioral state.
    pub fn blackboard_mut(&mut self) -> &mut C {
        &mut self.blackboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        ticks: u32,
    }

    struct CountTicks;
    impl Behavior<Counter> for CountTicks {
        fn run(&mut self, ctx: &mut Counter) -> Status {
            ctx.ticks += 1;
            Status::Claimed
        }
    }

    #[test]
    fn tick_forwards_to_root_with_owned_blackboard() {
        let mut tree = BehaviorTree::new(Box::new(CountTicks), Counter { ticks: 0 });

        assert_eq!(tree.tick(), Status::Claimed);
        tree.tick();
        assert_eq!(tree.blackboard().ticks, 2);
    }

    #[test]
    fn blackboard_is_writable_between_ticks() {
        let mut tree = BehaviorTree::new(Box::new(CountTicks), Counter { ticks: 0 });

        tree.blackboard_mut().ticks = 40;
        tree.tick();
        tree.tick();
        assert_eq!(tree.blackboard().ticks, 42);
    }
}
