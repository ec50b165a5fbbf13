//! Status returned by behavior nodes.

/// The result of running a behavior node for one tick.
///
/// # Claim Semantics
///
/// Trees are re-evaluated from the root every simulation frame, so the
/// outcome of a node answers one question: did this node take the tick?
///
/// - A node that performed a meaningful action, or is mid-action and must
///   not be interrupted by lower-priority siblings, returns [`Claimed`].
/// - A node with nothing to do this tick returns [`Pass`], handing control
///   to the next candidate.
///
/// Leaves that move the agent claim while en route and pass on the arrival
/// tick, after performing their arrival side effects. An arrival therefore
/// hands the tick onward, which is what lets "walk into range, then attack"
/// resolve within a single frame.
///
/// Composites read the two variants as follows:
///
/// - In a [`Selector`](crate::Selector), `Claimed` stops iteration.
/// - In a [`Sequence`](crate::Sequence), `Claimed` means "step satisfied,
///   continue"; `Pass` aborts the chain.
///
/// [`Claimed`]: Status::Claimed
/// [`Pass`]: Status::Pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The node (or a descendant) took this tick.
    Claimed,

    /// The node yielded this tick; the next candidate may run.
    Pass,
}

impl Status {
    /// Returns `true` if this status is `Claimed`.
    #[inline]
    pub fn is_claimed(self) -> bool {
        matches!(self, Status::Claimed)
    }

    /// Returns `true` if this status is `Pass`.
    #[inline]
    pub fn is_pass(self) -> bool {
        matches!(self, Status::Pass)
    }
}
