use std::cmp::Ordering;

use crate::common::{Action, State};

/// Frontier entry for the cost-ordered strategy. The ordering is inverted
/// so that Rust's max-`BinaryHeap` pops the lowest cumulative cost first,
/// with ties broken by insertion sequence (earlier pushes pop first).
#[derive(Clone, Eq, Debug, PartialEq)]
pub(crate) struct CostOrderedNode {
    pub(crate) cost: usize,
    pub(crate) seq: usize,
    pub(crate) state: State,
    pub(crate) path: Vec<Action>,
}

impl Ord for CostOrderedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .reverse()
            .then_with(|| self.seq.cmp(&other.seq).reverse())
    }
}

impl PartialOrd for CostOrderedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
