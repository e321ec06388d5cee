mod comm;
mod depth_first;
mod uniform_cost;

pub use depth_first::DepthFirst;
pub use uniform_cost::UniformCost;

use crate::common::Plan;
use crate::stat::Stats;

/// A search strategy over (position, remaining-dirt) states. `solve`
/// returns `None` when the reachable state space holds no goal; that is a
/// normal outcome, and the counters accumulated up to exhaustion stay
/// available through `stats`.
pub trait Planner {
    fn solve(&mut self) -> Option<Plan>;
    fn stats(&self) -> &Stats;
}
