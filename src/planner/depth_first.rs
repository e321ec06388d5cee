use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, instrument};

use super::Planner;
use crate::common::{Action, Plan, State};
use crate::stat::Stats;
use crate::world::World;

/// Stack-based depth-first search, unbounded depth. The visited set makes
/// it terminate on these finite state spaces, but the plan it returns
/// carries no length guarantee.
pub struct DepthFirst {
    world: World,
    stats: Stats,
}

impl DepthFirst {
    pub fn new(world: &World) -> Self {
        DepthFirst {
            world: world.clone(),
            stats: Stats::default(),
        }
    }
}

impl Planner for DepthFirst {
    #[instrument(skip_all, name = "depth_first", level = "debug")]
    fn solve(&mut self) -> Option<Plan> {
        let total_solve_start_time = Instant::now();
        self.stats = Stats::default();

        let mut stack: Vec<(State, Vec<Action>)> =
            vec![(State::initial(&self.world), Vec::new())];
        let mut visited = HashSet::new();
        self.stats.nodes_generated = 1;

        while let Some((state, path)) = stack.pop() {
            if !visited.insert(state.clone()) {
                continue;
            }
            self.stats.nodes_expanded += 1;
            debug!("expand state: {state:?}");

            if state.is_goal() {
                self.stats.costs = path.len();
                self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;
                self.stats.print("depth-first");
                return Some(Plan { actions: path });
            }

            // Push in reverse of generation order so the stack pops the
            // first-listed successor first.
            for (action, successor) in state.successors(&self.world).into_iter().rev() {
                self.stats.nodes_generated += 1;
                let mut next_path = path.clone();
                next_path.push(action);
                stack.push((successor, next_path));
            }
        }

        self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;
        self.stats.print("depth-first");
        None
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }
}
