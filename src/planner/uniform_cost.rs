use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use tracing::{debug, instrument, trace};

use super::comm::CostOrderedNode;
use super::Planner;
use crate::common::{Plan, State};
use crate::stat::Stats;
use crate::world::World;

/// Uninformed cost-ordered search. Every action costs 1, so the frontier
/// orders by path length and the first goal popped is a shortest plan.
pub struct UniformCost {
    world: World,
    stats: Stats,
}

impl UniformCost {
    pub fn new(world: &World) -> Self {
        UniformCost {
            world: world.clone(),
            stats: Stats::default(),
        }
    }
}

impl Planner for UniformCost {
    #[instrument(skip_all, name = "uniform_cost", level = "debug")]
    fn solve(&mut self) -> Option<Plan> {
        let total_solve_start_time = Instant::now();
        self.stats = Stats::default();

        let mut frontier = BinaryHeap::new();
        let mut visited = HashSet::new();
        let mut seq = 0;

        frontier.push(CostOrderedNode {
            cost: 0,
            seq,
            state: State::initial(&self.world),
            path: Vec::new(),
        });
        self.stats.nodes_generated = 1;

        while let Some(current) = frontier.pop() {
            // Lazy deletion: the frontier may hold several entries for one
            // state, and only the first popped is expanded.
            if !visited.insert(current.state.clone()) {
                continue;
            }
            self.stats.nodes_expanded += 1;
            debug!("expand node: {current:?}");

            if current.state.is_goal() {
                self.stats.costs = current.path.len();
                self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;
                self.stats.print("uniform-cost");
                return Some(Plan {
                    actions: current.path,
                });
            }

            for (action, successor) in current.state.successors(&self.world) {
                seq += 1;
                self.stats.nodes_generated += 1;
                let mut path = current.path.clone();
                path.push(action);
                frontier.push(CostOrderedNode {
                    cost: current.cost + 1,
                    seq,
                    state: successor,
                    path,
                });
            }
            trace!("frontier size {}", frontier.len());
        }

        self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;
        self.stats.print("uniform-cost");
        None
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Action;
    use crate::world::Cell;
    use std::collections::BTreeSet;

    #[test]
    fn test_hallway_shortest_plan() {
        let world = World::from_file("worlds/hallway-5x1.vw").unwrap();
        let mut planner = UniformCost::new(&world);

        let plan = planner.solve().unwrap();
        assert_eq!(
            plan.actions,
            vec![
                Action::East,
                Action::East,
                Action::East,
                Action::East,
                Action::Vacuum
            ]
        );
        assert!(plan.verify(&world));
        assert_eq!(planner.stats().nodes_generated, 10);
        assert_eq!(planner.stats().nodes_expanded, 6);
    }

    #[test]
    fn test_one_cell_world_vacuums_in_place() {
        let grid = vec![vec![Cell::Open]];
        let dirt: BTreeSet<_> = [(0, 0)].into_iter().collect();
        let world = World::new(grid, (0, 0), dirt);
        let mut planner = UniformCost::new(&world);

        let plan = planner.solve().unwrap();
        assert_eq!(plan.actions, vec![Action::Vacuum]);
        assert_eq!(planner.stats().nodes_generated, 2);
        assert_eq!(planner.stats().nodes_expanded, 2);
    }

    #[test]
    fn test_no_dirt_returns_empty_plan() {
        let world = World::from_file("worlds/empty-4x3.vw").unwrap();
        let mut planner = UniformCost::new(&world);

        let plan = planner.solve().unwrap();
        assert!(plan.is_empty());
        assert_eq!(planner.stats().nodes_generated, 1);
        assert_eq!(planner.stats().nodes_expanded, 1);
    }

    #[test]
    fn test_sealed_start_has_no_solution() {
        let world = World::from_file("worlds/sealed-room-5x4.vw").unwrap();
        let mut planner = UniformCost::new(&world);

        assert_eq!(planner.solve(), None);
        assert_eq!(planner.stats().nodes_generated, 1);
        assert_eq!(planner.stats().nodes_expanded, 1);
    }

    #[test]
    fn test_plan_length_is_manhattan_plus_dirt_count() {
        let grid = vec![vec![Cell::Open; 3]; 3];

        // single far-corner dirt: 4 moves + 1 vacuum
        let dirt: BTreeSet<_> = [(2, 2)].into_iter().collect();
        let world = World::new(grid.clone(), (0, 0), dirt);
        let mut planner = UniformCost::new(&world);
        assert_eq!(planner.solve().unwrap().len(), 5);

        // dirt under the robot as well: one extra vacuum
        let dirt: BTreeSet<_> = [(0, 0), (2, 2)].into_iter().collect();
        let world = World::new(grid, (0, 0), dirt);
        let mut planner = UniformCost::new(&world);
        let plan = planner.solve().unwrap();
        assert_eq!(plan.len(), 6);
        assert!(plan.verify(&world));
    }

    // Shortest route threads the gap at (2, 3); the walls force a 4-move
    // detour on top of the Manhattan distance of 6.
    #[test]
    fn test_lobby_walls_force_detour() {
        let world = World::from_file("worlds/lobby-7x5.vw").unwrap();
        let mut planner = UniformCost::new(&world);

        let plan = planner.solve().unwrap();
        assert_eq!(
            plan.actions,
            vec![
                Action::East,
                Action::East,
                Action::South,
                Action::South,
                Action::East,
                Action::East,
                Action::North,
                Action::North,
                Action::East,
                Action::East,
                Action::Vacuum
            ]
        );
        assert!(plan.verify(&world));
    }
}
