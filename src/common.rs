use std::collections::BTreeSet;
use std::fmt;

use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    East,
    West,
    Vacuum,
}

impl Action {
    /// Canonical ordering of the movement actions. Successor generation
    /// lists moves in this order, with Vacuum last when available, and the
    /// depth-first strategy relies on it to decide which plan it finds.
    pub const MOVES: [Action; 4] = [Action::North, Action::South, Action::East, Action::West];

    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Action::North => (-1, 0),
            Action::South => (1, 0),
            Action::East => (0, 1),
            Action::West => (0, -1),
            Action::Vacuum => (0, 0),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Action::North => 'N',
            Action::South => 'S',
            Action::East => 'E',
            Action::West => 'W',
            Action::Vacuum => 'V',
        };
        write!(f, "{code}")
    }
}

/// Search state: where the robot is and which cells are still dirty. The
/// dirt set is an owned value, so branches of the search never alias, and
/// `BTreeSet` keeps equality, hashing, and iteration deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub position: (usize, usize),
    pub dirt: BTreeSet<(usize, usize)>,
}

impl State {
    pub fn initial(world: &World) -> Self {
        State {
            position: world.start(),
            dirt: world.dirt().clone(),
        }
    }

    pub fn is_goal(&self) -> bool {
        self.dirt.is_empty()
    }

    /// One-step successors: the four moves in `Action::MOVES` order (walls
    /// and bounds permitting, dirt untouched), then Vacuum iff the current
    /// cell is dirty, yielding a copy of the dirt set without it.
    pub fn successors(&self, world: &World) -> Vec<(Action, State)> {
        let mut next = Vec::with_capacity(5);
        for action in Action::MOVES {
            if let Some(position) = world.step(self.position, action) {
                next.push((
                    action,
                    State {
                        position,
                        dirt: self.dirt.clone(),
                    },
                ));
            }
        }
        if self.dirt.contains(&self.position) {
            let mut dirt = self.dirt.clone();
            dirt.remove(&self.position);
            next.push((
                Action::Vacuum,
                State {
                    position: self.position,
                    dirt,
                },
            ));
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub actions: Vec<Action>,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Replays the plan from the world's initial state. A plan verifies iff
    /// every action is applicable in order and the dirt set becomes empty
    /// exactly at the final action, never before it.
    pub fn verify(&self, world: &World) -> bool {
        let mut state = State::initial(world);
        for action in &self.actions {
            if state.is_goal() {
                return false;
            }
            match state
                .successors(world)
                .into_iter()
                .find(|(candidate, _)| candidate == action)
            {
                Some((_, next)) => state = next,
                None => return false,
            }
        }
        state.is_goal()
    }
}
