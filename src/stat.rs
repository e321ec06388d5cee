use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub costs: usize,
    pub time_us: usize,
    pub nodes_generated: usize,
    pub nodes_expanded: usize,
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            costs: 0,
            time_us: 0,
            nodes_generated: 0,
            nodes_expanded: 0,
        }
    }
}

impl Stats {
    pub fn print(&self, strategy: &str) {
        info!(
            "Strategy {:?} Cost {:?} Time(microseconds) {:?} Nodes generated {:?} Nodes expanded {:?}",
            strategy, self.costs, self.time_us, self.nodes_generated, self.nodes_expanded
        );
    }
}
