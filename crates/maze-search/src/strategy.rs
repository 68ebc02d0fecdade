//! The five search strategies and their insertion keys.
//!
//! | Strategy | Frontier | Key |
//! |---|---|---|
//! | DFS | stack | — |
//! | BFS | queue | — |
//! | GBFS | min-heap | manhattan to goal |
//! | Dijkstra | min-heap | manhattan to start |
//! | A* | min-heap | euclidean to goal + manhattan to start (+ flood cost) |
//!
//! The Dijkstra and GBFS keys depend only on a node's position, not on the
//! path that reached it.

use std::fmt;
use std::str::FromStr;

use maze_core::{Coord, FLOODED_COST, Grid};

use crate::distance::{euclidean, manhattan};
use crate::frontier::{Frontier, PriorityFrontier, PriorityKey, QueueFrontier, StackFrontier};
use crate::node::SearchNode;

/// Greedy best-first: remaining manhattan distance to the goal.
#[derive(Debug, Clone, Copy)]
pub struct GreedyKey {
    pub goal: Coord,
}

impl PriorityKey for GreedyKey {
    fn key(&self, node: &SearchNode) -> f64 {
        f64::from(manhattan(node.position, self.goal))
    }
}

/// Dijkstra ordering: manhattan distance back to the start.
#[derive(Debug, Clone, Copy)]
pub struct DijkstraKey {
    pub start: Coord,
}

impl PriorityKey for DijkstraKey {
    fn key(&self, node: &SearchNode) -> f64 {
        f64::from(manhattan(node.position, self.start))
    }
}

/// A* ordering: distance travelled plus straight-line estimate, with a
/// fixed penalty on flooded cells.
#[derive(Debug, Clone, Copy)]
pub struct AstarKey {
    pub start: Coord,
    pub goal: Coord,
}

impl PriorityKey for AstarKey {
    fn key(&self, node: &SearchNode) -> f64 {
        let mut key =
            euclidean(node.position, self.goal) + f64::from(manhattan(node.position, self.start));
        if node.flooded {
            key += FLOODED_COST as f64;
        }
        key
    }
}

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    Dfs,
    Bfs,
    Gbfs,
    Dijkstra,
    Astar,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Dfs,
        StrategyKind::Bfs,
        StrategyKind::Gbfs,
        StrategyKind::Dijkstra,
        StrategyKind::Astar,
    ];

    /// Build an empty frontier for this strategy over `grid`.
    pub fn frontier(self, grid: &Grid) -> Box<dyn Frontier> {
        let (start, goal) = (grid.start(), grid.goal());
        match self {
            StrategyKind::Dfs => Box::new(StackFrontier::new()),
            StrategyKind::Bfs => Box::new(QueueFrontier::new()),
            StrategyKind::Gbfs => Box::new(PriorityFrontier::new(GreedyKey { goal })),
            StrategyKind::Dijkstra => Box::new(PriorityFrontier::new(DijkstraKey { start })),
            StrategyKind::Astar => Box::new(PriorityFrontier::new(AstarKey { start, goal })),
        }
    }

    /// Short command-line name.
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Dfs => "dfs",
            StrategyKind::Bfs => "bfs",
            StrategyKind::Gbfs => "gbfs",
            StrategyKind::Dijkstra => "dijkstra",
            StrategyKind::Astar => "astar",
        }
    }

    /// Human-readable name.
    pub const fn description(self) -> &'static str {
        match self {
            StrategyKind::Dfs => "depth first search",
            StrategyKind::Bfs => "breadth first search",
            StrategyKind::Gbfs => "greedy best first search",
            StrategyKind::Dijkstra => "dijkstra search",
            StrategyKind::Astar => "A* search",
        }
    }

    /// Whether the frontier is ordered by a cost key.
    pub const fn is_cost_ordered(self) -> bool {
        matches!(
            self,
            StrategyKind::Gbfs | StrategyKind::Dijkstra | StrategyKind::Astar
        )
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// A strategy name that is not one of `dfs`, `bfs`, `gbfs`, `dijkstra`,
/// `astar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid search type '{}'", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}
