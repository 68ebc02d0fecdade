//! Frontier-based search over a [`maze_core::Grid`].
//!
//! One driver loop ([`Solver::solve`]) runs every strategy; strategies differ
//! only in the [`Frontier`] that orders pending nodes:
//!
//! | Strategy | Frontier | Key |
//! |---|---|---|
//! | [`StrategyKind::Dfs`] | [`StackFrontier`] | — |
//! | [`StrategyKind::Bfs`] | [`QueueFrontier`] | — |
//! | [`StrategyKind::Gbfs`] | [`PriorityFrontier`] | [`GreedyKey`] |
//! | [`StrategyKind::Dijkstra`] | [`PriorityFrontier`] | [`DijkstraKey`] |
//! | [`StrategyKind::Astar`] | [`PriorityFrontier`] | [`AstarKey`] |
//!
//! Neighbor order is shuffled by a seeded RNG, so a run is reproducible from
//! [`SolveConfig::seed`] (or the seed reported in [`Outcome::seed`]).
//!
//! Progress can be observed by plugging a [`Renderer`] into the solver.

mod distance;
mod explored;
mod frontier;
mod heap;
mod neighbors;
mod node;
mod render;
mod solver;
mod strategy;

pub use distance::{euclidean, manhattan};
pub use explored::ExploredSet;
pub use frontier::{
    EmptyFrontier, Frontier, PriorityFrontier, PriorityKey, QueueFrontier, StackFrontier,
};
pub use heap::{EmptyQueueError, PriorityQueue};
pub use neighbors::{Neighbor, Neighbors};
pub use node::{NodeId, SearchNode, SearchTree, Solution};
pub use render::{Frame, NoRender, Renderer};
pub use solver::{Outcome, SearchError, SolveConfig, Solver, Termination, solve};
pub use strategy::{AstarKey, DijkstraKey, GreedyKey, StrategyKind, UnknownStrategy};
