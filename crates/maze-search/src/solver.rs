//! The strategy-agnostic search driver.
//!
//! [`Solver::solve`] runs the expand / goal-test loop shared by every
//! [`StrategyKind`]: pull a node from the frontier, stop if it is the goal,
//! otherwise mark it explored and push its unseen neighbors.

use std::fmt;

use log::{debug, info, warn};
use maze_core::{Coord, Grid};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::explored::ExploredSet;
use crate::frontier::EmptyFrontier;
use crate::neighbors::Neighbors;
use crate::node::{SearchTree, Solution};
use crate::render::{Frame, NoRender, Renderer};
use crate::strategy::StrategyKind;

/// Options for a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    /// Seed for the neighbor shuffle. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Send a frame to the renderer after every expansion, not only at the
    /// end.
    pub frames: bool,
}

impl SolveConfig {
    /// Fix the shuffle seed (builder).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable per-step frames (builder).
    pub fn with_frames(mut self, frames: bool) -> Self {
        self.frames = frames;
        self
    }
}

/// How a search ended. Both are normal results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    SolutionFound,
    /// The frontier ran dry before the goal was reached.
    NoSolution,
}

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub strategy: StrategyKind,
    pub termination: Termination,
    pub solution: Solution,
    /// Number of nodes removed from the frontier, goal included.
    pub explored_count: usize,
    pub explored: ExploredSet,
    /// Seed the neighbor shuffle used.
    pub seed: u64,
}

impl Outcome {
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::SolutionFound
    }
}

/// Invariant violations detected while searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier reported pending nodes but had none to remove.
    Frontier(EmptyFrontier),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frontier(e) => write!(f, "search invariant violated: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Frontier(e) => Some(e),
        }
    }
}

/// Run `kind` over `grid` with a fresh seed and no renderer.
pub fn solve(grid: &Grid, kind: StrategyKind) -> Result<Outcome, SearchError> {
    Solver::new(SolveConfig::default()).solve(grid, kind)
}

/// Search driver. Owns the renderer and scratch buffers so that repeated
/// runs reuse them.
pub struct Solver<R: Renderer = NoRender> {
    config: SolveConfig,
    renderer: R,
    neighbors: Neighbors,
}

impl Solver<NoRender> {
    pub fn new(config: SolveConfig) -> Self {
        Self::with_renderer(config, NoRender)
    }
}

impl<R: Renderer> Solver<R> {
    pub fn with_renderer(config: SolveConfig, renderer: R) -> Self {
        Self {
            config,
            renderer,
            neighbors: Neighbors::new(),
        }
    }

    pub fn config(&self) -> &SolveConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Search `grid` from its start to its goal using `kind`.
    ///
    /// Running out of frontier is reported as [`Termination::NoSolution`];
    /// `Err` is returned only if a frontier breaks its own contract.
    pub fn solve(&mut self, grid: &Grid, kind: StrategyKind) -> Result<Outcome, SearchError> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        info!(
            "starting to solve maze using {} (seed {seed}), goal is {}",
            kind.description(),
            grid.goal()
        );

        let mut tree = SearchTree::new();
        let mut frontier = kind.frontier(grid);
        let mut explored = ExploredSet::new();
        let mut solution = Solution::default();
        let mut explored_count = 0usize;

        let root = tree.root(grid.start(), grid.is_flooded(grid.start()));
        frontier.add(&mut tree, root);
        let mut current_pos = grid.start();

        let termination = loop {
            if frontier.is_empty() {
                break Termination::NoSolution;
            }

            if log::log_enabled!(log::Level::Debug) {
                let pending: Vec<Coord> = frontier
                    .pending()
                    .into_iter()
                    .map(|id| tree.position(id))
                    .collect();
                debug!("frontier before remove: {pending:?}");
            }

            let current = frontier.remove().map_err(SearchError::Frontier)?;
            current_pos = tree.position(current);
            explored_count += 1;
            debug!("removed {current_pos}");

            if current_pos == grid.goal() {
                solution = tree.solution(current);
                explored.insert(current_pos);
                break Termination::SolutionFound;
            }

            let fresh = explored.insert(current_pos);
            debug_assert!(fresh, "{current_pos} expanded twice");

            if self.config.frames {
                let frame = Frame {
                    grid,
                    strategy: kind,
                    current: current_pos,
                    explored: &explored,
                    solution: &solution,
                    step: explored_count,
                    last: false,
                };
                draw(&mut self.renderer, &frame);
            }

            for n in self.neighbors.expand(grid, current_pos, &mut rng) {
                if frontier.contains_state(&tree, n.pos) || explored.contains(n.pos) {
                    continue;
                }
                let child = tree.child(current, n.pos, n.action, n.flooded);
                frontier.add(&mut tree, child);
            }
        };

        match termination {
            Termination::SolutionFound => info!(
                "{}: solution is {} steps, explored {explored_count} nodes",
                kind,
                solution.len()
            ),
            Termination::NoSolution => {
                info!("{kind}: no solution, explored {explored_count} nodes")
            }
        }

        let frame = Frame {
            grid,
            strategy: kind,
            current: current_pos,
            explored: &explored,
            solution: &solution,
            step: explored_count,
            last: true,
        };
        draw(&mut self.renderer, &frame);

        Ok(Outcome {
            strategy: kind,
            termination,
            solution,
            explored_count,
            explored,
            seed,
        })
    }
}

fn draw<R: Renderer>(renderer: &mut R, frame: &Frame<'_>) {
    if let Err(e) = renderer.draw(frame) {
        warn!("render of step {} failed: {e}", frame.step);
    }
}
