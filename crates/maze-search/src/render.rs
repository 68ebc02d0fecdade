use maze_core::{Coord, Grid};

use crate::explored::ExploredSet;
use crate::node::Solution;
use crate::strategy::StrategyKind;

/// A snapshot of a running search, handed to a [`Renderer`].
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    /// The strategy driving the search.
    pub strategy: StrategyKind,
    /// The node being expanded, or the goal for the final frame.
    pub current: Coord,
    pub explored: &'a ExploredSet,
    /// Empty until the search finishes with a path.
    pub solution: &'a Solution,
    /// Number of nodes expanded so far.
    pub step: usize,
    /// `true` only for the frame emitted after the search ends.
    pub last: bool,
}

/// Consumer of search snapshots (image writer, terminal view, ...).
///
/// A renderer observes only. Errors it returns are logged by the solver and
/// never stop the search.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<(), Box<dyn std::error::Error>>;
}

/// Renderer that discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRender;

impl Renderer for NoRender {
    fn draw(&mut self, _frame: &Frame<'_>) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
