use std::collections::HashSet;

use maze_core::Coord;

/// Coordinates that have already been expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploredSet {
    cells: HashSet<Coord>,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `c` as expanded. Returns `false` if it already was.
    pub fn insert(&mut self, c: Coord) -> bool {
        self.cells.insert(c)
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Expanded coordinates in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}
