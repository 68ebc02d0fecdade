//! The [`Grid`] type — an immutable maze layout.
//!
//! A `Grid` is built once by the loader (see [`Grid::parse`]) and never
//! mutated afterwards, so it can be shared freely between searches.

use crate::cell::Cell;
use crate::geom::Coord;

/// Extra cost charged for entering a flooded cell.
pub const FLOODED_COST: i64 = 1000;

/// A rectangular maze of [`Cell`]s with a start and a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Assemble a grid from a row-major cell buffer. The loader is
    /// responsible for validating dimensions and markers.
    pub(crate) fn from_parts(
        cells: Vec<Cell>,
        width: i32,
        height: i32,
        start: Coord,
        goal: Coord,
    ) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            cells,
            width,
            height,
            start,
            goal,
        }
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.height && c.col < self.width
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.row * self.width + c.col) as usize)
        } else {
            None
        }
    }

    /// The cell at `c`, or `None` when out of bounds.
    pub fn cell(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|i| self.cells[i])
    }

    /// False for out-of-bounds coordinates and walls.
    pub fn is_passable(&self, c: Coord) -> bool {
        self.cell(c).is_some_and(|cell| !cell.is_wall())
    }

    /// Whether `c` is an in-bounds water cell.
    pub fn is_flooded(&self, c: Coord) -> bool {
        self.cell(c).is_some_and(Cell::is_water)
    }

    /// Number of non-wall cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_wall()).count()
    }

    /// Cost of walking `cells` in order: one per move plus
    /// [`FLOODED_COST`] for every flooded cell entered.
    pub fn path_cost(&self, cells: &[Coord]) -> i64 {
        cells
            .iter()
            .map(|&c| if self.is_flooded(c) { 1 + FLOODED_COST } else { 1 })
            .sum()
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let w = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i as i32 / w, i as i32 % w), cell))
    }
}
