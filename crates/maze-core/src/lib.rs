//! **maze-core** — the maze grid model.
//!
//! This crate provides the types shared by the solver and its collaborators:
//! row/column coordinates and moves, per-cell terrain flags, the read-only
//! [`Grid`], and the plain-text loader that builds it.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod load;

pub use cell::Cell;
pub use geom::{Action, Coord};
pub use grid::{FLOODED_COST, Grid};
pub use load::LoadError;
