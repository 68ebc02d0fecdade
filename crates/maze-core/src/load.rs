//! Maze loading from plain text.
//!
//! Each line is one row of the maze and every row must have the same width.
//! Glyphs map one-to-one onto cell flags:
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `A` | start (open) |
//! | `B` | goal (open) |
//! | `#` | wall |
//! | `w` | water (open, flooded) |
//! | ` ` | free |

use std::fmt;
use std::io;
use std::path::Path;

use crate::cell::Cell;
use crate::geom::Coord;
use crate::grid::Grid;

pub const START_GLYPH: char = 'A';
pub const GOAL_GLYPH: char = 'B';
pub const WALL_GLYPH: char = '#';
pub const WATER_GLYPH: char = 'w';
pub const FREE_GLYPH: char = ' ';

impl Grid {
    /// Parse a maze from its textual layout.
    ///
    /// A single trailing newline is ignored and `\r` line endings are
    /// accepted. Fails if the start or goal marker is missing or repeated,
    /// if rows differ in width, or on an unknown glyph.
    pub fn parse(s: &str) -> Result<Self, LoadError> {
        let mut lines: Vec<&str> = s
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if lines.iter().all(|l| l.is_empty()) {
            return Err(LoadError::Empty);
        }

        let mut cells = Vec::new();
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;
        let mut width: Option<usize> = None;

        for (row, line) in lines.iter().enumerate() {
            let mut cols = 0usize;
            for (col, ch) in line.chars().enumerate() {
                let here = Coord::new(row as i32, col as i32);
                let cell = match ch {
                    START_GLYPH => {
                        if start.replace(here).is_some() {
                            return Err(LoadError::DuplicateStart(here));
                        }
                        Cell::FREE
                    }
                    GOAL_GLYPH => {
                        if goal.replace(here).is_some() {
                            return Err(LoadError::DuplicateGoal(here));
                        }
                        Cell::FREE
                    }
                    WALL_GLYPH => Cell::WALL,
                    WATER_GLYPH => Cell::WATER,
                    FREE_GLYPH => Cell::FREE,
                    _ => return Err(LoadError::InvalidGlyph { ch, pos: here }),
                };
                cells.push(cell);
                cols += 1;
            }
            match width {
                None => width = Some(cols),
                Some(expected) if expected != cols => {
                    return Err(LoadError::MalformedRow {
                        row,
                        expected,
                        found: cols,
                    });
                }
                Some(_) => {}
            }
        }

        let start = start.ok_or(LoadError::MissingStart)?;
        let goal = goal.ok_or(LoadError::MissingGoal)?;
        let width = width.unwrap_or(0) as i32;
        let height = lines.len() as i32;
        Ok(Grid::from_parts(cells, width, height, start, goal))
    }

    /// Read and parse a maze file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }
}

/// Errors that can occur when loading a maze.
#[derive(Debug)]
pub enum LoadError {
    /// The source has no rows.
    Empty,
    /// No start marker.
    MissingStart,
    /// No goal marker.
    MissingGoal,
    /// A second start marker was found at the given position.
    DuplicateStart(Coord),
    /// A second goal marker was found at the given position.
    DuplicateGoal(Coord),
    /// A row's width differs from the first row's.
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the maze alphabet.
    InvalidGlyph { ch: char, pos: Coord },
    /// The maze file could not be read.
    Io { path: String, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze is empty"),
            Self::MissingStart => write!(f, "starting location not found"),
            Self::MissingGoal => write!(f, "ending location not found"),
            Self::DuplicateStart(p) => write!(f, "second starting location at {p}"),
            Self::DuplicateGoal(p) => write!(f, "second ending location at {p}"),
            Self::MalformedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "invalid glyph '{ch}' at {pos}")
            }
            Self::Io { path, source } => write!(f, "cannot read {path}: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_basic() {
        let g = Grid::parse("#####\nA w B\n #   \n").unwrap();
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 5);
        assert_eq!(g.start(), Coord::new(1, 0));
        assert_eq!(g.goal(), Coord::new(1, 4));
        assert!(g.is_flooded(Coord::new(1, 2)));
        assert!(!g.is_passable(Coord::new(2, 1)));
    }

    #[test]
    fn crlf_line_endings() {
        let g = Grid::parse("A \r\n B\r\n").unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 2);
        assert_eq!(g.goal(), Coord::new(1, 1));
    }

    #[test]
    fn missing_start() {
        assert!(matches!(
            Grid::parse("  B\n   "),
            Err(LoadError::MissingStart)
        ));
    }

    #[test]
    fn missing_goal() {
        assert!(matches!(
            Grid::parse("A  \n   "),
            Err(LoadError::MissingGoal)
        ));
    }

    #[test]
    fn duplicate_markers() {
        assert!(matches!(
            Grid::parse("A A\n  B"),
            Err(LoadError::DuplicateStart(p)) if p == Coord::new(0, 2)
        ));
        assert!(matches!(
            Grid::parse("A B\nB  "),
            Err(LoadError::DuplicateGoal(p)) if p == Coord::new(1, 0)
        ));
    }

    #[test]
    fn malformed_row() {
        let err = Grid::parse("A  \n B\n   ").unwrap_err();
        match err {
            LoadError::MalformedRow {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_glyph() {
        let err = Grid::parse("A.B").unwrap_err();
        assert!(matches!(err, LoadError::InvalidGlyph { ch: '.', .. }));
        assert_eq!(err.to_string(), "invalid glyph '.' at [0 1]");
    }

    #[test]
    fn empty_source() {
        assert!(matches!(Grid::parse(""), Err(LoadError::Empty)));
        assert!(matches!(Grid::parse("\n"), Err(LoadError::Empty)));
        assert!(matches!(Grid::parse("\r\n"), Err(LoadError::Empty)));
        assert!(matches!(Grid::parse("\n\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn start_and_goal_are_open() {
        let g = Grid::parse("A#\n#B").unwrap();
        assert!(g.is_passable(g.start()));
        assert!(g.is_passable(g.goal()));
    }

    #[test]
    fn from_path_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "A #\n  B\n").unwrap();
        let g = Grid::from_path(f.path()).unwrap();
        assert_eq!(g.goal(), Coord::new(1, 2));
    }

    #[test]
    fn from_path_missing_file() {
        let err = Grid::from_path("/definitely/not/a/maze.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
