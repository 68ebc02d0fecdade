//! Terminal view of a maze and its solution.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use maze_core::{Coord, Grid};
use maze_search::Solution;

const WALL: char = '◼';
const PATH: char = '*';

/// Glyph and colour for one cell.
fn glyph(grid: &Grid, solution: &Solution, pos: Coord) -> (char, Option<Color>) {
    if !grid.is_passable(pos) {
        (WALL, Some(Color::DarkGrey))
    } else if pos == grid.start() {
        ('A', Some(Color::DarkGreen))
    } else if pos == grid.goal() {
        ('B', Some(Color::Red))
    } else if solution.contains(pos) {
        (PATH, Some(Color::Green))
    } else if grid.is_flooded(pos) {
        ('w', Some(Color::DarkCyan))
    } else {
        (' ', None)
    }
}

/// Write `grid` row by row, marking solution cells with `*`.
pub fn print_maze<W: Write>(
    out: &mut W,
    grid: &Grid,
    solution: &Solution,
    color: bool,
) -> io::Result<()> {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let (ch, fg) = glyph(grid, solution, Coord::new(row, col));
            match fg {
                Some(c) if color => {
                    queue!(out, SetForegroundColor(c), Print(ch), ResetColor)?;
                }
                _ => queue!(out, Print(ch))?,
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Action;

    fn render(color: bool) -> String {
        let grid = Grid::parse("A w\n #B").unwrap();
        let solution = Solution {
            actions: vec![Action::Right, Action::Right, Action::Down],
            cells: vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 2)],
        };
        let mut buf = Vec::new();
        print_maze(&mut buf, &grid, &solution, color).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_output() {
        assert_eq!(render(false), "A**\n ◼B\n");
    }

    #[test]
    fn coloured_output_keeps_glyphs() {
        let s = render(true);
        assert!(s.contains('\u{1b}'));
        let stripped: String = s
            .split('\u{1b}')
            .enumerate()
            .map(|(i, part)| match part.find('m') {
                Some(end) if i > 0 => &part[end + 1..],
                _ => part,
            })
            .collect();
        assert_eq!(stripped, "A**\n ◼B\n");
    }
}
