use maze_core::{Action, Coord, Grid};
use rand::Rng;
use rand::seq::SliceRandom;

/// A move candidate produced by neighbor expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub pos: Coord,
    pub action: Action,
    /// Whether the target cell is water.
    pub flooded: bool,
}

/// Cached neighbor computation helper.
///
/// Enumerates the up/down/left/right moves out of a cell, drops the ones
/// that leave the grid or hit a wall, and shuffles the survivors.
pub struct Neighbors {
    buf: Vec<Neighbor>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the passable orthogonal neighbors of `p` in random order.
    pub fn expand<R: Rng + ?Sized>(&mut self, grid: &Grid, p: Coord, rng: &mut R) -> &[Neighbor] {
        self.buf.clear();
        for action in Action::ALL {
            let n = p.step(action);
            if grid.is_passable(n) {
                self.buf.push(Neighbor {
                    pos: n,
                    action,
                    flooded: grid.is_flooded(n),
                });
            }
        }
        self.buf.shuffle(rng);
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(ns: &[Neighbor]) -> Vec<Coord> {
        let mut v: Vec<Coord> = ns.iter().map(|n| n.pos).collect();
        v.sort();
        v
    }

    #[test]
    fn open_cell_has_four() {
        let g = Grid::parse("   \n A \n  B").unwrap();
        let mut nb = Neighbors::new();
        let mut rng = StdRng::seed_from_u64(1);
        let got = nb.expand(&g, Coord::new(1, 1), &mut rng);
        assert_eq!(
            sorted(got),
            vec![
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1)
            ]
        );
        for n in got {
            assert_eq!(Coord::new(1, 1).step(n.action), n.pos);
        }
    }

    #[test]
    fn bounds_and_walls_are_dropped() {
        let g = Grid::parse("A#\n B").unwrap();
        let mut nb = Neighbors::new();
        let mut rng = StdRng::seed_from_u64(7);
        let got = nb.expand(&g, Coord::new(0, 0), &mut rng);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].pos, Coord::new(1, 0));
        assert_eq!(got[0].action, Action::Down);
    }

    #[test]
    fn water_is_flagged() {
        let g = Grid::parse("Aw\n B").unwrap();
        let mut nb = Neighbors::new();
        let mut rng = StdRng::seed_from_u64(3);
        let got = nb.expand(&g, Coord::new(0, 0), &mut rng);
        let right = got.iter().find(|n| n.action == Action::Right).unwrap();
        assert!(right.flooded);
        let down = got.iter().find(|n| n.action == Action::Down).unwrap();
        assert!(!down.flooded);
    }

    #[test]
    fn same_seed_same_order() {
        let g = Grid::parse("   \n A \n  B").unwrap();
        let mut nb = Neighbors::new();
        let a: Vec<Neighbor> = nb
            .expand(&g, Coord::new(1, 1), &mut StdRng::seed_from_u64(99))
            .to_vec();
        let b: Vec<Neighbor> = nb
            .expand(&g, Coord::new(1, 1), &mut StdRng::seed_from_u64(99))
            .to_vec();
        assert_eq!(a, b);
    }
}
