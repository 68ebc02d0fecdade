//! The [`Cell`] type — per-coordinate terrain flags.

/// Terrain of a single maze cell.
///
/// Walls are impassable. Water is passable but expensive for cost-aware
/// strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub wall: bool,
    pub water: bool,
}

impl Cell {
    /// An open, dry cell.
    pub const FREE: Self = Self {
        wall: false,
        water: false,
    };

    /// An impassable cell.
    pub const WALL: Self = Self {
        wall: true,
        water: false,
    };

    /// A flooded, passable cell.
    pub const WATER: Self = Self {
        wall: false,
        water: true,
    };

    #[inline]
    pub const fn is_wall(self) -> bool {
        self.wall
    }

    #[inline]
    pub const fn is_water(self) -> bool {
        self.water
    }
}
