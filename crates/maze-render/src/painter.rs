use image::{Rgba, RgbaImage};
use maze_core::{Coord, Grid};
use maze_search::{Frame, StrategyKind, euclidean, manhattan};

use crate::label::{Clip, Labeler};
use crate::output::RenderError;

pub const WALL: [u8; 4] = [0, 0, 0, 255];
pub const START: [u8; 4] = [1, 100, 32, 255];
pub const GOAL: [u8; 4] = [255, 0, 0, 255];
pub const SOLUTION: [u8; 4] = [0, 255, 0, 255];
pub const CURRENT: [u8; 4] = [255, 140, 25, 255];
pub const WATER: [u8; 4] = [14, 180, 173, 255];
pub const EXPLORED: [u8; 4] = [255, 255, 101, 255];
pub const FREE: [u8; 4] = [255, 255, 255, 255];
pub const GRID_LINE: [u8; 4] = [125, 125, 125, 255];
pub const TEXT: [u8; 4] = [0, 0, 0, 255];

/// Tiles smaller than this are painted without labels.
pub const MIN_LABEL_CELL: u32 = 24;

/// Label layout for a 60 px tile; scaled with the tile.
const LABEL_CELL: f32 = 60.0;
const LABEL_SIZE: f32 = 13.0;
const KEY_AT: (f32, f32) = (6.0, 17.0);
const LOCATION_AT: (f32, f32) = (6.0, 40.0);
const WATER_AT: (f32, f32) = (50.0, 18.0);

/// Paints one square tile per maze cell.
#[derive(Debug, Clone)]
pub struct Painter {
    cell_size: u32,
    labels: Option<Labeler>,
}

impl Painter {
    /// A painter drawing `cell_size`-pixel tiles without labels. Sizes below
    /// 2 are raised to 2 so that every tile keeps an interior.
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(2),
            labels: None,
        }
    }

    /// Also write each open cell's coordinates, its search key and a water
    /// mark into the tile.
    pub fn with_labels(mut self, labeler: Labeler) -> Self {
        self.labels = Some(labeler);
        self
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Pixel dimensions of the whole image for `grid`.
    pub fn image_size(&self, grid: &Grid) -> Result<(u32, u32), RenderError> {
        let scaled = |n: i32| {
            u32::try_from(n)
                .ok()
                .and_then(|n| n.checked_mul(self.cell_size))
        };
        match (scaled(grid.width()), scaled(grid.height())) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(RenderError::TooLarge {
                width: grid.width(),
                height: grid.height(),
                cell_size: self.cell_size,
            }),
        }
    }

    /// Render `frame` as an RGBA image: one coloured tile per cell with gray
    /// grid lines along tile edges.
    pub fn paint(&self, frame: &Frame<'_>) -> Result<RgbaImage, RenderError> {
        let (w, h) = self.image_size(frame.grid)?;
        let mut img = RgbaImage::from_pixel(w, h, Rgba(WALL));
        for (pos, _) in frame.grid.iter() {
            self.fill_tile(&mut img, pos, cell_color(frame, pos));
        }
        if let Some(labeler) = self.labels.as_ref().filter(|_| self.cell_size >= MIN_LABEL_CELL) {
            for (pos, cell) in frame.grid.iter() {
                if !cell.is_wall() {
                    self.label_tile(labeler, &mut img, frame, pos);
                }
            }
        }
        self.draw_grid_lines(&mut img);
        Ok(img)
    }

    fn fill_tile(&self, img: &mut RgbaImage, pos: Coord, color: [u8; 4]) {
        let x0 = pos.col as u32 * self.cell_size;
        let y0 = pos.row as u32 * self.cell_size;
        for y in y0..y0 + self.cell_size {
            for x in x0..x0 + self.cell_size {
                img.put_pixel(x, y, Rgba(color));
            }
        }
    }

    fn label_tile(&self, labeler: &Labeler, img: &mut RgbaImage, frame: &Frame<'_>, pos: Coord) {
        let cs = self.cell_size;
        let x0 = pos.col as u32 * cs;
        let y0 = pos.row as u32 * cs;
        let clip = Clip {
            x0: x0 + 1,
            y0: y0 + 1,
            x1: x0 + cs,
            y1: y0 + cs,
        };
        let k = cs as f32 / LABEL_CELL;
        let at = |(x, y): (f32, f32)| (x0 as f32 + x * k, y0 as f32 + y * k);
        let size = LABEL_SIZE * k;

        if let Some(key) = key_label(frame, pos) {
            labeler.draw(img, &key, at(KEY_AT), size, TEXT, clip);
        }
        if frame.grid.is_flooded(pos) {
            labeler.draw(img, "W", at(WATER_AT), size, TEXT, clip);
        }
        let location = format!("[{} {}]", pos.row, pos.col);
        labeler.draw(img, &location, at(LOCATION_AT), size, TEXT, clip);
    }

    fn draw_grid_lines(&self, img: &mut RgbaImage) {
        let cs = self.cell_size;
        let (w, h) = img.dimensions();
        for y in 0..h {
            for x in 0..w {
                if x % cs == 0 || y % cs == 0 {
                    img.put_pixel(x, y, Rgba(GRID_LINE));
                }
            }
        }
    }
}

/// Tile colour for `pos`. Earlier categories win: wall, start, goal,
/// solution, current, water, explored, free.
pub fn cell_color(frame: &Frame<'_>, pos: Coord) -> [u8; 4] {
    let grid = frame.grid;
    if !grid.is_passable(pos) {
        WALL
    } else if pos == grid.start() {
        START
    } else if pos == grid.goal() {
        GOAL
    } else if frame.solution.contains(pos) {
        SOLUTION
    } else if pos == frame.current {
        CURRENT
    } else if grid.is_flooded(pos) {
        WATER
    } else if frame.explored.contains(pos) {
        EXPLORED
    } else {
        FREE
    }
}

/// The cost shown in a tile: the frontier key of the strategy, without the
/// flood penalty. DFS and BFS have none.
pub fn key_label(frame: &Frame<'_>, pos: Coord) -> Option<String> {
    let grid = frame.grid;
    match frame.strategy {
        StrategyKind::Dfs | StrategyKind::Bfs => None,
        StrategyKind::Gbfs => Some(manhattan(pos, grid.goal()).to_string()),
        StrategyKind::Dijkstra => Some(manhattan(pos, grid.start()).to_string()),
        StrategyKind::Astar => {
            let total = f64::from(manhattan(pos, grid.start())) + euclidean(pos, grid.goal());
            Some(format!("{total:.2}"))
        }
    }
}
