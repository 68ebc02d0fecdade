//! PNG snapshots of a maze search.
//!
//! [`PngRenderer`] plugs into [`maze_search::Solver`] as its renderer and
//! writes the final state to `solution.png`, plus one `frame_NNNNNN.png` per
//! expansion when frame output is enabled. [`PngRenderer::write_animation`]
//! then stitches those frames into an animated `animation.png`.
//!
//! Each cell becomes a square tile; the tile colour is picked by
//! [`cell_color`]:
//!
//! | Cell | Colour |
//! |---|---|
//! | wall | black |
//! | start | dark green |
//! | goal | red |
//! | on the solution | green |
//! | being expanded | orange |
//! | water | teal |
//! | explored | yellow |
//! | anything else | white |
//!
//! Tiles of at least [`MIN_LABEL_CELL`] pixels also carry the cell's
//! `[row col]`, the strategy's key for that cell ([`key_label`]) and a `W`
//! on water.

pub mod label;
mod output;
pub mod painter;

pub use label::Labeler;
pub use output::{FINAL_DELAY, FRAME_DELAY, PngRenderer, RenderConfig, RenderError};
pub use painter::{MIN_LABEL_CELL, Painter, cell_color, key_label};
