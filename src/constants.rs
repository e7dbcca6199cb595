//! Reference configuration for the puzzle grid.
//!
//! The values mirror the classic setup: a 4x4 grid of pieces, each drawn at
//! a fixed 200x200 on-screen size regardless of the source-image crop size.

/// Number of piece rows in the reference configuration.
pub const DEFAULT_ROWS: usize = 4;

/// Number of piece columns in the reference configuration.
pub const DEFAULT_COLS: usize = 4;

/// On-screen width of one grid cell, in pixels. Drop positions are resolved
/// against this, not against the crop-region size.
pub const CELL_WIDTH: f32 = 200.0;

/// On-screen height of one grid cell, in pixels.
pub const CELL_HEIGHT: f32 = 200.0;
