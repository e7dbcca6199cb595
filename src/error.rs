use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by puzzle construction and piece placement.
///
/// Only the build-time variants are fatal; placement errors leave the board
/// exactly as it was, with every piece on its prior cell.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The image file could not be read or its format understood.
    #[error("failed to read image {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The source image has a zero dimension, so no crop grid can be formed.
    #[error("image has invalid dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// The requested grid has a zero row or column count.
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    InvalidGrid { rows: usize, cols: usize },

    /// A drop position resolved to a cell outside the grid. The move is
    /// rejected; the dragged piece keeps its prior cell.
    #[error("drop position ({x}, {y}) is outside the board")]
    OutOfBounds { x: f32, y: f32 },

    /// The placed piece id does not belong to this board.
    #[error("piece {0} is not part of this puzzle")]
    UnknownPiece(Uuid),
}
