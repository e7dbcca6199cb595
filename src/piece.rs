use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One discrete grid position, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Crop rectangle within the source image, in source-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One rectangular crop of the source image, individually draggable.
///
/// Identity and geometry are fixed when the puzzle is built; the cell a
/// piece currently occupies lives on the board, not here.
#[derive(Clone, Debug)]
pub struct Piece {
    pub id: Uuid,
    pub crop: CropRect,
    pub home: Cell,
}

impl Piece {
    pub fn new(crop: CropRect, home: Cell) -> Self {
        Self {
            id: Uuid::new_v4(),
            crop,
            home,
        }
    }
}
