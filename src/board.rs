//! Puzzle board state: the rows x cols grid of pieces and the operations
//! that mutate it.
//!
//! The grid vector is the single source of truth for occupancy. It is a
//! permutation of the piece-id set at all times; placement swaps entries
//! instead of overwriting, so no cell can end up empty or doubly occupied.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::constants::{CELL_HEIGHT, CELL_WIDTH};
use crate::error::PuzzleError;
use crate::image_source::PuzzleImage;
use crate::piece::{Cell, CropRect, Piece};
use crate::snapshot::{BoardSnapshot, PieceRecord};

/// A complete cell-to-piece mapping, row-major, comparable across time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Arrangement(Vec<Uuid>);

impl Arrangement {
    /// Occupying piece ids in row-major cell order.
    pub fn ids(&self) -> &[Uuid] {
        &self.0
    }
}

/// Outcome of a successful placement.
#[derive(Clone, Copy, Debug)]
pub struct PlacementResult {
    /// The cell the drop position resolved to.
    pub cell: Cell,
    /// The piece that was swapped back to the dragged piece's origin cell,
    /// when the target cell was held by another piece.
    pub displaced: Option<Uuid>,
    /// True when this placement moved the board into the solved state.
    pub completed: bool,
}

/// Where the renderer should draw one piece: its cell and the pixel-aligned
/// position of that cell.
#[derive(Clone, Copy, Debug)]
pub struct PiecePlacement {
    pub id: Uuid,
    pub cell: Cell,
    pub x: f32,
    pub y: f32,
}

/// Owns the piece set and the grid they occupy.
///
/// All mutation goes through [`shuffle`](Self::shuffle),
/// [`place`](Self::place) and [`solve`](Self::solve), each of which reports
/// whether it transitioned the board into the solved state so the caller
/// can raise the completed notification exactly once.
#[derive(Debug)]
pub struct PuzzleBoard {
    image: PuzzleImage,
    rows: usize,
    cols: usize,
    cell_width: f32,
    cell_height: f32,
    /// Row-major home order; fixed after build.
    pieces: Vec<Piece>,
    /// Cell index -> occupying piece id.
    grid: Vec<Uuid>,
    solved: Arrangement,
    complete: bool,
}

impl PuzzleBoard {
    // ─────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────

    /// Partitions the image into a rows x cols grid of pieces, each starting
    /// on its home cell, drawn at the reference 200x200 cell size.
    pub fn build(image: PuzzleImage, rows: usize, cols: usize) -> Result<Self, PuzzleError> {
        Self::build_sized(image, rows, cols, CELL_WIDTH, CELL_HEIGHT)
    }

    /// [`build`](Self::build) with an explicit on-screen cell size.
    pub fn build_sized(
        image: PuzzleImage,
        rows: usize,
        cols: usize,
        cell_width: f32,
        cell_height: f32,
    ) -> Result<Self, PuzzleError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(PuzzleError::InvalidImage {
                width: image.width(),
                height: image.height(),
            });
        }
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::InvalidGrid { rows, cols });
        }

        let mut pieces = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let crop = crop_region(image.width(), image.height(), rows, cols, row, col);
                pieces.push(Piece::new(crop, Cell::new(row, col)));
            }
        }
        let grid: Vec<Uuid> = pieces.iter().map(|p| p.id).collect();
        let solved = Arrangement(grid.clone());

        log::info!(
            "built {rows}x{cols} puzzle from {}x{} image",
            image.width(),
            image.height()
        );
        Ok(Self {
            image,
            rows,
            cols,
            cell_width,
            cell_height,
            pieces,
            grid,
            solved,
            complete: true,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Deals a uniform random permutation of the pieces onto the cells.
    ///
    /// Every ordering is equally likely, including the solved one; there is
    /// no must-differ retry. Returns true when the deal transitioned the
    /// board into the solved state.
    pub fn shuffle(&mut self) -> bool {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// [`shuffle`](Self::shuffle) drawing from a caller-supplied generator,
    /// so tests can seed it.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.grid.shuffle(rng);
        log::debug!("shuffled {} pieces", self.grid.len());
        self.refresh_completion()
    }

    /// Snaps a dropped piece onto the cell containing the drop position,
    /// swapping it with that cell's occupant.
    ///
    /// A drop outside the grid is rejected and the board is left untouched;
    /// the piece stays on the cell it was dragged from.
    pub fn place(&mut self, piece: Uuid, x: f32, y: f32) -> Result<PlacementResult, PuzzleError> {
        let target = self.cell_at(x, y)?;
        let origin_idx = self
            .grid
            .iter()
            .position(|id| *id == piece)
            .ok_or(PuzzleError::UnknownPiece(piece))?;
        let target_idx = self.cell_index(target);

        let displaced = (target_idx != origin_idx).then(|| self.grid[target_idx]);
        self.grid.swap(origin_idx, target_idx);
        let completed = self.refresh_completion();

        log::debug!(
            "placed {piece} at ({}, {}){}",
            target.row,
            target.col,
            if completed { ", puzzle complete" } else { "" }
        );
        Ok(PlacementResult {
            cell: target,
            displaced,
            completed,
        })
    }

    /// Returns every piece to its home cell. Returns true when the board
    /// was not already solved.
    pub fn solve(&mut self) -> bool {
        self.grid.clone_from(&self.solved.0);
        self.refresh_completion()
    }

    /// True iff every piece sits on its home cell.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    // ─────────────────────────────────────────────────────────────────────
    // Geometry
    // ─────────────────────────────────────────────────────────────────────

    /// Maps a continuous position in board pixels to the cell containing it.
    pub fn cell_at(&self, x: f32, y: f32) -> Result<Cell, PuzzleError> {
        let col = (x / self.cell_width).floor();
        let row = (y / self.cell_height).floor();
        let in_range =
            row >= 0.0 && col >= 0.0 && row < self.rows as f32 && col < self.cols as f32;
        if !in_range {
            return Err(PuzzleError::OutOfBounds { x, y });
        }
        Ok(Cell::new(row as usize, col as usize))
    }

    fn cell_index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    fn cell_from_index(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    fn refresh_completion(&mut self) -> bool {
        let now = self.grid == self.solved.0;
        let entered = now && !self.complete;
        self.complete = now;
        entered
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    pub fn image(&self) -> &PuzzleImage {
        &self.image
    }

    /// All pieces in row-major home order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Looks a piece up by id.
    pub fn piece(&self, id: Uuid) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// The piece currently occupying a cell, or None for a cell outside the
    /// grid.
    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }
        let id = self.grid[self.cell_index(cell)];
        self.piece(id)
    }

    /// The cell a piece currently occupies.
    pub fn cell_of(&self, id: Uuid) -> Option<Cell> {
        self.grid
            .iter()
            .position(|occupant| *occupant == id)
            .map(|index| self.cell_from_index(index))
    }

    /// Snapshot of the current cell-to-piece mapping.
    pub fn arrangement(&self) -> Arrangement {
        Arrangement(self.grid.clone())
    }

    /// The arrangement captured at build time.
    pub fn solved_arrangement(&self) -> &Arrangement {
        &self.solved
    }

    /// The full current arrangement with pixel-aligned draw positions, for
    /// the renderer to redraw after every shuffle, placement, or solve.
    pub fn placements(&self) -> Vec<PiecePlacement> {
        self.grid
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let cell = self.cell_from_index(index);
                PiecePlacement {
                    id: *id,
                    cell,
                    x: cell.col as f32 * self.cell_width,
                    y: cell.row as f32 * self.cell_height,
                }
            })
            .collect()
    }

    /// Serializable full-board state: the image reference and every piece's
    /// cell and pixel position.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            image: self.image.path().to_owned(),
            pieces: self
                .placements()
                .into_iter()
                .map(|p| PieceRecord {
                    id: p.id,
                    row: p.cell.row,
                    col: p.cell.col,
                    x: p.x,
                    y: p.y,
                })
                .collect(),
        }
    }
}

/// Crop region for one cell, using exact integer boundaries so the regions
/// tile the source image with no gaps or overlaps even when the dimensions
/// do not divide evenly.
fn crop_region(width: u32, height: u32, rows: usize, cols: usize, row: usize, col: usize) -> CropRect {
    let x0 = (col as u64 * width as u64 / cols as u64) as u32;
    let x1 = ((col as u64 + 1) * width as u64 / cols as u64) as u32;
    let y0 = (row as u64 * height as u64 / rows as u64) as u32;
    let y1 = ((row as u64 + 1) * height as u64 / rows as u64) as u32;
    CropRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    }
}
