//! Sliding-image puzzle engine.
//!
//! A source image is partitioned into a rows x cols grid of pieces, the
//! pieces are dealt into random cells, and the player drags them back home.
//! This crate owns the grid state and its operations; rendering, raw input
//! capture, and dialogs stay with the embedding shell, which drives the
//! engine through [`PuzzleSession`] and redraws from
//! [`PuzzleBoard::placements`].

pub mod board;
pub mod constants;
pub mod error;
pub mod image_source;
pub mod piece;
pub mod session;
pub mod snapshot;

pub use board::{Arrangement, PiecePlacement, PlacementResult, PuzzleBoard};
pub use error::PuzzleError;
pub use image_source::PuzzleImage;
pub use piece::{Cell, CropRect, Piece};
pub use session::{CompletionSink, PuzzleSession};
pub use snapshot::{BoardSnapshot, PieceRecord, SnapshotStore};
