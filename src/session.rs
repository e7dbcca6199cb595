//! Gesture-to-operation wiring around a [`PuzzleBoard`].
//!
//! The embedding shell owns raw pointer events and rendering; this layer
//! owns the translation of grab/drag/release gestures into board
//! operations, the edge-triggered "puzzle completed" notification, and the
//! best-effort snapshot written after every state change. Event handlers
//! themselves never mutate the grid.

use uuid::Uuid;

use crate::board::{PlacementResult, PuzzleBoard};
use crate::error::PuzzleError;
use crate::snapshot::SnapshotStore;

/// Receives the "puzzle completed" event, raised exactly once per
/// transition into the solved state. It does not re-fire while the board
/// stays solved.
pub trait CompletionSink {
    fn puzzle_completed(&mut self);
}

/// One player's puzzle: the board plus its notification and persistence
/// collaborators. Calls arrive one per gesture; the session never mutates
/// the board concurrently.
pub struct PuzzleSession<S: CompletionSink> {
    board: PuzzleBoard,
    sink: S,
    store: Option<SnapshotStore>,
    grabbed: Option<Uuid>,
}

impl<S: CompletionSink> PuzzleSession<S> {
    pub fn new(board: PuzzleBoard, sink: S) -> Self {
        Self {
            board,
            sink,
            store: None,
            grabbed: None,
        }
    }

    /// Also writes a snapshot to `store` after every state change.
    pub fn with_store(board: PuzzleBoard, sink: S, store: SnapshotStore) -> Self {
        Self {
            board,
            sink,
            store: Some(store),
            grabbed: None,
        }
    }

    pub fn board(&self) -> &PuzzleBoard {
        &self.board
    }

    /// The piece currently held by the pointer, if any.
    pub fn grabbed(&self) -> Option<Uuid> {
        self.grabbed
    }

    /// A drag gesture started on a piece. Advisory; the grid does not
    /// change until the piece is released.
    pub fn piece_grabbed(&mut self, piece: Uuid) {
        self.grabbed = Some(piece);
        log::trace!("grabbed {piece}");
    }

    /// The pointer moved while dragging. Advisory only.
    pub fn piece_dragged(&self, piece: Uuid, x: f32, y: f32) {
        log::trace!("dragging {piece} at ({x}, {y})");
    }

    /// The drag gesture ended: snap the piece onto the grid.
    ///
    /// An out-of-grid drop returns the error and leaves the piece on its
    /// prior cell.
    pub fn piece_released(
        &mut self,
        piece: Uuid,
        x: f32,
        y: f32,
    ) -> Result<PlacementResult, PuzzleError> {
        self.grabbed = None;
        let result = self.board.place(piece, x, y)?;
        if result.completed {
            self.sink.puzzle_completed();
        }
        self.persist();
        Ok(result)
    }

    /// Deals the pieces into a fresh random arrangement.
    pub fn shuffle(&mut self) {
        if self.board.shuffle() {
            self.sink.puzzle_completed();
        }
        self.persist();
    }

    /// Returns every piece to its home cell.
    pub fn solve(&mut self) {
        if self.board.solve() {
            self.sink.puzzle_completed();
        }
        self.persist();
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            if let Err(err) = store.write(&self.board.snapshot()) {
                log::warn!("failed to save puzzle snapshot: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_source::PuzzleImage;
    use crate::piece::Cell;
    use crate::snapshot::BoardSnapshot;
    use std::cell::Cell as Counter;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingSink(Rc<Counter<usize>>);

    impl CountingSink {
        fn completions(&self) -> usize {
            self.0.get()
        }
    }

    impl CompletionSink for CountingSink {
        fn puzzle_completed(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn deranged_board_2x2() -> PuzzleBoard {
        let mut board =
            PuzzleBoard::build(PuzzleImage::from_dimensions(400, 400), 2, 2).unwrap();
        let a = board.piece_at(Cell::new(0, 0)).unwrap().id;
        let b = board.piece_at(Cell::new(0, 1)).unwrap().id;
        board.place(a, 250.0, 250.0).unwrap();
        board.place(b, 50.0, 250.0).unwrap();
        assert!(!board.is_complete());
        board
    }

    #[test]
    fn completion_fires_once_on_the_final_release() {
        let _ = env_logger::builder().is_test(true).try_init();
        let sink = CountingSink::default();
        let mut session = PuzzleSession::new(deranged_board_2x2(), sink.clone());

        let mut releases = 0;
        for row in 0..2 {
            for col in 0..2 {
                let home = Cell::new(row, col);
                let piece = session
                    .board()
                    .pieces()
                    .iter()
                    .find(|p| p.home == home)
                    .unwrap()
                    .id;
                let x = col as f32 * 200.0 + 50.0;
                let y = row as f32 * 200.0 + 50.0;
                let result = session.piece_released(piece, x, y).unwrap();
                releases += 1;
                if result.completed {
                    assert!(session.board().is_complete());
                }
            }
        }
        assert_eq!(releases, 4);
        assert!(session.board().is_complete());
        assert_eq!(sink.completions(), 1);
    }

    #[test]
    fn completion_does_not_refire_on_releases_while_solved() {
        let sink = CountingSink::default();
        let mut session = PuzzleSession::new(deranged_board_2x2(), sink.clone());
        session.solve();
        assert_eq!(sink.completions(), 1);

        let piece = session.board().piece_at(Cell::new(0, 0)).unwrap().id;
        session.piece_released(piece, 50.0, 50.0).unwrap();
        assert!(session.board().is_complete());
        assert_eq!(sink.completions(), 1);
    }

    #[test]
    fn completion_rearms_after_the_board_leaves_the_solved_state() {
        let sink = CountingSink::default();
        let mut session = PuzzleSession::new(deranged_board_2x2(), sink.clone());
        session.solve();
        assert_eq!(sink.completions(), 1);

        let piece = session.board().piece_at(Cell::new(0, 0)).unwrap().id;
        session.piece_released(piece, 250.0, 250.0).unwrap();
        assert!(!session.board().is_complete());
        session.solve();
        assert_eq!(sink.completions(), 2);
    }

    #[test]
    fn grab_and_drag_are_advisory() {
        let sink = CountingSink::default();
        let mut session = PuzzleSession::new(deranged_board_2x2(), sink.clone());
        let before = session.board().arrangement();
        let piece = session.board().piece_at(Cell::new(0, 0)).unwrap().id;

        session.piece_grabbed(piece);
        assert_eq!(session.grabbed(), Some(piece));
        session.piece_dragged(piece, 123.0, 456.0);
        assert_eq!(session.board().arrangement(), before);
        assert_eq!(sink.completions(), 0);
    }

    #[test]
    fn out_of_grid_release_keeps_the_piece_on_its_cell() {
        let sink = CountingSink::default();
        let mut session = PuzzleSession::new(deranged_board_2x2(), sink.clone());
        let piece = session.board().piece_at(Cell::new(0, 0)).unwrap().id;

        assert!(session.piece_released(piece, 500.0, 0.0).is_err());
        assert_eq!(session.board().cell_of(piece), Some(Cell::new(0, 0)));
        assert_eq!(session.grabbed(), None);
    }

    #[test]
    fn snapshots_are_written_after_state_changes() {
        let path = std::env::temp_dir().join(format!(
            "ma_puzzle_session_{}.json",
            uuid::Uuid::new_v4()
        ));
        let sink = CountingSink::default();
        let mut session = PuzzleSession::with_store(
            deranged_board_2x2(),
            sink.clone(),
            SnapshotStore::new(&path),
        );

        session.solve();
        let restored: BoardSnapshot =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored.pieces.len(), 4);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn a_failing_snapshot_store_never_blocks_the_move() {
        let sink = CountingSink::default();
        let mut session = PuzzleSession::with_store(
            deranged_board_2x2(),
            sink.clone(),
            SnapshotStore::new("/definitely/not/a/real/dir/snapshot.json"),
        );

        session.solve();
        assert!(session.board().is_complete());
        assert_eq!(sink.completions(), 1);
    }
}
