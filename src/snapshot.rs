//! Full-board snapshots and the JSON store they are written to.
//!
//! A snapshot records the image reference and, for every piece, its cell and
//! pixel-aligned position. Writes are best-effort side effects: a failed
//! write is reported to the caller and the in-memory board state stands.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serialized state of one piece: the cell it occupies and the pixel
/// position of that cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub id: Uuid,
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
}

/// A complete board snapshot, obtainable after every state-changing
/// operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Path the source image was loaded from; empty when the image was
    /// supplied as bare dimensions.
    pub image: String,
    pub pieces: Vec<PieceRecord>,
}

/// Writes snapshots to a fixed file as pretty-printed JSON.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory, creating it as needed.
    pub fn in_project_dirs() -> io::Result<Self> {
        let dirs = ProjectDirs::from("com", "mablocks", "MaPuzzle")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
        let dir = dirs.data_dir().join("snapshots");
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join("puzzle_snapshot.json"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, snapshot: &BoardSnapshot) -> io::Result<()> {
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, snapshot).map_err(io::Error::from)
    }
}
