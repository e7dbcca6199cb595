//! Source-image metadata for crop-geometry computation.
//!
//! The engine never touches pixel data. It needs the image's dimensions to
//! cut the crop grid, and it carries the path the image came from so
//! snapshots can reference the same picture; everything else about the image
//! stays with the rendering shell.

use std::path::Path;

use crate::error::PuzzleError;

/// The chosen source image: pixel dimensions plus the path it was loaded
/// from. `path` is empty for images supplied as bare dimensions.
#[derive(Clone, Debug)]
pub struct PuzzleImage {
    path: String,
    width: u32,
    height: u32,
}

impl PuzzleImage {
    /// Probes an image file for its dimensions without decoding pixel data.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let (width, height) =
            image::image_dimensions(path).map_err(|source| PuzzleError::ImageRead {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("{}: {}x{}", path.display(), width, height);
        Ok(Self {
            path: path.to_string_lossy().into_owned(),
            width,
            height,
        })
    }

    /// Builds image metadata from bare dimensions, for callers that manage
    /// their own image handles (and for tests).
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self {
            path: String::new(),
            width,
            height,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_reports_unreadable_files() {
        let err = PuzzleImage::open("/definitely/not/a/real/image.png").unwrap_err();
        assert!(matches!(err, PuzzleError::ImageRead { .. }));
    }

    #[test]
    fn bare_dimensions_have_no_path() {
        let image = PuzzleImage::from_dimensions(640, 480);
        assert_eq!(image.width(), 640);
        assert_eq!(image.height(), 480);
        assert!(image.path().is_empty());
    }
}
