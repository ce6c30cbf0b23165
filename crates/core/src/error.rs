//! Error types for board construction
//!
//! Gameplay never fails: out-of-bounds reads yield `None` and rejected moves are
//! reported through [`MoveOutcome`](crate::board::MoveOutcome). Only building a
//! board (or a generator for one) can be refused.

/// Errors that can occur while constructing a board or one of its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}: need at least 1x1 and at most {} cells", crate::config::MAX_CELLS)]
    InvalidDimensions { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile palette is empty")]
    EmptyPalette,
}
