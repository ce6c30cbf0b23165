//! Core types module - shared data structures and constants
//!
//! This module defines the value types exchanged between the board engine and its
//! callers. All types are plain data with no behavior beyond construction and
//! comparison, so they can be logged, serialized, or forwarded to a renderer as-is.
//!
//! # Coordinates
//!
//! - **Rows** grow downward: row 0 is the top of the board
//! - **Columns** grow rightward: column 0 is the left edge
//! - Coordinates are signed so an out-of-bounds query such as `(-1, 0)` is representable
//!
//! # Engine Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATCH_LEN` | 3 | Length of a horizontal run that counts as a match |
//! | `POINTS_PER_TILE` | 10 | Default score per cleared tile |
//!
//! # Examples
//!
//! ```
//! use match3_types::{BoardEvent, Match, Position};
//!
//! let a = Position::new(1, 1);
//! assert!(a.is_adjacent(Position::new(1, 2)));
//! assert!(!a.is_adjacent(Position::new(2, 2)));
//!
//! let m = Match::horizontal('x', 0, 2);
//! assert_eq!(m.positions[0], Position::new(0, 2));
//! assert_eq!(m.positions[2], Position::new(0, 4));
//!
//! let event = BoardEvent::from(m);
//! assert!(event.is_match());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of equal tiles in a row that form a match
pub const MATCH_LEN: usize = 3;

/// Default points awarded per cleared tile
pub const POINTS_PER_TILE: u32 = 10;

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbours only: same row one column apart, or same column one row apart.
    ///
    /// A position is never adjacent to itself.
    pub fn is_adjacent(self, other: Position) -> bool {
        let dr = (self.row as i64 - other.row as i64).abs();
        let dc = (self.col as i64 - other.col as i64).abs();
        dr + dc == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A run of `MATCH_LEN` equal tiles found on one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match<T> {
    /// The tile value shared by every matched cell
    pub matched: T,
    /// Matched cells, left to right
    pub positions: [Position; MATCH_LEN],
}

impl<T> Match<T> {
    /// Build the match starting at `(row, col)` and extending rightward.
    pub fn horizontal(matched: T, row: i32, col: i32) -> Self {
        Self {
            matched,
            positions: [
                Position::new(row, col),
                Position::new(row, col + 1),
                Position::new(row, col + 2),
            ],
        }
    }

    pub fn contains(&self, p: Position) -> bool {
        self.positions.contains(&p)
    }
}

/// Notification delivered to board listeners
///
/// A committed move emits one `Match` per detected match, in detection order,
/// followed by exactly one `Refill`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardEvent<T> {
    Match(Match<T>),
    Refill,
}

impl<T> BoardEvent<T> {
    pub fn is_match(&self) -> bool {
        matches!(self, BoardEvent::Match(_))
    }

    pub fn is_refill(&self) -> bool {
        matches!(self, BoardEvent::Refill)
    }

    /// The match payload, if this is a `Match` event
    pub fn as_match(&self) -> Option<&Match<T>> {
        match self {
            BoardEvent::Match(found) => Some(found),
            BoardEvent::Refill => None,
        }
    }
}

impl<T> From<Match<T>> for BoardEvent<T> {
    fn from(found: Match<T>) -> Self {
        BoardEvent::Match(found)
    }
}
