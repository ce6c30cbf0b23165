//! Core match-3 logic - pure, deterministic, and testable
//!
//! This crate contains the board rules and nothing else. It has **no
//! dependencies** on rendering, input, or I/O, and the only source of
//! variation is the injected [`Generator`]:
//!
//! - **Deterministic**: the same generator sequence replays the same game
//! - **Testable**: scripted generators and explicit layouts via [`Board::from_rows`]
//! - **Portable**: usable headless, from a terminal, or behind any UI
//!
//! # Module Structure
//!
//! - [`board`]: the [`Board`] orchestrator, listeners, score, and [`MoveOutcome`]
//! - [`grid`]: flat cell storage with match scanning, gravity, and refill
//! - [`generator`]: the [`Generator`] seam and the closure adapter [`from_fn`]
//! - [`rng`]: seeded LCG and the bag randomizer [`TileBag`]
//! - [`config`]: [`BoardConfig`] (dimensions, points per tile)
//! - [`error`]: [`BoardError`]
//!
//! # Game Rules
//!
//! - **Moves**: swap two orthogonally adjacent tiles
//! - **Matches**: three equal tiles side by side on one row; vertical runs do not count
//! - **Failed moves**: a swap that forms no match is undone
//! - **Clearing**: matched cells empty, tiles above fall, the generator fills the top
//! - **No cascades**: runs formed by falling or new tiles wait for the next move
//! - **Scoring**: `points_per_tile` (default 10) per matched position
//!
//! # Example
//!
//! ```
//! use match3_core::{Board, MoveOutcome, TileBag};
//! use match3_core::types::{BoardEvent, Position};
//!
//! let bag = TileBag::new(vec!['r', 'g', 'b'], 7)?;
//! let mut board = Board::from_rows(
//!     bag,
//!     vec![
//!         vec!['r', 'g', 'r', 'r'],
//!         vec!['b', 'r', 'b', 'g'],
//!     ],
//!     10,
//! )?;
//!
//! board.add_listener(|event: &BoardEvent<char>| {
//!     if let BoardEvent::Match(found) = event {
//!         assert_eq!(found.matched, 'r');
//!     }
//! });
//!
//! // Swapping the 'g' at (0, 1) with the 'r' below completes r r r r.
//! let outcome = board.try_move(Position::new(0, 1), Position::new(1, 1));
//! assert!(matches!(outcome, MoveOutcome::Cleared { matches: 2, .. }));
//! assert_eq!(board.score(), 60);
//! # Ok::<(), match3_core::BoardError>(())
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod rng;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Listener, MoveOutcome};
pub use config::{BoardConfig, MAX_CELLS};
pub use error::BoardError;
pub use generator::{from_fn, FromFn, Generator};
pub use grid::Grid;
pub use rng::{SimpleRng, TileBag};
