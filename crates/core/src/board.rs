//! Board module - the match-3 rule engine
//!
//! [`Board`] owns the grid, the tile generator, the listener list and the score.
//! Its one state transition is [`Board::try_move`]:
//!
//! 1. swap the two cells
//! 2. scan the whole grid for horizontal runs of three
//! 3. no match: swap back and stop (nothing else changes, nobody is notified)
//! 4. clear every matched cell and add `points_per_tile` per matched position
//! 5. notify one `Match` event per match, in scan order
//! 6. let every column fall, then refill the gaps from the generator
//! 7. notify a single `Refill`
//!
//! New runs created by the refill are left on the board; a move resolves
//! exactly one wave of matches.

use std::fmt;

use tracing::debug;

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::generator::Generator;
use crate::grid::Grid;
use crate::types::{BoardEvent, Match, Position};

/// Callback registered with [`Board::add_listener`]
pub type Listener<T> = Box<dyn FnMut(&BoardEvent<T>)>;

/// Result of [`Board::try_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The positions are not orthogonal neighbours
    NotAdjacent,
    /// Neighbours, but at least one lies outside the board
    OutOfBounds,
    /// The swap formed no match and was undone
    NoMatch,
    /// The swap was kept and its matches resolved
    Cleared {
        /// Number of matches found (overlapping windows counted separately)
        matches: usize,
        /// Distinct cells emptied and refilled
        tiles: usize,
        /// Points added to the score by this move
        points: u32,
    },
}

impl MoveOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Cleared { .. })
    }
}

/// A rectangular match-3 board of `T` tiles fed by a `G` generator.
///
/// Listeners only ever see a `&BoardEvent`, never the board, and `try_move`
/// needs `&mut self`, so a listener cannot start another move on the same
/// board while one is being resolved:
///
/// ```compile_fail
/// use match3_core::{generator::from_fn, Board};
/// use match3_core::types::Position;
///
/// let mut board = Board::new(from_fn(|| 0u8), 3, 3).unwrap();
/// board.add_listener(|_event| {
///     board.try_move(Position::new(0, 0), Position::new(0, 1));
/// });
/// ```
pub struct Board<T, G> {
    grid: Grid<T>,
    generator: G,
    listeners: Vec<Listener<T>>,
    score: u32,
    points_per_tile: u32,
}

impl<T, G: Generator<T>> Board<T, G> {
    /// Build a `width x height` board, drawing every tile from `generator` in
    /// row-major order. Scores the default points per tile.
    pub fn new(generator: G, width: usize, height: usize) -> Result<Self, BoardError> {
        Self::with_config(generator, &BoardConfig::new(width, height))
    }

    pub fn with_config(mut generator: G, config: &BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let grid = Grid::generate(config.width, config.height, &mut generator);
        debug!(
            width = config.width,
            height = config.height,
            points_per_tile = config.points_per_tile,
            "board created"
        );
        Ok(Self::assemble(grid, generator, config.points_per_tile))
    }

    /// Build a board from an explicit layout. `generator` is only used for refills.
    ///
    /// ```
    /// use match3_core::{generator::from_fn, Board};
    /// use match3_core::types::Position;
    ///
    /// let board = Board::from_rows(from_fn(|| 'z'), vec![vec!['a', 'b'], vec!['c', 'd']], 10)?;
    /// assert_eq!(board.piece(Position::new(1, 0)), Some(&'c'));
    /// # Ok::<(), match3_core::BoardError>(())
    /// ```
    pub fn from_rows(
        generator: G,
        rows: Vec<Vec<T>>,
        points_per_tile: u32,
    ) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let config = BoardConfig {
            width,
            height,
            points_per_tile,
        };
        config.validate()?;
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(BoardError::RaggedRows {
                row,
                expected: width,
                found,
            });
        }
        Ok(Self::assemble(
            Grid::from_rows(width, rows),
            generator,
            points_per_tile,
        ))
    }

    fn assemble(grid: Grid<T>, generator: G, points_per_tile: u32) -> Self {
        Self {
            grid,
            generator,
            listeners: Vec::new(),
            score: 0,
            points_per_tile,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Cumulative score; never decreases
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn points_per_tile(&self) -> u32 {
        self.points_per_tile
    }

    /// Every position on the board, row by row, left to right
    pub fn positions(&self) -> Vec<Position> {
        self.grid.positions()
    }

    /// Tile at `p`, or `None` if `p` lies outside the board
    pub fn piece(&self, p: Position) -> Option<&T> {
        self.grid.get(p)
    }

    /// Whether `first` and `second` are orthogonal neighbours.
    ///
    /// Adjacency only; `try_move` additionally rejects pairs that leave the board.
    pub fn can_move(&self, first: Position, second: Position) -> bool {
        first.is_adjacent(second)
    }

    /// Register a callback for every future event.
    ///
    /// Listeners run synchronously in registration order. Registering the same
    /// closure twice means it runs twice per event.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&BoardEvent<T>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Snapshot of all cells, row-major
    pub fn rows(&self) -> Vec<Vec<Option<T>>>
    where
        T: Clone,
    {
        self.grid.to_rows()
    }

    fn emit(&mut self, event: &BoardEvent<T>) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl<T: Clone + PartialEq, G: Generator<T>> Board<T, G> {
    /// Matches currently on the board, in scan order. Read-only.
    pub fn find_matches(&self) -> Vec<Match<T>> {
        self.grid.find_matches()
    }

    /// Swap two neighbouring tiles and resolve the resulting matches.
    ///
    /// Non-neighbours and off-board pairs are ignored. A swap that forms no match is undone, so the
    /// board, score and listeners are untouched by any move that returns
    /// something other than [`MoveOutcome::Cleared`].
    pub fn try_move(&mut self, first: Position, second: Position) -> MoveOutcome {
        if !self.can_move(first, second) {
            return MoveOutcome::NotAdjacent;
        }
        if !self.grid.contains(first) || !self.grid.contains(second) {
            return MoveOutcome::OutOfBounds;
        }

        self.grid.swap(first, second);
        let matches = self.grid.find_matches();
        if matches.is_empty() {
            self.grid.swap(first, second);
            debug!(%first, %second, "move rejected: no match");
            return MoveOutcome::NoMatch;
        }

        let match_count = matches.len();
        let (tiles, points) = self.clear_matches(&matches);

        for found in matches {
            self.emit(&BoardEvent::Match(found));
        }

        self.grid.compact_columns();
        let drawn = self.grid.refill(&mut self.generator);
        debug_assert_eq!(drawn, tiles);
        debug_assert!(self.grid.is_settled());

        self.emit(&BoardEvent::Refill);

        debug!(
            %first,
            %second,
            matches = match_count,
            tiles,
            score = self.score,
            "move committed"
        );
        MoveOutcome::Cleared {
            matches: match_count,
            tiles,
            points,
        }
    }

    /// Empty every matched cell and score every matched position.
    ///
    /// Overlapping matches share cells: the cell is emptied once but scored
    /// once per match it belongs to. Returns `(cells emptied, points added)`.
    fn clear_matches(&mut self, matches: &[Match<T>]) -> (usize, u32) {
        let mut tiles = 0;
        let mut points = 0u32;
        for found in matches {
            for &p in &found.positions {
                if self.grid.take(p).is_some() {
                    tiles += 1;
                }
                points = points.saturating_add(self.points_per_tile);
            }
        }
        self.score = self.score.saturating_add(points);
        (tiles, points)
    }
}

impl<T: fmt::Debug, G> fmt::Debug for Board<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("listeners", &self.listeners.len())
            .field("score", &self.score)
            .field("points_per_tile", &self.points_per_tile)
            .finish_non_exhaustive()
    }
}
