//! Headless autoplay runner
//!
//! Builds a board from a [`RunConfig`], attempts `moves` random neighbour swaps,
//! and writes every board event as one JSON object per line.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::core::{Board, BoardError, MoveOutcome, SimpleRng, TileBag};
use crate::types::{BoardEvent, Position};

pub type AutoplayBoard = Board<u8, TileBag<u8>>;

/// Totals reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AutoplaySummary {
    pub attempted: u32,
    pub committed: u32,
    pub rejected: u32,
    pub tiles_cleared: u64,
    pub score: u32,
}

/// One line of output: the event plus the move that produced it
#[derive(Debug, Serialize)]
struct EventLine<'a> {
    step: u32,
    #[serde(flatten)]
    event: &'a BoardEvent<u8>,
}

pub fn build_board(config: &RunConfig) -> Result<AutoplayBoard, BoardError> {
    let bag = TileBag::new(config.palette(), config.seed)?;
    Board::with_config(bag, &config.board)
}

/// Every unordered pair of neighbours: right neighbours first, then down neighbours.
pub fn adjacent_pairs(width: usize, height: usize) -> Vec<(Position, Position)> {
    let mut pairs = Vec::new();
    for row in 0..height as i32 {
        for col in 0..width as i32 {
            let here = Position::new(row, col);
            if (col as usize) + 1 < width {
                pairs.push((here, Position::new(row, col + 1)));
            }
            if (row as usize) + 1 < height {
                pairs.push((here, Position::new(row + 1, col)));
            }
        }
    }
    pairs
}

pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<AutoplaySummary> {
    let mut board = build_board(config).context("autoplay: failed to build board")?;

    let pending: Rc<RefCell<Vec<BoardEvent<u8>>>> = Rc::default();
    let sink = Rc::clone(&pending);
    board.add_listener(move |event| sink.borrow_mut().push(event.clone()));

    let pairs = adjacent_pairs(board.width(), board.height());
    let mut picker = SimpleRng::new(config.seed.rotate_left(16));
    let mut summary = AutoplaySummary::default();

    info!(
        width = board.width(),
        height = board.height(),
        colors = config.colors,
        moves = config.moves,
        "autoplay started"
    );

    for step in 0..config.moves {
        if pairs.is_empty() {
            break;
        }
        let (first, second) = pairs[picker.next_range(pairs.len() as u32) as usize];
        summary.attempted += 1;

        match board.try_move(first, second) {
            MoveOutcome::Cleared { tiles, .. } => {
                summary.committed += 1;
                summary.tiles_cleared += tiles as u64;
            }
            MoveOutcome::NoMatch | MoveOutcome::NotAdjacent | MoveOutcome::OutOfBounds => {
                summary.rejected += 1
            }
        }

        for event in pending.borrow_mut().drain(..) {
            serde_json::to_writer(&mut *out, &EventLine { step, event: &event })
                .context("autoplay: failed to encode event")?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;

    summary.score = board.score();
    debug!(?summary, "autoplay finished");
    Ok(summary)
}
