//! Grid module - owned cell storage for the board
//!
//! A `height x width` grid of optional tiles kept in a flat row-major `Vec`.
//! Coordinates: row 0 is the top, column 0 the left edge.
//!
//! Cells are only `None` between clearing matches and refilling; outside a
//! move every in-bounds cell holds a tile. The grid never changes shape after
//! construction.

use crate::generator::Generator;
use crate::types::{Match, Position, MATCH_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Fill a grid by drawing once per cell in row-major order.
    ///
    /// Dimensions are assumed validated by the caller.
    pub(crate) fn generate<G: Generator<T>>(width: usize, height: usize, generator: &mut G) -> Self {
        let cells = (0..width * height)
            .map(|_| Some(generator.next_tile()))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build from pre-shaped rows. Rows must already be checked to be rectangular.
    pub(crate) fn from_rows(width: usize, rows: Vec<Vec<T>>) -> Self {
        let height = rows.len();
        let cells = rows.into_iter().flatten().map(Some).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index for `p`, or `None` when out of bounds
    #[inline(always)]
    fn index(&self, p: Position) -> Option<usize> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        let (row, col) = (p.row as usize, p.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn contains(&self, p: Position) -> bool {
        self.index(p).is_some()
    }

    /// Tile at `p`; `None` for empty cells and out-of-bounds positions alike
    pub fn get(&self, p: Position) -> Option<&T> {
        self.index(p).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Exchange two cells. Returns false (and does nothing) if either is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(i), Some(j)) => {
                self.cells.swap(i, j);
                true
            }
            _ => false,
        }
    }

    /// Empty the cell at `p`, returning what was there
    pub fn take(&mut self, p: Position) -> Option<T> {
        self.index(p).and_then(|idx| self.cells[idx].take())
    }

    /// All in-bounds positions, row-major
    pub fn positions(&self) -> Vec<Position> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                out.push(Position::new(row as i32, col as i32));
            }
        }
        out
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Pull every tile in each column down, keeping top-to-bottom order.
    ///
    /// Two-pointer scan from the bottom: `write` is the lowest slot not yet
    /// filled, `read` walks upward over the column. Vacated slots end up at the
    /// top. Returns the number of empty cells left in each column.
    pub fn compact_columns(&mut self) -> Vec<usize> {
        (0..self.width).map(|col| self.compact_column(col)).collect()
    }

    fn compact_column(&mut self, col: usize) -> usize {
        let mut write = self.height;
        for read in (0..self.height).rev() {
            let src = self.at(read, col);
            if self.cells[src].is_none() {
                continue;
            }
            write -= 1;
            if write != read {
                let dst = self.at(write, col);
                self.cells.swap(src, dst);
            }
        }
        // Everything above `write` is now empty
        write
    }

    /// Fill empty cells with fresh tiles: columns left to right, each top to bottom.
    ///
    /// Returns the number of tiles drawn.
    pub fn refill<G: Generator<T>>(&mut self, generator: &mut G) -> usize {
        let mut drawn = 0;
        for col in 0..self.width {
            let mut column_drawn = 0;
            for row in 0..self.height {
                let idx = self.at(row, col);
                if self.cells[idx].is_none() {
                    self.cells[idx] = Some(generator.next_tile());
                    column_drawn += 1;
                }
            }
            if column_drawn > 0 {
                tracing::trace!(col, tiles = column_drawn, "refilled column");
            }
            drawn += column_drawn;
        }
        drawn
    }

    /// True when no column has an empty cell below a filled one
    pub fn is_settled(&self) -> bool {
        (0..self.width).all(|col| {
            let mut seen_tile = false;
            for row in 0..self.height {
                match self.cells[self.at(row, col)] {
                    Some(_) => seen_tile = true,
                    None if seen_tile => return false,
                    None => {}
                }
            }
            true
        })
    }

    /// Clone out as a 2D vector (row-major), for display and comparisons
    pub fn to_rows(&self) -> Vec<Vec<Option<T>>>
    where
        T: Clone,
    {
        self.cells
            .chunks(self.width)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl<T: Clone + PartialEq> Grid<T> {
    /// Every horizontal window of `MATCH_LEN` equal, non-empty tiles.
    ///
    /// Scans rows top to bottom and, within a row, start columns left to right.
    /// Windows overlap: a run of four equal tiles yields two matches.
    pub fn find_matches(&self) -> Vec<Match<T>> {
        let mut matches = Vec::new();
        if self.width < MATCH_LEN {
            return matches;
        }

        for (row, cells) in self.cells.chunks(self.width).enumerate() {
            for (col, window) in cells.windows(MATCH_LEN).enumerate() {
                let Some(first) = &window[0] else {
                    continue;
                };
                if window[1..].iter().all(|c| c.as_ref() == Some(first)) {
                    matches.push(Match::horizontal(first.clone(), row as i32, col as i32));
                }
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid<char> {
        let width = rows[0].len();
        Grid::from_rows(width, rows.iter().map(|r| r.chars().collect()).collect())
    }

    fn column(g: &Grid<char>, col: i32) -> String {
        (0..g.height() as i32)
            .map(|row| g.get(Position::new(row, col)).copied().unwrap_or('.'))
            .collect()
    }

    #[test]
    fn test_index_calculation() {
        let g = grid(&["abc", "def"]);
        assert_eq!(g.index(Position::new(0, 0)), Some(0));
        assert_eq!(g.index(Position::new(0, 2)), Some(2));
        assert_eq!(g.index(Position::new(1, 0)), Some(3));
        assert_eq!(g.index(Position::new(1, 2)), Some(5));
        assert_eq!(g.index(Position::new(-1, 0)), None);
        assert_eq!(g.index(Position::new(0, 3)), None);
        assert_eq!(g.index(Position::new(2, 0)), None);
    }

    #[test]
    fn test_generate_row_major() {
        let mut n = 0u32;
        let mut counter = crate::generator::from_fn(|| {
            n += 1;
            n
        });
        let g = Grid::generate(3, 2, &mut counter);
        assert_eq!(
            g.to_rows(),
            vec![
                vec![Some(1), Some(2), Some(3)],
                vec![Some(4), Some(5), Some(6)],
            ]
        );
    }

    #[test]
    fn test_swap_out_of_bounds_is_noop() {
        let mut g = grid(&["ab"]);
        assert!(!g.swap(Position::new(0, 0), Position::new(0, 2)));
        assert_eq!(column(&g, 0), "a");
        assert!(g.swap(Position::new(0, 0), Position::new(0, 1)));
        assert_eq!(column(&g, 0), "b");
    }

    #[test]
    fn test_find_matches_single_row() {
        let g = grid(&["abbb", "aaca"]);
        let matches = g.find_matches();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched, 'b');
        assert_eq!(
            matches[0].positions,
            [Position::new(0, 1), Position::new(0, 2), Position::new(0, 3)]
        );
    }

    #[test]
    fn test_find_matches_overlapping_windows() {
        let g = grid(&["aaaa"]);
        let starts: Vec<i32> = g
            .find_matches()
            .iter()
            .map(|m| m.positions[0].col)
            .collect();
        assert_eq!(starts, vec![0, 1]);
    }

    #[test]
    fn test_find_matches_ignores_vertical_runs() {
        let g = grid(&["ab", "ac", "ad"]);
        assert!(g.find_matches().is_empty());
    }

    #[test]
    fn test_find_matches_skips_empty_cells() {
        let mut g = grid(&["aaa"]);
        g.take(Position::new(0, 1));
        assert!(g.find_matches().is_empty());
    }

    #[test]
    fn test_find_matches_row_major_order() {
        let g = grid(&["bbbx", "xccc", "dddx"]);
        let found: Vec<char> = g.find_matches().into_iter().map(|m| m.matched).collect();
        assert_eq!(found, vec!['b', 'c', 'd']);
    }

    #[test]
    fn test_narrow_grid_has_no_matches() {
        let g = grid(&["aa", "aa"]);
        assert!(g.find_matches().is_empty());
    }

    #[test]
    fn test_compact_preserves_order() {
        let mut g = grid(&["a", "b", "c", "d", "e"]);
        g.take(Position::new(1, 0));
        g.take(Position::new(3, 0));
        assert!(!g.is_settled());

        let empties = g.compact_columns();
        assert_eq!(empties, vec![2]);
        assert_eq!(column(&g, 0), "..ace");
        assert!(g.is_settled());
    }

    #[test]
    fn test_compact_full_column_untouched() {
        let mut g = grid(&["ab", "cd"]);
        assert_eq!(g.compact_columns(), vec![0, 0]);
        assert_eq!(g.to_rows(), grid(&["ab", "cd"]).to_rows());
    }

    #[test]
    fn test_refill_top_to_bottom_per_column() {
        let mut g = grid(&["ab", "cd", "ef"]);
        g.take(Position::new(0, 0));
        g.take(Position::new(1, 0));
        g.take(Position::new(2, 1));
        g.compact_columns();

        let mut fresh = vec!['1', '2', '3'].into_iter();
        let drawn = g.refill(&mut crate::generator::from_fn(|| {
            fresh.next().unwrap_or('?')
        }));

        assert_eq!(drawn, 3);
        assert_eq!(column(&g, 0), "12e");
        assert_eq!(column(&g, 1), "3bd");
        assert_eq!(g.empty_count(), 0);
    }
}
