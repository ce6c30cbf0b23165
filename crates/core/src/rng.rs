//! RNG module - seeded tile generation
//!
//! [`TileBag`] implements the bag randomizer: each bag holds every palette tile
//! once, shuffled, and is drawn until empty before a fresh bag is shuffled.
//! Over any window of `palette.len()` draws aligned to a bag, every tile appears
//! exactly once, which keeps long droughts of one colour off the board.
//!
//! [`SimpleRng`] is the deterministic LCG behind it, also usable on its own.

use crate::error::BoardError;
use crate::generator::Generator;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is remapped so that `new(0)` and `new(1)` replay the same game
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32 with a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (feed back into `new` to replay from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Bag-randomized tile generator over a fixed palette
#[derive(Debug, Clone)]
pub struct TileBag<T> {
    palette: Vec<T>,
    /// Current shuffled bag
    bag: Vec<T>,
    /// Index into current bag
    bag_index: usize,
    rng: SimpleRng,
}

impl<T: Clone> TileBag<T> {
    /// Create a bag over `palette` with the given seed
    pub fn new(palette: Vec<T>, seed: u32) -> Result<Self, BoardError> {
        if palette.is_empty() {
            return Err(BoardError::EmptyPalette);
        }
        let mut bag = Self {
            bag: palette.clone(),
            palette,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill_bag();
        Ok(bag)
    }

    fn refill_bag(&mut self) {
        self.bag.clone_from(&self.palette);
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Peek at the next tile without removing it
    pub fn peek(&self) -> T {
        if let Some(tile) = self.bag.get(self.bag_index) {
            return tile.clone();
        }

        // Preview the next bag on a copy of the RNG so the bag itself is untouched;
        // `draw` will shuffle from the same state and agree with this preview.
        let mut preview_rng = self.rng.clone();
        let mut next_bag = self.palette.clone();
        preview_rng.shuffle(&mut next_bag);
        next_bag[0].clone()
    }

    /// Draw the next tile, reshuffling when the bag runs out
    pub fn draw(&mut self) -> T {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let tile = self.bag[self.bag_index].clone();
        self.bag_index += 1;
        tile
    }

    /// Tiles still waiting in the current bag
    pub fn remaining(&self) -> &[T] {
        &self.bag[self.bag_index..]
    }

    pub fn palette(&self) -> &[T] {
        &self.palette
    }
}

impl<T: Clone> Generator<T> for TileBag<T> {
    fn next_tile(&mut self) -> T {
        self.draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_rng_zero_seed_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..10 {
            rng.next_u32();
        }
        let mut resumed = SimpleRng::new(rng.state());
        for _ in 0..20 {
            assert_eq!(rng.next_u32(), resumed.next_u32());
        }
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(
            TileBag::<u8>::new(Vec::new(), 1).unwrap_err(),
            BoardError::EmptyPalette
        );
    }

    #[test]
    fn test_bag_draws_every_tile_once() {
        let mut bag = TileBag::new(vec!['r', 'g', 'b', 'y', 'p'], 1).unwrap();
        assert_eq!(bag.remaining().len(), 5);

        let mut drawn: Vec<char> = (0..5).map(|_| bag.draw()).collect();
        drawn.sort_unstable();
        assert_eq!(drawn, vec!['b', 'g', 'p', 'r', 'y']);
        assert!(bag.remaining().is_empty());
    }

    #[test]
    fn test_bag_auto_refill() {
        let mut bag = TileBag::new(vec![1u8, 2, 3], 9).unwrap();
        for _ in 0..3 {
            bag.draw();
        }
        let next = bag.draw();
        assert!(bag.palette().contains(&next));
        assert_eq!(bag.remaining().len(), 2);
    }

    #[test]
    fn test_peek_matches_draw() {
        let mut bag = TileBag::new(vec![1u8, 2, 3, 4], 42).unwrap();
        let peeked = bag.peek();
        assert_eq!(peeked, bag.draw());
    }

    #[test]
    fn test_peek_across_bag_boundary() {
        let mut bag = TileBag::new(vec![1u8, 2, 3, 4], 42).unwrap();
        for _ in 0..4 {
            bag.draw();
        }
        let peeked = bag.peek();
        assert_eq!(peeked, bag.draw());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TileBag::new(vec![1u8, 2, 3, 4, 5], 77).unwrap();
        let mut b = TileBag::new(vec![1u8, 2, 3, 4, 5], 77).unwrap();
        for _ in 0..50 {
            assert_eq!(a.next_tile(), b.next_tile());
        }
    }
}
