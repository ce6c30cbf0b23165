//! Tile generator seam
//!
//! The board never decides which tiles exist; it asks a [`Generator`] for one
//! value per empty cell. Anything that can hand out tiles on demand qualifies:
//! a seeded [`TileBag`](crate::rng::TileBag), a scripted closure wrapped with
//! [`from_fn`], or a generator borrowed from the caller through `&mut G`.

/// Produces one tile per call.
///
/// Called `width * height` times in row-major order when a board is built, then
/// once per emptied cell during each committed move. A panic inside `next_tile`
/// unwinds through the board call that triggered it and leaves that board
/// partially filled; such a board must be discarded.
pub trait Generator<T> {
    fn next_tile(&mut self) -> T;
}

impl<T, G> Generator<T> for &mut G
where
    G: Generator<T> + ?Sized,
{
    fn next_tile(&mut self) -> T {
        (**self).next_tile()
    }
}

impl<T, G> Generator<T> for Box<G>
where
    G: Generator<T> + ?Sized,
{
    fn next_tile(&mut self) -> T {
        (**self).next_tile()
    }
}

/// Generator backed by a closure, see [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<T, F> Generator<T> for FromFn<F>
where
    F: FnMut() -> T,
{
    fn next_tile(&mut self) -> T {
        (self.0)()
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Wrap a closure as a generator.
///
/// ```
/// use match3_core::generator::{from_fn, Generator};
///
/// let mut tiles = ['a', 'b'].into_iter().cycle();
/// let mut g = from_fn(move || tiles.next().unwrap_or('a'));
/// assert_eq!(g.next_tile(), 'a');
/// assert_eq!(g.next_tile(), 'b');
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> T,
{
    FromFn(f)
}
