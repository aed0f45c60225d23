//! Sources of random positions for shuffling and sampling.
//!
//! The algorithms only ever need "a position in `0..bound`". Callers pick how
//! that position is produced:
//!
//! - [`Modulo`] wraps a raw integer generator and reduces each draw into
//!   range, correcting negative draws.
//! - [`Uniform`] wraps a generator that already answers bounded requests.
//! - [`RngSource`] adapts any [`rand`] generator (feature `rand`).
//!
//! Sources that capture a generator clone it for every materialization, so
//! generators stored in a source must be `Clone`.

/// Produces positions for the randomized algorithms.
pub trait Randomness {
    /// Returns a position in `0..bound`. `bound` is never zero.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl<R: Randomness + ?Sized> Randomness for &mut R {
    fn index_below(&mut self, bound: usize) -> usize {
        (**self).index_below(bound)
    }
}

/// A raw integer generator reduced into range by Euclidean remainder.
///
/// The generator may return any `i64`, negative values included; each draw
/// is mapped into `0..bound` with `rem_euclid`. The quality of the resulting
/// distribution is the generator's responsibility.
///
/// # Examples
///
/// ```
/// use seqview::{Modulo, Randomness};
///
/// let mut draws = [-7i64, 12].into_iter().cycle();
/// let mut random = Modulo(move || draws.next().unwrap_or(0));
///
/// assert_eq!(random.index_below(5), 3);
/// assert_eq!(random.index_below(5), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Modulo<F>(pub F);

impl<F: FnMut() -> i64> Randomness for Modulo<F> {
    fn index_below(&mut self, bound: usize) -> usize {
        let bound = i64::try_from(bound).unwrap_or(i64::MAX);
        (self.0)().rem_euclid(bound) as usize
    }
}

/// A generator answering bounded requests directly.
///
/// The closure receives the exclusive upper bound. Answers outside
/// `0..bound` are folded back with `%`.
#[derive(Debug, Clone)]
pub struct Uniform<F>(pub F);

impl<F: FnMut(usize) -> usize> Randomness for Uniform<F> {
    fn index_below(&mut self, bound: usize) -> usize {
        (self.0)(bound) % bound
    }
}

/// Adapts a [`rand`] generator.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use seqview::{Randomness, RngSource};
///
/// let mut random = RngSource(StdRng::seed_from_u64(7));
/// assert!(random.index_below(10) < 10);
/// ```
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

#[cfg(feature = "rand")]
impl<R: rand::RngCore> Randomness for RngSource<R> {
    fn index_below(&mut self, bound: usize) -> usize {
        use rand::Rng;

        self.0.random_range(0..bound)
    }
}
