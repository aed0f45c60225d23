//! Random permutation and reservoir sampling.
//!
//! Both draw positions through [`Randomness`]. Sources capture their
//! generator by value and run every materialization on a fresh clone, so a
//! given source always yields the same permutation or sample.

use alloc::vec::Vec;
use core::fmt;

use crate::container::{Indexable, IndexableMut};
use crate::error::{Error, Result};
use crate::random::Randomness;
use crate::source::{Sink, Source, UnaryStop};
use crate::view::{View, ViewMut};

/// Shuffles the view's own range with the backward Fisher-Yates algorithm.
///
/// For each position from the last down to the second, a position in
/// `0..=position` is drawn and the two elements are swapped. The view's
/// length never changes.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "rand")] {
/// use rand::{SeedableRng, rngs::StdRng};
/// use seqview::{RngSource, ViewMut, shuffle_in_place};
///
/// let mut data = [1, 2, 3, 4, 5, 6, 7, 8];
/// let mut random = RngSource(StdRng::seed_from_u64(1));
/// shuffle_in_place(&mut ViewMut::full(&mut data), &mut random);
///
/// let mut sorted = data;
/// sorted.sort();
/// assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
/// # }
/// ```
pub fn shuffle_in_place<C, R>(view: &mut ViewMut<'_, C>, random: &mut R)
where
    C: IndexableMut + ?Sized,
    R: Randomness + ?Sized,
{
    for position in (1..view.len()).rev() {
        let other = random.index_below(position + 1);
        view.exchange(position, other);
    }
}

/// A deferred random permutation. See [`shuffle`].
pub struct Shuffle<'a, C: ?Sized, R> {
    view: View<'a, C>,
    random: R,
}

impl<C, R> fmt::Debug for Shuffle<'_, C, R>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shuffle")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl<C, R> Source for Shuffle<'_, C, R>
where
    C: Indexable + ?Sized,
    C::Item: Clone,
    R: Randomness + Clone,
{
    type Item = C::Item;
    type Stop = UnaryStop;

    fn emit<S: Sink<C::Item>>(&self, sink: &mut S) -> UnaryStop {
        let mut random = self.random.clone();
        let mut order: Vec<usize> = (0..self.view.len()).collect();
        for position in (1..order.len()).rev() {
            let other = random.index_below(position + 1);
            order.swap(position, other);
        }

        for position in order {
            if !sink.has_room() {
                break;
            }
            sink.push(self.view.item(position).clone());
        }
        UnaryStop {
            source: self.view.len(),
            destination: sink.written(),
        }
    }
}

/// Produces a random permutation of a view without modifying it.
///
/// The permutation is the one [`shuffle_in_place`] would apply to a copy of
/// the view given the same generator state.
pub fn shuffle<'a, C, R>(view: View<'a, C>, random: R) -> Shuffle<'a, C, R>
where
    C: Indexable + ?Sized,
    R: Randomness + Clone,
{
    Shuffle { view, random }
}

/// A deferred reservoir sample. See [`sample`].
pub struct Sample<'a, C: ?Sized, R> {
    view: View<'a, C>,
    samples: usize,
    random: R,
}

impl<C, R> fmt::Debug for Sample<'_, C, R>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sample")
            .field("view", &self.view)
            .field("samples", &self.samples)
            .finish_non_exhaustive()
    }
}

impl<C, R> Source for Sample<'_, C, R>
where
    C: Indexable + ?Sized,
    C::Item: Clone,
    R: Randomness + Clone,
{
    type Item = C::Item;
    type Stop = UnaryStop;

    fn emit<S: Sink<C::Item>>(&self, sink: &mut S) -> UnaryStop {
        let len = self.view.len();
        let samples = self.samples;

        // the whole reservoir is drawn even when the sink holds fewer
        let mut random = self.random.clone();
        let mut reservoir: Vec<usize> = (0..samples).collect();
        if samples > 0 {
            for position in samples..len {
                // `position + 1` is the 1-based rank of the element offered
                let slot = random.index_below(position + 1);
                if slot < samples {
                    reservoir[slot] = position;
                }
            }
        }

        for position in reservoir {
            if !sink.has_room() {
                break;
            }
            sink.push(self.view.item(position).clone());
        }
        UnaryStop {
            source: len,
            destination: sink.written(),
        }
    }
}

/// Selects `samples` elements of a view uniformly at random, without
/// replacement, in one forward pass.
///
/// The first `samples` elements fill the reservoir; each later element at
/// 1-based rank `t` replaces reservoir slot `r` when the draw `r` in `0..t`
/// lands below `samples`. The order of the selected elements is
/// unspecified. A bounded copy keeps the leading elements of that sample.
///
/// Fails with [`Error::OutOfRange`] before anything is drawn if `samples`
/// exceeds the view's length.
///
/// # Examples
///
/// ```
/// use seqview::{Modulo, Source, View, sample};
///
/// let data: Vec<u32> = (0..100).collect();
/// let mut state = 17i64;
/// let lcg = Modulo(move || {
///     state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
///     state >> 33
/// });
///
/// let picked = sample(View::full(&data), 5, lcg).unwrap().to_vec();
/// assert_eq!(picked.len(), 5);
///
/// assert!(sample(View::full(&data), 101, Modulo(|| 0i64)).is_err());
/// ```
pub fn sample<'a, C, R>(view: View<'a, C>, samples: usize, random: R) -> Result<Sample<'a, C, R>>
where
    C: Indexable + ?Sized,
    R: Randomness + Clone,
{
    if samples > view.len() {
        return Err(Error::OutOfRange {
            what: "sample count",
            value: samples,
            limit: view.len(),
        });
    }
    Ok(Sample {
        view,
        samples,
        random,
    })
}
