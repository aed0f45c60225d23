//! Left rotation and reversal.
//!
//! In place, rotation uses the Gries-Mills block swap: it repeatedly swaps
//! the shorter of the two blocks into its final position, touching each
//! element a bounded number of times and needing no auxiliary buffer.

use core::fmt;

use crate::container::{Indexable, IndexableMut};
use crate::source::{Sink, Source, UnaryStop};
use crate::view::{View, ViewMut};

/// Reduces a signed shift to `0..len`. Negative shifts rotate right.
pub(crate) fn normalize_shift(shift: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (shift as i128).rem_euclid(len as i128) as usize
}

fn swap_blocks<C>(view: &mut ViewMut<'_, C>, a: usize, b: usize, len: usize)
where
    C: IndexableMut + ?Sized,
{
    for k in 0..len {
        view.exchange(a + k, b + k);
    }
}

/// Rotates `view[start..end]` so that the element at `middle` comes first.
pub(crate) fn rotate_range<C>(view: &mut ViewMut<'_, C>, start: usize, middle: usize, end: usize)
where
    C: IndexableMut + ?Sized,
{
    let mut i = middle - start;
    let mut j = end - middle;
    if i == 0 || j == 0 {
        return;
    }

    // [middle - i, middle) and [middle, middle + j) are the blocks still out
    // of place
    while i != j {
        if i > j {
            swap_blocks(view, middle - i, middle, j);
            i -= j;
        } else {
            swap_blocks(view, middle - i, middle + j - i, i);
            j -= i;
        }
    }
    swap_blocks(view, middle - i, middle, i);
}

/// Rotates the view's own range left by `shift` positions.
///
/// The shift is taken modulo the view length; negative shifts rotate right.
///
/// # Examples
///
/// ```
/// use seqview::{ViewMut, rotate_left_in_place};
///
/// let mut data = [1, 2, 3, 4, 5];
/// rotate_left_in_place(&mut ViewMut::full(&mut data), 2);
/// assert_eq!(data, [3, 4, 5, 1, 2]);
///
/// rotate_left_in_place(&mut ViewMut::full(&mut data), -7);
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// ```
pub fn rotate_left_in_place<C>(view: &mut ViewMut<'_, C>, shift: isize)
where
    C: IndexableMut + ?Sized,
{
    let len = view.len();
    let shift = normalize_shift(shift, len);
    rotate_range(view, 0, shift, len);
}

/// A deferred left rotation. See [`rotate_left`].
pub struct RotateLeft<'a, C: ?Sized> {
    view: View<'a, C>,
    shift: usize,
}

impl<C> fmt::Debug for RotateLeft<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotateLeft")
            .field("view", &self.view)
            .field("shift", &self.shift)
            .finish()
    }
}

impl<C> Source for RotateLeft<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: Clone,
{
    type Item = C::Item;
    type Stop = UnaryStop;

    fn emit<S: Sink<C::Item>>(&self, sink: &mut S) -> UnaryStop {
        let len = self.view.len();
        let mut consumed = 0;
        while consumed < len && sink.has_room() {
            let position = if consumed < len - self.shift {
                self.shift + consumed
            } else {
                consumed - (len - self.shift)
            };
            sink.push(self.view.item(position).clone());
            consumed += 1;
        }
        UnaryStop {
            source: consumed,
            destination: sink.written(),
        }
    }
}

/// Rotates a view left by `shift` positions without modifying it.
///
/// `source` in the stop descriptor counts the elements read.
///
/// # Examples
///
/// ```
/// use seqview::{Source, View, rotate_left};
///
/// let data = [1, 2, 3, 4, 5];
/// assert_eq!(rotate_left(View::full(&data), 2).to_vec(), [3, 4, 5, 1, 2]);
/// assert_eq!(rotate_left(View::full(&data), -1).to_vec(), [5, 1, 2, 3, 4]);
/// assert_eq!(rotate_left(View::full(&data), 7).to_vec(), [3, 4, 5, 1, 2]);
/// ```
pub fn rotate_left<'a, C>(view: View<'a, C>, shift: isize) -> RotateLeft<'a, C>
where
    C: Indexable + ?Sized,
{
    RotateLeft {
        shift: normalize_shift(shift, view.len()),
        view,
    }
}

/// Reverses the view's own range.
pub fn reverse_in_place<C>(view: &mut ViewMut<'_, C>)
where
    C: IndexableMut + ?Sized,
{
    let len = view.len();
    for i in 0..len / 2 {
        view.exchange(i, len - 1 - i);
    }
}

/// A deferred reversal. See [`reverse`].
pub struct Reverse<'a, C: ?Sized> {
    view: View<'a, C>,
}

impl<C> fmt::Debug for Reverse<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reverse").field("view", &self.view).finish()
    }
}

impl<C> Source for Reverse<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: Clone,
{
    type Item = C::Item;
    type Stop = UnaryStop;

    fn emit<S: Sink<C::Item>>(&self, sink: &mut S) -> UnaryStop {
        let mut consumed = 0;
        for item in self.view.iter().rev() {
            if !sink.has_room() {
                break;
            }
            sink.push(item.clone());
            consumed += 1;
        }
        UnaryStop {
            source: consumed,
            destination: sink.written(),
        }
    }
}

/// Produces a view's elements back to front.
///
/// ```
/// use seqview::{Source, View, reverse};
///
/// let data = ['a', 'b', 'c'];
/// assert_eq!(reverse(View::full(&data)).to_vec(), ['c', 'b', 'a']);
/// ```
pub fn reverse<'a, C>(view: View<'a, C>) -> Reverse<'a, C>
where
    C: Indexable + ?Sized,
{
    Reverse { view }
}
