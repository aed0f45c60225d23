//! Stable comparison sort.
//!
//! The engine orders element *positions* with a bottom-up merge sort and
//! then either emits elements in that order or applies the order in place by
//! following permutation cycles. Ties keep their input order. An
//! inconsistent comparison yields some permutation of the input, never a
//! panic.

use alloc::{vec, vec::Vec};
use core::cmp::Ordering;
use core::fmt;

use crate::container::{Indexable, IndexableMut};
use crate::source::{Sink, Source, UnaryStop};
use crate::view::{View, ViewMut};

// Runs shorter than this are insertion sorted before merging.
const RUN: usize = 16;

/// Returns the positions `0..len` ordered stably by `less`.
pub(crate) fn stable_order<F>(len: usize, mut less: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> bool,
{
    let mut order: Vec<usize> = (0..len).collect();
    if len < 2 {
        return order;
    }

    for start in (0..len).step_by(RUN) {
        let end = (start + RUN).min(len);
        for i in start + 1..end {
            let mut j = i;
            while j > start && less(order[j], order[j - 1]) {
                order.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    let mut scratch = vec![0; len];
    let mut width = RUN;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_runs(
                &order[start..mid],
                &order[mid..end],
                &mut scratch[start..end],
                &mut less,
            );
        }
        core::mem::swap(&mut order, &mut scratch);
        width *= 2;
    }
    order
}

fn merge_runs<F>(left: &[usize], right: &[usize], out: &mut [usize], less: &mut F)
where
    F: FnMut(usize, usize) -> bool,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // the right run wins only when strictly smaller
        if j < right.len() && (i == left.len() || less(right[j], left[i])) {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

/// Rearranges `view` so that position `i` receives the element previously
/// at `order[i]`.
pub(crate) fn apply_order<C>(view: &mut ViewMut<'_, C>, order: &[usize])
where
    C: IndexableMut + ?Sized,
{
    let mut placed = vec![false; order.len()];
    for start in 0..order.len() {
        if placed[start] {
            continue;
        }
        let mut current = start;
        loop {
            placed[current] = true;
            let next = order[current];
            if next == start {
                break;
            }
            view.exchange(current, next);
            current = next;
        }
    }
}

fn order_of<C, F>(view: View<'_, C>, compare: &F) -> Vec<usize>
where
    C: Indexable + ?Sized,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    stable_order(view.len(), |a, b| {
        compare(view.item(a), view.item(b)) == Ordering::Less
    })
}

/// A deferred stable sort of a view. See [`sort_by`].
pub struct Sort<'a, C: ?Sized, F> {
    view: View<'a, C>,
    compare: F,
}

impl<C, F> fmt::Debug for Sort<'_, C, F>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sort")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl<C, F> Source for Sort<'_, C, F>
where
    C: Indexable + ?Sized,
    C::Item: Clone,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    type Item = C::Item;
    type Stop = UnaryStop;

    fn emit<S: Sink<C::Item>>(&self, sink: &mut S) -> UnaryStop {
        let order = order_of(self.view, &self.compare);
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

/// Sorts a view by a three-way comparison, without modifying it.
///
/// The sort is stable. A bounded copy keeps the smallest elements that fit.
///
/// # Examples
///
/// ```
/// use seqview::{Source, View, sort_by};
///
/// let words = ["pear", "fig", "apple", "kiwi"];
/// let by_len = sort_by(View::full(&words), |a, b| a.len().cmp(&b.len()));
///
/// // "pear" and "kiwi" tie and keep their input order
/// assert_eq!(by_len.to_vec(), ["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by<'a, C, F>(view: View<'a, C>, compare: F) -> Sort<'a, C, F>
where
    C: Indexable + ?Sized,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    Sort { view, compare }
}

/// Sorts a view in ascending order.
pub fn sort<'a, C>(view: View<'a, C>) -> Sort<'a, C, impl Fn(&C::Item, &C::Item) -> Ordering>
where
    C: Indexable + ?Sized,
    C::Item: Ord,
{
    sort_by(view, |a: &C::Item, b: &C::Item| a.cmp(b))
}

/// Sorts a view in ascending order of the key extracted by `key`.
pub fn sort_by_key<'a, C, K, F>(
    view: View<'a, C>,
    key: F,
) -> Sort<'a, C, impl Fn(&C::Item, &C::Item) -> Ordering>
where
    C: Indexable + ?Sized,
    K: Ord,
    F: Fn(&C::Item) -> K,
{
    sort_by(view, move |a: &C::Item, b: &C::Item| key(a).cmp(&key(b)))
}

/// Stably sorts the view's own range.
///
/// # Examples
///
/// ```
/// use seqview::{ViewMut, sort_in_place_by};
///
/// let mut data = vec![9, 4, 3, 1, 8, 0];
/// let mut middle = ViewMut::new(&mut data, 1, 4).unwrap();
/// sort_in_place_by(&mut middle, |a, b| a.cmp(b));
///
/// assert_eq!(data, [9, 1, 3, 4, 8, 0]);
/// ```
pub fn sort_in_place_by<C, F>(view: &mut ViewMut<'_, C>, compare: F)
where
    C: IndexableMut + ?Sized,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    let order = order_of(view.as_view(), &compare);
    apply_order(view, &order);
}

/// Sorts the view's own range in ascending order.
pub fn sort_in_place<C>(view: &mut ViewMut<'_, C>)
where
    C: IndexableMut + ?Sized,
    C::Item: Ord,
{
    sort_in_place_by(view, |a: &C::Item, b: &C::Item| a.cmp(b))
}

/// Sorts the view's own range by the key extracted by `key`.
pub fn sort_in_place_by_key<C, K, F>(view: &mut ViewMut<'_, C>, key: F)
where
    C: IndexableMut + ?Sized,
    K: Ord,
    F: Fn(&C::Item) -> K,
{
    sort_in_place_by(view, |a: &C::Item, b: &C::Item| key(a).cmp(&key(b)))
}
