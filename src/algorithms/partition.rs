//! Stable partitioning by a predicate.
//!
//! Elements satisfying the predicate come first (or go to the first
//! destination), the rest follow (or go to the second), and each group keeps
//! its input order.

use core::fmt;

use crate::algorithms::rotate::rotate_range;
use crate::container::{Expandable, Indexable, IndexableMut};
use crate::source::{BoundedSink, GrowingSink, PartitionStop, Sink};
use crate::view::{ExpandableView, View, ViewMut};

/// Stably partitions the view's own range and returns the boundary: the
/// relative index where the elements satisfying `predicate` end.
///
/// Works without an auxiliary buffer by partitioning each half recursively
/// and rotating the misplaced middle blocks, `O(n log n)` swaps in total.
///
/// # Examples
///
/// ```
/// use seqview::{ViewMut, partition_in_place};
///
/// let mut data = [1, 2, 3, 4, 5, 6];
/// let boundary = partition_in_place(&mut ViewMut::full(&mut data), |x| x % 2 == 0);
///
/// assert_eq!(boundary, 3);
/// assert_eq!(data, [2, 4, 6, 1, 3, 5]);
/// ```
pub fn partition_in_place<C, P>(view: &mut ViewMut<'_, C>, predicate: P) -> usize
where
    C: IndexableMut + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    let len = view.len();
    partition_range(view, 0, len, &predicate)
}

fn partition_range<C, P>(
    view: &mut ViewMut<'_, C>,
    start: usize,
    end: usize,
    predicate: &P,
) -> usize
where
    C: IndexableMut + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    match end - start {
        0 => start,
        1 => {
            if predicate(&view[start]) {
                end
            } else {
                start
            }
        }
        len => {
            let middle = start + len / 2;
            let left = partition_range(view, start, middle, predicate);
            let right = partition_range(view, middle, end, predicate);
            // [left, middle) failed and [middle, right) passed; swap them
            rotate_range(view, left, middle, right);
            left + (right - middle)
        }
    }
}

/// A deferred stable partition into two destinations. See [`partition`].
pub struct Partition<'a, C: ?Sized, P> {
    view: View<'a, C>,
    predicate: P,
}

impl<C, P> fmt::Debug for Partition<'_, C, P>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl<'a, C, P> Partition<'a, C, P>
where
    C: Indexable + ?Sized,
    C::Item: Clone,
    P: Fn(&C::Item) -> bool,
{
    /// Routes each element to `matched` or `unmatched` in a single pass.
    ///
    /// Stops at the first element whose sink is full.
    pub fn emit<M, U>(&self, matched: &mut M, unmatched: &mut U) -> PartitionStop
    where
        M: Sink<C::Item>,
        U: Sink<C::Item>,
    {
        let mut source = 0;
        for item in self.view.iter() {
            if (self.predicate)(item) {
                if !matched.has_room() {
                    break;
                }
                matched.push(item.clone());
            } else {
                if !unmatched.has_room() {
                    break;
                }
                unmatched.push(item.clone());
            }
            source += 1;
        }
        PartitionStop {
            source,
            matched: matched.written(),
            unmatched: unmatched.written(),
        }
    }

    /// Copies matching elements into `matched` and the rest into
    /// `unmatched`, each from its first position, stopping at the first
    /// element whose destination is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqview::{View, ViewMut, partition};
    ///
    /// let data = [1, 2, 3, 4, 5, 6];
    /// let (mut evens, mut odds) = ([0; 3], [0; 2]);
    /// let stop = partition(View::full(&data), |x| x % 2 == 0)
    ///     .copy_into(&mut ViewMut::full(&mut evens), &mut ViewMut::full(&mut odds));
    ///
    /// // the 5 has nowhere to go
    /// assert_eq!((stop.source, stop.matched, stop.unmatched), (4, 2, 2));
    /// assert_eq!(evens, [2, 4, 0]);
    /// assert_eq!(odds, [1, 3]);
    /// ```
    pub fn copy_into<M, U>(
        &self,
        matched: &mut ViewMut<'_, M>,
        unmatched: &mut ViewMut<'_, U>,
    ) -> PartitionStop
    where
        M: IndexableMut<Item = C::Item> + ?Sized,
        U: IndexableMut<Item = C::Item> + ?Sized,
    {
        self.emit(&mut BoundedSink::new(matched), &mut BoundedSink::new(unmatched))
    }

    /// Appends matching elements to `matched` and the rest to `unmatched`,
    /// returning both views widened.
    pub fn append_to<'m, 'u, M, U>(
        &self,
        mut matched: ExpandableView<'m, M>,
        mut unmatched: ExpandableView<'u, U>,
    ) -> (ExpandableView<'m, M>, ExpandableView<'u, U>)
    where
        M: Expandable<Item = C::Item> + ?Sized,
        U: Expandable<Item = C::Item> + ?Sized,
    {
        let (mut yes, mut no) = (GrowingSink::new(), GrowingSink::new());
        self.emit(&mut yes, &mut no);
        matched.grow(yes.into_inner());
        unmatched.grow(no.into_inner());
        (matched, unmatched)
    }

    /// Collects both groups into fresh containers.
    pub fn collect<M, U>(&self) -> (M, U)
    where
        M: Expandable<Item = C::Item> + Default,
        U: Expandable<Item = C::Item> + Default,
    {
        let (mut matched, mut unmatched) = (M::default(), U::default());
        self.append_to(
            ExpandableView::full(&mut matched),
            ExpandableView::full(&mut unmatched),
        );
        (matched, unmatched)
    }
}

/// Stably partitions a view into two destinations without modifying it.
pub fn partition<'a, C, P>(view: View<'a, C>, predicate: P) -> Partition<'a, C, P>
where
    C: Indexable + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    Partition { view, predicate }
}
