//! Deferred computations and their two materializations.
//!
//! A [`Source`] describes an algorithm and the parameters it captured at
//! construction; nothing runs until it is materialized:
//!
//! - [`copy_into`](Source::copy_into) writes into a fixed-size [`ViewMut`]
//!   starting at its first position and stops as soon as either the result
//!   or the destination runs out. It returns a stop descriptor telling where
//!   each input and the destination stopped.
//! - [`append_to`](Source::append_to) runs the algorithm to completion, grows
//!   an [`ExpandableView`] by exactly the number of results and returns the
//!   widened view.
//!
//! Both are driven by the same [`Source::emit`] implementation, so the copy
//! path is always a prefix of the append path. A source keeps no cursor:
//! every materialization starts from scratch.

use alloc::vec::Vec;

use crate::container::{Expandable, Indexable, IndexableMut};
use crate::view::{ExpandableView, View, ViewMut};

/// Receives the elements an algorithm produces.
pub trait Sink<T> {
    /// Returns how many more elements fit, or `None` if the sink is
    /// unbounded.
    fn remaining(&self) -> Option<usize>;

    /// Returns `true` if at least one more element fits.
    #[inline]
    fn has_room(&self) -> bool {
        self.remaining() != Some(0)
    }

    /// Accepts the next element. Callers check [`has_room`](Self::has_room)
    /// first.
    fn push(&mut self, item: T);

    /// Returns the number of elements accepted so far.
    fn written(&self) -> usize;
}

/// Writes into a fixed-size view from its first position on.
pub struct BoundedSink<'v, 'd, D: ?Sized> {
    destination: &'v mut ViewMut<'d, D>,
    written: usize,
}

impl<'v, 'd, D: IndexableMut + ?Sized> BoundedSink<'v, 'd, D> {
    pub fn new(destination: &'v mut ViewMut<'d, D>) -> Self {
        Self {
            destination,
            written: 0,
        }
    }
}

impl<D: IndexableMut + ?Sized> Sink<D::Item> for BoundedSink<'_, '_, D> {
    #[inline]
    fn remaining(&self) -> Option<usize> {
        Some(self.destination.len() - self.written)
    }

    #[inline]
    fn push(&mut self, item: D::Item) {
        if self.written < self.destination.len() {
            *self.destination.slot(self.written) = item;
            self.written += 1;
        }
    }

    #[inline]
    fn written(&self) -> usize {
        self.written
    }
}

/// Buffers everything it receives.
#[derive(Debug, Clone)]
pub struct GrowingSink<T> {
    items: Vec<T>,
}

impl<T> GrowingSink<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for GrowingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sink<T> for GrowingSink<T> {
    #[inline]
    fn remaining(&self) -> Option<usize> {
        None
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn written(&self) -> usize {
        self.items.len()
    }
}

/// A stop descriptor returned by a bounded copy.
///
/// Positions are relative to each view's own start.
pub trait Stop {
    /// Returns how many elements were written to the destination.
    fn destination_offset(&self) -> usize;
}

/// Stop positions of an algorithm with one input.
///
/// For algorithms that must read their whole input before producing anything
/// (sorting, shuffling, sampling) `source` is the number of elements read;
/// otherwise it is the position of the first element not consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnaryStop {
    pub source: usize,
    pub destination: usize,
}

impl Stop for UnaryStop {
    fn destination_offset(&self) -> usize {
        self.destination
    }
}

/// Stop positions of an algorithm walking two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryStop {
    pub first: usize,
    pub second: usize,
    pub destination: usize,
}

impl Stop for BinaryStop {
    fn destination_offset(&self) -> usize {
        self.destination
    }
}

/// Stop positions of a partition into two destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartitionStop {
    pub source: usize,
    pub matched: usize,
    pub unmatched: usize,
}

impl Stop for PartitionStop {
    /// Returns the number of elements written to the matching destination.
    fn destination_offset(&self) -> usize {
        self.matched
    }
}

/// A described-but-not-yet-executed sequence computation.
///
/// Implementors provide [`emit`](Self::emit); the materializations are built
/// on it.
///
/// # Examples
///
/// ```
/// use seqview::{ExpandableView, Source, Stop, View, ViewMut, sort};
///
/// let data = [5, 3, 1, 4, 2];
/// let sorted = sort(View::full(&data));
///
/// // bounded copy stops when the destination is full
/// let mut out = [0; 3];
/// let stop = sorted.copy_into(&mut ViewMut::full(&mut out));
/// assert_eq!(out, [1, 2, 3]);
/// assert_eq!(stop.destination_offset(), 3);
///
/// // append always consumes the whole result
/// let mut grown = vec![0];
/// let view = sorted.append_to(ExpandableView::at_end(&mut grown));
/// assert_eq!((view.offset(), view.len()), (1, 5));
/// assert_eq!(grown, [0, 1, 2, 3, 4, 5]);
///
/// assert_eq!(sorted.to_vec(), [1, 2, 3, 4, 5]);
/// ```
pub trait Source {
    /// The element type produced.
    type Item;

    /// The stop descriptor returned by [`copy_into`](Self::copy_into).
    type Stop: Stop;

    /// Runs the algorithm, pushing results into `sink` until either the
    /// result is exhausted or the sink is full.
    fn emit<S: Sink<Self::Item>>(&self, sink: &mut S) -> Self::Stop;

    /// Writes the result into `destination`, truncating to its length.
    ///
    /// Never changes the destination's size.
    fn copy_into<D>(&self, destination: &mut ViewMut<'_, D>) -> Self::Stop
    where
        D: IndexableMut<Item = Self::Item> + ?Sized,
    {
        self.emit(&mut BoundedSink::new(destination))
    }

    /// Appends the whole result after the end of `destination` and returns
    /// the view widened to include it.
    fn append_to<'d, D>(&self, mut destination: ExpandableView<'d, D>) -> ExpandableView<'d, D>
    where
        D: Expandable<Item = Self::Item> + ?Sized,
    {
        let mut sink = GrowingSink::new();
        self.emit(&mut sink);
        destination.grow(sink.into_inner());
        destination
    }

    /// Materializes the result into a fresh container.
    fn collect<D>(&self) -> D
    where
        D: Expandable<Item = Self::Item> + Default,
    {
        let mut container = D::default();
        self.append_to(ExpandableView::full(&mut container));
        container
    }

    /// Materializes the result into a fresh `Vec`.
    fn to_vec(&self) -> Vec<Self::Item> {
        let mut sink = GrowingSink::new();
        self.emit(&mut sink);
        sink.into_inner()
    }
}

/// A view is the identity computation: it yields its own elements in order.
///
/// ```
/// use seqview::{Source, View, ViewMut};
///
/// let data = [1, 2, 3, 4];
/// let mut out = vec![0; 6];
///
/// let window = View::new(&data, 1, 3).unwrap();
/// let stop = window.copy_into(&mut ViewMut::new(&mut out, 2, 4).unwrap());
/// assert_eq!(stop.source, 3);
/// assert_eq!(out, [0, 0, 2, 3, 4, 0]);
/// ```
impl<C> Source for View<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: Clone,
{
    type Item = C::Item;
    type Stop = UnaryStop;

    fn emit<S: Sink<C::Item>>(&self, sink: &mut S) -> UnaryStop {
        let mut source = 0;
        while source < self.len() && sink.has_room() {
            sink.push(self.item(source).clone());
            source += 1;
        }
        UnaryStop {
            source,
            destination: sink.written(),
        }
    }
}
