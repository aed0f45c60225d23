//! Merge-based set operations over two sorted views.
//!
//! Both inputs must already be sorted by the comparison supplied. That is
//! not checked: unsorted input produces an unspecified order, never an
//! error. The merge walks both inputs strictly left to right and the stop
//! descriptor reports where each side stopped, which matters when a bounded
//! copy fills its destination mid-merge.

use core::cmp::Ordering;
use core::fmt;

use crate::container::Indexable;
use crate::source::{BinaryStop, Sink, Source};
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Union,
    Intersection,
    Difference,
}

/// A deferred merge of two sorted views.
///
/// Built by [`union_by`], [`intersection_by`] or [`difference_by`].
pub struct SetOp<'a, A: ?Sized, B: ?Sized, F> {
    first: View<'a, A>,
    second: View<'a, B>,
    compare: F,
    kind: Kind,
}

impl<A, B, F> fmt::Debug for SetOp<'_, A, B, F>
where
    A: Indexable + ?Sized,
    B: Indexable<Item = A::Item> + ?Sized,
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetOp")
            .field("kind", &self.kind)
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}

impl<A, B, F> Source for SetOp<'_, A, B, F>
where
    A: Indexable + ?Sized,
    B: Indexable<Item = A::Item> + ?Sized,
    A::Item: Clone,
    F: Fn(&A::Item, &A::Item) -> Ordering,
{
    type Item = A::Item;
    type Stop = BinaryStop;

    fn emit<S: Sink<A::Item>>(&self, sink: &mut S) -> BinaryStop {
        let (first, second) = (self.first, self.second);
        let (mut i, mut j) = (0, 0);

        while i < first.len() && j < second.len() && sink.has_room() {
            let (a, b) = (first.item(i), second.item(j));
            match (self.compare)(a, b) {
                Ordering::Less => {
                    if self.kind != Kind::Intersection {
                        sink.push(a.clone());
                    }
                    i += 1;
                }
                Ordering::Greater => {
                    if self.kind == Kind::Union {
                        sink.push(b.clone());
                    }
                    j += 1;
                }
                Ordering::Equal => {
                    if self.kind != Kind::Difference {
                        sink.push(a.clone());
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        // one side is exhausted or the sink is full; drain what the kind keeps
        if self.kind != Kind::Intersection {
            while i < first.len() && sink.has_room() {
                sink.push(first.item(i).clone());
                i += 1;
            }
        }
        if self.kind == Kind::Union {
            while j < second.len() && sink.has_room() {
                sink.push(second.item(j).clone());
                j += 1;
            }
        }

        BinaryStop {
            first: i,
            second: j,
            destination: sink.written(),
        }
    }
}

/// Merges two sorted views into their sorted union.
///
/// When the fronts compare equal one copy is emitted and both sides advance;
/// otherwise the smaller front is emitted. Once either side runs out the
/// rest of the other is emitted unchanged.
///
/// # Examples
///
/// ```
/// use seqview::{Source, Stop, View, ViewMut, union_by};
///
/// let a = [1, 3, 5, 7];
/// let b = [3, 4, 5, 8];
/// let merged = union_by(View::full(&a), View::full(&b), |x, y| x.cmp(y));
/// assert_eq!(merged.to_vec(), [1, 3, 4, 5, 7, 8]);
///
/// let mut out = [0; 3];
/// let stop = merged.copy_into(&mut ViewMut::full(&mut out));
/// assert_eq!(out, [1, 3, 4]);
/// assert_eq!((stop.first, stop.second, stop.destination_offset()), (2, 2, 3));
/// ```
pub fn union_by<'a, A, B, F>(
    first: View<'a, A>,
    second: View<'a, B>,
    compare: F,
) -> SetOp<'a, A, B, F>
where
    A: Indexable + ?Sized,
    B: Indexable<Item = A::Item> + ?Sized,
    F: Fn(&A::Item, &A::Item) -> Ordering,
{
    SetOp {
        first,
        second,
        compare,
        kind: Kind::Union,
    }
}

/// Merges two sorted views into the elements present in both.
///
/// An element is emitted only when both fronts compare equal; otherwise the
/// smaller side advances. Nothing is emitted once either side runs out.
///
/// # Examples
///
/// ```
/// use seqview::{Source, View, intersection_by};
///
/// let a = [1, 3, 5, 7];
/// let b = [3, 4, 5, 8];
/// let common = intersection_by(View::full(&a), View::full(&b), |x, y| x.cmp(y));
/// assert_eq!(common.to_vec(), [3, 5]);
/// ```
pub fn intersection_by<'a, A, B, F>(
    first: View<'a, A>,
    second: View<'a, B>,
    compare: F,
) -> SetOp<'a, A, B, F>
where
    A: Indexable + ?Sized,
    B: Indexable<Item = A::Item> + ?Sized,
    F: Fn(&A::Item, &A::Item) -> Ordering,
{
    SetOp {
        first,
        second,
        compare,
        kind: Kind::Intersection,
    }
}

/// Merges two sorted views into the elements of `first` not matched in
/// `second`.
///
/// ```
/// use seqview::{Source, View, difference_by};
///
/// let a = [1, 3, 5, 7];
/// let b = [3, 4, 5, 8];
/// let only_a = difference_by(View::full(&a), View::full(&b), |x, y| x.cmp(y));
/// assert_eq!(only_a.to_vec(), [1, 7]);
/// ```
pub fn difference_by<'a, A, B, F>(
    first: View<'a, A>,
    second: View<'a, B>,
    compare: F,
) -> SetOp<'a, A, B, F>
where
    A: Indexable + ?Sized,
    B: Indexable<Item = A::Item> + ?Sized,
    F: Fn(&A::Item, &A::Item) -> Ordering,
{
    SetOp {
        first,
        second,
        compare,
        kind: Kind::Difference,
    }
}

/// [`union_by`] with the natural order.
pub fn union<'a, A, B>(
    first: View<'a, A>,
    second: View<'a, B>,
) -> SetOp<'a, A, B, impl Fn(&A::Item, &A::Item) -> Ordering>
where
    A: Indexable + ?Sized,
    B: Indexable<Item = A::Item> + ?Sized,
    A::Item: Ord,
{
    union_by(first, second, |a: &A::Item, b: &A::Item| a.cmp(b))
}

/// [`intersection_by`] with the natural order.
pub fn intersection<'a, A, B>(
    first: View<'a, A>,
    second: View<'a, B>,
) -> SetOp<'a, A, B, impl Fn(&A::Item, &A::Item) -> Ordering>
where
    A: Indexable + ?Sized,
    B: Indexable<Item = A::Item> + ?Sized,
    A::Item: Ord,
{
    intersection_by(first, second, |a: &A::Item, b: &A::Item| a.cmp(b))
}

/// [`difference_by`] with the natural order.
pub fn difference<'a, A, B>(
    first: View<'a, A>,
    second: View<'a, B>,
) -> SetOp<'a, A, B, impl Fn(&A::Item, &A::Item) -> Ordering>
where
    A: Indexable + ?Sized,
    B: Indexable<Item = A::Item> + ?Sized,
    A::Item: Ord,
{
    difference_by(first, second, |a: &A::Item, b: &A::Item| a.cmp(b))
}
