//! Single-pass transforms: generate, map, filter and zip.

use core::fmt;

use crate::container::{Indexable, IndexableMut};
use crate::source::{BinaryStop, Sink, Source, UnaryStop};
use crate::view::{View, ViewMut};

/// A deferred sequence of generated values. See [`from_index`].
#[derive(Clone)]
pub struct Generate<F> {
    count: usize,
    produce: F,
}

impl<F> fmt::Debug for Generate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generate")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl<T, F> Source for Generate<F>
where
    F: FnMut(usize) -> T + Clone,
{
    type Item = T;
    type Stop = UnaryStop;

    fn emit<S: Sink<T>>(&self, sink: &mut S) -> UnaryStop {
        let mut produce = self.produce.clone();
        let mut produced = 0;
        while produced < self.count && sink.has_room() {
            sink.push(produce(produced));
            produced += 1;
        }
        UnaryStop {
            source: produced,
            destination: sink.written(),
        }
    }
}

/// Generates `count` values, each from its position.
///
/// # Examples
///
/// ```
/// use seqview::{Source, from_index};
///
/// assert_eq!(from_index(4, |i| i * i).to_vec(), [0, 1, 4, 9]);
/// ```
pub fn from_index<T, F>(count: usize, produce: F) -> Generate<F>
where
    F: FnMut(usize) -> T + Clone,
{
    Generate { count, produce }
}

/// Generates `count` values from a zero-argument generator.
///
/// The generator is cloned for each materialization, so its state restarts
/// every time.
///
/// ```
/// use seqview::{Source, from_fn};
///
/// let mut next = 1;
/// let powers = from_fn(5, move || {
///     next *= 2;
///     next
/// });
/// assert_eq!(powers.to_vec(), [2, 4, 8, 16, 32]);
/// assert_eq!(powers.to_vec(), [2, 4, 8, 16, 32]);
/// ```
pub fn from_fn<T, F>(count: usize, mut produce: F) -> Generate<impl FnMut(usize) -> T + Clone>
where
    F: FnMut() -> T + Clone,
{
    from_index(count, move |_| produce())
}

/// Generates `count` copies of `value`.
///
/// Combined with [`Source::copy_into`] this fills a view.
///
/// ```
/// use seqview::{Source, ViewMut, repeat};
///
/// let mut data = [1, 2, 3, 4, 5];
/// repeat(0, 10).copy_into(&mut ViewMut::new(&mut data, 1, 3).unwrap());
/// assert_eq!(data, [1, 0, 0, 0, 5]);
/// ```
pub fn repeat<T>(value: T, count: usize) -> Generate<impl FnMut(usize) -> T + Clone>
where
    T: Clone,
{
    from_index(count, move |_| value.clone())
}

/// A deferred element-wise conversion. See [`map`].
pub struct Map<'a, C: ?Sized, F> {
    view: View<'a, C>,
    convert: F,
}

impl<C, F> fmt::Debug for Map<'_, C, F>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl<C, F, U> Source for Map<'_, C, F>
where
    C: Indexable + ?Sized,
    F: Fn(&C::Item) -> U,
{
    type Item = U;
    type Stop = UnaryStop;

    fn emit<S: Sink<U>>(&self, sink: &mut S) -> UnaryStop {
        let mut source = 0;
        while source < self.view.len() && sink.has_room() {
            sink.push((self.convert)(self.view.item(source)));
            source += 1;
        }
        UnaryStop {
            source,
            destination: sink.written(),
        }
    }
}

/// Applies `convert` to every element; the element type may change.
///
/// # Examples
///
/// ```
/// use seqview::{Source, View, map};
///
/// let data = [1, 2, 3];
/// let labels: Vec<String> = map(View::full(&data), |n| format!("#{n}")).collect();
/// assert_eq!(labels, ["#1", "#2", "#3"]);
/// ```
pub fn map<'a, C, F, U>(view: View<'a, C>, convert: F) -> Map<'a, C, F>
where
    C: Indexable + ?Sized,
    F: Fn(&C::Item) -> U,
{
    Map { view, convert }
}

/// A deferred filter. See [`filter`].
pub struct Filter<'a, C: ?Sized, P> {
    view: View<'a, C>,
    predicate: P,
}

impl<C, P> fmt::Debug for Filter<'_, C, P>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl<C, P> Source for Filter<'_, C, P>
where
    C: Indexable + ?Sized,
    C::Item: Clone,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;
    type Stop = UnaryStop;

    fn emit<S: Sink<C::Item>>(&self, sink: &mut S) -> UnaryStop {
        let mut source = 0;
        while source < self.view.len() && sink.has_room() {
            let item = self.view.item(source);
            if (self.predicate)(item) {
                sink.push(item.clone());
            }
            source += 1;
        }
        UnaryStop {
            source,
            destination: sink.written(),
        }
    }
}

/// Keeps only the elements satisfying `predicate`, in order.
///
/// When a bounded copy fills up, `source` in the stop descriptor is the
/// position right after the last element kept.
///
/// # Examples
///
/// ```
/// use seqview::{Source, View, ViewMut, filter};
///
/// let data = [5, 8, 1, 6, 3, 4];
/// let mut out = [0; 2];
/// let stop = filter(View::full(&data), |x| x % 2 == 0).copy_into(&mut ViewMut::full(&mut out));
///
/// assert_eq!(out, [8, 6]);
/// assert_eq!(stop.source, 4);
/// ```
pub fn filter<'a, C, P>(view: View<'a, C>, predicate: P) -> Filter<'a, C, P>
where
    C: Indexable + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    Filter { view, predicate }
}

/// Moves the elements satisfying `predicate` to the front of the view, in
/// order, and returns how many there are: the view's new logical end.
///
/// Elements past the returned end are the rejected ones, in unspecified
/// order. Shrink the view with [`ViewMut::resize`] to drop them from sight.
///
/// # Examples
///
/// ```
/// use seqview::{ViewMut, filter_in_place};
///
/// let mut data = [1, 2, 3, 4, 5, 6];
/// let mut view = ViewMut::full(&mut data);
/// let end = filter_in_place(&mut view, |x| x % 3 != 0);
///
/// assert_eq!(end, 4);
/// view.resize(end, true).unwrap();
/// assert_eq!(view.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5]);
/// ```
pub fn filter_in_place<C, P>(view: &mut ViewMut<'_, C>, predicate: P) -> usize
where
    C: IndexableMut + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    let mut keep = 0;
    for i in 0..view.len() {
        if predicate(&view[i]) {
            view.exchange(keep, i);
            keep += 1;
        }
    }
    keep
}

/// A deferred pairwise combination. See [`zip_with`].
pub struct Zip<'a, A: ?Sized, B: ?Sized, F> {
    first: View<'a, A>,
    second: View<'a, B>,
    combine: F,
}

impl<A, B, F> fmt::Debug for Zip<'_, A, B, F>
where
    A: Indexable + ?Sized,
    B: Indexable + ?Sized,
    A::Item: fmt::Debug,
    B::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zip")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}

impl<A, B, F, U> Source for Zip<'_, A, B, F>
where
    A: Indexable + ?Sized,
    B: Indexable + ?Sized,
    F: Fn(&A::Item, &B::Item) -> U,
{
    type Item = U;
    type Stop = BinaryStop;

    fn emit<S: Sink<U>>(&self, sink: &mut S) -> BinaryStop {
        let len = self.first.len().min(self.second.len());
        let mut consumed = 0;
        while consumed < len && sink.has_room() {
            sink.push((self.combine)(
                self.first.item(consumed),
                self.second.item(consumed),
            ));
            consumed += 1;
        }
        BinaryStop {
            first: consumed,
            second: consumed,
            destination: sink.written(),
        }
    }
}

/// Combines two views element by element, stopping at the shorter one.
///
/// # Examples
///
/// ```
/// use seqview::{Source, View, zip_with};
///
/// let prices = [3, 5, 7, 9];
/// let counts = [2, 0, 1];
/// let totals = zip_with(View::full(&prices), View::full(&counts), |p, c| p * c);
/// assert_eq!(totals.to_vec(), [6, 0, 7]);
/// ```
pub fn zip_with<'a, A, B, F, U>(
    first: View<'a, A>,
    second: View<'a, B>,
    combine: F,
) -> Zip<'a, A, B, F>
where
    A: Indexable + ?Sized,
    B: Indexable + ?Sized,
    F: Fn(&A::Item, &B::Item) -> U,
{
    Zip {
        first,
        second,
        combine,
    }
}
