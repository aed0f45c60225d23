//! Offset/count windows over caller-owned containers.
//!
//! A view never owns its container. It borrows it for a lifetime `'a` and
//! exposes the window `[offset, offset + count)` with positions relative to
//! the window start: index 0 of a view is element `offset` of the container.
//!
//! Three flavours exist, each unlocking more operations:
//!
//! - [`View`] borrows the container shared and is `Copy`.
//! - [`ViewMut`] borrows it exclusively, allowing in-place algorithms and
//!   bounded copies into the window.
//! - [`ExpandableView`] additionally grows the container, widening itself to
//!   cover the inserted elements.
//!
//! [`nest`](View::nest), [`shift`](View::shift) and [`resize`](View::resize)
//! derive new windows and never touch the container.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use crate::container::{Expandable, Indexable, IndexableMut};
use crate::error::{Error, Result};

/// Window bounds shared by every view flavour.
///
/// Invariant: `offset + count` never exceeds the container length observed
/// when the span was last validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) offset: usize,
    pub(crate) count: usize,
}

impl Span {
    fn new(offset: usize, count: usize, len: usize) -> Result<Self> {
        if offset > len {
            return Err(Error::OutOfRange {
                what: "offset",
                value: offset,
                limit: len,
            });
        }
        if count > len - offset {
            return Err(Error::OutOfRange {
                what: "count",
                value: count,
                limit: len - offset,
            });
        }
        Ok(Self { offset, count })
    }

    #[inline]
    pub(crate) fn end(self) -> usize {
        self.offset + self.count
    }

    fn nest(self, offset: usize, count: Option<usize>) -> Result<Self> {
        let count = count.unwrap_or(self.count.saturating_sub(offset));
        let nested = Self::new(offset, count, self.count)?;
        Ok(Self {
            offset: self.offset + nested.offset,
            count: nested.count,
        })
    }

    fn shift(&mut self, delta: isize, strict: bool, len: usize) -> Result<bool> {
        let offset = self
            .offset
            .checked_add_signed(delta)
            .filter(|&offset| offset <= len)
            .ok_or(Error::ShiftOutOfRange {
                offset: self.offset,
                delta,
                len,
            })?;

        let room = len - offset;
        if self.count <= room {
            self.offset = offset;
            return Ok(true);
        }
        if strict {
            return Err(Error::OutOfRange {
                what: "count",
                value: self.count,
                limit: room,
            });
        }
        self.offset = offset;
        self.count = room;
        Ok(false)
    }

    fn resize(&mut self, count: usize, strict: bool, len: usize) -> Result<bool> {
        let room = len.saturating_sub(self.offset);
        if count <= room {
            self.count = count;
            return Ok(true);
        }
        if strict {
            return Err(Error::OutOfRange {
                what: "count",
                value: count,
                limit: room,
            });
        }
        self.count = room;
        Ok(false)
    }

    #[inline]
    fn locate(self, index: usize) -> Result<usize> {
        if index < self.count {
            Ok(self.offset + index)
        } else {
            Err(Error::IndexOutOfRange {
                index,
                count: self.count,
            })
        }
    }
}

/// A shared, non-owning window over an [`Indexable`] container.
///
/// # Examples
///
/// ```
/// use seqview::View;
///
/// let data = vec![10, 20, 30, 40, 50];
/// let view = View::new(&data, 1, 3).unwrap();
///
/// assert_eq!(view.len(), 3);
/// assert_eq!(view[0], 20);
/// assert_eq!(view.index_of(&40), Some(2));
/// assert!(view.get(3).is_err());
/// ```
pub struct View<'a, C: ?Sized> {
    container: &'a C,
    span: Span,
}

impl<C: ?Sized> Clone for View<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for View<'_, C> {}

impl<'a, C: Indexable + ?Sized> View<'a, C> {
    /// Creates a view covering the whole container.
    pub fn full(container: &'a C) -> Self {
        let count = container.len();
        Self {
            container,
            span: Span { offset: 0, count },
        }
    }

    /// Creates a view over `container[offset..offset + count]`.
    ///
    /// Fails with [`Error::OutOfRange`] if the window does not fit inside the
    /// container.
    pub fn new(container: &'a C, offset: usize, count: usize) -> Result<Self> {
        let span = Span::new(offset, count, container.len())?;
        Ok(Self { container, span })
    }

    /// Returns the number of elements in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.count
    }

    /// Returns `true` if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.count == 0
    }

    /// Returns the position of the window's first element in the container.
    #[inline]
    pub fn offset(&self) -> usize {
        self.span.offset
    }

    /// Returns the underlying container.
    #[inline]
    pub fn container(&self) -> &'a C {
        self.container
    }

    /// Derives a sub-view starting `offset` elements into this one.
    ///
    /// With `count` of `None` the sub-view runs to the end of this view.
    /// Fails if the requested window escapes `[0, len]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqview::View;
    ///
    /// let data = [1, 2, 3, 4, 5, 6];
    /// let view = View::new(&data, 1, 4).unwrap();
    ///
    /// let inner = view.nest(1, Some(2)).unwrap();
    /// assert_eq!(inner.iter().copied().collect::<Vec<_>>(), [3, 4]);
    ///
    /// let rest = view.nest(2, None).unwrap();
    /// assert_eq!(rest.iter().copied().collect::<Vec<_>>(), [4, 5]);
    ///
    /// assert!(view.nest(3, Some(2)).is_err());
    /// ```
    pub fn nest(&self, offset: usize, count: Option<usize>) -> Result<Self> {
        Ok(Self {
            container: self.container,
            span: self.span.nest(offset, count)?,
        })
    }

    /// Slides the window by `delta` positions.
    ///
    /// Returns `Ok(true)` if the window kept its size. If the slid window
    /// would run past the end of the container, a `strict` call fails and
    /// leaves the view unchanged, while a non-strict call shrinks the count to
    /// fit and returns `Ok(false)`. Moving the start outside the container
    /// always fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqview::View;
    ///
    /// let data = [1, 2, 3, 4, 5];
    /// let mut view = View::new(&data, 0, 3).unwrap();
    ///
    /// assert_eq!(view.shift(1, true), Ok(true));
    /// assert_eq!(view.offset(), 1);
    ///
    /// assert!(view.shift(2, true).is_err());
    /// assert_eq!(view.offset(), 1);
    ///
    /// assert_eq!(view.shift(2, false), Ok(false));
    /// assert_eq!((view.offset(), view.len()), (3, 2));
    /// ```
    pub fn shift(&mut self, delta: isize, strict: bool) -> Result<bool> {
        self.span.shift(delta, strict, self.container.len())
    }

    /// Changes the window's count, keeping its offset.
    ///
    /// Mirrors [`shift`](Self::shift): a count past the end of the container
    /// fails when `strict` and is clamped otherwise.
    pub fn resize(&mut self, count: usize, strict: bool) -> Result<bool> {
        self.span.resize(count, strict, self.container.len())
    }

    /// Splits the view into `[0, mid)` and `[mid, len)`.
    pub fn split_at(&self, mid: usize) -> Result<(Self, Self)> {
        Ok((self.nest(0, Some(mid))?, self.nest(mid, None)?))
    }

    /// Returns the element at `index`, relative to the window.
    pub fn get(&self, index: usize) -> Result<&'a C::Item> {
        let at = self.span.locate(index)?;
        Ok(self.container.at(at))
    }

    /// Returns the first element, or `None` if the window is empty.
    pub fn first(&self) -> Option<&'a C::Item> {
        self.get(0).ok()
    }

    /// Returns the last element, or `None` if the window is empty.
    pub fn last(&self) -> Option<&'a C::Item> {
        self.span
            .count
            .checked_sub(1)
            .and_then(|index| self.get(index).ok())
    }

    /// Returns an iterator over the window's elements.
    pub fn iter(&self) -> Iter<'a, C> {
        Iter {
            container: self.container,
            front: self.span.offset,
            back: self.span.end(),
        }
    }

    /// Returns the relative index of the first element equal to `item`.
    pub fn index_of(&self, item: &C::Item) -> Option<usize>
    where
        C::Item: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    /// Returns `true` if the window contains an element equal to `item`.
    pub fn contains(&self, item: &C::Item) -> bool
    where
        C::Item: PartialEq,
    {
        self.index_of(item).is_some()
    }

    // Callers guarantee `index < len`.
    #[inline]
    pub(crate) fn item(&self, index: usize) -> &'a C::Item {
        self.container.at(self.span.offset + index)
    }
}

impl<C: Indexable + ?Sized> Index<usize> for View<'_, C> {
    type Output = C::Item;

    fn index(&self, index: usize) -> &C::Item {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, C: Indexable + ?Sized> IntoIterator for View<'a, C> {
    type Item = &'a C::Item;
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Iter<'a, C> {
        self.iter()
    }
}

impl<C> fmt::Debug for View<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("offset", &self.span.offset)
            .field("count", &self.span.count)
            .field("items", &Items(*self))
            .finish()
    }
}

struct Items<'a, C: ?Sized>(View<'a, C>);

impl<C> fmt::Debug for Items<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Iterator over the elements of a view, front to back.
pub struct Iter<'a, C: ?Sized> {
    container: &'a C,
    front: usize,
    back: usize,
}

impl<C: ?Sized> Clone for Iter<'_, C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, C: Indexable + ?Sized> Iterator for Iter<'a, C> {
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let item = self.container.at(self.front);
            self.front += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<C: Indexable + ?Sized> DoubleEndedIterator for Iter<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.container.at(self.back))
        } else {
            None
        }
    }
}

impl<C: Indexable + ?Sized> ExactSizeIterator for Iter<'_, C> {}

impl<C: Indexable + ?Sized> FusedIterator for Iter<'_, C> {}

/// An exclusive window over a container.
///
/// Unlocks element writes, the in-place algorithm family, and serves as the
/// fixed-size destination of [`Source::copy_into`](crate::Source::copy_into).
///
/// # Examples
///
/// ```
/// use seqview::ViewMut;
///
/// let mut data = vec![1, 2, 3, 4];
/// let mut view = ViewMut::new(&mut data, 1, 2).unwrap();
///
/// view.set(0, 20).unwrap();
/// *view.get_mut(1).unwrap() = 30;
/// assert!(view.set(2, 40).is_err());
///
/// assert_eq!(data, [1, 20, 30, 4]);
/// ```
pub struct ViewMut<'a, C: ?Sized> {
    container: &'a mut C,
    span: Span,
}

impl<'a, C: Indexable + ?Sized> ViewMut<'a, C> {
    /// Creates a view covering the whole container.
    pub fn full(container: &'a mut C) -> Self {
        let count = container.len();
        Self {
            container,
            span: Span { offset: 0, count },
        }
    }

    /// Creates a view over `container[offset..offset + count]`.
    pub fn new(container: &'a mut C, offset: usize, count: usize) -> Result<Self> {
        let span = Span::new(offset, count, container.len())?;
        Ok(Self { container, span })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.span.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.count == 0
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.span.offset
    }

    /// Borrows the same window as a shared [`View`].
    #[inline]
    pub fn as_view(&self) -> View<'_, C> {
        View {
            container: &*self.container,
            span: self.span,
        }
    }

    /// Reborrows the same window for a shorter lifetime.
    #[inline]
    pub fn reborrow(&mut self) -> ViewMut<'_, C> {
        ViewMut {
            container: &mut *self.container,
            span: self.span,
        }
    }

    /// Derives an exclusive sub-view; see [`View::nest`].
    pub fn nest(&mut self, offset: usize, count: Option<usize>) -> Result<ViewMut<'_, C>> {
        let span = self.span.nest(offset, count)?;
        Ok(ViewMut {
            container: &mut *self.container,
            span,
        })
    }

    /// Slides the window; see [`View::shift`].
    pub fn shift(&mut self, delta: isize, strict: bool) -> Result<bool> {
        self.span.shift(delta, strict, self.container.len())
    }

    /// Changes the window's count; see [`View::resize`].
    pub fn resize(&mut self, count: usize, strict: bool) -> Result<bool> {
        self.span.resize(count, strict, self.container.len())
    }

    pub fn get(&self, index: usize) -> Result<&C::Item> {
        let at = self.span.locate(index)?;
        Ok(self.container.at(at))
    }

    pub fn iter(&self) -> Iter<'_, C> {
        self.as_view().iter()
    }

    pub fn index_of(&self, item: &C::Item) -> Option<usize>
    where
        C::Item: PartialEq,
    {
        self.as_view().index_of(item)
    }
}

impl<'a, C: IndexableMut + ?Sized> ViewMut<'a, C> {
    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut C::Item> {
        let at = self.span.locate(index)?;
        Ok(self.container.at_mut(at))
    }

    /// Replaces the element at `index`.
    pub fn set(&mut self, index: usize, value: C::Item) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Swaps the elements at relative positions `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let a = self.span.locate(a)?;
        let b = self.span.locate(b)?;
        self.container.swap(a, b);
        Ok(())
    }

    // Callers guarantee both positions are below `len`.
    #[inline]
    pub(crate) fn exchange(&mut self, a: usize, b: usize) {
        if a != b {
            self.container.swap(self.span.offset + a, self.span.offset + b);
        }
    }

    // Callers guarantee `index < len`.
    #[inline]
    pub(crate) fn slot(&mut self, index: usize) -> &mut C::Item {
        self.container.at_mut(self.span.offset + index)
    }
}

impl<C: Indexable + ?Sized> Index<usize> for ViewMut<'_, C> {
    type Output = C::Item;

    fn index(&self, index: usize) -> &C::Item {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<C: IndexableMut + ?Sized> IndexMut<usize> for ViewMut<'_, C> {
    fn index_mut(&mut self, index: usize) -> &mut C::Item {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<C> fmt::Debug for ViewMut<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_view().fmt(f)
    }
}

/// An exclusive window over a growable container.
///
/// [`grow`](Self::grow) inserts elements right after the window's current
/// end and widens the window by exactly the number inserted, so the new tail
/// of the window is the inserted elements, in order. Dereferences to
/// [`ViewMut`] for everything else.
///
/// # Examples
///
/// ```
/// use seqview::ExpandableView;
///
/// let mut data = vec![1, 2, 9];
/// let mut view = ExpandableView::new(&mut data, 0, 2).unwrap();
///
/// assert_eq!(view.grow([3, 4]), 2);
/// assert_eq!(view.len(), 4);
///
/// assert_eq!(data, [1, 2, 3, 4, 9]);
/// ```
pub struct ExpandableView<'a, C: ?Sized> {
    inner: ViewMut<'a, C>,
}

impl<'a, C: Expandable + ?Sized> ExpandableView<'a, C> {
    /// Creates a view covering the whole container.
    pub fn full(container: &'a mut C) -> Self {
        Self {
            inner: ViewMut::full(container),
        }
    }

    /// Creates an empty view positioned after the container's last element,
    /// so growth appends to the container.
    pub fn at_end(container: &'a mut C) -> Self {
        let offset = container.len();
        Self {
            inner: ViewMut {
                container,
                span: Span { offset, count: 0 },
            },
        }
    }

    /// Creates a view over `container[offset..offset + count]`.
    pub fn new(container: &'a mut C, offset: usize, count: usize) -> Result<Self> {
        Ok(Self {
            inner: ViewMut::new(container, offset, count)?,
        })
    }

    /// Inserts `items` after the window's end and widens the window to cover
    /// them. Returns the number of elements inserted.
    pub fn grow<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = C::Item>,
    {
        let before = self.inner.container.len();
        self.inner.container.insert_from(self.inner.span.end(), items);
        let added = self.inner.container.len() - before;
        self.inner.span.count += added;
        added
    }

    /// Grows by `count` elements produced by `f`, which receives each new
    /// element's position relative to the start of the grown region.
    pub fn grow_with<F>(&mut self, count: usize, f: F) -> usize
    where
        F: FnMut(usize) -> C::Item,
    {
        self.grow((0..count).map(f))
    }

    /// Grows by `count` default values.
    pub fn grow_default(&mut self, count: usize) -> usize
    where
        C::Item: Default,
    {
        self.grow_with(count, |_| C::Item::default())
    }

    /// Gives up the ability to grow.
    pub fn into_inner(self) -> ViewMut<'a, C> {
        self.inner
    }
}

impl<'a, C: ?Sized> Deref for ExpandableView<'a, C> {
    type Target = ViewMut<'a, C>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<C: ?Sized> DerefMut for ExpandableView<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<C> fmt::Debug for ExpandableView<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}
