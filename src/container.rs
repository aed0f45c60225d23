//! The container contract consumed by views.
//!
//! A container is any finite sequence addressable by position. The three
//! traits form a capability ladder: [`Indexable`] for reading,
//! [`IndexableMut`] for writing and swapping in place, and [`Expandable`] for
//! destinations that can grow.

use alloc::{collections::VecDeque, vec::Vec};

/// A finite, randomly addressable sequence.
pub trait Indexable {
    /// The element type.
    type Item;

    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= self.len()`. Views only ever call this with
    /// checked positions.
    fn at(&self, index: usize) -> &Self::Item;
}

/// A container whose elements can be replaced and reordered in place.
pub trait IndexableMut: Indexable {
    /// Returns a mutable reference to the element at `index`.
    fn at_mut(&mut self, index: usize) -> &mut Self::Item;

    /// Swaps the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);
}

/// A container that can grow by inserting elements.
pub trait Expandable: IndexableMut {
    /// Inserts `items` in order starting at `index`, moving any elements at
    /// or after `index` toward the end.
    fn insert_from<I>(&mut self, index: usize, items: I)
    where
        I: IntoIterator<Item = Self::Item>;
}

impl<T> Indexable for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> IndexableMut for [T] {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
}

impl<T, const N: usize> Indexable for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> IndexableMut for [T; N] {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> Indexable for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> IndexableMut for Vec<T> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> Expandable for Vec<T> {
    fn insert_from<I>(&mut self, index: usize, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        if index == Vec::len(self) {
            self.extend(items);
        } else {
            drop(self.splice(index..index, items));
        }
    }
}

impl<T> Indexable for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> IndexableMut for VecDeque<T> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }
}

impl<T> Expandable for VecDeque<T> {
    fn insert_from<I>(&mut self, index: usize, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = self.split_off(index);
        self.extend(items);
        self.append(&mut tail);
    }
}
