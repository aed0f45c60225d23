//! Offset/count views over indexable containers, and a library of sequence
//! algorithms that run against them.
//!
//! A [`View`] is a non-owning window `[offset, offset + count)` over any
//! container implementing [`Indexable`]. Algorithms take views and return a
//! [`Source`]: a description of the computation that runs only when it is
//! materialized, in one of two ways:
//!
//! - [`Source::copy_into`] writes into a fixed-size [`ViewMut`], stopping
//!   early when the destination is full, and reports where every input and
//!   the destination stopped.
//! - [`Source::append_to`] grows an [`ExpandableView`] by the whole result.
//!
//! Algorithms that can work in place (sort, partition, rotation, reversal,
//! shuffle, filter) also come as functions taking a [`ViewMut`].
//!
//! ## Examples
//!
//! ### Bounded and growing materialization
//!
//! ```rust
//! use seqview::{ExpandableView, Source, Stop, View, ViewMut, union};
//!
//! let a = vec![1, 3, 5, 7];
//! let b = vec![3, 4, 5, 8];
//! let merged = union(View::full(&a), View::full(&b));
//!
//! // copy as much as fits into a window of an existing buffer
//! let mut buffer = [0; 6];
//! let stop = merged.copy_into(&mut ViewMut::new(&mut buffer, 2, 4).unwrap());
//! assert_eq!(buffer, [0, 0, 1, 3, 4, 5]);
//! assert_eq!(stop.destination_offset(), 4);
//! // resume points: `a` stopped before 7, `b` before 8
//! assert_eq!((stop.first, stop.second), (3, 3));
//!
//! // or grow a container by the entire result
//! let mut log = vec![0];
//! let appended = merged.append_to(ExpandableView::at_end(&mut log));
//! assert_eq!(appended.len(), 6);
//! assert_eq!(log, [0, 1, 3, 4, 5, 7, 8]);
//! ```
//!
//! ### Working in place
//!
//! ```rust
//! use seqview::{ViewMut, partition_in_place, rotate_left_in_place, sort_in_place};
//!
//! let mut data = vec![6, 1, 5, 2, 4, 3];
//!
//! // only the window [1, 5) is touched
//! let mut window = ViewMut::new(&mut data, 1, 4).unwrap();
//! sort_in_place(&mut window);
//! rotate_left_in_place(&mut window, 1);
//! assert_eq!(data, [6, 2, 4, 5, 1, 3]);
//!
//! // stable: both groups keep their relative order
//! let boundary = partition_in_place(&mut ViewMut::full(&mut data), |&x| x > 3);
//! assert_eq!(boundary, 3);
//! assert_eq!(data, [6, 4, 5, 2, 1, 3]);
//! ```
//!
//! ### Randomized algorithms
//!
//! ```rust
//! # #[cfg(feature = "rand")] {
//! use rand::{SeedableRng, rngs::StdRng};
//! use seqview::{RngSource, Source, View, sample, shuffle};
//!
//! let deck: Vec<u8> = (1..=52).collect();
//! let random = RngSource(StdRng::seed_from_u64(42));
//!
//! let shuffled = shuffle(View::full(&deck), random.clone());
//! // a source keeps no state: every materialization deals the same order
//! assert_eq!(shuffled.to_vec(), shuffled.to_vec());
//!
//! let hand = sample(View::full(&deck), 5, random).unwrap().to_vec();
//! assert_eq!(hand.len(), 5);
//! # }
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod algorithms;
pub mod container;
pub mod error;
pub mod random;
pub mod source;
pub mod view;

pub use algorithms::*;
pub use container::{Expandable, Indexable, IndexableMut};
pub use error::{Error, Result};
#[cfg(feature = "rand")]
pub use random::RngSource;
pub use random::{Modulo, Randomness, Uniform};
pub use source::{
    BinaryStop, BoundedSink, GrowingSink, PartitionStop, Sink, Source, Stop, UnaryStop,
};
pub use view::{ExpandableView, Iter, View, ViewMut};

#[cfg(test)]
mod tests;
