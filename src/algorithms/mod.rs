//! Algorithm constructors and in-place variants.
//!
//! Constructors take [`View`](crate::View)s plus their parameters and return
//! a [`Source`](crate::Source). In-place variants take a
//! [`ViewMut`](crate::ViewMut) and rearrange its range directly.

pub mod partition;
pub mod rotate;
pub mod set_ops;
pub mod shuffle;
pub mod sort;
pub mod transform;

pub use partition::{Partition, partition, partition_in_place};
pub use rotate::{Reverse, RotateLeft, reverse, reverse_in_place, rotate_left, rotate_left_in_place};
pub use set_ops::{SetOp, difference, difference_by, intersection, intersection_by, union, union_by};
pub use shuffle::{Sample, Shuffle, sample, shuffle, shuffle_in_place};
pub use sort::{
    Sort, sort, sort_by, sort_by_key, sort_in_place, sort_in_place_by, sort_in_place_by_key,
};
pub use transform::{
    Filter, Generate, Map, Zip, filter, filter_in_place, from_fn, from_index, map, repeat,
    zip_with,
};
