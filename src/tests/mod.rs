use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::Debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::Uniform;

mod partition;
mod rotate;
mod source;
mod transform;

// Helper asserting two collections hold the same elements with the same
// multiplicities, ignoring order
fn check_same_multiset<T, I1, I2>(left: I1, right: I2)
where
    T: Ord + Debug,
    I1: IntoIterator<Item = T>,
    I2: IntoIterator<Item = T>,
{
    fn counts<T: Ord, I: IntoIterator<Item = T>>(items: I) -> BTreeMap<T, usize> {
        let mut counts = BTreeMap::new();
        for item in items {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }
    assert_eq!(counts(left), counts(right));
}

// Copies a view's elements out for comparison
fn contents<C>(view: crate::View<'_, C>) -> Vec<C::Item>
where
    C: crate::Indexable + ?Sized,
    C::Item: Clone,
{
    view.iter().cloned().collect()
}

// Seeded randomness for the algorithms, built on the dev-dependency so the
// tests do not need the `rand` feature
fn seeded(seed: u64) -> Uniform<impl FnMut(usize) -> usize + Clone> {
    let mut rng = StdRng::seed_from_u64(seed);
    Uniform(move |bound: usize| rng.random_range(0..bound))
}
