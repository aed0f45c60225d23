use super::{check_same_multiset, seeded};
use crate::{ExpandableView, Randomness, View, ViewMut, partition, partition_in_place};
use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

#[test]
fn test_partition_in_place_evens_first() {
    let mut data = [1, 2, 3, 4, 5, 6];
    let boundary = partition_in_place(&mut ViewMut::full(&mut data), |x| x % 2 == 0);

    assert_eq!(boundary, 3);
    assert_eq!(data, [2, 4, 6, 1, 3, 5]);
}

#[test]
fn test_partition_in_place_edges() {
    let mut empty: [i32; 0] = [];
    assert_eq!(partition_in_place(&mut ViewMut::full(&mut empty), |_| true), 0);

    let mut all = [1, 2, 3];
    assert_eq!(partition_in_place(&mut ViewMut::full(&mut all), |_| true), 3);
    assert_eq!(partition_in_place(&mut ViewMut::full(&mut all), |_| false), 0);
    assert_eq!(all, [1, 2, 3]);
}

#[test]
fn test_partition_in_place_touches_only_the_window() {
    let mut data = vec![9, 1, 2, 3, 4, 9];
    let mut view = ViewMut::new(&mut data, 1, 4).unwrap();
    let boundary = partition_in_place(&mut view, |&x| x > 2);

    assert_eq!(boundary, 2);
    assert_eq!(data, [9, 3, 4, 1, 2, 9]);
}

// Shadow-model check: the in-place partition equals filtering the input
// twice, which is stable by construction
#[test]
fn test_partition_in_place_is_stable() {
    let mut random = seeded(0x5eed);

    for len in 0..64 {
        // pairs of (key, original position) expose any reordering
        let data: Vec<(usize, usize)> = (0..len).map(|i| (random.index_below(4), i)).collect();
        let keep = |item: &(usize, usize)| item.0 < 2;

        let mut expected: Vec<_> = data.iter().copied().filter(keep).collect();
        let boundary = expected.len();
        expected.extend(data.iter().copied().filter(|item| !keep(item)));

        let mut actual = data.clone();
        assert_eq!(partition_in_place(&mut ViewMut::full(&mut actual), keep), boundary);
        assert_eq!(actual, expected);
        check_same_multiset(&actual, &data);
    }
}

#[test]
fn test_partition_copy_into_two_destinations() {
    let data = [1, 2, 3, 4, 5, 6, 7];
    let source = partition(View::full(&data), |x| x % 2 == 0);

    let (mut evens, mut odds) = ([0; 5], [0; 5]);
    let stop = source.copy_into(&mut ViewMut::full(&mut evens), &mut ViewMut::full(&mut odds));

    assert_eq!((stop.source, stop.matched, stop.unmatched), (7, 3, 4));
    assert_eq!(evens, [2, 4, 6, 0, 0]);
    assert_eq!(odds, [1, 3, 5, 7, 0]);
}

#[test]
fn test_partition_stops_when_a_destination_fills() {
    let data = [2, 4, 6, 1];
    let source = partition(View::full(&data), |x| x % 2 == 0);

    let (mut evens, mut odds) = ([0; 2], [0; 4]);
    let stop = source.copy_into(&mut ViewMut::full(&mut evens), &mut ViewMut::full(&mut odds));

    // the 6 has no room, and nothing after it is routed
    assert_eq!((stop.source, stop.matched, stop.unmatched), (2, 2, 0));
    assert_eq!(odds, [0; 4]);
}

#[test]
fn test_partition_append_and_collect() {
    let data = [5, 10, 15, 20, 25];
    let source = partition(View::full(&data), |&x| x >= 15);

    let mut high = vec![100];
    let mut low = VecDeque::from([0]);
    let (high_view, low_view) = source.append_to(
        ExpandableView::at_end(&mut high),
        ExpandableView::full(&mut low),
    );
    assert_eq!((high_view.offset(), high_view.len()), (1, 3));
    assert_eq!((low_view.offset(), low_view.len()), (0, 3));
    assert_eq!(high, [100, 15, 20, 25]);
    assert_eq!(low, [0, 5, 10]);

    let (high, low): (Vec<i32>, Vec<i32>) = source.collect();
    assert_eq!(high, [15, 20, 25]);
    assert_eq!(low, [5, 10]);

    // the input is never touched
    assert_eq!(data, [5, 10, 15, 20, 25]);
}
