use super::seeded;
use crate::{
    BinaryStop, ExpandableView, GrowingSink, PartitionStop, Sink, Source, Stop, UnaryStop, View,
    ViewMut, difference, difference_by, filter, from_fn, from_index, intersection, intersection_by,
    map, partition, repeat, reverse, rotate_left, sample, shuffle, sort, sort_by, sort_by_key,
    union, union_by, zip_with,
};
use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

// Every source below is checked against the same protocol: a bounded copy
// is the append result truncated to the destination, append writes all of
// it, and materializing again gives the same answer
fn check_protocol<S>(source: &S)
where
    S: Source<Item = i32>,
    S::Stop: PartialEq + Debug,
{
    let full = source.to_vec();
    assert_eq!(source.to_vec(), full);

    for capacity in 0..full.len() + 3 {
        // sentinel padding on both sides of the destination window
        let mut buffer = vec![-1; capacity + 2];
        let stop = source.copy_into(&mut ViewMut::new(&mut buffer, 1, capacity).unwrap());

        let written = capacity.min(full.len());
        assert_eq!(stop.destination_offset(), written);
        assert_eq!(&buffer[1..1 + written], &full[..written]);
        assert!(buffer[1 + written..].iter().all(|&x| x == -1));
        assert_eq!(buffer[0], -1);

        let mut again = vec![-1; capacity + 2];
        let repeated = source.copy_into(&mut ViewMut::new(&mut again, 1, capacity).unwrap());
        assert_eq!(repeated, stop);
        assert_eq!(again, buffer);
    }

    let mut grown = vec![7, 8];
    let view = source.append_to(ExpandableView::new(&mut grown, 0, 1).unwrap());
    assert_eq!((view.offset(), view.len()), (0, 1 + full.len()));
    let mut expected = vec![7];
    expected.extend(full.iter().copied());
    expected.push(8);
    assert_eq!(grown, expected);

    let collected: Vec<i32> = source.collect();
    assert_eq!(collected, full);
    let collected: VecDeque<i32> = source.collect();
    assert!(collected.iter().eq(full.iter()));
}

#[test]
fn test_protocol_single_input_sources() {
    let data = [4, 1, 3, 9, 2, 8, 6];
    let view = View::full(&data);

    check_protocol(&view);
    check_protocol(&View::new(&data, 2, 4).unwrap());
    check_protocol(&sort(view));
    check_protocol(&sort_by(view, |a, b| b.cmp(a)));
    check_protocol(&sort_by_key(view, |x| x % 3));
    check_protocol(&rotate_left(view, 3));
    check_protocol(&rotate_left(view, -2));
    check_protocol(&reverse(view));
    check_protocol(&filter(view, |x| x % 2 == 0));
    check_protocol(&map(view, |x| x * 10));
}

#[test]
fn test_protocol_merge_sources() {
    let a = [1, 3, 5, 7, 9, 11];
    let b = [2, 3, 4, 7, 10];
    let (a, b) = (View::full(&a), View::full(&b));

    check_protocol(&union(a, b));
    check_protocol(&intersection(a, b));
    check_protocol(&difference(a, b));
    check_protocol(&difference(b, a));
    check_protocol(&union_by(a, b, |x, y| x.cmp(y)));
    check_protocol(&intersection_by(a, b, |x, y| x.cmp(y)));
    check_protocol(&difference_by(a, b, |x, y| x.cmp(y)));
    check_protocol(&zip_with(a, b, |x, y| x * y));
}

#[test]
fn test_protocol_generated_sources() {
    check_protocol(&from_index(6, |i| i as i32 * 2));
    check_protocol(&repeat(5, 4));

    let mut state = 1i32;
    check_protocol(&from_fn(5, move || {
        state = state * 3 % 17;
        state
    }));
}

#[test]
fn test_protocol_randomized_sources() {
    let data: Vec<i32> = (0..40).collect();
    let view = View::full(&data);

    for seed in 0..5 {
        check_protocol(&shuffle(view, seeded(seed)));
        check_protocol(&sample(view, 0, seeded(seed)).unwrap());
        check_protocol(&sample(view, 7, seeded(seed)).unwrap());
        check_protocol(&sample(view, 40, seeded(seed)).unwrap());
    }
}

#[test]
fn test_partition_copy_is_repeatable() {
    let data = [3, 8, 1, 6, 5, 2, 7];
    let source = partition(View::full(&data), |&x| x > 4);
    let (matched, unmatched): (Vec<i32>, Vec<i32>) = source.collect();

    for room in 0..5 {
        let (mut yes, mut no) = (vec![0; room], vec![0; room]);
        let (mut yes_again, mut no_again) = (vec![0; room], vec![0; room]);
        let stop = source.copy_into(&mut ViewMut::full(&mut yes), &mut ViewMut::full(&mut no));
        let again = source.copy_into(
            &mut ViewMut::full(&mut yes_again),
            &mut ViewMut::full(&mut no_again),
        );

        assert_eq!(stop, again);
        assert_eq!((&yes, &no), (&yes_again, &no_again));
        assert_eq!(yes[..stop.matched], matched[..stop.matched]);
        assert_eq!(no[..stop.unmatched], unmatched[..stop.unmatched]);
    }
}

#[test]
fn test_view_copies_itself() {
    let data = [1, 2, 3, 4, 5];
    let source = View::new(&data, 1, 3).unwrap();

    let mut out = [0; 2];
    let stop = source.copy_into(&mut ViewMut::full(&mut out));
    assert_eq!(
        stop,
        UnaryStop {
            source: 2,
            destination: 2
        }
    );
    assert_eq!(out, [2, 3]);
}

#[test]
fn test_append_to_empty_matches_collect() {
    let data = vec![3, 1, 2];
    let source = rotate_left(View::full(&data), 1);

    let mut appended = Vec::new();
    source.append_to(ExpandableView::at_end(&mut appended));
    let collected: Vec<i32> = source.collect();

    let appended_view = View::full(&appended);
    let collected_view = View::full(&collected);
    assert_eq!(appended_view.len(), collected_view.len());
    assert!(appended_view.iter().eq(collected_view.iter()));
}

#[test]
fn test_copy_never_resizes_destination() {
    let data = [1, 2, 3];
    let mut out = vec![0; 10];
    let mut destination = ViewMut::new(&mut out, 2, 5).unwrap();

    View::full(&data).copy_into(&mut destination);
    assert_eq!((destination.offset(), destination.len()), (2, 5));
    assert_eq!(out, [0, 0, 1, 2, 3, 0, 0, 0, 0, 0]);
}

#[test]
fn test_emit_into_custom_sink() {
    // a sink that only accepts a fixed budget and counts what it saw
    struct Budget {
        left: usize,
        seen: Vec<i32>,
    }

    impl Sink<i32> for Budget {
        fn remaining(&self) -> Option<usize> {
            Some(self.left)
        }

        fn push(&mut self, item: i32) {
            self.left -= 1;
            self.seen.push(item);
        }

        fn written(&self) -> usize {
            self.seen.len()
        }
    }

    let data = [9, 7, 5, 3];
    let mut sink = Budget {
        left: 2,
        seen: Vec::new(),
    };
    let stop = sort(View::full(&data)).emit(&mut sink);

    assert_eq!(sink.seen, [3, 5]);
    assert_eq!(stop.destination, 2);
    assert!(!sink.has_room());
}

#[test]
fn test_growing_sink_is_unbounded() {
    let mut sink = GrowingSink::default();
    assert_eq!(sink.remaining(), None);
    for i in 0..100 {
        sink.push(i);
    }
    assert!(sink.has_room());
    assert_eq!(sink.written(), 100);
    assert_eq!(sink.into_inner().len(), 100);
}

#[test]
fn test_stop_accessors() {
    let unary = UnaryStop {
        source: 4,
        destination: 2,
    };
    let binary = BinaryStop {
        first: 1,
        second: 3,
        destination: 5,
    };
    let partition = PartitionStop {
        source: 6,
        matched: 4,
        unmatched: 2,
    };

    assert_eq!(unary.destination_offset(), 2);
    assert_eq!(binary.destination_offset(), 5);
    assert_eq!(partition.destination_offset(), 4);
}
