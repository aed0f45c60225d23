use crate::{
    BinaryStop, ExpandableView, Source, UnaryStop, View, ViewMut, filter, filter_in_place,
    from_fn, from_index, map, repeat, zip_with,
};
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

#[test]
fn test_generate_variants() {
    assert_eq!(from_index(5, |i| i * 3).to_vec(), [0, 3, 6, 9, 12]);
    assert_eq!(repeat('x', 3).to_vec(), ['x', 'x', 'x']);
    assert!(repeat(1, 0).to_vec().is_empty());

    let mut a = 0u64;
    let mut b = 1u64;
    let fibonacci = from_fn(8, move || {
        let next = a;
        (a, b) = (b, a + b);
        next
    });
    assert_eq!(fibonacci.to_vec(), [0, 1, 1, 2, 3, 5, 8, 13]);
}

#[test]
fn test_generate_bounded_and_growing() {
    let squares = from_index(6, |i| (i * i) as i32);

    let mut out = [0; 4];
    let stop = squares.copy_into(&mut ViewMut::full(&mut out));
    assert_eq!(out, [0, 1, 4, 9]);
    assert_eq!(
        stop,
        UnaryStop {
            source: 4,
            destination: 4
        }
    );

    let mut data = vec![-1, -2];
    let view = squares.append_to(ExpandableView::new(&mut data, 1, 0).unwrap());
    assert_eq!((view.offset(), view.len()), (1, 6));
    assert_eq!(data, [-1, 0, 1, 4, 9, 16, 25, -2]);
}

#[test]
fn test_fill_a_window() {
    let mut data = [7; 6];
    let stop = repeat(0, 100).copy_into(&mut ViewMut::new(&mut data, 2, 3).unwrap());
    assert_eq!(stop.source, 3);
    assert_eq!(data, [7, 7, 0, 0, 0, 7]);
}

#[test]
fn test_map_changes_type() {
    let data = [1, 22, 333];
    let lengths: Vec<usize> = map(View::full(&data), |n| n.to_string().len()).collect();
    assert_eq!(lengths, [1, 2, 3]);

    let mut names = vec![String::new(); 2];
    let stop = map(View::full(&data), |n| n.to_string()).copy_into(&mut ViewMut::full(&mut names));
    assert_eq!(names, ["1", "22"]);
    assert_eq!(stop.source, 2);
}

#[test]
fn test_filter_stops_after_last_kept() {
    let data = [2, 3, 4, 5, 6, 7, 8];
    let evens = filter(View::full(&data), |x| x % 2 == 0);
    assert_eq!(evens.to_vec(), [2, 4, 6, 8]);

    let mut out = [0; 3];
    let stop = evens.copy_into(&mut ViewMut::full(&mut out));
    assert_eq!(out, [2, 4, 6]);
    assert_eq!(stop.source, 5);

    // nothing kept: the whole input is consumed
    let stop = filter(View::full(&data), |&x| x > 100).copy_into(&mut ViewMut::full(&mut out));
    assert_eq!((stop.source, stop.destination), (7, 0));
}

#[test]
fn test_filter_in_place() {
    let mut data = vec![0, 1, 2, 3, 4, 5, 6, 7, 0];
    let mut view = ViewMut::new(&mut data, 1, 7).unwrap();
    let end = filter_in_place(&mut view, |x| x % 3 != 0);

    assert_eq!(end, 5);
    view.resize(end, true).unwrap();
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 7]);

    // rejected elements stay in the container, after the kept ones
    let mut tail = data[6..8].to_vec();
    tail.sort_unstable();
    assert_eq!(tail, [3, 6]);
    assert_eq!((data[0], data[8]), (0, 0));
}

#[test]
fn test_filter_in_place_edges() {
    let mut data = [1, 2, 3];
    assert_eq!(filter_in_place(&mut ViewMut::full(&mut data), |_| true), 3);
    assert_eq!(data, [1, 2, 3]);
    assert_eq!(filter_in_place(&mut ViewMut::full(&mut data), |_| false), 0);

    let mut empty: [u8; 0] = [];
    assert_eq!(filter_in_place(&mut ViewMut::full(&mut empty), |_| true), 0);
}

#[test]
fn test_zip_with_stops_at_the_shorter_input() {
    let left = [1, 2, 3, 4];
    let right = [10, 20];
    let sums = zip_with(View::full(&left), View::full(&right), |a, b| a + b);
    assert_eq!(sums.to_vec(), [11, 22]);

    let mut out = [0; 1];
    let stop = sums.copy_into(&mut ViewMut::full(&mut out));
    assert_eq!(
        stop,
        BinaryStop {
            first: 1,
            second: 1,
            destination: 1
        }
    );
}

#[test]
fn test_zip_with_different_element_types() {
    let names = ["ada", "grace"];
    let years = vec![1815u32, 1906];
    let labels: Vec<String> = zip_with(View::full(&names), View::full(&years), |n, y| {
        alloc::format!("{n}:{y}")
    })
    .collect();
    assert_eq!(labels, ["ada:1815", "grace:1906"]);
}
