use super::seeded;
use crate::{
    Randomness, Source, UnaryStop, View, ViewMut, reverse, reverse_in_place,
    rotate_left, rotate_left_in_place,
};
use alloc::vec::Vec;

fn rotated(data: &[i32], shift: isize) -> Vec<i32> {
    let mut copy = data.to_vec();
    rotate_left_in_place(&mut ViewMut::full(&mut copy), shift);
    copy
}

#[test]
fn test_rotate_in_place_shifts() {
    let data = [1, 2, 3, 4, 5];

    assert_eq!(rotated(&data, 0), [1, 2, 3, 4, 5]);
    assert_eq!(rotated(&data, 2), [3, 4, 5, 1, 2]);
    assert_eq!(rotated(&data, -1), [5, 1, 2, 3, 4]);
    assert_eq!(rotated(&data, 7), [3, 4, 5, 1, 2]);
    assert_eq!(rotated(&data, 5), [1, 2, 3, 4, 5]);
    assert_eq!(rotated(&data, isize::MIN), rotated(&data, isize::MIN.rem_euclid(5)));
    assert_eq!(rotated(&data, isize::MAX), rotated(&data, isize::MAX.rem_euclid(5)));
}

#[test]
fn test_rotate_empty_and_single() {
    let mut empty: Vec<i32> = Vec::new();
    rotate_left_in_place(&mut ViewMut::full(&mut empty), 3);
    assert!(rotate_left(View::full(&empty), -2).to_vec().is_empty());

    assert_eq!(rotated(&[9], 4), [9]);
}

#[test]
fn test_rotate_in_place_touches_only_the_window() {
    let mut data = [0, 1, 2, 3, 4, 0];
    rotate_left_in_place(&mut ViewMut::new(&mut data, 1, 4).unwrap(), 1);
    assert_eq!(data, [0, 2, 3, 4, 1, 0]);
}

// The block swap against the obvious definition, over every length and
// shift in a range
#[test]
fn test_rotate_in_place_matches_slice_rotate() {
    let mut random = seeded(8);

    for len in 0..40usize {
        let data: Vec<i32> = (0..len).map(|_| random.index_below(100) as i32).collect();
        for shift in -(len as isize) - 3..len as isize + 3 {
            let mut expected = data.clone();
            if len > 0 {
                expected.rotate_left(shift.rem_euclid(len as isize) as usize);
            }
            assert_eq!(rotated(&data, shift), expected, "len {len} shift {shift}");
            assert_eq!(rotate_left(View::full(&data), shift).to_vec(), expected);
        }
    }
}

#[test]
fn test_rotate_source_bounded() {
    let data = [1, 2, 3, 4, 5];
    let mut out = [0; 3];
    let stop = rotate_left(View::full(&data), 3).copy_into(&mut ViewMut::full(&mut out));

    assert_eq!(out, [4, 5, 1]);
    assert_eq!(
        stop,
        UnaryStop {
            source: 3,
            destination: 3
        }
    );
}

#[test]
fn test_reverse() {
    let mut data = [1, 2, 3, 4, 5, 6];
    reverse_in_place(&mut ViewMut::new(&mut data, 1, 4).unwrap());
    assert_eq!(data, [1, 5, 4, 3, 2, 6]);

    let source = reverse(View::new(&data, 0, 3).unwrap());
    assert_eq!(source.to_vec(), [4, 5, 1]);

    let mut out = [0; 2];
    let stop = source.copy_into(&mut ViewMut::full(&mut out));
    assert_eq!(out, [4, 5]);
    assert_eq!(stop.source, 2);
}
