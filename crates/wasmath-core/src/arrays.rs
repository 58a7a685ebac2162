//! Integer slice helpers exposed alongside the scalar functions.

use crate::core::types::Int;

/// Sum of all elements, wrapping on overflow. Empty input sums to `0`.
pub fn sum_array(values: &[Int]) -> Int {
    values.iter().fold(0, |acc: Int, &v| acc.wrapping_add(v))
}

/// Largest element, or the sentinel `0` for an empty slice.
pub fn find_max(values: &[Int]) -> Int {
    checked_find_max(values).unwrap_or(0)
}

/// Largest element, or `None` for an empty slice.
pub fn checked_find_max(values: &[Int]) -> Option<Int> {
    values.iter().copied().max()
}

/// Sorts `values` ascending in place.
///
/// Bubble sort: each pass carries the largest remaining element to the end
/// of the unsorted prefix, and a pass without swaps ends the sort early.
pub fn bubble_sort(values: &mut [Int]) {
    let len = values.len();
    if len < 2 {
        return;
    }
    for pass in 0..len - 1 {
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// A vector of `size` elements where element `i` is `value * i`,
/// wrapping on overflow. Negative sizes produce an empty vector.
pub fn allocate_and_fill(size: Int, value: Int) -> Vec<Int> {
    (0..size.max(0)).map(|i| value.wrapping_mul(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sum_array() {
        assert_eq!(sum_array(&[]), 0);
        assert_eq!(sum_array(&[1, 2, 3, 4]), 10);
        assert_eq!(sum_array(&[-5, 5]), 0);
        assert_eq!(sum_array(&[Int::MAX, 1]), Int::MIN);
    }

    #[test]
    fn test_find_max() {
        assert_eq!(find_max(&[]), 0);
        assert_eq!(checked_find_max(&[]), None);
        assert_eq!(find_max(&[-3, -1, -7]), -1);
        assert_eq!(find_max(&[4, 9, 2, 9]), 9);
        assert_eq!(checked_find_max(&[Int::MIN]), Some(Int::MIN));
    }

    #[test]
    fn test_bubble_sort() {
        let mut values = vec![5, -2, 9, 0, 5, Int::MIN, Int::MAX];
        bubble_sort(&mut values);
        assert_eq!(values, vec![Int::MIN, -2, 0, 5, 5, 9, Int::MAX]);

        let mut empty: Vec<Int> = Vec::new();
        bubble_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        bubble_sort(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_allocate_and_fill() {
        assert_eq!(allocate_and_fill(5, 3), vec![0, 3, 6, 9, 12]);
        assert_eq!(allocate_and_fill(0, 3), Vec::<Int>::new());
        assert_eq!(allocate_and_fill(-4, 3), Vec::<Int>::new());
    }
}
