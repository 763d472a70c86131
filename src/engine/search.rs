//! Binary search over a descending-sorted slice.

use std::cmp::Ordering;

use crate::types::NOT_FOUND;

/// Find the position of `target` in a descending-sorted `sequence`.
///
/// Searches the closed range `[left, right]`, probing the midpoint each
/// round. A midpoint smaller than the target means the target can only be
/// further left; a larger one means further right. When duplicates are
/// present, whichever matching position the probe lands on first is
/// returned.
///
/// If `sequence` is not in descending order the result is unspecified but
/// the call still terminates and never panics.
pub fn find<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    if sequence.is_empty() {
        return None;
    }

    let mut left = 0usize;
    let mut right = sequence.len() - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        match sequence[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => match mid.checked_sub(1) {
                Some(next) => right = next,
                None => return None,
            },
            Ordering::Greater => left = mid + 1,
        }
    }

    None
}

/// Index of `target` in a descending-sorted `sequence`, or [`NOT_FOUND`].
pub fn search(sequence: &[i64], target: i64) -> i64 {
    match find(sequence, &target) {
        Some(index) => index as i64,
        None => NOT_FOUND,
    }
}

/// Whether every element is greater than or equal to its successor.
pub fn is_descending<T: Ord>(sequence: &[T]) -> bool {
    sequence.windows(2).all(|pair| pair[0] >= pair[1])
}
