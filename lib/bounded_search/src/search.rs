// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering;
use std::cmp::Ordering::*;

use sequence::Sequence;
use SearchResult;

/// Search a non-decreasing `sequence` for an element equal to `target`.
///
/// Returns `Found(i)` for some `i` where `sequence[i] == target`, or `NotFound`.
/// If several elements equal `target`, which of their indices is returned is unspecified.
pub fn search<S, T>(sequence: &S, target: &T) -> SearchResult
where
    S: Sequence<Item = T> + ?Sized,
    T: Ord,
{
    search_by(sequence, |element| element.cmp(target))
}

/// Search with a three-way comparator.
///
/// `compare` returns the ordering of the given element relative to the target: `Less` if the element sorts
/// before the target, `Greater` if it sorts after it. The sequence must be non-decreasing under this comparator.
///
/// The search space is the closed interval `[low, high]`. Indices are unsigned, so narrowing below
/// a midpoint of 0 ends the search instead of computing `mid - 1`.
pub fn search_by<S, F>(sequence: &S, mut compare: F) -> SearchResult
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    if sequence.is_empty() {
        return SearchResult::NotFound;
    }

    let mut low: usize = 0;
    let mut high: usize = sequence.len() - 1;

    while low <= high {
        // high - low cannot overflow, and neither can the sum since it is at most high
        let mid = low + (high - low) / 2;

        match compare(sequence.at(mid)) {
            Equal => return SearchResult::Found(mid),
            // mid <= high < usize::MAX, so mid + 1 cannot overflow
            Less => low = mid + 1,
            Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
    }

    SearchResult::NotFound
}

/// Search a sequence sorted by the key that `extract` derives from each element.
pub fn search_by_key<S, K, F>(sequence: &S, key: &K, mut extract: F) -> SearchResult
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    search_by(sequence, |element| extract(element).cmp(key))
}

/// Position of the first element that is greater than its successor, or `None` if the sequence is non-decreasing.
///
/// Runs in linear time. The search functions never call this.
pub fn find_unsorted<S>(sequence: &S) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let len = sequence.len();
    (1..len)
        .find(|&i| sequence.at(i - 1) > sequence.at(i))
        .map(|i| i - 1)
}

/// Checks if `sequence` is non-decreasing.
pub fn is_sorted<S>(sequence: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    find_unsorted(sequence).is_none()
}
