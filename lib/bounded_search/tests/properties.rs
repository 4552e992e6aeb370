// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Property tests for the search routines over generated sequences.

extern crate bounded_search;
#[macro_use]
extern crate proptest;

use bounded_search::*;
use proptest::collection::vec;
use proptest::prelude::*;

/// Sorted vectors of small values, so that duplicates are common
fn sorted_vec() -> impl Strategy<Value = Vec<i32>> {
    vec(-50i32..50, 0..64).prop_map(|mut values| {
        values.sort();
        values
    })
}

proptest! {
    #[test]
    fn present_elements_are_found(values in sorted_vec(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let target = values[pick.index(values.len())];

        match search(&values, &target) {
            SearchResult::Found(index) => prop_assert_eq!(values[index], target),
            SearchResult::NotFound => prop_assert!(false, "{} not found in {:?}", target, values),
        }
    }

    #[test]
    fn absent_values_are_not_found(values in sorted_vec(), target in -60i32..60) {
        prop_assume!(!values.contains(&target));
        prop_assert_eq!(search(&values, &target), SearchResult::NotFound);
    }

    #[test]
    fn search_is_idempotent(values in sorted_vec(), target in -60i32..60) {
        let first = search(&values, &target);
        prop_assert_eq!(search(&values, &target), first);
    }

    #[test]
    fn empty_sequence_never_finds(target in any::<i64>()) {
        let empty: Vec<i64> = vec![];
        prop_assert_eq!(search(&empty, &target), SearchResult::NotFound);
    }

    /// Without the sorting precondition the result is unspecified, but the search must terminate,
    /// stay in bounds, and never report an index holding a different value.
    #[test]
    fn unsorted_input_stays_in_bounds(values in vec(any::<i16>(), 0..64), target in any::<i16>()) {
        if let SearchResult::Found(index) = search(&values, &target) {
            prop_assert!(index < values.len());
            prop_assert_eq!(values[index], target);
        }
    }

    #[test]
    fn search_by_key_finds_records(ids in vec(0u32..500, 1..40), pick in any::<prop::sample::Index>()) {
        let mut records: Vec<(u32, String)> = ids.iter().map(|id| (*id, format!("record-{}", id))).collect();
        records.sort_by_key(|record| record.0);
        let wanted = records[pick.index(records.len())].0;

        let index = search_by_key(&records, &wanted, |record| record.0).index();
        prop_assert!(index.is_some());
        prop_assert_eq!(records[index.unwrap()].0, wanted);
    }

    #[test]
    fn sorted_vectors_pass_the_sortedness_check(values in sorted_vec()) {
        prop_assert!(is_sorted(&values));
        prop_assert_eq!(find_unsorted(&values), None);
    }
}
