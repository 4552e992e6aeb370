// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(test)]
mod test {
    extern crate bounded_search;
    extern crate test_common;

    use self::bounded_search::*;

    /// Searches the odd numbers 1..=19 for present elements at the middle and both ends,
    /// and for absent values between, below and above the elements.
    #[test]
    pub fn test_odd_numbers_scenarios() {
        let odd = test_common::odd_numbers();

        let expectations = vec![
            (9, SearchResult::Found(4)),
            (1, SearchResult::Found(0)),
            (19, SearchResult::Found(9)),
            (10, SearchResult::NotFound),
            (0, SearchResult::NotFound),
            (20, SearchResult::NotFound),
            (100, SearchResult::NotFound),
        ];

        for (target, expected) in expectations {
            assert_eq!(search(&odd, &target), expected, "target {}", target);
        }
    }

    /// Every element of the sequence is found at its own index
    #[test]
    pub fn test_every_odd_number_found_at_its_index() {
        let odd = test_common::odd_numbers();
        for (i, value) in odd.iter().enumerate() {
            assert_eq!(search(&odd, value), SearchResult::Found(i));
            assert_eq!(search(&odd, &(value + 1)), SearchResult::NotFound);
        }
    }

    #[test]
    pub fn test_duplicates_scenario() {
        let duplicates = test_common::duplicates();
        let expected_positions = test_common::positions_of(&duplicates, &2);

        let index = search(&duplicates, &2)
            .index()
            .expect("2 occurs in the sequence");

        assert!(expected_positions.contains(&index));
        assert_eq!(duplicates[index], 2);
    }

    #[test]
    pub fn test_empty_and_single_scenarios() {
        let empty: Vec<i64> = vec![];
        assert_eq!(search(&empty, &5), SearchResult::NotFound);

        let single = vec![5i64];
        assert_eq!(search(&single, &5), SearchResult::Found(0));
        assert_eq!(search(&single, &3), SearchResult::NotFound);
    }

    /// A slice of a larger vector is searched relative to its own start
    #[test]
    pub fn test_search_sub_slice() {
        let odd = test_common::odd_numbers();
        let upper_half = &odd[5..];

        assert_eq!(search(upper_half, &11), SearchResult::Found(0));
        assert_eq!(search(upper_half, &19), SearchResult::Found(4));
        assert_eq!(search(upper_half, &9), SearchResult::NotFound);
    }

    #[test]
    pub fn test_search_from_multiple_threads() {
        use std::sync::Arc;
        use std::thread;

        let odd = Arc::new(test_common::odd_numbers());

        let handles = (0..4)
            .map(|_| {
                let odd = Arc::clone(&odd);
                thread::spawn(move || {
                    (0..21)
                        .map(|target| search(&*odd, &target))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        let results = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();

        for result in &results {
            assert_eq!(result, &results[0]);
            assert_eq!(result.iter().filter(|r| r.is_found()).count(), 10);
        }
    }
}
