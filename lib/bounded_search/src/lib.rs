// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Bounded binary search
//!
//! This crate locates a target value within a sorted, randomly-accessible sequence in logarithmic time.
//!
//! The sequence must be non-decreasing under the ordering used for the search. This precondition is not verified
//! by the search routines, since verification costs linear time. On an unsorted sequence the routines still terminate
//! and never index outside the sequence, but the [SearchResult](enum.SearchResult.html) may not reflect membership.
//! Use [find_unsorted](fn.find_unsorted.html) to check the precondition up front.
//!
//! ```
//! use bounded_search::{search, SearchResult};
//!
//! let odd = vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
//! assert_eq!(search(&odd, &9), SearchResult::Found(4));
//! assert_eq!(search(&odd, &10), SearchResult::NotFound);
//! ```
//!
//! When the sequence contains duplicates of the target, any one of the matching indices may be returned.
mod search;
mod sequence;

pub use search::{find_unsorted, is_sorted, search, search_by, search_by_key};
pub use sequence::Sequence;

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Outcome of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// The element at this index compares equal to the target.
    Found(usize),
    /// No element of the sequence compares equal to the target.
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        match *self {
            SearchResult::Found(_) => true,
            SearchResult::NotFound => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        !self.is_found()
    }

    /// The matching index, if the target was found.
    pub fn index(&self) -> Option<usize> {
        match *self {
            SearchResult::Found(index) => Some(index),
            SearchResult::NotFound => None,
        }
    }
}

impl From<SearchResult> for Option<usize> {
    fn from(result: SearchResult) -> Self {
        result.index()
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            SearchResult::Found(index) => write!(f, "found at index {}", index),
            SearchResult::NotFound => write!(f, "not found"),
        }
    }
}
