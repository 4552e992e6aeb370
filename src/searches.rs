// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate bounded_search;

use self::bounded_search::SearchResult;

use errors::*;
use value::{ensure_kind, Value};

/// A single target to look up, with a human readable description for verbose output.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCase {
    pub description: String,
    pub target: Value,
}

impl SearchCase {
    pub fn for_target(target: Value) -> SearchCase {
        SearchCase {
            description: format!("target {}", target),
            target,
        }
    }
}

/// Everything needed to run the searches of one invocation.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub sequence: Vec<Value>,
    pub cases: Vec<SearchCase>,
    /// If `true`, an unsorted sequence is an error instead of a warning
    pub strict: bool,
}

/// Outcome of one `SearchCase`
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub case: SearchCase,
    pub result: SearchResult,
    /// The element at the found index, if any
    pub value: Option<Value>,
}

/// Collection of all reports, in the order of the cases
#[derive(Debug, Clone)]
pub struct SearchReportsCollection {
    pub sequence: Vec<Value>,
    pub reports: Vec<SearchReport>,
}

impl SearchReportsCollection {
    pub fn all_found(&self) -> bool {
        self.reports.iter().all(|report| report.result.is_found())
    }

    pub fn found_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.result.is_found())
            .count()
    }
}

/// Run every case of `options` against its sequence.
///
/// # Errors
/// * If there are no cases to run.
/// * If a target differs in kind from the sequence elements.
/// * If `options.strict` is set and the sequence is not sorted.
pub fn run_searches(options: &SearchOptions) -> Result<SearchReportsCollection> {
    if options.cases.is_empty() {
        bail!(ErrorKind::NoTargets);
    }

    if let Some(first) = options.sequence.first() {
        let targets: Vec<Value> = options
            .cases
            .iter()
            .map(|case| case.target.clone())
            .collect();
        ensure_kind(&options.sequence, first.kind())?;
        ensure_kind(&targets, first.kind())?;
    }

    if let Some(position) = bounded_search::find_unsorted(&options.sequence) {
        if options.strict {
            bail!(ErrorKind::UnsortedSequence(position));
        }
        warn!(
            "Sequence is not sorted at index {}, search results may be wrong",
            position
        );
    }

    info!(
        "Searching {} target(s) in a sequence of {} element(s)",
        options.cases.len(),
        options.sequence.len()
    );

    let reports = options
        .cases
        .iter()
        .map(|case| {
            let result = bounded_search::search(&options.sequence, &case.target);
            debug!("{}: {}", case.description, result);
            SearchReport {
                case: case.clone(),
                result,
                value: result.index().map(|index| options.sequence[index].clone()),
            }
        })
        .collect();

    Ok(SearchReportsCollection {
        sequence: options.sequence.clone(),
        reports,
    })
}
