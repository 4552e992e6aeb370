// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Search result output
//!
//! This module is concerned with formatting and outputting the reports of [run_searches](../searches/fn.run_searches.html) to the standard output.
//!
//! ## Output modes
//!
//! ### 1. Simple
//! One line per target, with the target and its result:
//! ```text
//! 9: found at index 4
//! 10: not found
//! ```
//!
//! ### 2. Verbose
//! Echoes the searched sequence, then one block per search case with the case description and, if found, the element at the found index.
//! A summary line closes the output:
//! ```text
//! Sequence: [1, 3, 5, 7, 9, 11, 13, 15, 17, 19]
//!
//! Search: middle element
//!   target 9 -> found, index = 4, value = 9
//!
//! Search: between two elements
//!   target 10 -> not found
//!
//! 1 of 2 targets found
//! ```
//!
//! ### 3. JSON
//! A JSON array with one object per search case:
//! ```text
//! [{"description":"target 9","target":9,"found":true,"index":4}]
//! ```
extern crate bounded_search;
extern crate serde_json;

use errors::*;
use searches::{SearchReport, SearchReportsCollection};
use value::Value;

use self::bounded_search::SearchResult;

use std::io::Write;

/// Set of options on how to format the output.
pub struct OutputOptions {
    /// The silent flag for when no output should be printed.
    pub silent: bool,
    /// The verbose flag for command line output.
    pub verbose: bool,
    /// Print the reports as JSON instead of text.
    pub json: bool,
}

/// A struct consisting of a vector containing the output streams
pub struct OutputStreamsCollection {
    pub streams: Vec<Box<dyn OutputStream>>,
}

/// Trait marking objects that are able to write the search reports in a particular format
pub trait OutputStream {
    fn write_output(&self, out: &mut dyn Write, reports: &SearchReportsCollection) -> Result<()>;
}

/// Struct that handles simple console output formatting
#[derive(Debug, Clone)]
struct SimpleConsoleOutputStream {}

impl OutputStream for SimpleConsoleOutputStream {
    fn write_output(&self, out: &mut dyn Write, reports: &SearchReportsCollection) -> Result<()> {
        for report in &reports.reports {
            writeln!(out, "{}: {}", report.case.target, report.result)?;
        }
        Ok(())
    }
}

/// Struct that handles verbose console output formatting
#[derive(Debug, Clone)]
struct VerboseConsoleOutputStream {}

fn format_sequence(sequence: &[Value]) -> String {
    let elements = sequence
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>();
    format!("[{}]", elements.join(", "))
}

fn format_outcome(report: &SearchReport) -> String {
    match (report.result, report.value.as_ref()) {
        (SearchResult::Found(index), Some(value)) => {
            format!("found, index = {}, value = {}", index, value)
        }
        (SearchResult::Found(index), None) => format!("found, index = {}", index),
        (SearchResult::NotFound, _) => "not found".to_string(),
    }
}

impl OutputStream for VerboseConsoleOutputStream {
    fn write_output(&self, out: &mut dyn Write, reports: &SearchReportsCollection) -> Result<()> {
        writeln!(out, "Sequence: {}", format_sequence(&reports.sequence))?;
        for report in &reports.reports {
            writeln!(out)?;
            writeln!(out, "Search: {}", report.case.description)?;
            writeln!(
                out,
                "  target {} -> {}",
                report.case.target,
                format_outcome(report)
            )?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "{} of {} targets found",
            reports.found_count(),
            reports.reports.len()
        )?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    description: &'a str,
    target: &'a Value,
    found: bool,
    index: Option<usize>,
}

/// Struct that prints the reports as a JSON array
#[derive(Debug, Clone)]
struct JsonOutputStream {}

impl OutputStream for JsonOutputStream {
    fn write_output(&self, out: &mut dyn Write, reports: &SearchReportsCollection) -> Result<()> {
        let json_reports = reports
            .reports
            .iter()
            .map(|report| JsonReport {
                description: &report.case.description,
                target: &report.case.target,
                found: report.result.is_found(),
                index: report.result.index(),
            })
            .collect::<Vec<_>>();

        serde_json::to_writer(&mut *out, &json_reports)?;
        writeln!(out)?;
        Ok(())
    }
}

fn get_output_streams(options: &OutputOptions) -> OutputStreamsCollection {
    let mut output_stream_vec: Vec<Box<dyn OutputStream>> = Vec::new();

    if options.silent {
        return OutputStreamsCollection { streams: vec![] };
    }

    if options.json {
        output_stream_vec.push(Box::new(JsonOutputStream {}));
    } else if options.verbose {
        output_stream_vec.push(Box::new(VerboseConsoleOutputStream {}));
    } else {
        output_stream_vec.push(Box::new(SimpleConsoleOutputStream {}));
    }

    OutputStreamsCollection {
        streams: output_stream_vec,
    }
}

/// Write the results to `out`, in the format specified by the options parameter.
pub fn write_results(
    options: &OutputOptions,
    results: &SearchReportsCollection,
    out: &mut dyn Write,
) -> Result<()> {
    let output_streams = get_output_streams(options);

    for output_stream in output_streams.streams {
        output_stream.write_output(out, results)?;
    }
    Ok(())
}

/// Print the results to the standard output, in the format specified by the options parameter.
pub fn print_results(options: &OutputOptions, results: &SearchReportsCollection) -> Result<()> {
    let stdout = ::std::io::stdout();
    let mut handle = stdout.lock();
    write_results(options, results, &mut handle)
}
