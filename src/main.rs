// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This is the command-line interface to the bounded_search crate. Details about the command-line options can be
//! obtained by running `bsearch --help` on a build.
//!
//! The sequence to search is given inline with `--values` or read from a TOML input file; targets come from
//! `--target` and from the input file. Logging is controlled with the `BSEARCH_LOG` environment variable.
//!
#[macro_use]
extern crate serde_derive;
extern crate bounded_search;
extern crate env_logger;
extern crate serde;
extern crate serde_json;
extern crate toml;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

mod cmd_args;
mod input_file;
mod output;
mod searches;
mod value;

// error_chain still allows the renamed `unused_doc_comment` lint
#[allow(renamed_and_removed_lints)]
pub mod errors {
    error_chain!{
        foreign_links {
            Io(::std::io::Error);
            Json(::serde_json::Error);
        }

        errors{
            InputLoad(path: String, reason: Option<String>) {
                description("Input file could not be loaded")
                display("Unable to read input file `{}`{}", path, reason.as_ref().map(|x| format!(": {}", x)).unwrap_or_else(|| "".to_string()))
            }
            InvalidValue(value: String, kind: String) {
                description("Invalid value")
                display("Unable to parse `{}` as {}", value, kind)
            }
            MixedElementTypes(value: String, expected: String) {
                description("Values of different types")
                display("Value `{}` is not of the sequence element type {}", value, expected)
            }
            UnsortedSequence(position: usize) {
                description("Sequence is not sorted")
                display("Sequence is not sorted: element at index {} is greater than element at index {}", position, position + 1)
            }
            NoSequence {
                description("No sequence given")
                display("No sequence to search, pass `--values` or an input file with a `sequence`")
            }
            NoTargets {
                description("No targets given")
                display("No targets to search for, pass `--target` or list `targets` in the input file")
            }
        }
    }
}

use std::process;

/// CLI entrypoint
pub fn main() {
    env_logger::init_from_env(env_logger::Env::new().filter_or("BSEARCH_LOG", "warn"));

    // Parse cmd arguments
    let (search_options, output_options) = match cmd_args::get_args() {
        Err(e) => {
            eprintln!("{}", e);
            process::exit(101);
        }
        Ok(r) => r,
    };

    match searches::run_searches(&search_options) {
        Err(e) => {
            eprintln!("{}", e);
            process::exit(101);
        }
        Ok(collection) => {
            if let Err(e) = output::print_results(&output_options, &collection) {
                eprintln!("{}", e);
                process::exit(101);
            }

            // Like grep, exit with code 1 if any target is missing
            if !collection.all_found() {
                process::exit(1);
            }
        }
    }
}
