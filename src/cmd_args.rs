// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate clap;
extern crate std;

use errors::*;
use input_file::parse_input_file;
use output::OutputOptions;
use searches::{SearchCase, SearchOptions};
use value::{parse_value, parse_value_list, Value, ValueKind};

use self::clap::App;
use self::clap::Arg;
use self::clap::ArgMatches;
use self::clap::ErrorKind as ClapErrorKind;

static DEFAULT_INPUT_FILE: &str = "bsearch.toml";

fn parse_multiple_args(cmd_matches: &ArgMatches, name: &str) -> Vec<String> {
    match cmd_matches.values_of(name) {
        Some(x) => x.into_iter().map(|x| x.to_string()).collect(),
        None => Vec::new(),
    }
}

pub fn get_args() -> Result<(SearchOptions, OutputOptions)> {
    let cmd_matches_opt = get_app_definition().get_matches_safe();

    let cmd_matches = match cmd_matches_opt {
        Ok(matches) => matches,
        Err(error) => {
            eprintln!("{}", error.message);
            match error.kind {
                ClapErrorKind::HelpDisplayed => std::process::exit(0),
                ClapErrorKind::VersionDisplayed => std::process::exit(0),
                _ => std::process::exit(101),
            }
        }
    };

    let search_options = build_search_options(&cmd_matches)?;

    let output_options = OutputOptions {
        verbose: cmd_matches.is_present("verbose"),
        silent: cmd_matches.is_present("silent"),
        json: cmd_matches.is_present("json"),
    };

    Ok((search_options, output_options))
}

/// Merge the input file with the command line: inline values replace the file sequence,
/// command line targets are searched after the cases from the file.
fn build_search_options(cmd_matches: &ArgMatches) -> Result<SearchOptions> {
    let kind = if cmd_matches.is_present("text") {
        ValueKind::Text
    } else {
        ValueKind::Integer
    };

    let inline_values = match cmd_matches.value_of("values") {
        Some(raw) => Some(parse_value_list(raw, kind)?),
        None => None,
    };

    // The default input file is only consulted if no sequence is given inline
    let input_opt = cmd_matches.value_of("input");
    let file_options = match (input_opt, &inline_values) {
        (Some(path), _) => parse_input_file(path, true)?,
        (None, &None) => parse_input_file(DEFAULT_INPUT_FILE, false)?,
        (None, &Some(_)) => Default::default(),
    };

    let sequence: Vec<Value> = match inline_values.or(file_options.sequence) {
        Some(sequence) => sequence,
        None => return Err(ErrorKind::NoSequence.into()),
    };

    let mut cases = file_options.cases;
    for raw in parse_multiple_args(cmd_matches, "target") {
        cases.push(SearchCase::for_target(parse_value(&raw, kind)?));
    }

    Ok(SearchOptions {
        sequence,
        cases,
        strict: cmd_matches.is_present("strict"),
    })
}

fn get_app_definition<'a, 'b>() -> App<'a, 'b> {
    App::new("bsearch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Look up targets in a sorted sequence with a bounded binary search")
        .arg(
            Arg::with_name("target")
                .multiple(true)
                .short("t")
                .long("target")
                .value_name("TARGET")
                .help("Values to search for. Searched after the targets and cases of the input file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("values")
                .short("i")
                .long("values")
                .value_name("VALUES")
                .help("Comma separated sorted sequence to search, e.g. `1,3,5,7`")
                .use_delimiter(false)
                .conflicts_with("input")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .long("input")
                .value_name("FILE")
                .help("Path to a TOML input file with a `sequence` and optional `targets` and `[[case]]` entries (default: bsearch.toml)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("text")
                .long("text")
                .help("Treat values and targets given on the command line as text instead of integers"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Fail if the sequence is not sorted, instead of only logging a warning"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .conflicts_with("silent")
                .help("Turn on verbose mode to print the sequence and the found element of every search"),
        )
        .arg(
            Arg::with_name("silent")
                .short("s")
                .long("silent")
                .conflicts_with("verbose")
                .help("Turn on silent mode to not print anything"),
        )
        .arg(
            Arg::with_name("json")
                .short("j")
                .long("json")
                .conflicts_with("verbose")
                .help("Print the results as a JSON array"),
        )
}

#[cfg(test)]
mod test {
    extern crate assert_cli;
    extern crate test_common;

    use super::*;

    fn matches_for(args: &[&str]) -> ArgMatches<'static> {
        let mut argv = vec!["bsearch"];
        argv.extend_from_slice(args);
        get_app_definition().get_matches_from_safe(argv).unwrap()
    }

    #[test]
    fn test_inline_values_and_targets() {
        let options = build_search_options(&matches_for(&["-i", "1,3,5", "-t", "3", "4"])).unwrap();

        assert_eq!(
            options.sequence,
            vec![Value::Integer(1), Value::Integer(3), Value::Integer(5)]
        );
        let targets: Vec<Value> = options.cases.iter().map(|c| c.target.clone()).collect();
        assert_eq!(targets, vec![Value::Integer(3), Value::Integer(4)]);
        assert!(!options.strict);
    }

    #[test]
    fn test_text_values() {
        let options =
            build_search_options(&matches_for(&["--text", "-i", "a,b", "-t", "b"])).unwrap();
        assert_eq!(options.sequence[1], Value::Text("b".to_string()));
        assert_eq!(options.cases[0].target, Value::Text("b".to_string()));
    }

    #[test]
    fn test_input_file_with_extra_target() {
        let path = test_common::get_test_subject_path("odd_numbers");
        let options = build_search_options(&matches_for(&[
            "--input",
            path.to_str().unwrap(),
            "-t",
            "20",
            "--strict",
        ])).unwrap();

        assert_eq!(options.sequence.len(), 10);
        assert_eq!(options.cases.len(), 4);
        assert_eq!(options.cases[3].target, Value::Integer(20));
        assert!(options.strict);
    }

    #[test]
    fn test_invalid_target() {
        let error = build_search_options(&matches_for(&["-i", "1,2", "-t", "x"])).unwrap_err();
        assert_eq!(error.to_string(), "Unable to parse `x` as integer");
    }

    #[test]
    fn test_values_conflict_with_input() {
        let result = get_app_definition().get_matches_from_safe(vec![
            "bsearch", "-i", "1", "--input", "a.toml", "-t", "1",
        ]);
        assert!(result.is_err());
    }

    /// Test that an error is printed if no sequence is given at all
    #[test]
    fn test_no_sequence_provided() {
        assert_cli::Assert::main_binary()
            .with_args(&["-t", "3"])
            .stderr().contains("No sequence to search")
            .fails_with(101)
            .unwrap();
    }

    /// Test that unknown flags are rejected by the argument parser
    #[test]
    fn test_unknown_flag() {
        assert_cli::Assert::main_binary()
            .with_args(&["--frobnicate"])
            .stderr().contains("error: Found argument '--frobnicate'")
            .fails_with(101)
            .unwrap();
    }
}
