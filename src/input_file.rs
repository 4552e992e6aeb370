// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate toml;

use errors::*;
use searches::SearchCase;
use value::Value;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Contents of an input file, with named cases already expanded.
#[derive(Clone, Debug, Default)]
pub struct InputFileOptions {
    pub sequence: Option<Vec<Value>>,
    pub cases: Vec<SearchCase>,
}

#[derive(Deserialize)]
pub struct CaseTomlEntry {
    description: Option<String>,
    target: Value,
}

#[derive(Deserialize)]
pub struct InputFile {
    sequence: Option<Vec<Value>>,
    targets: Option<Vec<Value>>,
    #[serde(rename = "case")]
    cases: Option<Vec<CaseTomlEntry>>,
}

impl From<CaseTomlEntry> for SearchCase {
    fn from(toml: CaseTomlEntry) -> Self {
        match toml.description {
            Some(description) => SearchCase {
                description,
                target: toml.target,
            },
            None => SearchCase::for_target(toml.target),
        }
    }
}

fn input_load_error(path: &Path, reason: Option<String>) -> ErrorKind {
    ErrorKind::InputLoad(path.to_str().unwrap_or("<unknown>").to_string(), reason)
}

/// Parse the input file at `path`.
///
/// A missing file is only an error if it is `required`; otherwise empty options are returned.
pub fn parse_input_file(path: &str, required: bool) -> Result<InputFileOptions> {
    let path = Path::new(path);

    if !path.exists() {
        if required {
            return Err(input_load_error(path, Some("File does not exist".to_string())).into());
        }
        return Ok(InputFileOptions::default());
    }

    let mut file = File::open(path).chain_err(|| input_load_error(path, None))?;

    let mut file_content = Vec::<u8>::new();
    file.read_to_end(&mut file_content)
        .chain_err(|| input_load_error(path, None))?;

    parse_input(&file_content).map_err(|err| {
        Error::from(input_load_error(path, Some(err.to_string())))
    })
}

fn parse_input(content: &[u8]) -> ::std::result::Result<InputFileOptions, toml::de::Error> {
    let input: InputFile = toml::de::from_slice(content)?;

    let targets = input
        .targets
        .unwrap_or_default()
        .into_iter()
        .map(SearchCase::for_target);
    let cases = input
        .cases
        .unwrap_or_default()
        .into_iter()
        .map(SearchCase::from);

    Ok(InputFileOptions {
        sequence: input.sequence,
        cases: targets.chain(cases).collect(),
    })
}
