// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fs::File;
use std::io::Error;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

static RES_PATH: &str = "test_subjects";

/// The sorted sequence of odd numbers used throughout the tests
pub fn odd_numbers() -> Vec<i64> {
    (0..10).map(|i| 2 * i + 1).collect()
}

/// A sorted sequence where the value 2 occurs at indices 1, 2 and 3
pub fn duplicates() -> Vec<i64> {
    vec![1, 2, 2, 2, 3]
}

/// Indices at which `value` occurs in `sequence`
pub fn positions_of<T: PartialEq>(sequence: &[T], value: &T) -> Vec<usize> {
    sequence
        .iter()
        .enumerate()
        .filter(|&(_, element)| element == value)
        .map(|(i, _)| i)
        .collect()
}

/// Prepare the path of the input file of test subject `subject`
pub fn get_test_subject_path(subject: &str) -> PathBuf {
    let current_dir = Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf();
    let current_grandparent = current_dir
        .parent()
        .expect("Current crate path has no parent")
        .parent()
        .expect("Current crate path has no grandparent");

    let subjects_path = Path::join(current_grandparent, RES_PATH);

    Path::join(subjects_path.as_path(), format!("{}.toml", subject))
}

/// Open the input file of a test subject. Must be one of the files in `test_subjects`
pub fn load_test_subject(subject: &str) -> Result<File, Error> {
    File::open(get_test_subject_path(subject))
}

/// Load the input file of a test subject as a string. Must be one of the files in `test_subjects`
pub fn load_test_subject_as_string(subject: &str) -> Result<String, Error> {
    let mut file = load_test_subject(subject)?;

    let mut file_content = String::new();

    file.read_to_string(&mut file_content)?;

    Ok(file_content)
}
