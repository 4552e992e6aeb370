// (C) COPYRIGHT 2018 TECHNOLUTION BV, GOUDA NL

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use errors::*;

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Element of a sequence or a search target, as read from the command line or an input file.
///
/// Values of different kinds are never compared by a search: inputs mixing kinds are rejected before searching.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Text,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match *self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Text(_) => ValueKind::Text,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Value::Integer(ref i) => write!(f, "{}", i),
            Value::Text(ref s) => write!(f, "{}", s),
        }
    }
}

/// Parse a single raw command line value as `kind`.
pub fn parse_value(raw: &str, kind: ValueKind) -> Result<Value> {
    let raw = raw.trim();
    match kind {
        ValueKind::Integer => raw
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| ErrorKind::InvalidValue(raw.to_string(), kind.to_string()).into()),
        ValueKind::Text => Ok(Value::Text(raw.to_string())),
    }
}

/// Parse a comma separated list of values. Empty entries are skipped, so an empty string is an empty sequence.
pub fn parse_value_list(raw: &str, kind: ValueKind) -> Result<Vec<Value>> {
    raw.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| parse_value(entry, kind))
        .collect()
}

/// Fail if any value differs in kind from `expected`.
pub fn ensure_kind(values: &[Value], expected: ValueKind) -> Result<()> {
    match values.iter().find(|value| value.kind() != expected) {
        Some(value) => Err(ErrorKind::MixedElementTypes(value.to_string(), expected.to_string()).into()),
        None => Ok(()),
    }
}
