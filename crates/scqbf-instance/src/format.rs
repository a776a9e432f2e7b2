//! Plain-text instance exchange format.
//!
//! Layout, one instance per file:
//! - line 1: `n`
//! - line 2: the `n` subset sizes, in index order
//! - next `n` lines: the members of each subset, ascending
//! - final `n` lines: the rows of the weight matrix, including the zero
//!   lower triangle
//!
//! All fields are whitespace-separated integers. File naming and directory
//! layout belong to the caller; this module only owns the shape.

use std::fmt::Write as _;

use crate::weights::WeightMatrix;
use crate::{GenError, Instance};

/// Errors raised while parsing the text format.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("line {line}: missing {what}")]
    Missing { what: &'static str, line: usize },

    #[error("line {line}: invalid integer '{token}'")]
    InvalidInteger { token: String, line: usize },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("subset {index} lists {found} members, size line declares {declared}")]
    SizeMismatch {
        index: usize,
        declared: usize,
        found: usize,
    },

    #[error(transparent)]
    Invalid(#[from] GenError),
}

/// Render an instance in the exchange format.
pub fn to_text(instance: &Instance) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", instance.n());

    let sizes: Vec<String> = instance
        .subsets()
        .iter()
        .map(|s| s.len().to_string())
        .collect();
    let _ = writeln!(out, "{}", sizes.join(" "));

    for subset in instance.subsets() {
        let members: Vec<String> = subset.iter().map(|e| e.to_string()).collect();
        let _ = writeln!(out, "{}", members.join(" "));
    }

    for row in instance.weights().rows() {
        let entries: Vec<String> = row.iter().map(|w| w.to_string()).collect();
        let _ = writeln!(out, "{}", entries.join(" "));
    }

    out
}

/// Parse an instance from the exchange format.
pub fn parse_text(text: &str) -> Result<Instance, FormatError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut cursor = Cursor { lines: &lines, at: 0 };

    let n: usize = cursor.next_line("universe size")?.parse_one()?;

    let sizes: Vec<usize> = cursor.next_line("subset sizes")?.parse_exactly(n)?;

    let mut subsets = Vec::with_capacity(n);
    for (index, &declared) in sizes.iter().enumerate() {
        let members: Vec<u32> = cursor.next_line("subset members")?.parse_all()?;
        if members.len() != declared {
            return Err(FormatError::SizeMismatch {
                index,
                declared,
                found: members.len(),
            });
        }
        subsets.push(members.into_iter().collect());
    }

    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let row: Vec<i32> = cursor.next_line("weight row")?.parse_exactly(n)?;
        rows.push(row);
    }

    let weights = WeightMatrix::from_rows(n, rows).map_err(FormatError::Invalid)?;
    Ok(Instance::from_parts(n, subsets, weights)?)
}

struct Cursor<'a> {
    lines: &'a [&'a str],
    at: usize,
}

struct Line<'a> {
    text: &'a str,
    number: usize,
}

impl<'a> Cursor<'a> {
    fn next_line(&mut self, what: &'static str) -> Result<Line<'a>, FormatError> {
        let number = self.at + 1;
        match self.lines.get(self.at) {
            Some(&text) => {
                self.at += 1;
                Ok(Line { text, number })
            }
            None => Err(FormatError::Missing { what, line: number }),
        }
    }
}

impl<'a> Line<'a> {
    fn parse_one<T: std::str::FromStr>(&self) -> Result<T, FormatError> {
        let fields: Vec<T> = self.parse_all()?;
        let found = fields.len();
        let mut fields = fields.into_iter();
        match (fields.next(), found) {
            (Some(value), 1) => Ok(value),
            _ => Err(FormatError::FieldCount {
                line: self.number,
                expected: 1,
                found,
            }),
        }
    }

    fn parse_exactly<T: std::str::FromStr>(&self, expected: usize) -> Result<Vec<T>, FormatError> {
        let fields: Vec<T> = self.parse_all()?;
        if fields.len() != expected {
            return Err(FormatError::FieldCount {
                line: self.number,
                expected,
                found: fields.len(),
            });
        }
        Ok(fields)
    }

    fn parse_all<T: std::str::FromStr>(&self) -> Result<Vec<T>, FormatError> {
        self.text
            .split_whitespace()
            .map(|token| {
                token.parse().map_err(|_| FormatError::InvalidInteger {
                    token: token.to_string(),
                    line: self.number,
                })
            })
            .collect()
    }
}
