//! Error types for the domain crate.
//!
//! # Design
//! Parsing a priority name is the only fallible domain operation. The
//! error keeps the offending value so the store layer can report exactly
//! what it found in a row.

use std::fmt;

/// A priority name outside the `low` / `normal` / `high` enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError {
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown priority {:?}, expected one of low, normal, high",
            self.value
        )
    }
}

impl std::error::Error for ParsePriorityError {}
