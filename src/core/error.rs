//! Purpose: Model parse failures for the record codec boundary.
//! Exports: `ParseError`, `ParseErrorKind`.
//! Role: Shared error contract between the codec internals and API callers.
//! Invariants: Exactly two failure categories with stable labels.
//! Invariants: Logical failures carry the schema name and nothing else.

use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// The input text was not syntactically valid JSON.
    Json,
    /// The input was valid JSON but did not match the record shape.
    Logical,
}

impl ParseErrorKind {
    /// Stable category label used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ParseErrorKind::Json => "json",
            ParseErrorKind::Logical => "logical",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
    schema: Option<&'static str>,
}

impl ParseError {
    pub fn json() -> Self {
        Self {
            kind: ParseErrorKind::Json,
            schema: None,
        }
    }

    pub fn logical(schema: &'static str) -> Self {
        Self {
            kind: ParseErrorKind::Logical,
            schema: Some(schema),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Schema name for logical failures ("Link", "Stop", "Tour", "Index").
    pub fn schema(&self) -> Option<&'static str> {
        self.schema
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.schema {
            Some(schema) => write!(f, "input does not describe a valid {schema}"),
            None => write!(f, "input is not valid JSON"),
        }
    }
}

impl StdError for ParseError {}
