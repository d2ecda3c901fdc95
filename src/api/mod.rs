//! Purpose: Define the stable public API boundary for the tourist format.
//! Exports: Record types, parse errors, and the parse/serialize operations.
//! Role: Public, additive-only surface; hides codec internals.
//! Invariants: The eight operations below are the only entry points.
//! Invariants: Parsing never panics on untrusted input; failures return as values.

pub use crate::core::error::{ParseError, ParseErrorKind};
pub use crate::core::record::{Index, Link, PairList, Stop, Tour};

use crate::json::{encode, parse};

/// Parse a [`Link`] from JSON text.
pub fn parse_link(input: &str) -> Result<Link, ParseError> {
    parse::record_from_str(input)
}

/// Parse a [`Stop`] from JSON text.
pub fn parse_stop(input: &str) -> Result<Stop, ParseError> {
    parse::record_from_str(input)
}

/// Parse a [`Tour`] from JSON text.
pub fn parse_tour(input: &str) -> Result<Tour, ParseError> {
    parse::record_from_str(input)
}

/// Parse an [`Index`] from JSON text.
pub fn parse_index(input: &str) -> Result<Index, ParseError> {
    parse::record_from_str(input)
}

/// Serialize a [`Link`] to its minimal JSON text form.
pub fn serialize_link(link: &Link) -> String {
    encode::record_to_string(link)
}

/// Serialize a [`Stop`] to its minimal JSON text form.
pub fn serialize_stop(stop: &Stop) -> String {
    encode::record_to_string(stop)
}

/// Serialize a [`Tour`] to its minimal JSON text form.
pub fn serialize_tour(tour: &Tour) -> String {
    encode::record_to_string(tour)
}

/// Serialize an [`Index`] to its minimal JSON text form.
pub fn serialize_index(index: &Index) -> String {
    encode::record_to_string(index)
}
