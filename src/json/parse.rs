//! Purpose: Provide the generic record decode entrypoint.
//! Exports: `record_from_str`.
//! Role: Parser boundary mapping serde_json failures onto the two error categories.
//! Invariants: Syntax failures are reported before any shape checking runs.
//! Invariants: Shape failures surface only the schema name, never field detail.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::ParseError;
use crate::core::record::Record;

/// Decode `input` into a record of type `T`.
///
/// Decoding runs in two stages: the text is first read as a generic JSON
/// value, then that value is narrowed to the record shape. Each stage maps
/// onto its own error category.
pub(crate) fn record_from_str<T>(input: &str) -> Result<T, ParseError>
where
    T: Record + DeserializeOwned,
{
    let value: Value = serde_json::from_str(input).map_err(|_| ParseError::json())?;
    serde_json::from_value(value).map_err(|_| ParseError::logical(T::SCHEMA_NAME))
}
