//! Purpose: Provide the generic record encode entrypoint.
//! Exports: `record_to_string`.
//! Role: Encoder boundary producing the minimal single-line JSON form.
//! Invariants: Output key order follows record field declaration order.
//! Invariants: Pair lists encode as arrays of two-element arrays, never objects.

use serde::Serialize;

/// Encode a record as minimal JSON text.
///
/// The input is trusted to conform to its record shape; encoding plain
/// string/number/sequence fields cannot fail.
pub(crate) fn record_to_string<T: Serialize>(record: &T) -> String {
    serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string())
}
