//! Purpose: Internal JSON codec boundary shared by the public operations.
//! Exports: `parse` and `encode` modules with the generic record codec.
//! Role: Single seam for serde_json usage so callsites avoid ad hoc decode logic.
//! Invariants: Runtime JSON decoding and encoding go through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod encode;
pub(crate) mod parse;
