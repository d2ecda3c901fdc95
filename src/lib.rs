//! Purpose: Pure codec library for the tourist code-tour format.
//! Exports: `api` (record types, parse errors, parse/serialize operations).
//! Role: Validation boundary between untrusted JSON text and typed records.
//! Invariants: No I/O and no shared state; every call is a pure function of its input.
//! Invariants: `api` is the only public path to record and codec internals.
pub mod api;

mod core;
mod json;
