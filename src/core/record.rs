//! Purpose: Declare the record shapes of the tourist code-tour format.
//! Exports: `Link`, `Stop`, `Tour`, `Index`, `PairList`, `Record`.
//! Role: Declarative schema layer; serde derives supply validator and encoder.
//! Invariants: Field declaration order is the canonical wire order.
//! Invariants: Pair-list fields keep insertion order and may repeat keys.

use serde::{Deserialize, Serialize};

/// Order-preserving list of name/value pairs.
///
/// Encodes as an array of two-element arrays rather than a keyed JSON
/// object, so entry order survives a round-trip and duplicate keys stay
/// representable.
pub type PairList = Vec<(String, String)>;

/// Names a record shape for logical-error tagging.
pub(crate) trait Record {
    const SCHEMA_NAME: &'static str;
}

/// Cross-reference from a stop to a stop in another tour.
///
/// Existence of the referenced tour and stop is not checked here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub tour: String,
    pub stop: String,
}

/// One anchored step in a tour, tied to a line in a repository file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Unique within the owning tour; uniqueness is the caller's job.
    pub id: String,
    pub title: String,
    pub body: String,
    pub line: u32,
    /// Path relative to the repository root.
    #[serde(rename = "relPath")]
    pub rel_path: String,
    pub repository: String,
    /// Onward links; order is meaningful and preserved.
    pub children: Vec<Link>,
}

/// Ordered walkthrough of code: the stops are the narrative sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub body: String,
    pub stops: Vec<Stop>,
    /// Repository name to pinned value (commit hash by convention).
    pub repositories: PairList,
}

/// Lookup table from repository name to local filesystem location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub index: PairList,
}

impl Record for Link {
    const SCHEMA_NAME: &'static str = "Link";
}

impl Record for Stop {
    const SCHEMA_NAME: &'static str = "Stop";
}

impl Record for Tour {
    const SCHEMA_NAME: &'static str = "Tour";
}

impl Record for Index {
    const SCHEMA_NAME: &'static str = "Index";
}
