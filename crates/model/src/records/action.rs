use crate::core::version::VersionPolicy;
use serde::{Deserialize, Serialize};

/// One write the engine submits to the destination as part of a bulk page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexAction {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    /// Version expectation the destination must check before writing.
    pub version: VersionPolicy,
    pub source: serde_json::Value,
}

/// Per-action result reported by the destination.
///
/// Outcomes align one-to-one, in submission order, with the actions of the
/// bulk call that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    /// The document did not exist and was created.
    Created,
    /// An existing document was overwritten.
    Updated,
    /// The version expectation did not hold; nothing was written.
    VersionConflict,
    /// The write failed for a reason other than versioning.
    Failed { message: String, status: u16 },
}
