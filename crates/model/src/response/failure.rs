use serde::{Deserialize, Serialize};

/// A single record the destination refused to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingFailure {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub message: String,
    /// HTTP-style status the destination reported for this record.
    pub status: u16,
}

/// A shard that failed while serving part of a scroll page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFailure {
    pub index: String,
    pub shard: u32,
    pub node: String,
    pub status: u16,
    pub reason: String,
}
