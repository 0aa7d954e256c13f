use serde::{Deserialize, Serialize};

/// One record as pulled from the source store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Index the record was read from.
    pub index: String,
    /// Mapping type within the index.
    pub doc_type: String,
    /// Record identifier, unique within index and type.
    pub id: String,
    /// Version the source held when the record was read.
    pub version: u64,
    /// Schemaless record body.
    pub source: serde_json::Value,
}

impl Document {
    pub fn new(
        index: &str,
        doc_type: &str,
        id: &str,
        version: u64,
        source: serde_json::Value,
    ) -> Self {
        Document {
            index: index.to_string(),
            doc_type: doc_type.to_string(),
            id: id.to_string(),
            version,
            source,
        }
    }
}
