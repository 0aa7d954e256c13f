use crate::{
    core::{consistency::WriteConsistency, limit::RecordLimit},
    error::RequestError,
    script::Script,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to scan: which indices, an optional filter, and the page size the
/// scroll cursor should serve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollQuery {
    pub indices: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    pub page_size: usize,
}

impl ScrollQuery {
    pub fn over(indices: &[&str], page_size: usize) -> Self {
        ScrollQuery {
            indices: indices.iter().map(|s| s.to_string()).collect(),
            filter: None,
            page_size,
        }
    }
}

/// Options shared by every bulk-by-scroll operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollOptions {
    pub query: ScrollQuery,
    /// Cap on how many records the run may process.
    pub limit: RecordLimit,
    /// Abort the run on the first version conflict instead of counting it.
    pub abort_on_version_conflict: bool,
    /// Ask the destination to refresh after each bulk write.
    pub refresh: bool,
    /// Bound on every collaborator call the run makes.
    pub timeout: Duration,
    pub consistency: WriteConsistency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
}

impl ScrollOptions {
    pub fn new(query: ScrollQuery) -> Self {
        ScrollOptions {
            query,
            limit: RecordLimit::Unbounded,
            abort_on_version_conflict: false,
            refresh: false,
            timeout: Duration::from_secs(60),
            consistency: WriteConsistency::default(),
            script: None,
        }
    }

    /// Reject option combinations no run could execute sensibly.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.query.indices.is_empty() {
            return Err(RequestError::NoSourceIndices);
        }
        if self.query.indices.iter().any(|index| index.is_empty()) {
            return Err(RequestError::EmptyIndexName);
        }
        if self.query.page_size == 0 {
            return Err(RequestError::InvalidPageSize);
        }
        if self.limit == RecordLimit::AtMost(0) {
            return Err(RequestError::ZeroRecordLimit);
        }
        if self.timeout.is_zero() {
            return Err(RequestError::ZeroTimeout);
        }
        if let Some(script) = &self.script
            && script.name.is_empty()
        {
            return Err(RequestError::EmptyScriptName);
        }
        Ok(())
    }
}
