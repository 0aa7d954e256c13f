pub mod failure;

use crate::response::failure::{IndexingFailure, SearchFailure};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Progress report every bulk-by-scroll run ends with, whatever the
/// terminal state was.
///
/// Counters and failure lists partition the processed records: each record
/// pulled from the cursor lands in exactly one of `updated`,
/// `version_conflicts`, `noops`, or an entry in `indexing_failures` (plus
/// `created` for reindex runs).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkByScrollResponse {
    pub took: Duration,
    pub updated: u64,
    /// Pages processed, including a final page truncated by the record limit.
    pub batches: u64,
    pub version_conflicts: u64,
    pub noops: u64,
    /// Per-record write failures, in encounter order.
    pub indexing_failures: Vec<IndexingFailure>,
    /// Per-shard read failures, in encounter order.
    pub search_failures: Vec<SearchFailure>,
}

impl BulkByScrollResponse {
    /// Records accounted for by this response, listed failures included.
    pub fn total_accounted(&self) -> u64 {
        self.updated + self.version_conflicts + self.noops + self.indexing_failures.len() as u64
    }
}

/// Reindex adds a `created` counter on top of the shared summary; the two
/// buckets stay disjoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReindexResponse {
    pub created: u64,
    pub summary: BulkByScrollResponse,
}

impl ReindexResponse {
    pub fn total_accounted(&self) -> u64 {
        self.created + self.summary.total_accounted()
    }
}
