use crate::evaluate::PageOutcome;
use engine_core::metrics::Metrics;
use model::response::{
    BulkByScrollResponse, ReindexResponse,
    failure::{IndexingFailure, SearchFailure},
};
use std::time::Instant;

/// Single-owner progress ledger for one run.
///
/// The run loop applies it once per processed page; nothing else writes
/// to it. Counters are mirrored into the shared [`Metrics`] handle at the
/// same page granularity, so observers never see a page mid-flight.
#[derive(Debug)]
pub struct ProgressAccumulator {
    started: Instant,
    metrics: Metrics,
    records_pulled: u64,
    batches: u64,
    created: u64,
    updated: u64,
    noops: u64,
    version_conflicts: u64,
    indexing_failures: Vec<IndexingFailure>,
    search_failures: Vec<SearchFailure>,
}

/// Point-in-time copy of the ledger.
#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    pub records_pulled: u64,
    pub batches: u64,
    pub created: u64,
    pub updated: u64,
    pub noops: u64,
    pub version_conflicts: u64,
    pub indexing_failures: Vec<IndexingFailure>,
    pub search_failures: Vec<SearchFailure>,
}

impl ProgressAccumulator {
    pub fn new(metrics: Metrics) -> Self {
        ProgressAccumulator {
            started: Instant::now(),
            metrics,
            records_pulled: 0,
            batches: 0,
            created: 0,
            updated: 0,
            noops: 0,
            version_conflicts: 0,
            indexing_failures: Vec::new(),
            search_failures: Vec::new(),
        }
    }

    /// Fold one processed page into the ledger.
    pub fn record_page(&mut self, pulled: usize, outcome: PageOutcome) {
        self.records_pulled += pulled as u64;
        self.batches += 1;
        self.created += outcome.created;
        self.updated += outcome.updated;
        self.noops += outcome.noops;
        self.version_conflicts += outcome.version_conflicts;

        self.metrics.increment_scanned(pulled as u64);
        self.metrics.increment_batches(1);
        self.metrics
            .increment_written(outcome.created + outcome.updated);
        self.metrics.increment_noops(outcome.noops);
        self.metrics.increment_conflicts(outcome.version_conflicts);
        self.metrics
            .increment_failures(outcome.indexing_failures.len() as u64);

        self.indexing_failures.extend(outcome.indexing_failures);
    }

    /// Append per-shard read failures in encounter order.
    pub fn record_search_failures(&mut self, failures: Vec<SearchFailure>) {
        self.search_failures.extend(failures);
    }

    /// Total records handed to processing so far.
    pub fn records_pulled(&self) -> u64 {
        self.records_pulled
    }

    pub fn batches(&self) -> u64 {
        self.batches
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            records_pulled: self.records_pulled,
            batches: self.batches,
            created: self.created,
            updated: self.updated,
            noops: self.noops,
            version_conflicts: self.version_conflicts,
            indexing_failures: self.indexing_failures.clone(),
            search_failures: self.search_failures.clone(),
        }
    }

    /// Freeze the ledger into the response of a reindex run.
    pub fn into_reindex_response(self) -> ReindexResponse {
        let (created, summary) = self.into_summary();
        ReindexResponse { created, summary }
    }

    /// Freeze the ledger into the response of an update-by-query run.
    ///
    /// In-place runs have no created bucket; anything a destination still
    /// reported as created was an existing record and counts as updated.
    pub fn into_update_by_query_response(self) -> BulkByScrollResponse {
        let (created, mut summary) = self.into_summary();
        summary.updated += created;
        summary
    }

    fn into_summary(self) -> (u64, BulkByScrollResponse) {
        let took = self.started.elapsed();
        (
            self.created,
            BulkByScrollResponse {
                took,
                updated: self.updated,
                batches: self.batches,
                version_conflicts: self.version_conflicts,
                noops: self.noops,
                indexing_failures: self.indexing_failures,
                search_failures: self.search_failures,
            },
        )
    }
}
