use serde::Serialize;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

#[derive(Debug, Default)]
struct InnerMetrics {
    records_scanned: AtomicU64,
    batches_processed: AtomicU64,
    records_written: AtomicU64,
    noops: AtomicU64,
    version_conflicts: AtomicU64,
    failures: AtomicU64,
}

/// Cheap shared handle onto a run's live counters.
///
/// Clones observe the same run; the progress accumulator mirrors into it
/// once per page so observers never see a page mid-flight.
#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<InnerMetrics>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MetricsSnapshot {
    pub records_scanned: u64,
    pub batches_processed: u64,
    pub records_written: u64,
    pub noops: u64,
    pub version_conflicts: u64,
    pub failures: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Metrics {
            inner: Arc::new(InnerMetrics::default()),
        }
    }

    pub fn increment_scanned(&self, count: u64) {
        self.inner.records_scanned.fetch_add(count, Ordering::Relaxed);
    }

    pub fn increment_batches(&self, count: u64) {
        self.inner
            .batches_processed
            .fetch_add(count, Ordering::Relaxed);
    }

    pub fn increment_written(&self, count: u64) {
        self.inner
            .records_written
            .fetch_add(count, Ordering::Relaxed);
    }

    pub fn increment_noops(&self, count: u64) {
        self.inner.noops.fetch_add(count, Ordering::Relaxed);
    }

    pub fn increment_conflicts(&self, count: u64) {
        self.inner
            .version_conflicts
            .fetch_add(count, Ordering::Relaxed);
    }

    pub fn increment_failures(&self, count: u64) {
        self.inner.failures.fetch_add(count, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_scanned: self.inner.records_scanned.load(Ordering::Relaxed),
            batches_processed: self.inner.batches_processed.load(Ordering::Relaxed),
            records_written: self.inner.records_written.load(Ordering::Relaxed),
            noops: self.inner.noops.load(Ordering::Relaxed),
            version_conflicts: self.inner.version_conflicts.load(Ordering::Relaxed),
            failures: self.inner.failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
