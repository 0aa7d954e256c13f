use crate::error::RunError;
use chrono::{DateTime, Utc};
use engine_core::metrics::MetricsSnapshot;
use model::response::{BulkByScrollResponse, ReindexResponse};
use uuid::Uuid;

/// How a run ended. Every variant still carries the progress made so far.
#[derive(Debug)]
pub enum Termination {
    /// The scan drained the cursor or hit its record limit.
    Completed,
    /// A version conflict stopped the run under the abort policy.
    ConflictAborted,
    /// Cancellation was requested and honored at a page boundary.
    Cancelled,
    /// A collaborator failed and the run could not continue.
    Failed(RunError),
}

impl Termination {
    pub fn is_completed(&self) -> bool {
        matches!(self, Termination::Completed)
    }
}

/// Everything a finished run hands back to its caller.
#[derive(Debug)]
pub struct RunReport<R> {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub termination: Termination,
    pub response: R,
    pub metrics: MetricsSnapshot,
}

pub type ReindexReport = RunReport<ReindexResponse>;
pub type UpdateByQueryReport = RunReport<BulkByScrollResponse>;

/// Report of either operation, for callers that dispatched a
/// [`BulkByScrollRequest`](model::request::BulkByScrollRequest) without
/// caring which variant it held.
#[derive(Debug)]
pub enum OperationReport {
    Reindex(ReindexReport),
    UpdateByQuery(UpdateByQueryReport),
}

impl OperationReport {
    pub fn termination(&self) -> &Termination {
        match self {
            OperationReport::Reindex(report) => &report.termination,
            OperationReport::UpdateByQuery(report) => &report.termination,
        }
    }

    /// The summary shared by both operations.
    pub fn summary(&self) -> &BulkByScrollResponse {
        match self {
            OperationReport::Reindex(report) => &report.response.summary,
            OperationReport::UpdateByQuery(report) => &report.response,
        }
    }
}
