use engine_core::error::ScriptError;
use engine_processing::error::{BulkWriteError, ScrollReadError};
use model::error::RequestError;
use thiserror::Error;

/// Reason a run stopped before its scan was finished.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Request rejected: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("Script rejected before any record was pulled: {0}")]
    ScriptCompile(#[from] ScriptError),

    #[error("Scroll failed: {0}")]
    Scroll(#[from] ScrollReadError),

    #[error("Bulk write failed: {0}")]
    Bulk(#[from] BulkWriteError),
}
