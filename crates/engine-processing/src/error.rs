use engine_core::error::{DestinationError, SourceError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrollReadError {
    #[error("Failed to open scroll over {indices:?}: {source}")]
    Open {
        indices: Vec<String>,
        #[source]
        source: SourceError,
    },

    #[error("Failed to fetch page {page_no}: {source}")]
    Fetch {
        page_no: u64,
        #[source]
        source: SourceError,
    },
}

#[derive(Error, Debug)]
pub enum BulkWriteError {
    #[error("Failed to write bulk page of {actions} actions: {source}")]
    Write {
        actions: usize,
        #[source]
        source: DestinationError,
    },

    #[error("Destination answered {got} outcomes for {sent} submitted actions")]
    OutcomeMismatch { sent: usize, got: usize },
}
