use std::time::Duration;
use thiserror::Error;

/// Source-side failures. Either variant ends the run.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("source call exceeded the {timeout:?} timeout")]
    Timeout { timeout: Duration },
}

/// Destination-side failures. Either variant ends the run; per-record
/// trouble travels through `WriteOutcome` instead.
#[derive(Debug, Clone, Error)]
pub enum DestinationError {
    #[error("destination unavailable: {0}")]
    Unavailable(String),

    #[error("bulk call exceeded the {timeout:?} timeout")]
    Timeout { timeout: Duration },
}

/// Script failures. Validation ends the run before any record is read;
/// execution failures mark the one record they hit and the run goes on.
#[derive(Debug, Clone, Error)]
pub enum ScriptError {
    #[error("script failed validation: {0}")]
    Validation(String),

    #[error("script failed at runtime: {0}")]
    Execution(String),
}
