use thiserror::Error;

/// Why a request failed validation before the run started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("at least one source index is required")]
    NoSourceIndices,
    #[error("source index names must not be empty")]
    EmptyIndexName,
    #[error("page size must be at least 1")]
    InvalidPageSize,
    #[error("a record limit of zero would process nothing")]
    ZeroRecordLimit,
    #[error("timeout must be non-zero")]
    ZeroTimeout,
    #[error("destination index must not be empty")]
    EmptyDestinationIndex,
    #[error("script name must not be empty")]
    EmptyScriptName,
}

/// Why a wire buffer failed to encode or decode.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("buffer of {0} bytes is too short for the schema header")]
    Truncated(usize),
    #[error("unsupported wire schema {found}, this build speaks {expected}")]
    UnsupportedSchema { found: u16, expected: u16 },
    #[error("failed to encode wire message")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode wire message")]
    Decode(#[source] serde_json::Error),
}
