pub mod options;
pub mod reindex;
pub mod update_by_query;

use crate::{
    error::RequestError,
    request::{options::ScrollOptions, reindex::ReindexRequest, update_by_query::UpdateByQueryRequest},
};
use serde::{Deserialize, Serialize};

/// Either of the two operations the engine runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkByScrollRequest {
    Reindex(ReindexRequest),
    UpdateByQuery(UpdateByQueryRequest),
}

impl BulkByScrollRequest {
    pub fn options(&self) -> &ScrollOptions {
        match self {
            BulkByScrollRequest::Reindex(request) => &request.options,
            BulkByScrollRequest::UpdateByQuery(request) => &request.options,
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        match self {
            BulkByScrollRequest::Reindex(request) => request.validate(),
            BulkByScrollRequest::UpdateByQuery(request) => request.validate(),
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            BulkByScrollRequest::Reindex(_) => "reindex",
            BulkByScrollRequest::UpdateByQuery(_) => "update_by_query",
        }
    }
}
