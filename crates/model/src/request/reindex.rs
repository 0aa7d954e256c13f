use crate::{core::version::VersionPolicy, error::RequestError, request::options::ScrollOptions};
use serde::{Deserialize, Serialize};

/// Template applied to every destination write of a reindex run.
///
/// The index comes from here; identity fields stay with each document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationTemplate {
    pub index: String,
    pub version: VersionPolicy,
}

impl DestinationTemplate {
    /// Template that writes into `index` with no version expectation.
    pub fn new(index: &str) -> Self {
        DestinationTemplate {
            index: index.to_string(),
            version: VersionPolicy::MatchAny,
        }
    }
}

/// Copy records from the source indices into a destination index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReindexRequest {
    pub options: ScrollOptions,
    pub destination: DestinationTemplate,
}

impl ReindexRequest {
    pub fn new(options: ScrollOptions, destination: DestinationTemplate) -> Self {
        ReindexRequest {
            options,
            destination,
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        self.options.validate()?;
        if self.destination.index.is_empty() {
            return Err(RequestError::EmptyDestinationIndex);
        }
        Ok(())
    }
}
