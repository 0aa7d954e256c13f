use crate::{error::RequestError, request::options::ScrollOptions};
use serde::{Deserialize, Serialize};

/// Rewrite records in place in the indices they were read from.
///
/// Writes carry each document's own version, so a record changed between
/// read and write surfaces as a version conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateByQueryRequest {
    pub options: ScrollOptions,
}

impl UpdateByQueryRequest {
    pub fn new(options: ScrollOptions) -> Self {
        UpdateByQueryRequest { options }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        self.options.validate()
    }
}
