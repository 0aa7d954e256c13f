use crate::error::DestinationError;
use async_trait::async_trait;
use model::{
    core::consistency::WriteConsistency,
    records::action::{IndexAction, WriteOutcome},
};

/// A store that can apply a page of writes in one call.
#[async_trait]
pub trait BulkDestination: Send + Sync {
    /// Submit every action of a page as a single bulk request.
    ///
    /// The returned outcomes must align one-to-one, in submission order,
    /// with `actions`. Per-record trouble belongs in the outcomes; an
    /// `Err` means the call as a whole did not happen.
    async fn write_bulk(
        &self,
        actions: &[IndexAction],
        consistency: WriteConsistency,
        refresh: bool,
    ) -> Result<Vec<WriteOutcome>, DestinationError>;
}
