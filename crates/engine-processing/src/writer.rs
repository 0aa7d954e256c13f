use crate::error::BulkWriteError;
use engine_core::{connectors::destination::BulkDestination, error::DestinationError};
use model::{
    core::consistency::WriteConsistency,
    records::action::{IndexAction, WriteOutcome},
};
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Submits each page's writes to the destination as one bulk call.
pub struct BulkWriter {
    destination: Arc<dyn BulkDestination>,
    consistency: WriteConsistency,
    refresh: bool,
    timeout: Duration,
}

impl BulkWriter {
    pub fn new(
        destination: Arc<dyn BulkDestination>,
        consistency: WriteConsistency,
        refresh: bool,
        timeout: Duration,
    ) -> Self {
        BulkWriter {
            destination,
            consistency,
            refresh,
            timeout,
        }
    }

    /// Write one page of actions, bounded by the run timeout.
    ///
    /// Consistency and refresh are forwarded verbatim. An empty page
    /// never touches the destination. A destination answering with a
    /// different number of outcomes than actions is fatal.
    pub async fn write_page(
        &self,
        actions: &[IndexAction],
    ) -> Result<Vec<WriteOutcome>, BulkWriteError> {
        if actions.is_empty() {
            return Ok(Vec::new());
        }

        let start = std::time::Instant::now();

        let written = match tokio::time::timeout(
            self.timeout,
            self.destination
                .write_bulk(actions, self.consistency, self.refresh),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(DestinationError::Timeout {
                timeout: self.timeout,
            }),
        };

        let outcomes = written.map_err(|e| BulkWriteError::Write {
            actions: actions.len(),
            source: e,
        })?;

        if outcomes.len() != actions.len() {
            return Err(BulkWriteError::OutcomeMismatch {
                sent: actions.len(),
                got: outcomes.len(),
            });
        }

        debug!(
            actions = actions.len(),
            consistency = %self.consistency,
            duration_ms = start.elapsed().as_millis() as u64,
            "Bulk page written."
        );

        Ok(outcomes)
    }
}
