use crate::error::ScrollReadError;
use engine_core::{
    connectors::source::{ScrollCursor, ScrollSource},
    error::SourceError,
};
use model::{records::page::ScrollPage, request::options::ScrollQuery};
use std::{sync::Arc, time::Duration};
use tracing::{debug, error, warn};

/// Owns the scroll cursor for one run.
///
/// Every source call runs under the run timeout, and the server-side scan
/// context is released on every exit path, fetch errors included.
pub struct ScrollReader {
    source: Arc<dyn ScrollSource>,
    cursor: Option<ScrollCursor>,
    timeout: Duration,
    pages_fetched: u64,
}

impl ScrollReader {
    /// Open a cursor over everything `query` matches.
    pub async fn open(
        source: Arc<dyn ScrollSource>,
        query: &ScrollQuery,
        timeout: Duration,
    ) -> Result<Self, ScrollReadError> {
        let opened = match tokio::time::timeout(timeout, source.open(query)).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout { timeout }),
        };

        let cursor = opened.map_err(|e| ScrollReadError::Open {
            indices: query.indices.clone(),
            source: e,
        })?;

        debug!(cursor = %cursor.token(), indices = ?query.indices, "Opened scroll cursor.");

        Ok(ScrollReader {
            source,
            cursor: Some(cursor),
            timeout,
            pages_fetched: 0,
        })
    }

    /// Pull the next page, or `None` once the scan is exhausted.
    ///
    /// On a fetch error the cursor is closed before the error is returned,
    /// so callers never observe a half-open scan.
    pub async fn next_page(&mut self) -> Result<Option<ScrollPage>, ScrollReadError> {
        let Some(cursor) = &self.cursor else {
            return Ok(None);
        };

        let fetched = match tokio::time::timeout(self.timeout, self.source.next_page(cursor)).await
        {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout {
                timeout: self.timeout,
            }),
        };

        match fetched {
            Ok(Some(page)) => {
                self.pages_fetched += 1;
                debug!(
                    page_no = self.pages_fetched,
                    docs = page.len(),
                    "Fetched scroll page."
                );
                Ok(Some(page))
            }
            Ok(None) => {
                self.close().await;
                Ok(None)
            }
            Err(source) => {
                let page_no = self.pages_fetched + 1;
                self.close().await;
                Err(ScrollReadError::Fetch { page_no, source })
            }
        }
    }

    /// Pages served so far, truncated final page included.
    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    /// Release the scan context. Idempotent and best effort: the source
    /// may already have expired the cursor on its side.
    pub async fn close(&mut self) {
        let Some(cursor) = self.cursor.take() else {
            return;
        };

        match tokio::time::timeout(self.timeout, self.source.close(&cursor)).await {
            Ok(Ok(())) => debug!(cursor = %cursor.token(), "Closed scroll cursor."),
            Ok(Err(error)) => {
                warn!(cursor = %cursor.token(), error = %error, "Failed to close scroll cursor.")
            }
            Err(_) => warn!(cursor = %cursor.token(), "Timed out closing scroll cursor."),
        }
    }
}

impl Drop for ScrollReader {
    fn drop(&mut self) {
        let Some(cursor) = self.cursor.take() else {
            return;
        };
        let source = self.source.clone();

        // `drop` cannot be async; release the scan context from a task.
        tokio::spawn(async move {
            if let Err(e) = source.close(&cursor).await {
                error!(cursor = %cursor.token(), error = %e, "Failed to close scroll cursor on drop.");
            }
        });
    }
}
