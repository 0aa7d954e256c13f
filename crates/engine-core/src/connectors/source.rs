use crate::error::SourceError;
use async_trait::async_trait;
use model::{records::page::ScrollPage, request::options::ScrollQuery};

/// Continuation token the source hands out when a scroll is opened.
///
/// Opaque to the engine; only the source that issued it can interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollCursor {
    token: String,
}

impl ScrollCursor {
    pub fn new(token: &str) -> Self {
        ScrollCursor {
            token: token.to_string(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// A store that can serve a server-side paginated scan.
#[async_trait]
pub trait ScrollSource: Send + Sync {
    /// Open a scan over everything `query` matches.
    async fn open(&self, query: &ScrollQuery) -> Result<ScrollCursor, SourceError>;

    /// Pull the next page, or `None` once the scan is exhausted.
    async fn next_page(&self, cursor: &ScrollCursor) -> Result<Option<ScrollPage>, SourceError>;

    /// Release the server-side scan context behind `cursor`.
    async fn close(&self, cursor: &ScrollCursor) -> Result<(), SourceError>;
}
