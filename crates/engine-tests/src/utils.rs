use crate::fakes::{ScriptedDestination, StaticScripts, StaticSource};
use engine_core::error::SourceError;
use engine_runtime::execution::executor::Services;
use model::{
    records::{document::Document, page::ScrollPage},
    request::{
        options::{ScrollOptions, ScrollQuery},
        reindex::{DestinationTemplate, ReindexRequest},
        update_by_query::UpdateByQueryRequest,
    },
    response::failure::SearchFailure,
};
use serde_json::json;
use std::{ops::Range, sync::Arc};
use tracing_subscriber::EnvFilter;

/// Route engine logs through the test writer. Safe to call from every
/// test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn doc(index: &str, id: usize) -> Document {
    doc_with_version(index, id, 1)
}

pub fn doc_with_version(index: &str, id: usize, version: u64) -> Document {
    Document::new(index, "event", &id.to_string(), version, json!({ "seq": id }))
}

/// One page holding the documents with ids in `ids`.
pub fn page(index: &str, ids: Range<usize>) -> ScrollPage {
    ScrollPage::new(ids.map(|id| doc(index, id)).collect())
}

/// `total` documents chunked into pages of `page_size`, ids ascending.
pub fn paged(index: &str, total: usize, page_size: usize) -> Vec<Result<ScrollPage, SourceError>> {
    (0..total)
        .step_by(page_size)
        .map(|start| Ok(page(index, start..(start + page_size).min(total))))
        .collect()
}

pub fn shard_failure(index: &str, shard: u32) -> SearchFailure {
    SearchFailure {
        index: index.to_string(),
        shard,
        node: format!("node-{shard}"),
        status: 503,
        reason: "shard not available for scroll".to_string(),
    }
}

pub fn options_over(index: &str, page_size: usize) -> ScrollOptions {
    ScrollOptions::new(ScrollQuery::over(&[index], page_size))
}

pub fn reindex_to(dest: &str, options: ScrollOptions) -> ReindexRequest {
    ReindexRequest::new(options, DestinationTemplate::new(dest))
}

pub fn update_in_place(options: ScrollOptions) -> UpdateByQueryRequest {
    UpdateByQueryRequest::new(options)
}

pub fn services(
    source: Arc<StaticSource>,
    destination: Arc<ScriptedDestination>,
    scripts: Arc<StaticScripts>,
) -> Services {
    Services {
        source,
        destination,
        scripts,
    }
}
