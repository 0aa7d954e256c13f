use engine_core::connectors::script::CompiledScript;
use futures::{StreamExt, stream};
use model::{
    core::version::VersionPolicy,
    records::{action::IndexAction, document::Document},
    request::reindex::DestinationTemplate,
    response::failure::IndexingFailure,
    script::ScriptOutcome,
};
use std::sync::Arc;

/// Status reported for a record whose script blew up at runtime.
const SCRIPT_FAILURE_STATUS: u16 = 500;

/// Where transformed records get written.
#[derive(Debug, Clone)]
pub enum IndexTarget {
    /// Route every write through the destination template.
    Destination(DestinationTemplate),
    /// Write each record back where it was read from, pinned to the
    /// version it was read at.
    InPlace,
}

/// What the transformer decided for one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Record proceeds to the bulk write.
    Write(IndexAction),
    /// The script chose to skip this record.
    Noop,
    /// The script failed on this record; the run carries on without it.
    Fail(IndexingFailure),
}

/// Turns a page of documents into per-record write decisions.
pub struct BatchTransformer {
    script: Option<Arc<dyn CompiledScript>>,
    target: IndexTarget,
    concurrency: usize,
}

impl BatchTransformer {
    pub fn new(
        script: Option<Arc<dyn CompiledScript>>,
        target: IndexTarget,
        concurrency: usize,
    ) -> Self {
        BatchTransformer {
            script,
            target,
            concurrency: concurrency.max(1),
        }
    }

    /// Decide every document of a page.
    ///
    /// Scripts run concurrently up to the configured limit, but the
    /// buffered stream keeps page order: decision `i` always belongs to
    /// document `i`.
    pub async fn transform(&self, docs: Vec<Document>) -> Vec<Decision> {
        stream::iter(docs.into_iter().map(|doc| self.decide(doc)))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn decide(&self, doc: Document) -> Decision {
        let Some(script) = &self.script else {
            let (index, version) = self.route(&doc);
            return Decision::Write(IndexAction {
                index,
                doc_type: doc.doc_type,
                id: doc.id,
                version,
                source: doc.source,
            });
        };

        match script.apply(&doc).await {
            Ok(ScriptOutcome::Index { source, version }) => {
                let (index, routed_version) = self.route(&doc);
                Decision::Write(IndexAction {
                    index,
                    doc_type: doc.doc_type,
                    id: doc.id,
                    version: version.unwrap_or(routed_version),
                    source,
                })
            }
            Ok(ScriptOutcome::Noop) => Decision::Noop,
            Err(e) => {
                let (index, _) = self.route(&doc);
                Decision::Fail(IndexingFailure {
                    index,
                    doc_type: doc.doc_type,
                    id: doc.id,
                    message: e.to_string(),
                    status: SCRIPT_FAILURE_STATUS,
                })
            }
        }
    }

    /// Index and version the target routing picks for `doc`. Identity
    /// fields always come from the document itself.
    fn route(&self, doc: &Document) -> (String, VersionPolicy) {
        match &self.target {
            IndexTarget::Destination(template) => {
                (template.index.clone(), template.version.clone())
            }
            IndexTarget::InPlace => (doc.index.clone(), VersionPolicy::Exact(doc.version)),
        }
    }
}
