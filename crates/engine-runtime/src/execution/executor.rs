use crate::{
    error::RunError,
    execution::{
        report::{OperationReport, ReindexReport, RunReport, Termination, UpdateByQueryReport},
        settings::RunSettings,
    },
};
use chrono::{DateTime, Utc};
use engine_core::{
    connectors::{destination::BulkDestination, script::ScriptEngine, source::ScrollSource},
    metrics::Metrics,
};
use engine_processing::{
    evaluate::evaluate_page,
    progress::ProgressAccumulator,
    reader::ScrollReader,
    transform::{BatchTransformer, Decision, IndexTarget},
    writer::BulkWriter,
};
use model::{
    error::RequestError,
    records::action::IndexAction,
    request::{
        BulkByScrollRequest, options::ScrollOptions, reindex::ReindexRequest,
        update_by_query::UpdateByQueryRequest,
    },
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Connectors a run talks to. All of them are injected so callers pick
/// the stores and the script engine.
#[derive(Clone)]
pub struct Services {
    pub source: Arc<dyn ScrollSource>,
    pub destination: Arc<dyn BulkDestination>,
    pub scripts: Arc<dyn ScriptEngine>,
}

/// Run whichever operation `request` holds. Peers pulling requests off
/// the wire dispatch through here.
pub async fn run(
    request: BulkByScrollRequest,
    services: Services,
    settings: RunSettings,
    cancel: CancellationToken,
) -> OperationReport {
    match request {
        BulkByScrollRequest::Reindex(request) => {
            OperationReport::Reindex(run_reindex(request, services, settings, cancel).await)
        }
        BulkByScrollRequest::UpdateByQuery(request) => OperationReport::UpdateByQuery(
            run_update_by_query(request, services, settings, cancel).await,
        ),
    }
}

/// Copies every record the query matches into the destination template.
pub async fn run_reindex(
    request: ReindexRequest,
    services: Services,
    settings: RunSettings,
    cancel: CancellationToken,
) -> ReindexReport {
    let run = ScrollRun::new("reindex", services, settings, cancel);
    let validation = request.validate();

    debug!(
        run_id = %run.run_id,
        destination = request.destination.index.as_str(),
        version = %request.destination.version,
        "Writes will route through the destination template."
    );
    let target = IndexTarget::Destination(request.destination);

    let (termination, progress) = run.execute(validation, &request.options, &target).await;

    run.report(termination, progress.into_reindex_response())
}

/// Rewrites matching records in place, pinned to the versions they were
/// read at.
pub async fn run_update_by_query(
    request: UpdateByQueryRequest,
    services: Services,
    settings: RunSettings,
    cancel: CancellationToken,
) -> UpdateByQueryReport {
    let run = ScrollRun::new("update_by_query", services, settings, cancel);
    let validation = request.validate();

    let (termination, progress) = run
        .execute(validation, &request.options, &IndexTarget::InPlace)
        .await;

    run.report(termination, progress.into_update_by_query_response())
}

/// One scan-transform-write run over a scroll cursor.
struct ScrollRun {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    operation: &'static str,
    services: Services,
    settings: RunSettings,
    cancel: CancellationToken,
    metrics: Metrics,
}

impl ScrollRun {
    fn new(
        operation: &'static str,
        services: Services,
        settings: RunSettings,
        cancel: CancellationToken,
    ) -> Self {
        ScrollRun {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            operation,
            services,
            settings: settings.validated(),
            cancel,
            metrics: Metrics::new(),
        }
    }

    async fn execute(
        &self,
        validation: Result<(), RequestError>,
        options: &ScrollOptions,
        target: &IndexTarget,
    ) -> (Termination, ProgressAccumulator) {
        let mut progress = ProgressAccumulator::new(self.metrics.clone());

        info!(
            run_id = %self.run_id,
            operation = self.operation,
            indices = ?options.query.indices,
            page_size = options.query.page_size,
            "Starting bulk-by-scroll run."
        );

        let termination = match self.drive(validation, options, target, &mut progress).await {
            Ok(termination) => termination,
            Err(e) => {
                error!(run_id = %self.run_id, error = %e, "Run failed.");
                Termination::Failed(e)
            }
        };

        let snapshot = progress.snapshot();
        match &termination {
            Termination::Completed => info!(
                run_id = %self.run_id,
                records = snapshot.records_pulled,
                batches = snapshot.batches,
                conflicts = snapshot.version_conflicts,
                "Run completed."
            ),
            Termination::ConflictAborted => warn!(
                run_id = %self.run_id,
                records = snapshot.records_pulled,
                conflicts = snapshot.version_conflicts,
                "Run aborted on version conflict."
            ),
            Termination::Cancelled => warn!(
                run_id = %self.run_id,
                records = snapshot.records_pulled,
                "Run cancelled. Progress so far is kept."
            ),
            Termination::Failed(_) => {}
        }

        (termination, progress)
    }

    /// Validation, script compilation, then the page loop. The cursor is
    /// closed on every exit path, including bulk write failures.
    async fn drive(
        &self,
        validation: Result<(), RequestError>,
        options: &ScrollOptions,
        target: &IndexTarget,
        progress: &mut ProgressAccumulator,
    ) -> Result<Termination, RunError> {
        validation?;

        let script = match &options.script {
            Some(script) => Some(self.services.scripts.compile(script).await?),
            None => None,
        };

        let transformer = BatchTransformer::new(
            script,
            target.clone(),
            self.settings.transform_concurrency,
        );
        let writer = BulkWriter::new(
            self.services.destination.clone(),
            options.consistency,
            options.refresh,
            options.timeout,
        );

        let mut reader =
            ScrollReader::open(self.services.source.clone(), &options.query, options.timeout)
                .await?;

        let outcome = self
            .page_loop(options, target, &transformer, &writer, &mut reader, progress)
            .await;

        reader.close().await;
        outcome
    }

    async fn page_loop(
        &self,
        options: &ScrollOptions,
        target: &IndexTarget,
        transformer: &BatchTransformer,
        writer: &BulkWriter,
        reader: &mut ScrollReader,
        progress: &mut ProgressAccumulator,
    ) -> Result<Termination, RunError> {
        loop {
            if self.cancel.is_cancelled() {
                warn!(run_id = %self.run_id, "Cancellation requested. Stopping at page boundary.");
                return Ok(Termination::Cancelled);
            }

            if options.limit.is_reached(progress.records_pulled()) {
                info!(
                    run_id = %self.run_id,
                    records = progress.records_pulled(),
                    "Record limit reached."
                );
                return Ok(Termination::Completed);
            }

            let Some(mut page) = reader.next_page().await? else {
                return Ok(Termination::Completed);
            };

            // Records beyond the remaining budget are left unprocessed.
            if let Some(remaining) = options.limit.remaining(progress.records_pulled())
                && (page.docs.len() as u64) > remaining
            {
                page.docs.truncate(remaining as usize);
            }

            if !page.failures.is_empty() {
                warn!(
                    run_id = %self.run_id,
                    shard_failures = page.failures.len(),
                    "Scroll page carried shard failures."
                );
                progress.record_search_failures(std::mem::take(&mut page.failures));
            }

            // A page with nothing to process is not a batch.
            if page.docs.is_empty() {
                continue;
            }

            let pulled = page.docs.len();
            let decisions = transformer.transform(page.docs).await;

            let actions: Vec<IndexAction> = decisions
                .iter()
                .filter_map(|decision| match decision {
                    Decision::Write(action) => Some(action.clone()),
                    Decision::Noop | Decision::Fail(_) => None,
                })
                .collect();

            let outcomes = writer.write_page(&actions).await?;

            let page_outcome =
                evaluate_page(&decisions, &outcomes, options.abort_on_version_conflict, target)?;
            let aborted = page_outcome.abort;

            info!(
                run_id = %self.run_id,
                page_no = reader.pages_fetched(),
                records = pulled,
                written = page_outcome.created + page_outcome.updated,
                noops = page_outcome.noops,
                conflicts = page_outcome.version_conflicts,
                "Page processed."
            );

            progress.record_page(pulled, page_outcome);

            if aborted {
                warn!(
                    run_id = %self.run_id,
                    "Version conflict under abort policy. No further pages will be pulled."
                );
                return Ok(Termination::ConflictAborted);
            }
        }
    }

    fn report<R>(&self, termination: Termination, response: R) -> RunReport<R> {
        RunReport {
            run_id: self.run_id,
            started_at: self.started_at,
            termination,
            response,
            metrics: self.metrics.snapshot(),
        }
    }
}
