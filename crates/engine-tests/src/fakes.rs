use async_trait::async_trait;
use engine_core::{
    connectors::{
        destination::BulkDestination,
        script::{CompiledScript, ScriptEngine},
        source::{ScrollCursor, ScrollSource},
    },
    error::{DestinationError, ScriptError, SourceError},
};
use model::{
    core::consistency::WriteConsistency,
    records::{
        action::{IndexAction, WriteOutcome},
        document::Document,
        page::ScrollPage,
    },
    request::options::ScrollQuery,
    script::{Script, ScriptOutcome},
};
use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Scroll source that serves a scripted sequence of pages.
///
/// Each `next_page` call consumes the next entry; once the sequence is
/// drained the scan reports exhaustion. Counters record how the engine
/// drove the cursor.
pub struct StaticSource {
    pages: Mutex<VecDeque<Result<ScrollPage, SourceError>>>,
    open_error: Option<SourceError>,
    cancel_after: Mutex<Option<(usize, CancellationToken)>>,
    opened: AtomicUsize,
    fetches: AtomicUsize,
    closed: AtomicUsize,
}

impl StaticSource {
    pub fn serving(pages: Vec<Result<ScrollPage, SourceError>>) -> Self {
        StaticSource {
            pages: Mutex::new(pages.into()),
            open_error: None,
            cancel_after: Mutex::new(None),
            opened: AtomicUsize::new(0),
            fetches: AtomicUsize::new(0),
            closed: AtomicUsize::new(0),
        }
    }

    pub fn failing_open(error: SourceError) -> Self {
        let mut source = StaticSource::serving(Vec::new());
        source.open_error = Some(error);
        source
    }

    /// Fire `token` while serving the `after`-th fetch, so cancellation
    /// lands between that page and the next one.
    pub fn cancel_after_fetch(&self, after: usize, token: CancellationToken) {
        *self.cancel_after.lock().expect("cancel_after lock") = Some((after, token));
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Calls to `next_page`, the final exhausted call included.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScrollSource for StaticSource {
    async fn open(&self, query: &ScrollQuery) -> Result<ScrollCursor, SourceError> {
        if let Some(error) = &self.open_error {
            return Err(error.clone());
        }

        self.opened.fetch_add(1, Ordering::SeqCst);
        debug!(indices = ?query.indices, "Opened scripted scroll.");
        Ok(ScrollCursor::new("scripted-scroll"))
    }

    async fn next_page(&self, _cursor: &ScrollCursor) -> Result<Option<ScrollPage>, SourceError> {
        let fetch = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some((after, token)) = &*self.cancel_after.lock().expect("cancel_after lock")
            && fetch == *after
        {
            token.cancel();
        }

        match self.pages.lock().expect("pages lock").pop_front() {
            Some(Ok(page)) => {
                debug!(fetch, docs = page.docs.len(), "Serving scripted page.");
                Ok(Some(page))
            }
            Some(Err(error)) => Err(error),
            None => Ok(None),
        }
    }

    async fn close(&self, _cursor: &ScrollCursor) -> Result<(), SourceError> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        debug!("Closed scripted scroll.");
        Ok(())
    }
}

type WriteBehavior =
    dyn Fn(&[IndexAction], usize) -> Result<Vec<WriteOutcome>, DestinationError> + Send + Sync;

/// Bulk destination whose per-call outcomes come from a closure.
///
/// The closure sees the submitted actions and the zero-based call index,
/// so a test can stage a conflict or failure at an exact record of an
/// exact page. Every accepted call is recorded for later inspection.
pub struct ScriptedDestination {
    behavior: Box<WriteBehavior>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    recorded: Mutex<Vec<Vec<IndexAction>>>,
    seen: Mutex<Option<(WriteConsistency, bool)>>,
}

impl ScriptedDestination {
    pub fn with(
        behavior: impl Fn(&[IndexAction], usize) -> Result<Vec<WriteOutcome>, DestinationError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        ScriptedDestination {
            behavior: Box::new(behavior),
            delay: None,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
            seen: Mutex::new(None),
        }
    }

    /// Every action succeeds as an overwrite.
    pub fn updating() -> Self {
        ScriptedDestination::with(|actions, _| {
            Ok(actions.iter().map(|_| WriteOutcome::Updated).collect())
        })
    }

    /// Every action succeeds as a fresh document.
    pub fn creating() -> Self {
        ScriptedDestination::with(|actions, _| {
            Ok(actions.iter().map(|_| WriteOutcome::Created).collect())
        })
    }

    /// Sleep before answering, to run the engine into its bulk timeout.
    /// A call abandoned mid-sleep is never recorded.
    pub fn delayed_by(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Pages as received, one inner vec per bulk call.
    pub fn recorded(&self) -> Vec<Vec<IndexAction>> {
        self.recorded.lock().expect("recorded lock").clone()
    }

    pub fn last_write_params(&self) -> Option<(WriteConsistency, bool)> {
        *self.seen.lock().expect("seen lock")
    }
}

#[async_trait]
impl BulkDestination for ScriptedDestination {
    async fn write_bulk(
        &self,
        actions: &[IndexAction],
        consistency: WriteConsistency,
        refresh: bool,
    ) -> Result<Vec<WriteOutcome>, DestinationError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorded
            .lock()
            .expect("recorded lock")
            .push(actions.to_vec());
        *self.seen.lock().expect("seen lock") = Some((consistency, refresh));

        debug!(call, actions = actions.len(), "Serving scripted bulk write.");
        (self.behavior)(actions, call)
    }
}

type DocScript = dyn Fn(&Document) -> Result<ScriptOutcome, ScriptError> + Send + Sync;

enum CompileOutcome {
    Reject(String),
    Run(Arc<FnScript>),
}

/// Script engine that either rejects at compile time or hands out a
/// closure-backed script.
pub struct StaticScripts {
    outcome: CompileOutcome,
    compiles: AtomicUsize,
}

impl StaticScripts {
    /// For runs that carry no script. Compiling anyway fails the test
    /// loudly instead of silently doing nothing.
    pub fn unused() -> Self {
        StaticScripts::rejecting("no script expected in this run")
    }

    pub fn rejecting(reason: &str) -> Self {
        StaticScripts {
            outcome: CompileOutcome::Reject(reason.to_string()),
            compiles: AtomicUsize::new(0),
        }
    }

    pub fn compiling(
        per_doc: impl Fn(&Document) -> Result<ScriptOutcome, ScriptError> + Send + Sync + 'static,
    ) -> Self {
        StaticScripts {
            outcome: CompileOutcome::Run(Arc::new(FnScript {
                run: Box::new(per_doc),
            })),
            compiles: AtomicUsize::new(0),
        }
    }

    pub fn compiles(&self) -> usize {
        self.compiles.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScriptEngine for StaticScripts {
    async fn compile(&self, script: &Script) -> Result<Arc<dyn CompiledScript>, ScriptError> {
        self.compiles.fetch_add(1, Ordering::SeqCst);
        debug!(script = %script.name, "Compiling scripted fake.");

        match &self.outcome {
            CompileOutcome::Reject(reason) => Err(ScriptError::Validation(reason.clone())),
            CompileOutcome::Run(script) => {
                let compiled: Arc<dyn CompiledScript> = script.clone();
                Ok(compiled)
            }
        }
    }
}

/// A compiled script backed by a plain closure.
pub struct FnScript {
    run: Box<DocScript>,
}

#[async_trait]
impl CompiledScript for FnScript {
    async fn apply(&self, doc: &Document) -> Result<ScriptOutcome, ScriptError> {
        (self.run)(doc)
    }
}
