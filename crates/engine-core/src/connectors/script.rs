use crate::error::ScriptError;
use async_trait::async_trait;
use model::{
    records::document::Document,
    script::{Script, ScriptOutcome},
};
use std::sync::Arc;

/// Compiles script descriptors into something the transformer can run.
#[async_trait]
pub trait ScriptEngine: Send + Sync {
    /// Compile and validate `script`.
    ///
    /// Runs exactly once per run, before the first record is read, so a
    /// broken script never touches the scroll.
    async fn compile(&self, script: &Script) -> Result<Arc<dyn CompiledScript>, ScriptError>;
}

/// A validated script, ready to be applied to documents.
#[async_trait]
pub trait CompiledScript: Send + Sync {
    /// Decide what happens to one document.
    async fn apply(&self, doc: &Document) -> Result<ScriptOutcome, ScriptError>;
}
