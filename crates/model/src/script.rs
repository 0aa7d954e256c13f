use crate::core::version::VersionPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where the script body lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKind {
    /// The name field carries the script source itself.
    Inline,
    /// The script is stored in the cluster under its name.
    Stored,
    /// The script is a file on the executing node.
    File,
}

/// Transformation applied to every record before it is written.
///
/// Parameters stay schemaless on purpose; the descriptor around them is
/// typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub name: String,
    pub kind: ScriptKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, serde_json::Value>,
}

impl Script {
    pub fn inline(source: &str) -> Self {
        Script {
            name: source.to_string(),
            kind: ScriptKind::Inline,
            lang: None,
            params: BTreeMap::new(),
        }
    }
}

/// What a compiled script decided for one document.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOutcome {
    /// Write this body, optionally overriding the version policy the
    /// target routing would have chosen.
    Index {
        source: serde_json::Value,
        version: Option<VersionPolicy>,
    },
    /// Skip the write and count the record as a no-op.
    Noop,
}
