use serde::{Deserialize, Serialize};
use std::fmt;

/// How many shard copies must acknowledge a write before it counts.
///
/// Forwarded verbatim to the destination on every bulk call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteConsistency {
    One,
    Quorum,
    All,
}

impl WriteConsistency {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteConsistency::One => "one",
            WriteConsistency::Quorum => "quorum",
            WriteConsistency::All => "all",
        }
    }
}

impl Default for WriteConsistency {
    fn default() -> Self {
        WriteConsistency::Quorum
    }
}

impl fmt::Display for WriteConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
