use serde::{Deserialize, Serialize};

/// Upper bound on how many records a run may process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordLimit {
    /// Process everything the scroll yields.
    Unbounded,
    /// Stop once this many records have been processed.
    AtMost(u64),
}

impl RecordLimit {
    /// Records still allowed after `processed`, `None` when unbounded.
    pub fn remaining(&self, processed: u64) -> Option<u64> {
        match self {
            RecordLimit::Unbounded => None,
            RecordLimit::AtMost(max) => Some(max.saturating_sub(processed)),
        }
    }

    pub fn is_reached(&self, processed: u64) -> bool {
        match self {
            RecordLimit::Unbounded => false,
            RecordLimit::AtMost(max) => processed >= *max,
        }
    }
}

impl Default for RecordLimit {
    fn default() -> Self {
        RecordLimit::Unbounded
    }
}
