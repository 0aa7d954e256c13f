use serde::{Deserialize, Serialize};
use std::fmt;

/// Version expectation attached to a destination write.
///
/// Replaces the sentinel version numbers of wire formats that encode
/// "any" and "deleted" as negative magic values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionPolicy {
    /// Write regardless of the version currently stored.
    MatchAny,
    /// Write only if the document does not currently exist.
    MatchDeleted,
    /// Write only if the stored version is exactly this value.
    Exact(u64),
}

impl Default for VersionPolicy {
    fn default() -> Self {
        VersionPolicy::MatchAny
    }
}

impl fmt::Display for VersionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPolicy::MatchAny => f.write_str("match_any"),
            VersionPolicy::MatchDeleted => f.write_str("match_deleted"),
            VersionPolicy::Exact(version) => write!(f, "exact({version})"),
        }
    }
}
