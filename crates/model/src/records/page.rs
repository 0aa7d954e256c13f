use crate::{records::document::Document, response::failure::SearchFailure};
use serde::{Deserialize, Serialize};

/// One page pulled from a scroll cursor.
///
/// Shard-level read failures travel with the page that observed them; they
/// are collected into the run response and do not stop the scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPage {
    pub docs: Vec<Document>,
    pub failures: Vec<SearchFailure>,
}

impl ScrollPage {
    pub fn new(docs: Vec<Document>) -> Self {
        ScrollPage {
            docs,
            failures: Vec::new(),
        }
    }

    pub fn with_failures(docs: Vec<Document>, failures: Vec<SearchFailure>) -> Self {
        ScrollPage { docs, failures }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
