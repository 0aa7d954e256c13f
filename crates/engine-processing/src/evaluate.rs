use crate::{
    error::BulkWriteError,
    transform::{Decision, IndexTarget},
};
use model::{records::action::WriteOutcome, response::failure::IndexingFailure};

/// Counter movements one page contributed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageOutcome {
    pub created: u64,
    pub updated: u64,
    pub noops: u64,
    pub version_conflicts: u64,
    pub indexing_failures: Vec<IndexingFailure>,
    /// A conflict was met under abort policy; no further pages may be
    /// pulled.
    pub abort: bool,
}

impl PageOutcome {
    /// Records this page accounts for, listed failures included.
    pub fn records_accounted(&self) -> u64 {
        self.created
            + self.updated
            + self.noops
            + self.version_conflicts
            + self.indexing_failures.len() as u64
    }
}

/// Fold a page's decisions and write outcomes into counter movements.
///
/// Outcomes align one-to-one, in page order, with the `Write` decisions.
/// Conflicts are terminal for their record in both policies. Under abort
/// policy the first conflict freezes acceptance: records the destination
/// accepted before it keep their counts, and the conflicted record plus
/// every later would-be write of the page count as conflicts, since the
/// run stops before their fate is settled. Noops and per-record failures
/// keep their buckets either way, so every record stays accounted for.
pub fn evaluate_page(
    decisions: &[Decision],
    outcomes: &[WriteOutcome],
    abort_on_version_conflict: bool,
    target: &IndexTarget,
) -> Result<PageOutcome, BulkWriteError> {
    let writes = decisions
        .iter()
        .filter(|decision| matches!(decision, Decision::Write(_)))
        .count();

    let mut page = PageOutcome::default();
    let mut outcome_iter = outcomes.iter();

    for decision in decisions {
        match decision {
            Decision::Noop => page.noops += 1,
            Decision::Fail(failure) => page.indexing_failures.push(failure.clone()),
            Decision::Write(action) => {
                let Some(outcome) = outcome_iter.next() else {
                    return Err(BulkWriteError::OutcomeMismatch {
                        sent: writes,
                        got: outcomes.len(),
                    });
                };
                if page.abort {
                    page.version_conflicts += 1;
                    continue;
                }
                match outcome {
                    WriteOutcome::Created => match target {
                        // In-place runs have no created bucket; the record
                        // existed when it was read.
                        IndexTarget::InPlace => page.updated += 1,
                        IndexTarget::Destination(_) => page.created += 1,
                    },
                    WriteOutcome::Updated => page.updated += 1,
                    WriteOutcome::VersionConflict => {
                        page.version_conflicts += 1;
                        if abort_on_version_conflict {
                            page.abort = true;
                        }
                    }
                    WriteOutcome::Failed { message, status } => {
                        page.indexing_failures.push(IndexingFailure {
                            index: action.index.clone(),
                            doc_type: action.doc_type.clone(),
                            id: action.id.clone(),
                            message: message.clone(),
                            status: *status,
                        });
                    }
                }
            }
        }
    }

    if outcome_iter.next().is_some() {
        return Err(BulkWriteError::OutcomeMismatch {
            sent: writes,
            got: outcomes.len(),
        });
    }

    Ok(page)
}
