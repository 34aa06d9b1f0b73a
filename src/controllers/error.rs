use crate::domain::{ComplaintId, DraftField};
use crate::store::StoreError;
use thiserror::Error;

/// Pre-flight failure: the draft never reached the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", list_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<DraftField>,
}

fn list_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Everything a controller operation can fail with. Remote failures keep the
/// store error as their source but callers only ever look at the variant.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to submit complaint: {0}")]
    Submission(#[source] StoreError),

    #[error("failed to load complaints: {0}")]
    Fetch(#[source] StoreError),

    #[error("failed to update status of complaint {id}: {source}")]
    Update { id: ComplaintId, source: StoreError },

    #[error("failed to delete complaint {id}: {source}")]
    Delete { id: ComplaintId, source: StoreError },
}
