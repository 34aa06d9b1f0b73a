// src/controllers/submission.rs

use crate::controllers::error::{ControllerError, ValidationError};
use crate::domain::{Complaint, ComplaintDraft};
use crate::store::ComplaintStore;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Owns the complaint form state and turns it into a stored complaint.
///
/// Nothing is inserted into any list cache here: an admin view only sees the
/// new row on its next `load`.
pub struct SubmissionController {
    store: Arc<dyn ComplaintStore>,
    draft: ComplaintDraft,
}

impl SubmissionController {
    pub fn new(store: Arc<dyn ComplaintStore>) -> Self {
        Self {
            store,
            draft: ComplaintDraft::default(),
        }
    }

    /// Current form contents. After a failed submit this is still the user's input.
    pub fn draft(&self) -> &ComplaintDraft {
        &self.draft
    }

    /// Validates `draft` and sends it to the store.
    ///
    /// On success the form resets to its defaults (priority back to Medium).
    /// On any failure the draft is kept and the store is not retried.
    pub fn submit(&mut self, draft: ComplaintDraft) -> Result<Complaint, ControllerError> {
        self.draft = draft;

        let Some(new_complaint) = self.draft.to_new_complaint() else {
            let missing = self.draft.missing_fields();
            warn!(?missing, "complaint rejected before submission");
            return Err(ValidationError { missing }.into());
        };

        match self.store.insert_complaint(&new_complaint) {
            Ok(created) => {
                info!(id = %created.id, category = %created.category, "complaint submitted");
                self.draft = ComplaintDraft::default();
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "error submitting complaint");
                Err(ControllerError::Submission(e))
            }
        }
    }
}
