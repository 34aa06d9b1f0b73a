use crate::controllers::{ListController, SubmissionController};
use crate::errors::ServerError;
use crate::notices::Notice;
use crate::store::ComplaintStore;
use std::sync::{Arc, Mutex, MutexGuard};

/// Everything the request handlers share.
///
/// There is one admin list (single operator) guarded by a mutex, so each
/// request is a single thread of control over it. Submission controllers are
/// per request: every visitor has their own form, and the submit page renders
/// its outcome directly. Only admin actions go through the notice queue.
pub struct AppState {
    store: Arc<dyn ComplaintStore>,
    list: Mutex<ListController>,
    admin_notices: Mutex<Vec<Notice>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ComplaintStore>) -> Self {
        Self {
            list: Mutex::new(ListController::new(store.clone())),
            store,
            admin_notices: Mutex::new(Vec::new()),
        }
    }

    pub fn submission(&self) -> SubmissionController {
        SubmissionController::new(self.store.clone())
    }

    pub fn list(&self) -> Result<MutexGuard<'_, ListController>, ServerError> {
        self.list.lock().map_err(|_| ServerError::InternalError)
    }

    /// Queues a notice for the next rendered admin page.
    pub fn push_admin_notice(&self, notice: Notice) -> Result<(), ServerError> {
        self.admin_notices
            .lock()
            .map_err(|_| ServerError::InternalError)?
            .push(notice);
        Ok(())
    }

    /// Takes all queued admin notices.
    pub fn take_admin_notices(&self) -> Result<Vec<Notice>, ServerError> {
        let mut queued = self.admin_notices.lock().map_err(|_| ServerError::InternalError)?;
        Ok(std::mem::take(&mut *queued))
    }
}
