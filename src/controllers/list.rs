// src/controllers/list.rs

use crate::controllers::error::ControllerError;
use crate::domain::{Complaint, ComplaintFilters, ComplaintId, Status};
use crate::store::ComplaintStore;
use std::sync::Arc;
use tracing::{error, info};

/// Admin-side view over the complaints table.
///
/// Holds a local copy of every complaint (newest first) and the filtered
/// view derived from it. The cache only changes after the store confirms a
/// call; a failed call leaves it exactly as it was.
pub struct ListController {
    store: Arc<dyn ComplaintStore>,
    cache: Vec<Complaint>,
    filters: ComplaintFilters,
    filtered: Vec<Complaint>,
    loading: bool,
    loaded: bool,
}

impl ListController {
    pub fn new(store: Arc<dyn ComplaintStore>) -> Self {
        Self {
            store,
            cache: Vec::new(),
            filters: ComplaintFilters::default(),
            filtered: Vec::new(),
            loading: true,
            loaded: false,
        }
    }

    pub fn cache(&self) -> &[Complaint] {
        &self.cache
    }

    pub fn filtered(&self) -> &[Complaint] {
        &self.filtered
    }

    pub fn filters(&self) -> &ComplaintFilters {
        &self.filters
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    /// True until the first `load` has finished, whatever its outcome.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once a `load` has succeeded.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Replaces the cache with a fresh copy of the table. One attempt; on
    /// failure the previous cache stays.
    pub fn load(&mut self) -> Result<usize, ControllerError> {
        let result = self.store.list_complaints();
        self.loading = false;

        match result {
            Ok(rows) => {
                info!(count = rows.len(), "complaints loaded");
                self.cache = rows;
                self.loaded = true;
                self.refresh_view();
                Ok(self.cache.len())
            }
            Err(e) => {
                error!(error = %e, "error fetching complaints");
                Err(ControllerError::Fetch(e))
            }
        }
    }

    /// Recomputes the filtered view from the cache. Never calls the store.
    pub fn set_filters(&mut self, filters: ComplaintFilters) {
        self.filters = filters;
        self.refresh_view();
    }

    /// Sets one complaint's status. Any status may follow any other.
    pub fn update_status(
        &mut self,
        id: &ComplaintId,
        new_status: Status,
    ) -> Result<(), ControllerError> {
        if let Err(e) = self.store.update_status(id, new_status) {
            error!(%id, status = %new_status, error = %e, "error updating status");
            return Err(ControllerError::Update {
                id: id.clone(),
                source: e,
            });
        }

        if let Some(complaint) = self.cache.iter_mut().find(|c| &c.id == id) {
            complaint.status = new_status;
        }
        self.refresh_view();

        info!(%id, status = %new_status, "complaint status updated");
        Ok(())
    }

    /// Deletes one complaint. The caller must have asked the user first;
    /// there is no undo.
    pub fn delete_complaint(&mut self, id: &ComplaintId) -> Result<(), ControllerError> {
        if let Err(e) = self.store.delete_complaint(id) {
            error!(%id, error = %e, "error deleting complaint");
            return Err(ControllerError::Delete {
                id: id.clone(),
                source: e,
            });
        }

        self.cache.retain(|c| &c.id != id);
        self.refresh_view();

        info!(%id, "complaint deleted");
        Ok(())
    }

    fn refresh_view(&mut self) {
        self.filtered = self.filters.apply(&self.cache);
    }
}
