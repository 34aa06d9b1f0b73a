//! The remote store: a row-oriented `complaints` table owned by someone else.
//!
//! Controllers only ever see this trait. Two backends implement it: the hosted
//! Supabase project (PostgREST over HTTPS) and a local SQLite file used for
//! development and tests.

pub mod supabase;

use crate::domain::{Complaint, ComplaintId, NewComplaint, Status};
use thiserror::Error;

pub use supabase::SupabaseStore;

/// Any failure reported by a store. Callers treat every variant the same
/// way; the variants exist for the logs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store rejected request ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("could not decode store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("insert returned no row")]
    EmptyInsert,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait ComplaintStore: Send + Sync {
    /// `select * from complaints order by date_submitted desc`
    fn list_complaints(&self) -> Result<Vec<Complaint>, StoreError>;

    /// Inserts one row and returns it as stored (id, status, timestamps filled in).
    fn insert_complaint(&self, complaint: &NewComplaint) -> Result<Complaint, StoreError>;

    /// `update complaints set status = ? where id = ?`
    fn update_status(&self, id: &ComplaintId, status: Status) -> Result<(), StoreError>;

    /// `delete from complaints where id = ?`
    fn delete_complaint(&self, id: &ComplaintId) -> Result<(), StoreError>;
}
