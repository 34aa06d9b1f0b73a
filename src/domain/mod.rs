pub mod complaint;
pub mod filters;

pub use complaint::{
    Category, Complaint, ComplaintDraft, ComplaintId, DraftField, NewComplaint, Priority, Status,
};
pub use filters::{Choice, ComplaintFilters};
