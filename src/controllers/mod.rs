pub mod error;
pub mod list;
pub mod submission;

pub use error::{ControllerError, ValidationError};
pub use list::ListController;
pub use submission::SubmissionController;
