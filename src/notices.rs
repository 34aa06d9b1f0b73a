// src/notices.rs

use crate::controllers::ControllerError;
use crate::domain::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Destructive,
}

/// A toast shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            tone,
        }
    }

    pub fn submitted() -> Self {
        Self::new(
            "Complaint Submitted",
            "Your complaint has been successfully submitted. We'll review it promptly.",
            Tone::Success,
        )
    }

    pub fn status_updated(status: Status) -> Self {
        Self::new(
            "Status Updated",
            format!("Complaint status changed to {status}"),
            Tone::Success,
        )
    }

    pub fn deleted() -> Self {
        Self::new(
            "Complaint Deleted",
            "The complaint has been successfully deleted.",
            Tone::Success,
        )
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Destructive
    }
}

impl From<&ControllerError> for Notice {
    fn from(err: &ControllerError) -> Self {
        let (title, description) = match err {
            ControllerError::Validation(_) => (
                "Missing Information",
                "Please fill in all required fields.",
            ),
            ControllerError::Submission(_) => (
                "Submission Failed",
                "There was an error submitting your complaint. Please try again.",
            ),
            ControllerError::Fetch(_) => (
                "Error",
                "Failed to load complaints. Please refresh the page.",
            ),
            ControllerError::Update { .. } => {
                ("Update Failed", "Failed to update complaint status.")
            }
            ControllerError::Delete { .. } => ("Delete Failed", "Failed to delete complaint."),
        };
        Notice::new(title, description, Tone::Destructive)
    }
}
