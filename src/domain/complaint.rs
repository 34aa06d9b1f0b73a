// src/domain/complaint.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier. Opaque to us: Supabase hands out UUID text,
/// the SQLite backend generates the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(String);

impl ComplaintId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raised when a string from a form, query, or row is not one of the
/// enumerated values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed set of labels with serde, Display and FromStr all
/// agreeing on the exact label text.
macro_rules! labelled_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in the order the UI lists them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

labelled_enum!(Category, "category", {
    Product => "Product",
    Service => "Service",
    Support => "Support",
    Billing => "Billing",
    Technical => "Technical",
});

labelled_enum!(Priority, "priority", {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

labelled_enum!(Status, "status", {
    Pending => "Pending",
    InProgress => "In Progress",
    Resolved => "Resolved",
});

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

/// A persisted complaint row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    #[serde(default)]
    pub user_email: Option<String>,
    pub date_submitted: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. The store fills in id, status and both timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub user_email: Option<String>,
}

/// Form state behind the "Submit a Complaint" card.
///
/// Category is optional here because the select starts empty; the email is
/// kept as typed and only becomes `None` when converted to a `NewComplaint`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub priority: Priority,
    pub user_email: String,
}

/// Required inputs of the complaint form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Category,
    Description,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::Title => write!(f, "title"),
            DraftField::Category => write!(f, "category"),
            DraftField::Description => write!(f, "description"),
        }
    }
}

impl ComplaintDraft {
    /// Required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push(DraftField::Title);
        }
        if self.category.is_none() {
            missing.push(DraftField::Category);
        }
        if self.description.is_empty() {
            missing.push(DraftField::Description);
        }
        missing
    }

    /// Builds the insert payload, or `None` while a required field is empty.
    pub fn to_new_complaint(&self) -> Option<NewComplaint> {
        if !self.missing_fields().is_empty() {
            return None;
        }

        let email = self.user_email.trim();
        Some(NewComplaint {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category?,
            priority: self.priority,
            user_email: (!email.is_empty()).then(|| email.to_string()),
        })
    }
}
