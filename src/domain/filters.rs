// src/domain/filters.rs

use crate::domain::complaint::{Complaint, Priority, Status};
use std::fmt;
use std::str::FromStr;

/// Label of the "no restriction" option in the filter selects.
pub const ALL: &str = "all";

/// A select filter: either the "all" sentinel or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    /// `"all"` and the empty string both mean no restriction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == ALL {
            return Ok(Choice::All);
        }
        s.parse().map(Choice::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL),
            Choice::Only(v) => v.fmt(f),
        }
    }
}

/// The three admin filters. All active predicates must hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComplaintFilters {
    pub status: Choice<Status>,
    pub priority: Choice<Priority>,
    pub search_text: String,
}

impl ComplaintFilters {
    pub fn is_active(&self) -> bool {
        !self.status.is_all() || !self.priority.is_all() || !self.search_text.is_empty()
    }

    pub fn matches(&self, complaint: &Complaint) -> bool {
        self.status.admits(&complaint.status)
            && self.priority.admits(&complaint.priority)
            && matches_search(complaint, &self.search_text)
    }

    /// Filtered copy of `complaints`, keeping their order.
    pub fn apply(&self, complaints: &[Complaint]) -> Vec<Complaint> {
        complaints
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring match over title, description and category.
/// An empty needle matches everything.
pub fn matches_search(complaint: &Complaint, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let needle = needle.to_lowercase();
    complaint.title.to_lowercase().contains(&needle)
        || complaint.description.to_lowercase().contains(&needle)
        || complaint.category.as_str().to_lowercase().contains(&needle)
}
