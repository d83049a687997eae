use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::member::FamilyMember;

pub const DEFAULT_CATEGORY: &str = "general";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_DUE: &str = "due";

/// An activity as returned by `GET /activities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub activity_id: Id<Activity>,
    pub name: String,
    pub assigned_to: Id<FamilyMember>,
    pub frequency: String,
    pub status: String,
    pub is_overdue: bool,
    pub is_completed: bool,
    #[serde(default)]
    pub category: Option<String>,
}

/// A recurring activity held in its owning member's list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub activity_id: Id<Activity>,
    pub name: String,
    pub assigned_to: Id<FamilyMember>,
    pub frequency: String,
    pub status: String,
    pub is_overdue: bool,
    pub is_completed: bool,
    pub category: String,
}

/// The mutable part of an activity, captured before an optimistic toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionState {
    pub is_completed: bool,
    pub is_overdue: bool,
    pub status: String,
}

impl Activity {
    pub fn from_record(record: ActivityRecord) -> Self {
        let category = match record.category {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY.to_string(),
        };
        Self {
            activity_id: record.activity_id,
            name: record.name,
            assigned_to: record.assigned_to,
            frequency: record.frequency,
            status: record.status,
            is_overdue: record.is_overdue,
            is_completed: record.is_completed,
            category,
        }
    }

    pub fn completion_state(&self) -> CompletionState {
        CompletionState {
            is_completed: self.is_completed,
            is_overdue: self.is_overdue,
            status: self.status.clone(),
        }
    }

    /// Flips completion. A completed activity is never overdue.
    /// Returns the new `is_completed` value.
    pub fn toggle_completion(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.status = if self.is_completed {
            STATUS_COMPLETED.to_string()
        } else {
            STATUS_DUE.to_string()
        };
        if self.is_completed {
            self.is_overdue = false;
        }
        self.is_completed
    }

    pub fn restore(&mut self, state: CompletionState) {
        self.is_completed = state.is_completed;
        self.is_overdue = state.is_overdue;
        self.status = state.status;
    }
}
