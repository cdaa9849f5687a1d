//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not yet completed
    Pending,
    /// Completed
    Done,
}

impl TaskStatus {
    /// Get the text label as it appears in the task file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A task. Field order matches the on-disk record: id, title, status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID, assigned at creation, never reused after deletions
    pub id: u32,

    /// Task title, immutable after creation
    pub title: String,

    /// Current status
    pub status: TaskStatus,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: TaskStatus::Pending,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Mark the task as done. One-way and idempotent.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Done;
    }
}
