// src/models/task.rs

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Board column membership is a pure function of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Backlog,
    InProgress,
    Done,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Backlog => write!(f, "Backlog"),
            Status::InProgress => write!(f, "In Progress"),
            Status::Done => write!(f, "Done"),
        }
    }
}

/// A task as held by the controller and exchanged with the remote store.
///
/// `id` is assigned by the store on creation and never changes afterwards.
/// `assigned_user` is the user's display name, not a foreign key; renaming a
/// user does not touch existing tasks. `due_date` is validated on entry and
/// never re-validated on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_hours: f64,
    pub assigned_user: String,
    pub status: Status,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_token: Option<String>,
}

/// Create payload: a task minus its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_hours: f64,
    pub assigned_user: String,
    pub status: Status,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_token: Option<String>,
}

impl TaskDraft {
    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            name: self.name,
            description: self.description,
            priority: self.priority,
            estimated_hours: self.estimated_hours,
            assigned_user: self.assigned_user,
            status: self.status,
            due_date: self.due_date,
            notification_token: self.notification_token,
        }
    }
}

/// Update payload: only the supplied fields are written; the rest of the
/// record keeps its prior values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_token: Option<String>,
}

impl Task {
    /// Merge a patch into this record. Supplied fields overwrite, everything
    /// else (including the id) is retained.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(estimated_hours) = patch.estimated_hours {
            self.estimated_hours = estimated_hours;
        }
        if let Some(assigned_user) = patch.assigned_user {
            self.assigned_user = assigned_user;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(notification_token) = patch.notification_token {
            self.notification_token = Some(notification_token);
        }
    }
}
