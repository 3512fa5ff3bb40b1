use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A project the employee is assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /projects` answers either `{ "projects": [...] }` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProjectsPayload {
    Bare(Vec<Project>),
    Wrapped {
        #[serde(default)]
        projects: Option<Vec<Project>>,
    },
}

impl ProjectsPayload {
    pub fn into_projects(self) -> Vec<Project> {
        match self {
            ProjectsPayload::Bare(list) => list,
            ProjectsPayload::Wrapped { projects } => projects.unwrap_or_default(),
        }
    }
}

/// A task inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Envelope of `GET /projects/{id}/tasks`.
#[derive(Debug, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}

/// The statuses an employee may set on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum TaskStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Wire text, also used for display.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}
