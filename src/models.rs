use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Completion state of a task.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Done,
}

/// Represents a single task inside a project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier, assigned at creation, never reused.
    pub id: u64,
    /// Display text for the task. Never empty once stored.
    pub title: String,
    /// Whether the task is still open or done.
    pub status: TaskStatus,
    /// Set exactly when `status` is `Done`, cleared on the way back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Whether a project is a one-off deliverable or recurring work.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// One-off project, may carry a due date.
    Project,
    /// Recurring work, no due date.
    Recurring,
}

/// Represents a project: a titled, ordered collection of tasks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: u64,
    /// The project title. Never empty once stored.
    pub title: String,
    /// One-off or recurring.
    pub kind: ProjectKind,
    /// Optional free-text description from the creation form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Due date; only present on one-off projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Tasks in creation order. Always at least one.
    pub tasks: Vec<Task>,
    /// Timestamp when the project was created.
    pub created_at: DateTime<Local>,
}

impl Project {
    /// Number of tasks marked done.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_done()).count()
    }

    /// Total number of tasks.
    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Fraction of tasks done, in [0, 1]. Zero for an empty task list.
    pub fn progress_ratio(&self) -> f64 {
        crate::progress::ratio(self.completed_count(), self.total_count())
    }
}

/// User profile captured during onboarding and editable afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub job_title: String,
    /// Free text, e.g. "3 years".
    pub experience_years: String,
    /// Daily work-hour target, clamped to 1..=16.
    pub target_work_hours: u8,
}

impl UserProfile {
    pub const MIN_WORK_HOURS: u8 = 1;
    pub const MAX_WORK_HOURS: u8 = 16;
    pub const DEFAULT_WORK_HOURS: u8 = 8;

    pub fn new(
        name: String,
        job_title: String,
        experience_years: String,
        target_work_hours: u8,
    ) -> UserProfile {
        UserProfile {
            name,
            job_title,
            experience_years,
            target_work_hours: target_work_hours
                .clamp(Self::MIN_WORK_HOURS, Self::MAX_WORK_HOURS),
        }
    }
}

/// Why a creation request was rejected at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("project title must not be empty")]
    EmptyTitle,
    #[error("a project needs at least one non-empty task")]
    NoTasks,
}

/// Validated intent to create a project.
///
/// Construction trims the title and drops blank task titles, so a request
/// that exists always yields a well-formed project. The due date is only
/// kept for one-off projects; the kind is always the caller's explicit
/// choice and never inferred from the presence of a due date.
#[derive(Debug, Clone)]
pub struct CreateProjectRequest {
    title: String,
    kind: ProjectKind,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    task_titles: Vec<String>,
}

impl CreateProjectRequest {
    pub fn new(
        title: &str,
        kind: ProjectKind,
        description: Option<&str>,
        due_date: Option<NaiveDate>,
        task_titles: &[String],
    ) -> Result<CreateProjectRequest, RequestError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RequestError::EmptyTitle);
        }
        let tasks: Vec<String> = task_titles
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if tasks.is_empty() {
            return Err(RequestError::NoTasks);
        }
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        Ok(CreateProjectRequest {
            title: title.to_string(),
            kind,
            description,
            due_date: match kind {
                ProjectKind::Project => due_date,
                ProjectKind::Recurring => None,
            },
            task_titles: tasks,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn task_titles(&self) -> &[String] {
        &self.task_titles
    }
}

/// Intent to flip a task between todo and done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleTaskRequest {
    pub project_id: u64,
    pub task_id: u64,
}

/// Today's dashboard numbers.
///
/// `total_tasks` counts every task in the store while `completed_today`
/// only counts today's completions, so the ratio mixes windows. This
/// mirrors the observed product behavior and is kept as is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TodayStats {
    pub completed_today: usize,
    pub total_tasks: usize,
    pub progress_ratio: f64,
}

/// One day of completed work within one project, for the log view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkLogEntry {
    pub date: NaiveDate,
    pub project: String,
    pub tasks: Vec<String>,
}
