use chrono::{Local, NaiveDate};
use crate::models::{
    CreateProjectRequest, Project, ProjectKind, Task, TaskStatus, TodayStats,
    ToggleTaskRequest, UserProfile, WorkLogEntry,
};
use crate::progress;

/// In-memory owner of all projects and the user profile for the session.
///
/// All mutation goes through `create_project`, `toggle_task` and
/// `set_profile`; readers only ever get shared borrows, so the view layer
/// cannot change entities behind the store's back. Nothing is persisted:
/// state lives for exactly one run of the application.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    profile: Option<UserProfile>,
    next_id: u64,
}

impl ProjectStore {
    pub fn new() -> ProjectStore {
        ProjectStore::default()
    }

    /// Ids come from one monotonic counter shared by projects and tasks,
    /// so two tasks created in the same instant can never collide.
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Appends a new project built from a validated request.
    ///
    /// Every task starts as todo with no completion timestamp. Insertion
    /// order is creation order and is never changed afterwards.
    pub fn create_project(&mut self, req: CreateProjectRequest) -> &Project {
        let tasks: Vec<Task> = req
            .task_titles()
            .iter()
            .map(|title| Task {
                id: self.next_id(),
                title: title.clone(),
                status: TaskStatus::Todo,
                completed_at: None,
            })
            .collect();
        let project = Project {
            id: self.next_id(),
            title: req.title().to_string(),
            kind: req.kind(),
            description: req.description().map(str::to_string),
            due_date: req.due_date(),
            tasks,
            created_at: Local::now(),
        };
        let idx = self.projects.len();
        self.projects.push(project);
        &self.projects[idx]
    }

    /// Flips a task between todo and done.
    ///
    /// Marking a task done stamps `completed_at` with the current time;
    /// marking it todo again clears the stamp. Unknown project or task
    /// ids leave the store untouched, so a stale view can safely retry.
    pub fn toggle_task(&mut self, req: ToggleTaskRequest) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == req.project_id) else {
            return;
        };
        let Some(task) = project.tasks.iter_mut().find(|t| t.id == req.task_id) else {
            return;
        };
        match task.status {
            TaskStatus::Todo => {
                task.status = TaskStatus::Done;
                task.completed_at = Some(Local::now());
            }
            TaskStatus::Done => {
                task.status = TaskStatus::Todo;
                task.completed_at = None;
            }
        }
    }

    /// Read-only view of all projects in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Dashboard stats for the current local calendar day.
    pub fn today_stats(&self) -> TodayStats {
        self.today_stats_on(Local::now().date_naive())
    }

    /// Dashboard stats for an explicit day.
    pub fn today_stats_on(&self, day: NaiveDate) -> TodayStats {
        progress::stats_for_day(&self.projects, day)
    }

    /// Work-log entries derived from completed tasks, newest day first.
    pub fn work_log(&self) -> Vec<WorkLogEntry> {
        progress::work_log(&self.projects)
    }

    /// Replaces the user profile (onboarding completion and profile edits).
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }
}

/// Seeds a sample project for `taskive ui --demo`, with two tasks already
/// checked off so the dashboard has something to show.
pub fn seed_demo(store: &mut ProjectStore) {
    let tasks = [
        "Competitor analysis and benchmarking",
        "Draft the user journey map",
        "First wireframe pass",
        "Tech review meeting with the dev team",
    ]
    .map(str::to_string);
    let req = CreateProjectRequest::new(
        "Q4 promotion event page",
        ProjectKind::Project,
        Some("Landing page for the year-end promotion"),
        NaiveDate::from_ymd_opt(2026, 12, 31),
        &tasks,
    )
    .expect("demo request is well-formed");
    let (project_id, first, second) = {
        let p = store.create_project(req);
        (p.id, p.tasks[0].id, p.tasks[1].id)
    };
    store.toggle_task(ToggleTaskRequest { project_id, task_id: first });
    store.toggle_task(ToggleTaskRequest { project_id, task_id: second });
}
