use chrono::NaiveDate;
use ratatui::widgets::TableState;
use crate::models::{
    CreateProjectRequest, ProjectKind, ToggleTaskRequest, UserProfile,
};
use crate::store::{seed_demo, ProjectStore};

/// Job titles offered during onboarding and profile editing.
pub const JOB_OPTIONS: &[&str] = &[
    "Product manager",
    "Backend developer",
    "Frontend developer",
    "Full-stack developer",
    "UI/UX designer",
    "Data analyst",
    "DevOps engineer",
];

#[derive(PartialEq)]
pub enum Screen {
    Onboarding,
    Main,
}

#[derive(PartialEq, Clone, Copy)]
pub enum View {
    Dashboard,
    Logs,
    Profile,
}

#[derive(Debug, PartialEq)]
pub enum InputMode {
    Normal,
    /// Multi-step "new project" wizard.
    Creating,
    /// Single-field profile edit.
    Editing,
}

#[derive(Clone, Copy)]
pub enum ProfileField {
    Name,
    Experience,
    Job,
    Hours,
}

/// One selectable row of the dashboard list.
pub enum DisplayRow {
    Project(u64),
    Task { project_id: u64, task_id: u64 },
}

/// Collected answers of the onboarding wizard.
///
/// Steps: 0 name, 1 experience, 2 job title, 3 target hours, 4 summary.
#[derive(Default)]
pub struct OnboardState {
    pub step: usize,
    pub name: String,
    pub experience: String,
    pub job: String,
    pub hours: u8,
}

/// Collected answers of the "new project" wizard.
///
/// Steps: 0 title, 1 kind, 2 description, 3 due date (one-off only),
/// 4 task titles (empty entry submits).
pub struct CreateState {
    pub step: usize,
    pub title: String,
    pub kind: ProjectKind,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub tasks: Vec<String>,
}

impl Default for CreateState {
    fn default() -> CreateState {
        CreateState {
            step: 0,
            title: String::new(),
            kind: ProjectKind::Project,
            description: String::new(),
            due_date: None,
            tasks: Vec::new(),
        }
    }
}

pub struct App {
    pub store: ProjectStore,
    pub screen: Screen,
    pub view: View,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub rows: Vec<DisplayRow>,
    pub state: TableState,
    pub onboard: OnboardState,
    pub create: CreateState,
    pub profile_field: ProfileField,
    /// One-shot feedback line shown in place of the help bar.
    pub status: Option<String>,
}

impl App {
    /// Creates the app in the onboarding screen, optionally preloaded
    /// with the demo project.
    pub fn new(demo: bool) -> App {
        let mut store = ProjectStore::new();
        if demo {
            seed_demo(&mut store);
        }
        let mut app = App {
            store,
            screen: Screen::Onboarding,
            view: View::Dashboard,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            rows: Vec::new(),
            state: TableState::default(),
            onboard: OnboardState {
                hours: UserProfile::DEFAULT_WORK_HOURS,
                ..OnboardState::default()
            },
            create: CreateState::default(),
            profile_field: ProfileField::Name,
            status: None,
        };
        app.rebuild_rows();
        app
    }

    /// Rebuilds the flat dashboard row list from the store.
    pub fn rebuild_rows(&mut self) {
        self.rows.clear();
        for project in self.store.projects() {
            self.rows.push(DisplayRow::Project(project.id));
            for task in &project.tasks {
                self.rows.push(DisplayRow::Task {
                    project_id: project.id,
                    task_id: task.id,
                });
            }
        }
        if self.rows.is_empty() {
            self.state.select(None);
        } else if let Some(i) = self.state.selected() {
            if i >= self.rows.len() {
                self.state.select(Some(self.rows.len() - 1));
            }
        } else {
            self.state.select(Some(0));
        }
    }

    /// Selects the next dashboard row, wrapping around.
    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i >= self.rows.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Selects the previous dashboard row, wrapping around.
    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// Cycles Dashboard -> Logs -> Profile -> Dashboard.
    pub fn next_view(&mut self) {
        self.view = match self.view {
            View::Dashboard => View::Logs,
            View::Logs => View::Profile,
            View::Profile => View::Dashboard,
        };
        self.status = None;
    }

    /// Toggles the task under the cursor. Project header rows are inert.
    pub fn toggle_selected(&mut self) {
        let Some(i) = self.state.selected() else { return };
        if let Some(DisplayRow::Task { project_id, task_id }) = self.rows.get(i) {
            self.store.toggle_task(ToggleTaskRequest {
                project_id: *project_id,
                task_id: *task_id,
            });
            self.rebuild_rows();
        }
    }

    /// Opens the "new project" wizard.
    pub fn start_create(&mut self) {
        self.input_mode = InputMode::Creating;
        self.create = CreateState::default();
        self.input_buffer.clear();
        self.status = None;
    }

    /// Opens a profile field for editing, prefilled with the current value.
    pub fn start_profile_edit(&mut self, field: ProfileField) {
        let Some(profile) = self.store.profile() else { return };
        self.input_buffer = match field {
            ProfileField::Name => profile.name.clone(),
            ProfileField::Experience => profile.experience_years.clone(),
            ProfileField::Job => profile.job_title.clone(),
            ProfileField::Hours => profile.target_work_hours.to_string(),
        };
        self.profile_field = field;
        self.input_mode = InputMode::Editing;
        self.status = None;
    }

    /// Advances the onboarding wizard by one step.
    pub fn onboard_enter(&mut self) {
        match self.onboard.step {
            0 => {
                if !self.input_buffer.trim().is_empty() {
                    self.onboard.name = self.input_buffer.trim().to_string();
                    self.onboard.step += 1;
                    self.input_buffer.clear();
                }
            }
            1 => {
                if !self.input_buffer.trim().is_empty() {
                    self.onboard.experience = self.input_buffer.trim().to_string();
                    self.onboard.step += 1;
                    self.input_buffer.clear();
                }
            }
            2 => {
                // A digit picks from the option list, anything else is
                // taken verbatim.
                let trimmed = self.input_buffer.trim();
                let job = match trimmed.parse::<usize>() {
                    Ok(n) if (1..=JOB_OPTIONS.len()).contains(&n) => {
                        JOB_OPTIONS[n - 1].to_string()
                    }
                    _ => trimmed.to_string(),
                };
                if !job.is_empty() {
                    self.onboard.job = job;
                    self.onboard.step += 1;
                    self.input_buffer.clear();
                }
            }
            3 => {
                self.onboard.hours = self
                    .input_buffer
                    .trim()
                    .parse()
                    .unwrap_or(UserProfile::DEFAULT_WORK_HOURS);
                self.onboard.step += 1;
                self.input_buffer.clear();
            }
            _ => {
                self.store.set_profile(UserProfile::new(
                    self.onboard.name.clone(),
                    self.onboard.job.clone(),
                    self.onboard.experience.clone(),
                    self.onboard.hours,
                ));
                self.screen = Screen::Main;
                self.input_buffer.clear();
            }
        }
    }

    /// Steps the onboarding wizard back one step.
    pub fn onboard_back(&mut self) {
        if self.onboard.step > 0 {
            self.onboard.step -= 1;
            self.input_buffer.clear();
        }
    }

    /// Handles Enter while the create wizard or a profile edit is open.
    pub fn handle_input(&mut self) {
        match self.input_mode {
            InputMode::Creating => self.handle_creating_input(),
            InputMode::Editing => self.handle_editing_input(),
            InputMode::Normal => {}
        }
    }

    fn handle_creating_input(&mut self) {
        match self.create.step {
            0 => {
                // Title is required, as in the creation form.
                if !self.input_buffer.trim().is_empty() {
                    self.create.title = self.input_buffer.trim().to_string();
                    self.create.step += 1;
                    self.input_buffer.clear();
                }
            }
            1 => {
                self.create.kind = match self.input_buffer.trim() {
                    "r" | "R" | "recurring" => ProjectKind::Recurring,
                    _ => ProjectKind::Project,
                };
                self.create.step += 1;
                self.input_buffer.clear();
            }
            2 => {
                self.create.description = self.input_buffer.trim().to_string();
                self.create.step += if self.create.kind == ProjectKind::Project {
                    1
                } else {
                    // Recurring work has no due date, skip that step.
                    2
                };
                self.input_buffer.clear();
            }
            3 => {
                let trimmed = self.input_buffer.trim();
                if trimmed.is_empty() {
                    self.create.due_date = None;
                } else {
                    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                        Ok(d) => self.create.due_date = Some(d),
                        Err(_) => {
                            self.status =
                                Some(format!("Invalid date '{}', use YYYY-MM-DD", trimmed));
                            return;
                        }
                    }
                }
                self.create.step += 1;
                self.input_buffer.clear();
            }
            _ => {
                if !self.input_buffer.trim().is_empty() {
                    // Another task line; stay on this step.
                    self.create.tasks.push(self.input_buffer.trim().to_string());
                    self.input_buffer.clear();
                    return;
                }
                self.submit_create();
            }
        }
    }

    fn submit_create(&mut self) {
        let description =
            (!self.create.description.is_empty()).then_some(self.create.description.as_str());
        match CreateProjectRequest::new(
            &self.create.title,
            self.create.kind,
            description,
            self.create.due_date,
            &self.create.tasks,
        ) {
            Ok(req) => {
                let title = self.store.create_project(req).title.clone();
                self.status = Some(format!("Project '{}' created", title));
                self.input_mode = InputMode::Normal;
                self.rebuild_rows();
            }
            Err(e) => {
                // Stay on the task step so the user can add one.
                self.status = Some(e.to_string());
            }
        }
    }

    fn handle_editing_input(&mut self) {
        let Some(profile) = self.store.profile().cloned() else {
            self.input_mode = InputMode::Normal;
            return;
        };
        let value = self.input_buffer.trim().to_string();
        let updated = match self.profile_field {
            ProfileField::Name if !value.is_empty() => UserProfile { name: value, ..profile },
            ProfileField::Experience if !value.is_empty() => {
                UserProfile { experience_years: value, ..profile }
            }
            ProfileField::Job if !value.is_empty() => {
                let job = match value.parse::<usize>() {
                    Ok(n) if (1..=JOB_OPTIONS.len()).contains(&n) => {
                        JOB_OPTIONS[n - 1].to_string()
                    }
                    _ => value,
                };
                UserProfile { job_title: job, ..profile }
            }
            ProfileField::Hours => match value.parse::<u8>() {
                Ok(h) => UserProfile::new(
                    profile.name.clone(),
                    profile.job_title.clone(),
                    profile.experience_years.clone(),
                    h,
                ),
                Err(_) => profile,
            },
            _ => profile,
        };
        self.store.set_profile(updated);
        self.status = Some("Profile updated".to_string());
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    /// Cancels the current wizard or edit.
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.status = None;
    }
}
