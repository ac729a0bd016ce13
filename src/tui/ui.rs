use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table},
    Frame,
};
use crate::models::ProjectKind;
use super::app::{App, DisplayRow, InputMode, ProfileField, Screen, View, JOB_OPTIONS};

pub fn ui(f: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Onboarding => draw_onboarding(f, app),
        Screen::Main => draw_main(f, app),
    }
}

fn draw_onboarding(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 14, f.area());
    f.render_widget(Clear, area);

    let card = Block::default()
        .borders(Borders::ALL)
        .title("Taskive — Welcome");
    let inner = card.inner(area);
    f.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // step dots
            Constraint::Length(1),
            Constraint::Min(5),    // prompt / summary
            Constraint::Length(3), // input box
            Constraint::Length(1), // help
        ])
        .split(inner);

    let dots: String = (0..5)
        .map(|i| if i <= app.onboard.step { "● " } else { "○ " })
        .collect();
    f.render_widget(
        Paragraph::new(dots)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Blue)),
        chunks[0],
    );

    let prompt: Vec<String> = match app.onboard.step {
        0 => vec![
            "Every piece of your work becomes a career asset.".to_string(),
            String::new(),
            "What is your name?".to_string(),
        ],
        1 => vec!["How many years of experience do you have? (e.g. 3 years)".to_string()],
        2 => {
            let mut lines = vec!["Pick your job title (number or free text):".to_string()];
            for (i, job) in JOB_OPTIONS.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, job));
            }
            lines
        }
        3 => vec!["Daily work-hour target (1-16, Enter for 8):".to_string()],
        _ => vec![
            "All set! Press Enter to start your first project.".to_string(),
            String::new(),
            format!("  Name:       {}", app.onboard.name),
            format!("  Job:        {}", app.onboard.job),
            format!("  Experience: {}", app.onboard.experience),
            format!("  Target:     {}h/day", app.onboard.hours),
        ],
    };
    f.render_widget(Paragraph::new(prompt.join("\n")), chunks[2]);

    if app.onboard.step < 4 {
        let input = Paragraph::new(app.input_buffer.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(input, chunks[3]);
    }

    f.render_widget(
        Paragraph::new("Enter: Next | Esc: Back | Ctrl-C: Quit")
            .style(Style::default().fg(Color::Gray)),
        chunks[4],
    );
}

fn draw_main(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // header with today's progress
            Constraint::Min(0),    // view body
            Constraint::Length(3), // help / status
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.view {
        View::Dashboard => draw_dashboard(f, app, chunks[1]),
        View::Logs => draw_logs(f, app, chunks[1]),
        View::Profile => draw_profile(f, app, chunks[1]),
    }

    let help_text = match app.input_mode {
        InputMode::Normal => match app.view {
            View::Dashboard => {
                "q: Quit | Tab: Switch View | j/k: Move | Space: Toggle Task | a: New Project"
            }
            View::Logs => "q: Quit | Tab: Switch View",
            View::Profile => {
                "q: Quit | Tab: Switch View | n: Name | e: Experience | o: Job | h: Hours"
            }
        },
        InputMode::Creating => "Enter: Next / Add Task (empty to finish) | Esc: Cancel",
        InputMode::Editing => "Enter: Save | Esc: Cancel",
    };
    let footer = match &app.status {
        Some(msg) => Paragraph::new(msg.as_str()).style(Style::default().fg(Color::Yellow)),
        None => Paragraph::new(help_text).style(Style::default().fg(Color::Gray)),
    };
    f.render_widget(footer.block(Block::default().borders(Borders::ALL)), chunks[2]);

    // Render the input popup if a wizard or edit is open
    if app.input_mode != InputMode::Normal {
        let area = centered_rect(60, 3, f.area());
        f.render_widget(Clear, area);

        let title_string;
        let title = match app.input_mode {
            InputMode::Creating => match app.create.step {
                0 => "New Project: Title",
                1 => "New Project: Kind (p = one-off, r = recurring)",
                2 => "New Project: Description (optional)",
                3 => "New Project: Due Date YYYY-MM-DD (optional)",
                _ => {
                    title_string =
                        format!("New Project: Task {} (empty to finish)", app.create.tasks.len() + 1);
                    title_string.as_str()
                }
            },
            InputMode::Editing => match app.profile_field {
                ProfileField::Name => "Edit Name",
                ProfileField::Experience => "Edit Experience",
                ProfileField::Job => "Edit Job (number or free text)",
                ProfileField::Hours => "Edit Target Hours (1-16)",
            },
            InputMode::Normal => "",
        };

        let input = Paragraph::new(app.input_buffer.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(input, area);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.store.today_stats();
    let name = app
        .store
        .profile()
        .map(|p| p.name.as_str())
        .unwrap_or("there");
    let view_label = match app.view {
        View::Dashboard => "Dashboard",
        View::Logs => "Work Log",
        View::Profile => "Profile",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Taskive — {}", view_label));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(format!("Hello, {}! Make today count.", name)),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(format!(
            "Today: {} done / {} tasks | {} projects",
            stats.completed_today,
            stats.total_tasks,
            app.store.projects().len()
        ))
        .style(Style::default().fg(Color::Gray)),
        rows[1],
    );

    let percent = (stats.progress_ratio * 100.0).round() as u16;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue))
        .percent(percent.min(100))
        .label(format!("{}%", percent));
    f.render_widget(gauge, rows[2]);
}

fn draw_dashboard(f: &mut Frame, app: &mut App, area: Rect) {
    if app.store.projects().is_empty() {
        let empty = Paragraph::new(
            "\nNo projects yet.\n\nPress 'a' to break your first project into tasks.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Projects"));
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = app
        .rows
        .iter()
        .filter_map(|row| match row {
            DisplayRow::Project(id) => {
                let project = app.store.projects().iter().find(|p| p.id == *id)?;
                let kind = match project.kind {
                    ProjectKind::Project => "project",
                    ProjectKind::Recurring => "recurring",
                };
                let due = project
                    .due_date
                    .map(|d| format!("due {}", d))
                    .unwrap_or_default();
                let percent = (project.progress_ratio() * 100.0).round();
                Some(
                    Row::new(vec![
                        Cell::from(project.title.clone()),
                        Cell::from(kind),
                        Cell::from(due),
                        Cell::from(format!(
                            "{}/{}",
                            project.completed_count(),
                            project.total_count()
                        )),
                        Cell::from(format!("{}%", percent)),
                    ])
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                )
            }
            DisplayRow::Task { project_id, task_id } => {
                let project = app.store.projects().iter().find(|p| p.id == *project_id)?;
                let task = project.tasks.iter().find(|t| t.id == *task_id)?;
                let marker = if task.is_done() { "  [x]" } else { "  [ ]" };
                let style = if task.is_done() {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                let done_at = task
                    .completed_at
                    .map(|at| at.format("%H:%M").to_string())
                    .unwrap_or_default();
                Some(
                    Row::new(vec![
                        Cell::from(format!("{} {}", marker, task.title)),
                        Cell::from(""),
                        Cell::from(done_at),
                        Cell::from(""),
                        Cell::from(""),
                    ])
                    .style(style),
                )
            }
        })
        .collect();

    let widths = [
        Constraint::Min(30),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Project / Task", "Kind", "Due", "Done", "Prog"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title("Projects"))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let entries = app.store.work_log();
    if entries.is_empty() {
        let empty = Paragraph::new("\nNo work logged yet.\n\nFinish a task and it shows up here.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Work Log"));
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = entries
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(e.date.to_string()),
                Cell::from(e.project.clone()),
                Cell::from(e.tasks.join(", ")),
                Cell::from(e.tasks.len().to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(28),
        Constraint::Min(30),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Date", "Project", "Completed", "#"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title("Work Log"));

    f.render_widget(table, area);
}

fn draw_profile(f: &mut Frame, app: &App, area: Rect) {
    let body = match app.store.profile() {
        Some(p) => {
            let mut lines = vec![
                format!("Name:        {}", p.name),
                format!("Job:         {}", p.job_title),
                format!("Experience:  {}", p.experience_years),
                format!("Target:      {}h/day", p.target_work_hours),
                String::new(),
                "Job options:".to_string(),
            ];
            for (i, job) in JOB_OPTIONS.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, job));
            }
            lines.join("\n")
        }
        None => "No profile set.".to_string(),
    };

    let widget = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title("Profile"));
    f.render_widget(widget, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(r.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(r.height.saturating_sub(height) / 2),
        ].as_ref())
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ].as_ref())
        .split(popup_layout[1])[1]
}
