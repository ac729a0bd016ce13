use chrono::NaiveDate;
use crate::models::{Project, Task, TodayStats, WorkLogEntry};

/// Completion ratio in [0, 1]. Returns 0.0 for an empty denominator.
pub fn ratio(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64
    }
}

/// Computes the dashboard stats for the given calendar day.
///
/// The numerator counts tasks completed on `day` (local time); the
/// denominator counts every task across all projects regardless of age.
pub fn stats_for_day(projects: &[Project], day: NaiveDate) -> TodayStats {
    let completed_today = projects
        .iter()
        .flat_map(|p| &p.tasks)
        .filter(|t| {
            t.is_done()
                && t.completed_at
                    .map(|at| at.date_naive() == day)
                    .unwrap_or(false)
        })
        .count();
    let total_tasks = projects.iter().map(|p| p.tasks.len()).sum();
    TodayStats {
        completed_today,
        total_tasks,
        progress_ratio: ratio(completed_today, total_tasks),
    }
}

/// Derives the work log from completed tasks: one entry per (day, project)
/// pair, tasks in completion order within the entry, newest day first.
/// Projects keep their store order within the same day.
pub fn work_log(projects: &[Project]) -> Vec<WorkLogEntry> {
    let mut days: Vec<NaiveDate> = projects
        .iter()
        .flat_map(|p| &p.tasks)
        .filter_map(|t| t.completed_at.map(|at| at.date_naive()))
        .collect();
    days.sort();
    days.dedup();
    days.reverse();

    let mut entries = Vec::new();
    for day in days {
        for project in projects {
            let mut done: Vec<&Task> = project
                .tasks
                .iter()
                .filter(|t| {
                    t.completed_at
                        .map(|at| at.date_naive() == day)
                        .unwrap_or(false)
                })
                .collect();
            if done.is_empty() {
                continue;
            }
            done.sort_by_key(|t| t.completed_at);
            entries.push(WorkLogEntry {
                date: day,
                project: project.title.clone(),
                tasks: done.iter().map(|t| t.title.clone()).collect(),
            });
        }
    }
    entries
}
