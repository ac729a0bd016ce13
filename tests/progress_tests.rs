use chrono::{Local, NaiveDate, TimeZone};
use taskive::models::{Project, ProjectKind, Task, TaskStatus};
use taskive::progress::{ratio, stats_for_day, work_log};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task(id: u64, title: &str, done_on: Option<(NaiveDate, u32)>) -> Task {
    Task {
        id,
        title: title.into(),
        status: if done_on.is_some() {
            TaskStatus::Done
        } else {
            TaskStatus::Todo
        },
        completed_at: done_on.map(|(d, hour)| {
            Local
                .from_local_datetime(&d.and_hms_opt(hour, 0, 0).unwrap())
                .single()
                .unwrap()
        }),
    }
}

fn project(id: u64, title: &str, tasks: Vec<Task>) -> Project {
    Project {
        id,
        title: title.into(),
        kind: ProjectKind::Project,
        description: None,
        due_date: None,
        tasks,
        created_at: Local::now(),
    }
}

#[test]
fn test_ratio_bounds() {
    assert_eq!(ratio(0, 0), 0.0);
    assert_eq!(ratio(0, 4), 0.0);
    assert_eq!(ratio(4, 4), 1.0);
    assert_eq!(ratio(1, 2), 0.5);
    let r = ratio(3, 7);
    assert!((0.0..=1.0).contains(&r));
}

#[test]
fn test_stats_mix_daily_numerator_with_all_time_denominator() {
    let monday = day(2024, 6, 17);
    let tuesday = day(2024, 6, 18);
    let projects = vec![
        project(
            1,
            "Site",
            vec![
                task(10, "Done Monday", Some((monday, 10))),
                task(11, "Done Tuesday", Some((tuesday, 9))),
                task(12, "Still open", None),
            ],
        ),
        project(2, "Ops", vec![task(20, "Also open", None)]),
    ];

    let stats = stats_for_day(&projects, tuesday);
    assert_eq!(stats.completed_today, 1);
    // All four tasks count, not just Tuesday's.
    assert_eq!(stats.total_tasks, 4);
    assert_eq!(stats.progress_ratio, 0.25);

    let stats = stats_for_day(&projects, day(2024, 6, 19));
    assert_eq!(stats.completed_today, 0);
    assert_eq!(stats.total_tasks, 4);
    assert_eq!(stats.progress_ratio, 0.0);
}

#[test]
fn test_work_log_groups_by_day_and_project_newest_first() {
    let monday = day(2024, 6, 17);
    let tuesday = day(2024, 6, 18);
    let projects = vec![
        project(
            1,
            "Site",
            vec![
                task(10, "Wireframes", Some((monday, 14))),
                task(11, "Benchmarks", Some((monday, 9))),
                task(12, "Review", Some((tuesday, 11))),
            ],
        ),
        project(2, "Ops", vec![task(20, "Rotate keys", Some((monday, 16)))]),
    ];

    let log = work_log(&projects);
    assert_eq!(log.len(), 3);

    assert_eq!(log[0].date, tuesday);
    assert_eq!(log[0].project, "Site");
    assert_eq!(log[0].tasks, vec!["Review"]);

    assert_eq!(log[1].date, monday);
    assert_eq!(log[1].project, "Site");
    // Within an entry, tasks appear in completion order.
    assert_eq!(log[1].tasks, vec!["Benchmarks", "Wireframes"]);

    assert_eq!(log[2].date, monday);
    assert_eq!(log[2].project, "Ops");
    assert_eq!(log[2].tasks, vec!["Rotate keys"]);
}

#[test]
fn test_work_log_empty_without_completions() {
    let projects = vec![project(1, "Site", vec![task(10, "Open", None)])];
    assert!(work_log(&projects).is_empty());
}
