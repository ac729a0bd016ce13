use chrono::{Duration, Local, NaiveDate};
use taskive::models::{
    CreateProjectRequest, ProjectKind, RequestError, TaskStatus, ToggleTaskRequest, UserProfile,
};
use taskive::store::{seed_demo, ProjectStore};

fn launch_page_request() -> CreateProjectRequest {
    CreateProjectRequest::new(
        "Launch page",
        ProjectKind::Project,
        None,
        NaiveDate::from_ymd_opt(2024, 12, 31),
        &["Design".to_string(), "Review".to_string()],
    )
    .unwrap()
}

#[test]
fn test_created_project_starts_clean() {
    let mut store = ProjectStore::new();
    let project = store.create_project(launch_page_request());

    assert_eq!(project.title, "Launch page");
    assert_eq!(project.kind, ProjectKind::Project);
    assert_eq!(project.due_date, NaiveDate::from_ymd_opt(2024, 12, 31));
    assert_eq!(project.tasks.len(), 2);
    for task in &project.tasks {
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.completed_at.is_none());
    }
    assert_eq!(project.progress_ratio(), 0.0);
}

#[test]
fn test_task_ids_unique_within_project() {
    let mut store = ProjectStore::new();
    let project = store.create_project(launch_page_request());
    assert_ne!(project.tasks[0].id, project.tasks[1].id);
    assert_ne!(project.tasks[0].id, project.id);
}

#[test]
fn test_toggle_marks_done_and_updates_progress() {
    let mut store = ProjectStore::new();
    let (project_id, task_id) = {
        let p = store.create_project(launch_page_request());
        (p.id, p.tasks[0].id)
    };

    store.toggle_task(ToggleTaskRequest { project_id, task_id });

    let project = &store.projects()[0];
    let task = &project.tasks[0];
    assert_eq!(task.status, TaskStatus::Done);
    let stamped = task.completed_at.expect("done task carries a timestamp");
    assert!(Local::now() - stamped < Duration::seconds(5));
    assert_eq!(project.completed_count(), 1);
    assert_eq!(project.progress_ratio(), 0.5);
}

#[test]
fn test_toggle_twice_restores_original_state() {
    let mut store = ProjectStore::new();
    let (project_id, task_id) = {
        let p = store.create_project(launch_page_request());
        (p.id, p.tasks[0].id)
    };
    let before = store.projects()[0].clone();

    store.toggle_task(ToggleTaskRequest { project_id, task_id });
    store.toggle_task(ToggleTaskRequest { project_id, task_id });

    assert_eq!(store.projects()[0], before);
    assert!(store.projects()[0].tasks[0].completed_at.is_none());
}

#[test]
fn test_toggle_unknown_ids_is_a_noop() {
    let mut store = ProjectStore::new();
    let (project_id, task_id) = {
        let p = store.create_project(launch_page_request());
        (p.id, p.tasks[0].id)
    };
    let before = serde_json::to_string(store.projects()).unwrap();

    store.toggle_task(ToggleTaskRequest { project_id: 9999, task_id });
    store.toggle_task(ToggleTaskRequest { project_id, task_id: 9999 });

    let after = serde_json::to_string(store.projects()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_blank_task_titles_are_discarded() {
    let mut store = ProjectStore::new();
    let req = CreateProjectRequest::new(
        "Cleanup",
        ProjectKind::Recurring,
        None,
        None,
        &["".to_string(), "  ".to_string(), "Only task".to_string()],
    )
    .unwrap();
    let project = store.create_project(req);

    assert_eq!(project.tasks.len(), 1);
    assert_eq!(project.tasks[0].title, "Only task");
}

#[test]
fn test_invalid_requests_are_rejected_at_construction() {
    let err = CreateProjectRequest::new(
        "  ",
        ProjectKind::Project,
        None,
        None,
        &["Task".to_string()],
    )
    .unwrap_err();
    assert_eq!(err, RequestError::EmptyTitle);

    let err = CreateProjectRequest::new(
        "Title",
        ProjectKind::Project,
        None,
        None,
        &["".to_string(), "   ".to_string()],
    )
    .unwrap_err();
    assert_eq!(err, RequestError::NoTasks);
}

#[test]
fn test_kind_is_explicit_and_recurring_drops_due_date() {
    let req = CreateProjectRequest::new(
        "Weekly report",
        ProjectKind::Recurring,
        None,
        NaiveDate::from_ymd_opt(2024, 12, 31),
        &["Write".to_string()],
    )
    .unwrap();
    // The kind stays what the user chose even though a date was supplied.
    assert_eq!(req.kind(), ProjectKind::Recurring);
    assert_eq!(req.due_date(), None);
}

#[test]
fn test_insertion_order_is_preserved() {
    let mut store = ProjectStore::new();
    store.create_project(launch_page_request());
    let second = CreateProjectRequest::new(
        "Second",
        ProjectKind::Recurring,
        None,
        None,
        &["Task".to_string()],
    )
    .unwrap();
    let (project_id, task_id) = {
        let p = store.create_project(second);
        (p.id, p.tasks[0].id)
    };

    store.toggle_task(ToggleTaskRequest { project_id, task_id });

    let titles: Vec<&str> = store.projects().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Launch page", "Second"]);
    // The untouched first project is structurally unchanged.
    assert_eq!(store.projects()[0].completed_count(), 0);
}

#[test]
fn test_today_stats_counts_todays_completions_only() {
    let mut store = ProjectStore::new();
    let (project_id, task_id) = {
        let p = store.create_project(launch_page_request());
        (p.id, p.tasks[0].id)
    };
    store.toggle_task(ToggleTaskRequest { project_id, task_id });

    let today = Local::now().date_naive();
    let stats = store.today_stats_on(today);
    assert_eq!(stats.completed_today, 1);
    assert_eq!(stats.total_tasks, 2);
    assert_eq!(stats.progress_ratio, 0.5);

    // Tomorrow the completion falls out of the numerator, but the
    // denominator still counts every task.
    let stats = store.today_stats_on(today + Duration::days(1));
    assert_eq!(stats.completed_today, 0);
    assert_eq!(stats.total_tasks, 2);
    assert_eq!(stats.progress_ratio, 0.0);
}

#[test]
fn test_today_stats_empty_store() {
    let store = ProjectStore::new();
    let stats = store.today_stats();
    assert_eq!(stats.completed_today, 0);
    assert_eq!(stats.total_tasks, 0);
    assert_eq!(stats.progress_ratio, 0.0);
}

#[test]
fn test_profile_set_update_and_clamping() {
    let mut store = ProjectStore::new();
    assert!(store.profile().is_none());

    store.set_profile(UserProfile::new(
        "Jamie".into(),
        "Backend developer".into(),
        "3 years".into(),
        8,
    ));
    assert_eq!(store.profile().unwrap().name, "Jamie");

    store.set_profile(UserProfile::new(
        "Jamie".into(),
        "Backend developer".into(),
        "3 years".into(),
        200,
    ));
    assert_eq!(
        store.profile().unwrap().target_work_hours,
        UserProfile::MAX_WORK_HOURS
    );

    store.set_profile(UserProfile::new(
        "Jamie".into(),
        "Backend developer".into(),
        "3 years".into(),
        0,
    ));
    assert_eq!(
        store.profile().unwrap().target_work_hours,
        UserProfile::MIN_WORK_HOURS
    );
}

#[test]
fn test_demo_seed() {
    let mut store = ProjectStore::new();
    seed_demo(&mut store);

    assert_eq!(store.projects().len(), 1);
    let project = &store.projects()[0];
    assert_eq!(project.total_count(), 4);
    assert_eq!(project.completed_count(), 2);
    assert_eq!(project.progress_ratio(), 0.5);
}
