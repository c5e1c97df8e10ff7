//! Behaviour every task repository adapter must share.
//!
//! Each store's test binary calls these checks against its own repository,
//! so the in-memory, `SQLite` and `PostgreSQL` adapters are held to the same
//! contract.

use std::sync::Arc;

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use gestor_tareas::task::{
    domain::{NewTask, SortDirection, TaskChanges, TaskId, TaskSort, TaskSortField},
    ports::{TaskRepository, TaskRepositoryError},
};

/// Repository handle shared across spawned tasks.
pub type SharedRepository = Arc<dyn TaskRepository>;

fn due(offset_days: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 1)
        .and_then(|date| date.checked_add_days(Days::new(offset_days)))
        .expect("valid due date")
}

fn created(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn new_task(title: &str, hour: u32) -> NewTask {
    NewTask::new(title, None, due(0), created(hour))
}

pub async fn insert_assigns_ids_and_round_trips(repo: SharedRepository) {
    let first = repo
        .insert(&NewTask::new(
            "Buy groceries",
            Some("Fruit, bread and coffee".to_owned()),
            due(3),
            created(9),
        ))
        .await
        .expect("first insert should succeed");
    let second = repo
        .insert(&new_task("Walk the dog", 10))
        .await
        .expect("second insert should succeed");

    assert!(second.id() > first.id());
    let fetched = repo
        .find_by_id(first.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched, first);
    assert_eq!(fetched.description(), Some("Fruit, bread and coffee"));
    assert_eq!(fetched.due_date(), due(3));
    assert_eq!(fetched.created_at(), created(9));
}

pub async fn insert_rejects_duplicate_title(repo: SharedRepository) {
    repo.insert(&new_task("Buy groceries", 9))
        .await
        .expect("first insert should succeed");

    let result = repo.insert(&new_task("Buy groceries", 10)).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTitle(ref title)) if title == "Buy groceries"
    ));
    let all = repo.list(TaskSort::default()).await.expect("list should succeed");
    assert_eq!(all.len(), 1);
}

pub async fn find_by_id_returns_none_for_unknown_task(repo: SharedRepository) {
    let missing = TaskId::new(4242).expect("valid id");
    let found = repo.find_by_id(missing).await.expect("lookup should succeed");
    assert!(found.is_none());
}

pub async fn update_replaces_mutable_fields(repo: SharedRepository) {
    let original = repo
        .insert(&NewTask::new(
            "Buy groceries",
            Some("Fruit, bread and coffee".to_owned()),
            due(0),
            created(9),
        ))
        .await
        .expect("insert should succeed");
    let changes = TaskChanges::new("Buy groceries and milk", None, due(5));

    let updated = repo
        .update(original.id(), &changes)
        .await
        .expect("update should succeed");

    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.title(), "Buy groceries and milk");
    assert_eq!(updated.description(), None);
    assert_eq!(updated.due_date(), due(5));
    assert_eq!(updated.created_at(), original.created_at());
    let fetched = repo
        .find_by_id(original.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(updated));
}

pub async fn update_reports_missing_task(repo: SharedRepository) {
    let missing = TaskId::new(4242).expect("valid id");
    let changes = TaskChanges::new("Buy groceries", None, due(0));

    let result = repo.update(missing, &changes).await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == missing));
}

pub async fn update_rejects_title_of_another_task(repo: SharedRepository) {
    repo.insert(&new_task("Buy groceries", 9))
        .await
        .expect("insert should succeed");
    let other = repo
        .insert(&new_task("Walk the dog", 10))
        .await
        .expect("insert should succeed");

    let result = repo
        .update(other.id(), &TaskChanges::new("Buy groceries", None, due(1)))
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTitle(_))));
    let unchanged = repo
        .find_by_id(other.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(unchanged.title(), "Walk the dog");
}

pub async fn delete_reports_removal_and_never_reuses_ids(repo: SharedRepository) {
    let first = repo
        .insert(&new_task("Buy groceries", 9))
        .await
        .expect("insert should succeed");

    assert!(repo.delete(first.id()).await.expect("delete should succeed"));
    assert!(!repo.delete(first.id()).await.expect("delete should succeed"));

    let second = repo
        .insert(&new_task("Buy groceries", 10))
        .await
        .expect("title is free after delete");
    assert!(second.id() > first.id());
}

pub async fn title_exists_honours_exclusion(repo: SharedRepository) {
    let task = repo
        .insert(&new_task("Buy groceries", 9))
        .await
        .expect("insert should succeed");

    assert!(repo.title_exists("Buy groceries", None).await.expect("title check should succeed"));
    assert!(!repo
        .title_exists("Buy groceries", Some(task.id()))
        .await
        .expect("title check should succeed"));
    assert!(!repo.title_exists("buy groceries", None).await.expect("title check should succeed"));
    assert!(!repo.title_exists("Walk the dog", None).await.expect("title check should succeed"));
}

pub async fn list_orders_by_requested_field(repo: SharedRepository) {
    for (title, hour, offset) in [
        ("Charlie errand", 9, 2),
        ("Alpha errand", 11, 0),
        ("Bravo errand", 10, 1),
    ] {
        repo.insert(&NewTask::new(title, None, due(offset), created(hour)))
            .await
            .expect("insert should succeed");
    }

    let titles = |tasks: Vec<gestor_tareas::task::domain::Task>| -> Vec<String> {
        tasks.iter().map(|task| task.title().to_owned()).collect()
    };

    let newest_first = repo.list(TaskSort::default()).await.expect("list should succeed");
    assert_eq!(
        titles(newest_first),
        ["Alpha errand", "Bravo errand", "Charlie errand"]
    );

    let by_due_desc = repo
        .list(TaskSort::new(TaskSortField::DueDate, SortDirection::Descending))
        .await
        .expect("list should succeed");
    assert_eq!(
        titles(by_due_desc),
        ["Charlie errand", "Bravo errand", "Alpha errand"]
    );

    let by_id = repo
        .list(TaskSort::new(TaskSortField::Id, SortDirection::Ascending))
        .await
        .expect("list should succeed");
    assert_eq!(
        titles(by_id),
        ["Charlie errand", "Alpha errand", "Bravo errand"]
    );
}

/// Concurrent inserts of one title: exactly one wins, the rest see
/// `DuplicateTitle`.
pub async fn concurrent_inserts_admit_one_title(repo: SharedRepository) {
    const WRITERS: usize = 8;

    let mut handles = Vec::with_capacity(WRITERS);
    for hour in 0..WRITERS {
        let writer = Arc::clone(&repo);
        let created_hour = u32::try_from(hour).expect("small hour");
        handles.push(tokio::spawn(async move {
            writer.insert(&new_task("Buy groceries", created_hour)).await
        }));
    }

    let mut stored = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.expect("writer task should not panic") {
            Ok(_) => stored += 1,
            Err(TaskRepositoryError::DuplicateTitle(_)) => duplicates += 1,
            Err(other) => panic!("unexpected repository error: {other}"),
        }
    }

    assert_eq!(stored, 1);
    assert_eq!(duplicates, WRITERS - 1);
    let all = repo.list(TaskSort::default()).await.expect("list should succeed");
    assert_eq!(all.len(), 1);
}
