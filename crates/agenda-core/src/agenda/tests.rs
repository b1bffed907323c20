//! Tests for the agenda module.

use jiff::{Zoned, civil::date, tz::TimeZone};
use tempfile::TempDir;

use super::*;
use crate::{
    db::Database,
    error::AgendaError,
    models::{AUTO_CLEANUP_REASON, LogAction, Priority, TASKS_COLLECTION},
    params::{AddTask, Id, SetLink, SetPercentage, SetPriority},
    storage::{CACHED_TASKS_KEY, LAST_WEEK_KEY},
    store::{DocumentStore, KeyValueStore},
};

/// Helper function to create a test agenda
async fn create_test_agenda() -> (TempDir, Agenda) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let agenda = AgendaBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_storage_path(Some(temp_dir.path().join("local.json")))
        .build()
        .await
        .expect("Failed to create agenda");
    (temp_dir, agenda)
}

async fn add(agenda: &mut Agenda, text: &str) -> Task {
    agenda
        .add_task(&AddTask {
            text: text.to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to add task")
}

/// Monday 2026-10-19 09:00 UTC, the first day of 2026-W43.
fn next_monday() -> Zoned {
    date(2026, 10, 19)
        .at(9, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap()
}

#[tokio::test]
async fn test_add_task_trims_and_logs() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;

    let task = agenda
        .add_task(&AddTask {
            text: "  Buy milk  ".to_string(),
            description: Some("   ".to_string()),
            link: Some(" https://example.com/milk ".to_string()),
            priority: Some(Priority::High),
        })
        .await
        .expect("Failed to add task");

    assert!(task.id > 0);
    assert_eq!(task.text, "Buy milk");
    assert_eq!(task.description, None);
    assert_eq!(task.link.as_deref(), Some("https://example.com/milk"));

    assert_eq!(agenda.tasks().len(), 1);
    assert_eq!(agenda.tasks()[0], task);
    assert_eq!(agenda.logs().len(), 1);
    assert_eq!(agenda.logs()[0].action, LogAction::Added);
    assert_eq!(agenda.logs()[0].task_title, "Buy milk");
}

#[tokio::test]
async fn test_add_blank_task_is_rejected() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;

    let result = agenda
        .add_task(&AddTask {
            text: "   ".to_string(),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AgendaError::InvalidInput { .. })));
    agenda.reload().await;
    assert!(agenda.tasks().is_empty());
    assert!(agenda.logs().is_empty());
}

#[tokio::test]
async fn test_toggle_forces_full_percentage_and_reopen_keeps_it() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    let task = add(&mut agenda, "Write report").await;

    agenda
        .set_percentage(&SetPercentage {
            id: task.id,
            percentage: 30,
        })
        .await
        .unwrap();

    let done = agenda.toggle_task(&Id { id: task.id }).await.unwrap();
    assert!(done.completed);
    assert_eq!(done.percentage(), 100);

    let reopened = agenda.toggle_task(&Id { id: task.id }).await.unwrap();
    assert!(!reopened.completed);
    assert_eq!(reopened.percentage(), 100);

    // Only completion is logged, not reopening.
    let actions: Vec<_> = agenda.logs().iter().map(|entry| entry.action).collect();
    assert_eq!(actions, vec![LogAction::Completed, LogAction::Added]);
}

#[tokio::test]
async fn test_toggle_unknown_task() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    let result = agenda.toggle_task(&Id { id: 99 }).await;
    assert!(matches!(result, Err(AgendaError::TaskNotFound { id: 99 })));
}

#[tokio::test]
async fn test_delete_logs_before_removing() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    let task = add(&mut agenda, "Call the bank").await;

    let deleted = agenda.delete_task(&Id { id: task.id }).await.unwrap();

    assert_eq!(deleted.id, task.id);
    assert!(agenda.tasks().is_empty());
    assert_eq!(agenda.logs()[0].action, LogAction::Deleted);
    assert_eq!(agenda.logs()[0].task_title, "Call the bank");
    assert!(!agenda.logs()[0].is_auto_deleted());
}

#[tokio::test]
async fn test_priority_link_and_percentage_updates() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    let task = add(&mut agenda, "Book flights").await;

    agenda
        .set_priority(&SetPriority {
            id: task.id,
            priority: Priority::Low,
        })
        .await
        .unwrap();
    agenda
        .set_link(&SetLink {
            id: task.id,
            link: Some("https://example.com/flights".to_string()),
        })
        .await
        .unwrap();
    let clamped = agenda
        .set_percentage(&SetPercentage {
            id: task.id,
            percentage: 150,
        })
        .await
        .unwrap();

    assert_eq!(clamped, 100);
    let stored = agenda.find_task(task.id).unwrap();
    assert_eq!(stored.priority(), Priority::Low);
    assert_eq!(stored.link.as_deref(), Some("https://example.com/flights"));
    assert_eq!(stored.percentage(), 100);
    // Updating the percentage alone does not complete the task.
    assert!(!stored.completed);

    agenda
        .set_link(&SetLink {
            id: task.id,
            link: Some("  ".to_string()),
        })
        .await
        .unwrap();
    agenda
        .set_percentage(&SetPercentage {
            id: task.id,
            percentage: -20,
        })
        .await
        .unwrap();

    let stored = agenda.find_task(task.id).unwrap();
    assert_eq!(stored.link, None);
    assert_eq!(stored.percentage(), 0);
}

#[tokio::test]
async fn test_update_missing_task_is_not_found() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    let result = agenda
        .set_priority(&SetPriority {
            id: 42,
            priority: Priority::High,
        })
        .await;
    assert!(matches!(result, Err(AgendaError::TaskNotFound { id: 42 })));
}

#[tokio::test]
async fn test_first_run_rollover_only_records_week() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    let task = add(&mut agenda, "Done already").await;
    agenda.toggle_task(&Id { id: task.id }).await.unwrap();

    let report = agenda.check_week_rollover_at(&next_monday()).await.unwrap();

    assert_eq!(report.previous, None);
    assert_eq!(report.removed, 0);
    assert!(!report.is_new_week());
    assert_eq!(
        agenda.storage.get_item(LAST_WEEK_KEY).unwrap().as_deref(),
        Some("2026-W43")
    );
    agenda.reload().await;
    assert_eq!(agenda.tasks().len(), 1);
}

#[tokio::test]
async fn test_new_week_removes_only_completed_tasks() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    let open = add(&mut agenda, "Still open").await;
    let first = add(&mut agenda, "Finished one").await;
    let second = add(&mut agenda, "Finished two").await;
    agenda.toggle_task(&Id { id: first.id }).await.unwrap();
    agenda.toggle_task(&Id { id: second.id }).await.unwrap();
    agenda.storage.set_item(LAST_WEEK_KEY, "2026-W42").unwrap();

    let report = agenda.check_week_rollover_at(&next_monday()).await.unwrap();
    assert!(report.is_new_week());
    assert_eq!(report.removed, 2);

    agenda.reload().await;
    let remaining: Vec<u64> = agenda.tasks().iter().map(|task| task.id).collect();
    assert_eq!(remaining, vec![open.id]);

    let cleanup: Vec<_> = agenda
        .logs()
        .iter()
        .filter(|entry| entry.is_auto_deleted())
        .collect();
    assert_eq!(cleanup.len(), 2);
    for entry in cleanup {
        assert_eq!(entry.action, LogAction::Deleted);
        assert_eq!(entry.reason.as_deref(), Some(AUTO_CLEANUP_REASON));
        assert_eq!(entry.week_number, 43);
        assert_eq!(entry.year, 2026);
    }
}

#[tokio::test]
async fn test_same_week_rollover_runs_once() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    agenda.storage.set_item(LAST_WEEK_KEY, "2026-W42").unwrap();

    let first = agenda.check_week_rollover_at(&next_monday()).await.unwrap();
    assert!(first.is_new_week());

    // A task completed after the cleanup survives a second check in the same week.
    let task = add(&mut agenda, "Late finish").await;
    agenda.toggle_task(&Id { id: task.id }).await.unwrap();

    let second = agenda.check_week_rollover_at(&next_monday()).await.unwrap();
    assert!(!second.is_new_week());
    assert_eq!(second.removed, 0);
    agenda.reload().await;
    assert_eq!(agenda.tasks().len(), 1);
}

#[tokio::test]
async fn test_load_falls_back_to_cached_tasks() {
    let (temp_dir, mut agenda) = create_test_agenda().await;
    add(&mut agenda, "Cached task").await;
    assert!(agenda.storage.get_item(CACHED_TASKS_KEY).unwrap().is_some());

    // Make the database unreachable.
    let db_path = temp_dir.path().join("test.db");
    std::fs::remove_file(&db_path).unwrap();
    std::fs::create_dir(&db_path).unwrap();

    agenda.reload().await;

    assert_eq!(agenda.tasks().len(), 1);
    assert_eq!(agenda.tasks()[0].text, "Cached task");
    assert!(agenda.logs().is_empty());
}

#[tokio::test]
async fn test_load_without_cache_is_empty() {
    let (temp_dir, mut agenda) = create_test_agenda().await;
    let db_path = temp_dir.path().join("test.db");
    std::fs::remove_file(&db_path).unwrap();
    std::fs::create_dir(&db_path).unwrap();

    agenda.reload().await;

    assert!(agenda.tasks().is_empty());
}

#[tokio::test]
async fn test_views_follow_state() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    let low = agenda
        .add_task(&AddTask {
            text: "Low".to_string(),
            priority: Some(Priority::Low),
            ..Default::default()
        })
        .await
        .unwrap();
    let high = agenda
        .add_task(&AddTask {
            text: "High".to_string(),
            priority: Some(Priority::High),
            ..Default::default()
        })
        .await
        .unwrap();
    agenda.toggle_task(&Id { id: high.id }).await.unwrap();

    let list = agenda.task_list();
    let order: Vec<u64> = list.rows.iter().map(|row| row.id).collect();
    assert_eq!(order, vec![low.id, high.id]);

    agenda.select_tab(Tab::History);
    agenda.select_filter(LogFilter::Completed);
    assert_eq!(agenda.state().tab, Tab::History);
    let history = agenda.history();
    assert_eq!(history.len(), 1);

    assert!(agenda.task_detail(low.id).is_some());
    assert!(agenda.task_detail(999).is_none());
}

/// Replaces the database file with a directory so every connection fails.
fn make_database_unreachable(temp_dir: &TempDir) {
    let db_path = temp_dir.path().join("test.db");
    std::fs::remove_file(&db_path).unwrap();
    std::fs::create_dir(&db_path).unwrap();
}

#[tokio::test]
async fn test_failed_cleanup_keeps_previous_week_key() {
    let (temp_dir, mut agenda) = create_test_agenda().await;
    agenda.storage.set_item(LAST_WEEK_KEY, "2026-W42").unwrap();
    make_database_unreachable(&temp_dir);

    let result = agenda.check_week_rollover_at(&next_monday()).await;

    assert!(result.is_err());
    assert_eq!(
        agenda.storage.get_item(LAST_WEEK_KEY).unwrap().as_deref(),
        Some("2026-W42")
    );
}

#[tokio::test]
async fn test_cleanup_skips_tasks_already_gone() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    let task = add(&mut agenda, "Removed elsewhere").await;
    agenda.delete_task(&Id { id: task.id }).await.unwrap();
    let deleted_entries = agenda.logs().len();

    let mut stale = task.clone();
    stale.completed = true;
    let removed = agenda
        .remove_completed(vec![stale], &next_monday())
        .await
        .unwrap();

    assert_eq!(removed, 0);
    agenda.reload().await;
    assert_eq!(agenda.logs().len(), deleted_entries);
    assert!(!agenda.logs().iter().any(|entry| entry.is_auto_deleted()));
}

#[tokio::test]
async fn test_stored_percentage_above_range_renders_capped() {
    let (temp_dir, mut agenda) = create_test_agenda().await;
    let task = add(&mut agenda, "Overachiever").await;

    let mut db = Database::new(temp_dir.path().join("test.db")).unwrap();
    db.update_document(TASKS_COLLECTION, task.id, &serde_json::json!({ "percentage": 150 }))
        .unwrap();
    agenda.reload().await;

    let detail = agenda.task_detail(task.id).unwrap();
    assert_eq!(detail.task.percentage, Some(150));
    assert!(detail.to_string().contains("[██████████] 100%"));
    assert!(agenda.task_list().to_string().contains("· 100%"));
}

#[tokio::test]
async fn test_active_tab_selects_rendered_view() {
    let (_temp_dir, mut agenda) = create_test_agenda().await;
    add(&mut agenda, "Tabbed").await;

    let current = agenda.render_active_tab().unwrap();
    assert!(current.starts_with("## Week of"));
    assert!(current.contains("**Tabbed**"));

    agenda.select_tab(Tab::History);
    agenda.select_filter(LogFilter::Added);
    let history = agenda.render_active_tab().unwrap();
    assert!(history.starts_with("# History (added)"));
    assert!(!history.contains("## Week of"));
}
