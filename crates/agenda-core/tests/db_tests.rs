use agenda_core::{AgendaError, Database, DocumentStore};
use serde_json::json;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_add_and_get_document() {
    let (_temp_file, mut db) = create_test_db();

    let id = db
        .add_document("tasks", &json!({ "text": "First", "completed": false }))
        .expect("Failed to add document");
    assert!(id > 0);

    let document = db
        .get_document("tasks", id)
        .expect("Failed to get document")
        .expect("Document should exist");
    assert_eq!(document.id, id);
    assert_eq!(document.data["text"], "First");
    assert_eq!(document.data["completed"], false);
}

#[test]
fn test_non_object_record_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let result = db.add_document("tasks", &json!(["not", "an", "object"]));
    assert!(matches!(result, Err(AgendaError::InvalidInput { .. })));
}

#[test]
fn test_collections_are_scoped() {
    let (_temp_file, mut db) = create_test_db();

    let task_id = db.add_document("tasks", &json!({ "text": "Task" })).unwrap();
    db.add_document("logs", &json!({ "action": "added" })).unwrap();

    assert_eq!(db.query("tasks").unwrap().len(), 1);
    assert_eq!(db.query("logs").unwrap().len(), 1);
    assert!(db.get_document("logs", task_id).unwrap().is_none());
    assert!(!db.delete_document("logs", task_id).unwrap());
}

#[test]
fn test_ordered_query_by_timestamp() {
    let (_temp_file, mut db) = create_test_db();

    let middle = db
        .add_document("tasks", &json!({ "createdAt": "2026-10-13T09:00:00Z" }))
        .unwrap();
    let oldest = db
        .add_document("tasks", &json!({ "createdAt": "2026-10-12T09:00:00.5Z" }))
        .unwrap();
    let newest = db
        .add_document("tasks", &json!({ "createdAt": "2026-10-14T09:00:00.123456789Z" }))
        .unwrap();

    let descending: Vec<u64> = db
        .ordered_query("tasks", "createdAt", true)
        .unwrap()
        .iter()
        .map(|document| document.id)
        .collect();
    assert_eq!(descending, vec![newest, middle, oldest]);

    let ascending: Vec<u64> = db
        .ordered_query("tasks", "createdAt", false)
        .unwrap()
        .iter()
        .map(|document| document.id)
        .collect();
    assert_eq!(ascending, vec![oldest, middle, newest]);
}

#[test]
fn test_ordered_query_ties_break_by_id() {
    let (_temp_file, mut db) = create_test_db();
    let first = db
        .add_document("tasks", &json!({ "createdAt": "2026-10-12T09:00:00Z" }))
        .unwrap();
    let second = db
        .add_document("tasks", &json!({ "createdAt": "2026-10-12T09:00:00Z" }))
        .unwrap();

    let ids: Vec<u64> = db
        .ordered_query("tasks", "createdAt", true)
        .unwrap()
        .iter()
        .map(|document| document.id)
        .collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn test_ordered_query_rejects_bad_field() {
    let (_temp_file, db) = create_test_db();
    let result = db.ordered_query("tasks", "created') --", true);
    assert!(matches!(result, Err(AgendaError::InvalidInput { .. })));
}

#[test]
fn test_update_merges_partial_record() {
    let (_temp_file, mut db) = create_test_db();
    let id = db
        .add_document(
            "tasks",
            &json!({ "text": "Read", "completed": false, "link": "https://example.com" }),
        )
        .unwrap();

    let updated = db
        .update_document("tasks", id, &json!({ "completed": true, "percentage": 100 }))
        .unwrap();
    assert!(updated);

    let data = db.get_document("tasks", id).unwrap().unwrap().data;
    assert_eq!(data["text"], "Read");
    assert_eq!(data["completed"], true);
    assert_eq!(data["percentage"], 100);
    assert_eq!(data["link"], "https://example.com");

    // A null value removes the key.
    db.update_document("tasks", id, &json!({ "link": null })).unwrap();
    let data = db.get_document("tasks", id).unwrap().unwrap().data;
    assert!(data.get("link").is_none());
}

#[test]
fn test_update_missing_document() {
    let (_temp_file, mut db) = create_test_db();
    let updated = db
        .update_document("tasks", 404, &json!({ "completed": true }))
        .unwrap();
    assert!(!updated);
}

#[test]
fn test_delete_document() {
    let (_temp_file, mut db) = create_test_db();
    let id = db.add_document("tasks", &json!({ "text": "Gone" })).unwrap();

    assert!(db.delete_document("tasks", id).unwrap());
    assert!(db.get_document("tasks", id).unwrap().is_none());
    assert!(!db.delete_document("tasks", id).unwrap());
}

#[test]
fn test_data_persists_across_connections() {
    let temp_file = NamedTempFile::new().unwrap();
    let id = {
        let mut db = Database::new(temp_file.path()).unwrap();
        db.add_document("tasks", &json!({ "text": "Persisted" })).unwrap()
    };

    let db = Database::new(temp_file.path()).unwrap();
    let document = db.get_document("tasks", id).unwrap().unwrap();
    assert_eq!(document.data["text"], "Persisted");
}
