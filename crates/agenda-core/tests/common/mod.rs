use agenda_core::{Agenda, AgendaBuilder};
use tempfile::TempDir;

/// Helper function to create a test agenda with its own data directory
pub async fn create_test_agenda() -> (TempDir, Agenda) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let agenda = AgendaBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_storage_path(Some(temp_dir.path().join("local.json")))
        .build()
        .await
        .expect("Failed to create agenda");
    (temp_dir, agenda)
}
