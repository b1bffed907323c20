//! Builder for creating and configuring Agenda instances.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use tokio::task;

use super::Agenda;
use crate::{
    db::Database,
    error::{AgendaError, Result},
    storage::LocalStorage,
};

const XDG_PREFIX: &str = "agenda";
const DATABASE_FILE: &str = "agenda.db";
const STORAGE_FILE: &str = "local.json";

/// Builder for creating and configuring Agenda instances.
#[derive(Debug, Clone, Default)]
pub struct AgendaBuilder {
    database_path: Option<PathBuf>,
    storage_path: Option<PathBuf>,
}

impl AgendaBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom document store file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/agenda/agenda.db` or `~/.local/share/agenda/agenda.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom local storage file path.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/agenda/local.json`.
    pub fn with_storage_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.storage_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured agenda instance.
    ///
    /// The agenda starts with empty state; call [`Agenda::startup`] to run
    /// the weekly rollover and load tasks and logs.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::FileSystem` if a parent directory cannot be
    /// created and `AgendaError::XdgDirectory` if no default location exists.
    /// A database that cannot be opened or initialized is only logged: the
    /// agenda is still built so that loading can fall back to local storage.
    pub async fn build(self) -> Result<Agenda> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_path(DATABASE_FILE)?,
        };
        let storage_path = match self.storage_path {
            Some(path) => path,
            None => Self::default_path(STORAGE_FILE)?,
        };

        for path in [&db_path, &storage_path] {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| AgendaError::file_system(parent, e))?;
            }
        }

        let db_path_clone = db_path.clone();
        let initialized = task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .map_err(AgendaError::join)?;
        if let Err(e) = initialized {
            // Store calls reopen the database; loads fall back to the task cache.
            warn!(
                "Document store at {} is unavailable: {e}",
                db_path.display()
            );
        }

        debug!(
            "Agenda ready: database {}, local storage {}",
            db_path.display(),
            storage_path.display()
        );

        Ok(Agenda::new(db_path, LocalStorage::new(storage_path)))
    }

    /// Returns a default data file path following the XDG Base Directory
    /// specification.
    fn default_path(file: &str) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .place_data_file(file)
            .map_err(|e| AgendaError::XdgDirectory(e.to_string()))
    }
}
