//! Document CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, Row, params, types::Type};
use serde_json::Value;

use super::utils::{check_collection, field_path};
use crate::{
    error::{AgendaError, DatabaseResultExt, Result},
    store::{Document, DocumentStore},
};

const INSERT_DOCUMENT_SQL: &str =
    "INSERT INTO documents (collection, body, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)";
const SELECT_DOCUMENT_SQL: &str =
    "SELECT id, body FROM documents WHERE collection = ?1 AND id = ?2";
const SELECT_COLLECTION_SQL: &str =
    "SELECT id, body FROM documents WHERE collection = ?1 ORDER BY id";
const UPDATE_DOCUMENT_SQL: &str = "UPDATE documents SET body = json_patch(body, ?1), updated_at = ?2 WHERE collection = ?3 AND id = ?4";
const DELETE_DOCUMENT_SQL: &str = "DELETE FROM documents WHERE collection = ?1 AND id = ?2";

/// Maps a `(id, body)` row to a [`Document`].
fn document_from_row(row: &Row<'_>) -> rusqlite::Result<Document> {
    let body: String = row.get(1)?;
    let data = serde_json::from_str::<Value>(&body)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    Ok(Document {
        id: row.get::<_, i64>(0)? as u64,
        data,
    })
}

fn ensure_object(record: &Value) -> Result<()> {
    if record.is_object() {
        Ok(())
    } else {
        Err(AgendaError::invalid_input("record").with_reason("documents must be JSON objects"))
    }
}

impl DocumentStore for super::Database {
    fn add_document(&mut self, collection: &str, record: &Value) -> Result<u64> {
        check_collection(collection)?;
        ensure_object(record)?;

        let body = serde_json::to_string(record)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(INSERT_DOCUMENT_SQL, params![collection, body, now])
            .db_context("Failed to insert document")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(id)
    }

    fn get_document(&self, collection: &str, id: u64) -> Result<Option<Document>> {
        self.connection
            .query_row(
                SELECT_DOCUMENT_SQL,
                params![collection, id as i64],
                document_from_row,
            )
            .optional()
            .db_context("Failed to query document")
    }

    fn query(&self, collection: &str) -> Result<Vec<Document>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COLLECTION_SQL)
            .db_context("Failed to prepare query")?;

        let documents = stmt
            .query_map(params![collection], document_from_row)
            .db_context("Failed to query documents")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch documents")?;

        Ok(documents)
    }

    fn ordered_query(
        &self,
        collection: &str,
        field: &str,
        descending: bool,
    ) -> Result<Vec<Document>> {
        let path = field_path(field)?;
        let direction = if descending { "DESC" } else { "ASC" };

        // julianday() parses RFC 3339 strings, so differing fractional second
        // precision still orders chronologically.
        let query = format!(
            "SELECT id, body FROM documents WHERE collection = ?1 \
             ORDER BY julianday(json_extract(body, ?2)) {direction}, id {direction}"
        );

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let documents = stmt
            .query_map(params![collection, path], document_from_row)
            .db_context("Failed to query documents")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch documents")?;

        Ok(documents)
    }

    fn update_document(&mut self, collection: &str, id: u64, partial: &Value) -> Result<bool> {
        ensure_object(partial)?;

        let patch = serde_json::to_string(partial)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let changed = tx
            .execute(UPDATE_DOCUMENT_SQL, params![patch, now, collection, id as i64])
            .db_context("Failed to update document")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(changed > 0)
    }

    fn delete_document(&mut self, collection: &str, id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let deleted = tx
            .execute(DELETE_DOCUMENT_SQL, params![collection, id as i64])
            .db_context("Failed to delete document")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(deleted > 0)
    }
}
