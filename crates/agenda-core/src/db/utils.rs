//! Helpers for building document queries.

use crate::error::{AgendaError, Result};

/// Builds the JSON path for a top-level document field.
///
/// Only ASCII alphanumerics and `_` are accepted so the path cannot address
/// nested or quoted keys.
pub(crate) fn field_path(field: &str) -> Result<String> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AgendaError::invalid_input("field")
            .with_reason(format!("'{field}' is not a valid document field name")));
    }
    Ok(format!("$.{field}"))
}

/// Checks a collection name before it reaches a query.
pub(crate) fn check_collection(collection: &str) -> Result<()> {
    if collection.trim().is_empty() {
        return Err(AgendaError::invalid_input("collection").with_reason("must not be empty"));
    }
    Ok(())
}
