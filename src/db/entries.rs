//! Journal entry storage.
//!
//! This module provides functions for inserting and listing journal entries.
//! Entries are write-once: the store assigns `id` and `created_at` at insert
//! time and nothing updates or deletes them afterwards.

use crate::errors::{AppResult, DatabaseError};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use tracing::debug;

/// A stored journal entry.
///
/// Serializes to the wire shape served by the API: camelCase fields, with
/// `analysis` omitted entirely when the entry was stored without one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// Inserts a journal entry and returns the stored record.
///
/// The store assigns `id` and `created_at`; the caller's inputs are not
/// modified. The returned record is re-read from the database, so it is
/// field-for-field identical to what a later list will return.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `content` - Entry text, already validated as non-empty
/// * `analysis` - Analysis text to attach, if the analysis call succeeded
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_entry(conn: &Connection, content: &str, analysis: Option<&str>) -> AppResult<Entry> {
    debug!("Inserting journal entry ({} chars)", content.len());

    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    conn.execute(
        "INSERT INTO entries (content, analysis, created_at) VALUES (?1, ?2, ?3)",
        params![content, analysis, created_at],
    )
    .map_err(DatabaseError::Sqlite)?;

    let entry = get_entry(conn, conn.last_insert_rowid())?;
    debug!("Entry inserted with id {}", entry.id);
    Ok(entry)
}

/// Retrieves an entry by id.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no entry exists with the given id.
pub fn get_entry(conn: &Connection, id: i64) -> AppResult<Entry> {
    conn.query_row(
        "SELECT id, content, analysis, created_at FROM entries WHERE id = ?1",
        params![id],
        row_to_entry,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            DatabaseError::NotFound(format!("Entry with id {} not found", id))
        }
        _ => DatabaseError::Sqlite(e),
    })
    .map_err(Into::into)
}

/// Lists all entries, most recent first.
///
/// Ties on `created_at` resolve to reverse insertion order.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, content, analysis, created_at FROM entries \
             ORDER BY created_at DESC, id DESC",
        )
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map([], row_to_entry)
        .map_err(DatabaseError::Sqlite)?;

    let mut entries = Vec::new();
    for row in rows {
        entries.push(row.map_err(DatabaseError::Sqlite)?);
    }
    Ok(entries)
}

fn row_to_entry(row: &Row) -> Result<Entry, rusqlite::Error> {
    let created_at_raw: String = row.get(3)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_raw)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);

    Ok(Entry {
        id: row.get(0)?,
        content: row.get(1)?,
        analysis: row.get(2)?,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_entry_assigns_identity() {
        let conn = setup_test_db();

        let entry = insert_entry(&conn, "Today was productive", None).unwrap();
        assert!(entry.id > 0);
        assert_eq!(entry.content, "Today was productive");
        assert!(entry.analysis.is_none());
    }

    #[test]
    fn test_insert_entry_with_analysis() {
        let conn = setup_test_db();

        let entry = insert_entry(&conn, "Felt great", Some("Positive mood detected")).unwrap();
        assert_eq!(entry.analysis.as_deref(), Some("Positive mood detected"));
    }

    #[test]
    fn test_insert_result_round_trips_through_list() {
        let conn = setup_test_db();

        let stored = insert_entry(&conn, "Felt great", Some("Positive mood detected")).unwrap();
        let listed = list_entries(&conn).unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], stored);
    }

    #[test]
    fn test_get_entry_not_found() {
        let conn = setup_test_db();
        let result = get_entry(&conn, 999);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_entries_most_recent_first() {
        let conn = setup_test_db();

        let first = insert_entry(&conn, "first", None).unwrap();
        let second = insert_entry(&conn, "second", None).unwrap();
        let third = insert_entry(&conn, "third", None).unwrap();

        let listed = list_entries(&conn).unwrap();
        let ids: Vec<i64> = listed.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[test]
    fn test_list_entries_ties_break_by_insertion_order() {
        let conn = setup_test_db();

        // Force identical timestamps; the id tie-break keeps reverse
        // insertion order.
        for content in ["a", "b", "c"] {
            conn.execute(
                "INSERT INTO entries (content, created_at) VALUES (?1, ?2)",
                params![content, "2026-01-01T00:00:00.000Z"],
            )
            .unwrap();
        }

        let listed = list_entries(&conn).unwrap();
        let contents: Vec<&str> = listed.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_list_entries_empty_store() {
        let conn = setup_test_db();
        assert!(list_entries(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_entry_serializes_to_wire_shape() {
        let conn = setup_test_db();

        let without = insert_entry(&conn, "quiet day", None).unwrap();
        let json = serde_json::to_value(&without).unwrap();
        assert!(json.get("analysis").is_none());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["content"], "quiet day");

        let with = insert_entry(&conn, "good day", Some("upbeat")).unwrap();
        let json = serde_json::to_value(&with).unwrap();
        assert_eq!(json["analysis"], "upbeat");
    }
}
