//! Habit record storage.
//!
//! Habits are named boolean trackers. The completed flag is the one mutable
//! field in the whole store, flipped by [`toggle_habit`].

use crate::errors::{AppResult, DatabaseError};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use tracing::debug;

/// A stored habit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Inserts a habit (initially not completed) and returns the stored record.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_habit(conn: &Connection, name: &str) -> AppResult<Habit> {
    debug!("Inserting habit '{}'", name);

    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    conn.execute(
        "INSERT INTO habits (name, created_at) VALUES (?1, ?2)",
        params![name, created_at],
    )
    .map_err(DatabaseError::Sqlite)?;

    get_habit(conn, conn.last_insert_rowid())
}

/// Retrieves a habit by id.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no habit exists with the given id.
pub fn get_habit(conn: &Connection, id: i64) -> AppResult<Habit> {
    conn.query_row(
        "SELECT id, name, completed, created_at FROM habits WHERE id = ?1",
        params![id],
        row_to_habit,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            DatabaseError::NotFound(format!("Habit with id {} not found", id))
        }
        _ => DatabaseError::Sqlite(e),
    })
    .map_err(Into::into)
}

/// Flips a habit's completed flag and returns the updated record.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no habit exists with the given id.
pub fn toggle_habit(conn: &Connection, id: i64) -> AppResult<Habit> {
    debug!("Toggling habit {}", id);

    let rows_affected = conn
        .execute(
            "UPDATE habits SET completed = NOT completed WHERE id = ?1",
            params![id],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        return Err(DatabaseError::NotFound(format!("Habit with id {} not found", id)).into());
    }

    get_habit(conn, id)
}

/// Lists all habits, most recent first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_habits(conn: &Connection) -> AppResult<Vec<Habit>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, completed, created_at FROM habits \
             ORDER BY created_at DESC, id DESC",
        )
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map([], row_to_habit)
        .map_err(DatabaseError::Sqlite)?;

    let mut habits = Vec::new();
    for row in rows {
        habits.push(row.map_err(DatabaseError::Sqlite)?);
    }
    Ok(habits)
}

fn row_to_habit(row: &Row) -> Result<Habit, rusqlite::Error> {
    let created_at_raw: String = row.get(3)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_raw)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);

    Ok(Habit {
        id: row.get(0)?,
        name: row.get(1)?,
        completed: row.get(2)?,
        created_at,
    })
}
