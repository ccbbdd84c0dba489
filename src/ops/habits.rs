//! Habit operations: validated create, ordered list, and completed-toggle.

use crate::db::habits::{self, Habit};
use crate::db::Database;
use crate::errors::{AppError, AppResult};

/// Records a new habit, initially not completed.
///
/// # Errors
///
/// Returns `AppError::Validation` for an empty name, or a database error if
/// persistence fails.
pub fn record_habit(db: &Database, name: &str) -> AppResult<Habit> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(
            "Habit name cannot be empty".to_string(),
        ));
    }

    let conn = db.get_conn()?;
    habits::insert_habit(&conn, name)
}

/// Lists all habits, most recent first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_habits(db: &Database) -> AppResult<Vec<Habit>> {
    let conn = db.get_conn()?;
    habits::list_habits(&conn)
}

/// Flips a habit's completed flag and returns the updated record.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no habit exists with the given id.
pub fn toggle_habit(db: &Database, id: i64) -> AppResult<Habit> {
    let conn = db.get_conn()?;
    habits::toggle_habit(&conn, id)
}
