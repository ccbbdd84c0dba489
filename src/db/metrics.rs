//! Metric record storage.
//!
//! Plain keyed records: a name, a numeric value, and a store-assigned
//! timestamp. No analysis step and no mutation.

use crate::errors::{AppResult, DatabaseError};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use tracing::debug;

/// A stored metric measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: i64,
    pub name: String,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

/// Inserts a metric and returns the stored record.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_metric(conn: &Connection, name: &str, value: f64) -> AppResult<Metric> {
    debug!("Inserting metric '{}'", name);

    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    conn.execute(
        "INSERT INTO metrics (name, value, created_at) VALUES (?1, ?2, ?3)",
        params![name, value, created_at],
    )
    .map_err(DatabaseError::Sqlite)?;

    get_metric(conn, conn.last_insert_rowid())
}

/// Retrieves a metric by id.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no metric exists with the given id.
pub fn get_metric(conn: &Connection, id: i64) -> AppResult<Metric> {
    conn.query_row(
        "SELECT id, name, value, created_at FROM metrics WHERE id = ?1",
        params![id],
        row_to_metric,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            DatabaseError::NotFound(format!("Metric with id {} not found", id))
        }
        _ => DatabaseError::Sqlite(e),
    })
    .map_err(Into::into)
}

/// Lists all metrics, most recent first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_metrics(conn: &Connection) -> AppResult<Vec<Metric>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, value, created_at FROM metrics \
             ORDER BY created_at DESC, id DESC",
        )
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map([], row_to_metric)
        .map_err(DatabaseError::Sqlite)?;

    let mut metrics = Vec::new();
    for row in rows {
        metrics.push(row.map_err(DatabaseError::Sqlite)?);
    }
    Ok(metrics)
}

fn row_to_metric(row: &Row) -> Result<Metric, rusqlite::Error> {
    let created_at_raw: String = row.get(3)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_raw)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);

    Ok(Metric {
        id: row.get(0)?,
        name: row.get(1)?,
        value: row.get(2)?,
        created_at,
    })
}
