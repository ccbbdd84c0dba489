//! Metric operations: validated create and ordered list.

use crate::db::metrics::{self, Metric};
use crate::db::Database;
use crate::errors::{AppError, AppResult};

/// Records a metric measurement.
///
/// # Errors
///
/// Returns `AppError::Validation` for an empty name or a non-finite value,
/// or a database error if persistence fails.
pub fn record_metric(db: &Database, name: &str, value: f64) -> AppResult<Metric> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(
            "Metric name cannot be empty".to_string(),
        ));
    }
    if !value.is_finite() {
        return Err(AppError::Validation(
            "Metric value must be a finite number".to_string(),
        ));
    }

    let conn = db.get_conn()?;
    metrics::insert_metric(&conn, name, value)
}

/// Lists all metrics, most recent first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_metrics(db: &Database) -> AppResult<Vec<Metric>> {
    let conn = db.get_conn()?;
    metrics::list_metrics(&conn)
}
