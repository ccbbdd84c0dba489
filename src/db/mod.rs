//! Database operations for journal entries, metrics, and habits.
//!
//! This module provides SQLite storage using connection pooling via r2d2
//! for concurrent access from request handlers.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `entries`: Journal entry storage (insert-only plus ordered list)
//! - `metrics`: Metric record storage
//! - `habits`: Habit record storage with a completed-flag toggle
//!
//! # Example
//!
//! ```no_run
//! use wellspring::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/wellspring.db"))?;
//! db.initialize_schema()?;
//! # Ok::<(), wellspring::AppError>(())
//! ```

pub mod entries;
pub mod habits;
pub mod metrics;
pub mod schema;

use crate::constants::{DB_BUSY_TIMEOUT_MS, DB_POOL_SIZE};
use crate::errors::{AppResult, DatabaseError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database handle with connection pooling.
///
/// Writes committed before `insert` returns are visible to every later
/// read from the pool, so a created record is immediately listable.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the SQLite database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened or the
    /// connection pool cannot be initialized.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(DB_POOL_SIZE)
            .connection_customizer(Box::new(ConnectionTuning))
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        // Fail now rather than on the first request if the file is unusable.
        let conn = pool.get().map_err(DatabaseError::Pool)?;
        conn.execute_batch("SELECT 1")
            .map_err(DatabaseError::Sqlite)?;
        drop(conn);

        info!("Database opened successfully");
        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all necessary tables and indexes if they don't exist.
    /// This is idempotent and safe to call multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}

/// Connection customizer applied to every pooled connection.
///
/// Concurrent inserts from different pooled connections contend on the
/// SQLite write lock; the busy timeout makes them queue instead of failing.
#[derive(Debug)]
struct ConnectionTuning;

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for ConnectionTuning {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        conn.busy_timeout(Duration::from_millis(DB_BUSY_TIMEOUT_MS))?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(())
    }

    fn on_release(&self, _conn: Connection) {}
}
