use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use crate::store::StoreError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// One SQLite connection shared by every worker thread.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Runs `f` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError>,
    {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Unavailable("database lock poisoned".into()))?;
        f(&mut conn)
    }
}

/// Creates the `complaints` table if it does not exist yet.
pub fn init_db(db: &Database) -> Result<(), StoreError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    })?;

    info!("database schema applied");
    Ok(())
}
