use crate::db::{Row, query::Statement};
use rusqlite::{Connection, ErrorCode, params_from_iter};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Failures at the driver boundary. A constraint violation is the one
/// distinguished, recoverable category: a write the store rejected because a
/// uniqueness or primary-key constraint would break. Everything else is
/// carried unchanged in `Driver`.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error(transparent)]
    Driver(#[from] rusqlite::Error),

    #[error("shared connection handle is poisoned")]
    PoisonedHandle,
}

///
/// StoreLocator
///
/// Where a store's connections come from: a database path opened fresh for
/// each operation, or a caller-supplied shared handle locked for the duration
/// of one operation. Acquisition is scoped: the connection (or the lock) is
/// released on every exit path, including errors.
///

#[derive(Clone, Debug)]
pub enum StoreLocator {
    Path(PathBuf),
    Shared(Arc<Mutex<Connection>>),
}

impl StoreLocator {
    /// A private in-memory database, shared across this locator's clones.
    ///
    /// In-memory databases vanish with their connection, so the connection is
    /// held open and shared rather than reopened per operation.
    pub fn memory() -> Result<Self, StoreError> {
        Ok(Self::shared(Connection::open_in_memory()?))
    }

    /// Wrap an existing connection for shared use.
    #[must_use]
    pub fn shared(connection: Connection) -> Self {
        Self::Shared(Arc::new(Mutex::new(connection)))
    }

    /// Run one operation against an acquired connection.
    pub(crate) fn with_conn<T>(
        &self,
        op: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        match self {
            Self::Path(path) => {
                let conn = Connection::open(path)?;

                op(&conn)
            }
            Self::Shared(shared) => {
                let conn = shared.lock().map_err(|_| StoreError::PoisonedHandle)?;

                op(&conn)
            }
        }
    }
}

impl From<&Path> for StoreLocator {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for StoreLocator {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&str> for StoreLocator {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

// ─────────────────────────────────────────────
// STATEMENT EXECUTION
// ─────────────────────────────────────────────

/// Execute one statement, returning the affected row count.
pub(crate) fn execute(conn: &Connection, statement: &Statement) -> Result<usize, StoreError> {
    conn.execute(&statement.sql, params_from_iter(statement.params.iter()))
        .map_err(classify)
}

/// Run one query statement, reading every result row under `columns` in
/// select order.
pub(crate) fn query(
    conn: &Connection,
    statement: &Statement,
    columns: &[&str],
) -> Result<Vec<Row>, StoreError> {
    let mut prepared = conn.prepare(&statement.sql)?;
    let mut rows = prepared.query(params_from_iter(statement.params.iter()))?;
    let mut out = Vec::new();

    while let Some(row) = rows.next()? {
        let mut decoded = Row::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            decoded.push((*column).to_string(), row.get(index)?);
        }
        out.push(decoded);
    }

    Ok(out)
}

/// Column names of an existing table, in table order.
pub(crate) fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>, StoreError> {
    let mut prepared = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = prepared.query([])?;
    let mut out = Vec::new();

    while let Some(row) = rows.next()? {
        out.push(row.get::<_, String>(1)?);
    }

    Ok(out)
}

/// Map a uniqueness/primary-key rejection to the distinguished error; pass
/// every other driver failure through unchanged.
fn classify(err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(code, message)
            if code.code == ErrorCode::ConstraintViolation =>
        {
            StoreError::ConstraintViolation {
                message: message.unwrap_or_else(|| code.to_string()),
            }
        }
        other => StoreError::Driver(other),
    }
}
