pub mod executor;
pub mod query;
pub mod row;
pub mod store;
pub mod trace;

pub use query::Statement;
pub use row::{Row, RowError};
pub use store::{StoreError, StoreLocator};
pub use trace::StatementSink;

use crate::{
    Error,
    db::executor::{BatchExecutor, DeleteExecutor, LoadExecutor, MigrateExecutor, SaveExecutor},
    schema::{SchemaError, TableSchema, TypeTable},
    traits::Record,
    value::Value,
};
use std::{collections::BTreeMap, marker::PhantomData, sync::Arc};

///
/// Store
///
/// The typed handle binding one record type to one table. `bind` resolves the
/// schema against the merged type table, creates the table if absent
/// (idempotent), and returns the handle; every persistence operation lives on
/// it. Binding composes; the record type itself is never touched.
///
/// The handle holds configuration only (locator, type table, trace sink).
/// Schema and key metadata are re-derived from `R::fields()` on every
/// operation; no query fragment is cached across calls.
///

pub struct Store<R: Record> {
    locator: StoreLocator,
    types: TypeTable,
    trace: Option<Arc<dyn StatementSink>>,
    _marker: PhantomData<R>,
}

impl<R: Record> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            locator: self.locator.clone(),
            types: self.types.clone(),
            trace: self.trace.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: Record> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("locator", &self.locator)
            .field("types", &self.types)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}

impl<R: Record> Store<R> {
    // ======================================================================
    // Registration
    // ======================================================================

    /// Bind `R` to the store under the default type table.
    pub fn bind(locator: impl Into<StoreLocator>) -> Result<Self, Error> {
        Self::bind_with(locator, TypeTable::new())
    }

    /// Bind `R` with a per-registration override table, merged on top of the
    /// defaults. Unmapped declared types abort the bind.
    pub fn bind_with(
        locator: impl Into<StoreLocator>,
        overrides: TypeTable,
    ) -> Result<Self, Error> {
        let store = Self {
            locator: locator.into(),
            types: TypeTable::defaults().overlay(overrides),
            trace: None,
            _marker: PhantomData,
        };
        store.ensure_table()?;

        Ok(store)
    }

    /// Attach a statement sink observing everything this handle executes.
    #[must_use]
    pub fn with_trace(mut self, sink: Arc<dyn StatementSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    /// The merged type table this handle resolves against.
    #[must_use]
    pub const fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Same binding against a different store location. Used by cross-store
    /// copies; carries the type table and trace sink over.
    pub(crate) fn rebind(&self, locator: StoreLocator) -> Result<Self, Error> {
        let store = Self {
            locator,
            types: self.types.clone(),
            trace: self.trace.clone(),
            _marker: PhantomData,
        };
        store.ensure_table()?;

        Ok(store)
    }

    pub(crate) fn schema(&self) -> Result<TableSchema, SchemaError> {
        TableSchema::of::<R>(&self.types)
    }

    fn ensure_table(&self) -> Result<(), Error> {
        let schema = self.schema()?;
        self.run(&Statement::new(schema.create_statement()))?;

        Ok(())
    }

    // ======================================================================
    // Instance operations
    // ======================================================================

    /// Persist a new instance. Writes the store-assigned rowid back onto the
    /// instance when the type carries the synthetic key.
    pub fn create(&self, record: &mut R) -> Result<(), Error> {
        SaveExecutor::new(self).create(record)
    }

    /// Synchronize an instance's current field values to its row.
    pub fn update(&self, record: &R) -> Result<(), Error> {
        SaveExecutor::new(self).update(record)
    }

    /// Remove an instance's row.
    pub fn delete(&self, record: &R) -> Result<(), Error> {
        DeleteExecutor::new(self).one(record)
    }

    /// Remove a row by explicit key value, without materializing an instance.
    pub fn delete_by_key(&self, key: &[Value]) -> Result<(), Error> {
        DeleteExecutor::new(self).by_key(key)
    }

    // ======================================================================
    // Load operations
    // ======================================================================

    /// Fetch one instance by key.
    pub fn get(&self, key: &[Value]) -> Result<Option<R>, Error> {
        LoadExecutor::new(self).get(key)
    }

    /// Whether a row exists under `key`.
    pub fn exists(&self, key: &[Value]) -> Result<bool, Error> {
        LoadExecutor::new(self).exists(key)
    }

    /// Every stored instance.
    pub fn all(&self) -> Result<Vec<R>, Error> {
        LoadExecutor::new(self).all()
    }

    /// One key-ordered page; pages start at 1.
    pub fn page(&self, page: u64, per_page: u64) -> Result<Vec<R>, Error> {
        LoadExecutor::new(self).page(page, per_page)
    }

    /// Every instance whose `field` equals `value`.
    pub fn find_equal(&self, field: &str, value: impl Into<Value>) -> Result<Vec<R>, Error> {
        LoadExecutor::new(self).find_equal(field, value.into())
    }

    // ======================================================================
    // Batch operations
    // ======================================================================

    /// Insert a batch as one statement; all rows land or none do.
    pub fn create_many(&self, records: &[R]) -> Result<(), Error> {
        BatchExecutor::new(self).create_many(records)
    }

    /// Copy a batch into another store, creating the table there if absent.
    /// Source rows are not touched.
    pub fn copy_many(&self, records: &[R], target: impl Into<StoreLocator>) -> Result<(), Error> {
        BatchExecutor::new(self).copy_many(records, target.into())
    }

    // ======================================================================
    // Migration
    // ======================================================================

    /// Rebuild `old_table`'s rows under this type's schema and insert them
    /// into this type's table. Returns the migrated row count. The old table
    /// is left in place; dropping it is a separate, explicit call.
    pub fn migrate_from(
        &self,
        old_table: &str,
        renames: &BTreeMap<String, String>,
    ) -> Result<usize, Error> {
        MigrateExecutor::new(self).from_table(old_table, renames)
    }

    /// Drop a table by name. Explicit and irreversible; nothing in this crate
    /// drops a table on its own.
    pub fn drop_table(&self, table: &str) -> Result<(), Error> {
        MigrateExecutor::new(self).drop_table(table)
    }

    // ======================================================================
    // Statement execution
    // ======================================================================

    pub(crate) fn run(&self, statement: &Statement) -> Result<usize, StoreError> {
        self.observe(statement);
        self.locator
            .with_conn(|conn| store::execute(conn, statement))
    }

    /// Execute an INSERT and read the last-assigned rowid in the same
    /// connection scope.
    pub(crate) fn run_insert(&self, statement: &Statement) -> Result<i64, StoreError> {
        self.observe(statement);
        self.locator.with_conn(|conn| {
            store::execute(conn, statement)?;

            Ok(conn.last_insert_rowid())
        })
    }

    pub(crate) fn fetch(
        &self,
        statement: &Statement,
        columns: &[&str],
    ) -> Result<Vec<Row>, StoreError> {
        self.observe(statement);
        self.locator
            .with_conn(|conn| store::query(conn, statement, columns))
    }

    pub(crate) fn introspect(&self, table: &str) -> Result<Vec<String>, StoreError> {
        self.locator
            .with_conn(|conn| store::table_columns(conn, table))
    }

    fn observe(&self, statement: &Statement) {
        if let Some(sink) = &self.trace {
            sink.on_statement(&statement.sql, &statement.params);
        }
    }
}
