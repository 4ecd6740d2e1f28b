use crate::{
    Error,
    db::{Statement, Store, query},
    schema::SYNTHETIC_KEY,
    traits::Record,
    value::Value,
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// MigrateError
///

#[derive(Debug, ThisError)]
pub enum MigrateError {
    #[error("rename target {column} is not a field of the new record type")]
    UnknownColumn { column: String },
}

///
/// MigrateExecutor
///
/// Re-creates a record type's data under a new schema: reads an old table's
/// rows, maps renamed columns across, fills everything else from declared
/// defaults, and inserts the rebuilt rows into the new type's table.
///

pub struct MigrateExecutor<'a, R: Record> {
    store: &'a Store<R>,
}

impl<'a, R: Record> MigrateExecutor<'a, R> {
    #[must_use]
    pub(crate) const fn new(store: &'a Store<R>) -> Self {
        Self { store }
    }

    /// Migrate `old_table`'s rows into this type's table.
    ///
    /// `renames` maps old column names to new field names; every target must
    /// exist on the new type. Old columns are read with the synthetic key
    /// column excluded. For each old row, a new row is built per new column:
    /// the renamed old value when a mapping covers it, the declared default
    /// otherwise, `NULL` when there is neither. The rebuilt rows land as one
    /// multi-row INSERT; the old table is left untouched.
    pub fn from_table(
        &self,
        old_table: &str,
        renames: &BTreeMap<String, String>,
    ) -> Result<usize, Error> {
        let schema = self.store.schema()?;

        // the new table may not exist yet when migrating across stores
        self.store.run(&Statement::new(schema.create_statement()))?;

        for target in renames.values() {
            if schema.column(target).is_none() {
                return Err(MigrateError::UnknownColumn {
                    column: target.clone(),
                }
                .into());
            }
        }

        let old_columns: Vec<String> = self
            .store
            .introspect(old_table)?
            .into_iter()
            .filter(|column| column != SYNTHETIC_KEY)
            .collect();
        let old_refs: Vec<&str> = old_columns.iter().map(String::as_str).collect();

        let statement = Statement::new(format!(
            "SELECT {} FROM {};",
            old_refs.join(", "),
            old_table
        ));
        let old_rows = self.store.fetch(&statement, &old_refs)?;
        if old_rows.is_empty() {
            return Ok(0);
        }

        // new column name -> old column name
        let sources: BTreeMap<&str, &str> = renames
            .iter()
            .map(|(old, new)| (new.as_str(), old.as_str()))
            .collect();

        let rows: Vec<Vec<Value>> = old_rows
            .iter()
            .map(|old_row| {
                schema
                    .columns()
                    .iter()
                    .map(|column| {
                        sources
                            .get(column.name())
                            .and_then(|old| old_row.get(old))
                            .or_else(|| column.default())
                            .cloned()
                            .unwrap_or(Value::Null)
                    })
                    .collect()
            })
            .collect();

        let insert = query::insert(&schema, &rows);
        self.store.run(&insert)?;

        Ok(rows.len())
    }

    /// Drop a table by name, if it exists.
    pub fn drop_table(&self, table: &str) -> Result<(), Error> {
        self.store
            .run(&Statement::new(format!("DROP TABLE IF EXISTS {table};")))?;

        Ok(())
    }
}
