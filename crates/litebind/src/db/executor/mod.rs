//! Operation executors. Each executor borrows a bound [`crate::db::Store`]
//! handle, re-derives schema and key metadata for the call, builds one
//! statement, and hands it to the store.

mod batch;
mod delete;
mod load;
mod migrate;
mod save;


pub use batch::{BatchError, BatchExecutor};
pub use delete::DeleteExecutor;
pub use load::LoadExecutor;
pub use migrate::{MigrateError, MigrateExecutor};
pub use save::SaveExecutor;

use crate::{db::RowError, schema::TableSchema, traits::Record, value::Value};

/// Serialize an instance's declared field values in insert column order.
///
/// A record that fails to supply a declared column's value breaks the
/// [`Record`] contract and is reported by column name.
pub(crate) fn row_values<R: Record>(
    schema: &TableSchema,
    record: &R,
) -> Result<Vec<Value>, RowError> {
    schema
        .columns()
        .iter()
        .map(|column| {
            record
                .value(column.name())
                .ok_or_else(|| RowError::MissingColumn {
                    column: column.name().to_string(),
                })
        })
        .collect()
}
