use crate::{
    Error,
    db::{Store, StoreLocator, executor::row_values, query},
    traits::Record,
};
use thiserror::Error as ThisError;

///
/// BatchError
///
/// Batch preconditions the caller must satisfy. Homogeneity needs no runtime
/// check; a batch is a slice of one record type.
///

#[derive(Debug, ThisError)]
pub enum BatchError {
    #[error("collection is empty")]
    EmptyCollection,
}

///
/// BatchExecutor
///

pub struct BatchExecutor<'a, R: Record> {
    store: &'a Store<R>,
}

impl<'a, R: Record> BatchExecutor<'a, R> {
    #[must_use]
    pub(crate) const fn new(store: &'a Store<R>) -> Self {
        Self { store }
    }

    /// Insert every record as one multi-row INSERT, executed and committed
    /// once: a constraint violation anywhere in the batch fails the whole
    /// statement and no row is applied.
    ///
    /// Batch inserts do not write synthetic rowids back onto the records.
    pub fn create_many(&self, records: &[R]) -> Result<(), Error> {
        if records.is_empty() {
            return Err(BatchError::EmptyCollection.into());
        }

        let schema = self.store.schema()?;
        let rows = records
            .iter()
            .map(|record| row_values(&schema, record))
            .collect::<Result<Vec<_>, _>>()?;

        let statement = query::insert(&schema, &rows);
        self.store.run(&statement)?;

        Ok(())
    }

    /// Insert the batch into another store, creating the table there if
    /// absent. Source rows are neither read nor removed.
    pub fn copy_many(&self, records: &[R], target: StoreLocator) -> Result<(), Error> {
        if records.is_empty() {
            return Err(BatchError::EmptyCollection.into());
        }

        let target = self.store.rebind(target)?;

        BatchExecutor::new(&target).create_many(records)
    }
}
