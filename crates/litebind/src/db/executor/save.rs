use crate::{
    Error,
    db::{Store, executor::row_values, query},
    schema::instance_key,
    traits::Record,
};
use std::slice;

///
/// SaveExecutor
///

pub struct SaveExecutor<'a, R: Record> {
    store: &'a Store<R>,
}

impl<'a, R: Record> SaveExecutor<'a, R> {
    #[must_use]
    pub(crate) const fn new(store: &'a Store<R>) -> Self {
        Self { store }
    }

    /// Persist a new instance as one committed single-row INSERT.
    ///
    /// When the type carries the synthetic key, the store-assigned rowid is
    /// written back onto the instance; that transition is what makes update
    /// and delete addressable later. A uniqueness or primary-key conflict
    /// surfaces as [`crate::db::StoreError::ConstraintViolation`].
    pub fn create(&self, record: &mut R) -> Result<(), Error> {
        let schema = self.store.schema()?;
        let values = row_values(&schema, record)?;
        let statement = query::insert(&schema, slice::from_ref(&values));

        let rowid = self.store.run_insert(&statement)?;
        if schema.key().is_synthetic() {
            record.set_rowid(rowid);
        }

        Ok(())
    }

    /// Write every declared field's current value to the instance's row,
    /// addressed by the key read off the instance before the update applies.
    ///
    /// No row-count check: updating a key that was never created affects zero
    /// rows and is not an error.
    pub fn update(&self, record: &R) -> Result<(), Error> {
        let schema = self.store.schema()?;
        let key = instance_key(record)?;
        schema.key().validate(&key, self.store.types())?;

        let values = row_values(&schema, record)?;
        let statement = query::update(&schema, values, &key);
        self.store.run(&statement)?;

        Ok(())
    }
}
