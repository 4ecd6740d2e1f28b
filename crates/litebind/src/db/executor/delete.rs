use crate::{
    Error,
    db::{Store, query},
    schema::instance_key,
    traits::Record,
    value::Value,
};

///
/// DeleteExecutor
///

pub struct DeleteExecutor<'a, R: Record> {
    store: &'a Store<R>,
}

impl<'a, R: Record> DeleteExecutor<'a, R> {
    #[must_use]
    pub(crate) const fn new(store: &'a Store<R>) -> Self {
        Self { store }
    }

    /// Remove one instance's row, addressed by the key read off the instance.
    pub fn one(&self, record: &R) -> Result<(), Error> {
        let key = instance_key(record)?;

        self.by_key(&key)
    }

    /// Remove a row by explicit key value. The type-level form: no live
    /// instance is required.
    pub fn by_key(&self, key: &[Value]) -> Result<(), Error> {
        let schema = self.store.schema()?;
        schema.key().validate(key, self.store.types())?;

        let statement = query::delete(&schema, key);
        self.store.run(&statement)?;

        Ok(())
    }
}
