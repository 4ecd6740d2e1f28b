use crate::{
    Error,
    db::{RowError, Statement, Store, query},
    schema::TableSchema,
    traits::Record,
    value::Value,
};

///
/// LoadExecutor
///

pub struct LoadExecutor<'a, R: Record> {
    store: &'a Store<R>,
}

impl<'a, R: Record> LoadExecutor<'a, R> {
    #[must_use]
    pub(crate) const fn new(store: &'a Store<R>) -> Self {
        Self { store }
    }

    /// Fetch one instance by primary key.
    pub fn get(&self, key: &[Value]) -> Result<Option<R>, Error> {
        let schema = self.store.schema()?;
        schema.key().validate(key, self.store.types())?;

        let filter = query::key_condition(schema.key().fields(), key);
        let statement = query::select(&schema, Some(filter), None);

        let rows = self.store.fetch(&statement, &schema.select_columns())?;
        rows.first()
            .map(|row| R::from_row(row))
            .transpose()
            .map_err(Error::from)
    }

    /// Whether a row exists under `key`.
    pub fn exists(&self, key: &[Value]) -> Result<bool, Error> {
        Ok(self.get(key)?.is_some())
    }

    /// Every stored instance.
    pub fn all(&self) -> Result<Vec<R>, Error> {
        let schema = self.store.schema()?;
        let statement = query::select(&schema, None, None);

        self.decode(&schema, &statement)
    }

    /// One key-ordered page. Pages start at 1; a page number of 0 reads the
    /// first page.
    pub fn page(&self, page: u64, per_page: u64) -> Result<Vec<R>, Error> {
        let schema = self.store.schema()?;
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        let statement = query::select(&schema, None, Some((per_page, offset)));

        self.decode(&schema, &statement)
    }

    /// Every instance whose `field` equals `value`. The field must be a
    /// declared column of the record type.
    pub fn find_equal(&self, field: &str, value: Value) -> Result<Vec<R>, Error> {
        let schema = self.store.schema()?;
        if schema.column(field).is_none() {
            return Err(RowError::MissingColumn {
                column: field.to_string(),
            }
            .into());
        }

        let filter = (format!("{field}=?"), vec![value]);
        let statement = query::select(&schema, Some(filter), None);

        self.decode(&schema, &statement)
    }

    fn decode(&self, schema: &TableSchema, statement: &Statement) -> Result<Vec<R>, Error> {
        let rows = self.store.fetch(statement, &schema.select_columns())?;

        rows.iter()
            .map(|row| R::from_row(row).map_err(Error::from))
            .collect()
    }
}
