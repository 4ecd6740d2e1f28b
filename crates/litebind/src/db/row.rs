use crate::{
    schema::SYNTHETIC_KEY,
    value::{StorageType, Value},
};
use thiserror::Error as ThisError;

///
/// RowError
///
/// A stored row that does not fit the shape the record type expects, or a
/// record instance that fails to supply a declared column's value.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum RowError {
    #[error("column {column} is missing")]
    MissingColumn { column: String },

    #[error("column {column} expects {expected} storage, found {found}")]
    TypeMismatch {
        column: String,
        expected: StorageType,
        found: StorageType,
    },
}

///
/// Row
///
/// One stored row as an ordered column/value view, in the table's
/// deterministic select order. Used to rebuild record instances via
/// [`crate::traits::Record::from_row`] and to carry rows across stores during
/// migration.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    #[must_use]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, column: String, value: Value) {
        self.columns.push((column, value));
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn require(&self, column: &str) -> Result<&Value, RowError> {
        self.get(column).ok_or_else(|| RowError::MissingColumn {
            column: column.to_string(),
        })
    }

    pub fn integer(&self, column: &str) -> Result<i64, RowError> {
        let value = self.require(column)?;

        value
            .as_integer()
            .ok_or_else(|| type_mismatch(column, StorageType::Integer, value))
    }

    pub fn real(&self, column: &str) -> Result<f64, RowError> {
        let value = self.require(column)?;

        value
            .as_real()
            .ok_or_else(|| type_mismatch(column, StorageType::Real, value))
    }

    pub fn text(&self, column: &str) -> Result<String, RowError> {
        let value = self.require(column)?;

        value
            .as_text()
            .map(ToString::to_string)
            .ok_or_else(|| type_mismatch(column, StorageType::Text, value))
    }

    pub fn blob(&self, column: &str) -> Result<Vec<u8>, RowError> {
        let value = self.require(column)?;

        value
            .as_blob()
            .map(<[u8]>::to_vec)
            .ok_or_else(|| type_mismatch(column, StorageType::Blob, value))
    }

    /// The synthetic key value, when this row carries one.
    #[must_use]
    pub fn rowid(&self) -> Option<i64> {
        self.get(SYNTHETIC_KEY).and_then(Value::as_integer)
    }
}

fn type_mismatch(column: &str, expected: StorageType, found: &Value) -> RowError {
    RowError::TypeMismatch {
        column: column.to_string(),
        expected,
        found: found.storage_type(),
    }
}
