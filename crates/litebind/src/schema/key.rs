use crate::{
    schema::{FieldDef, SchemaError, TypeRef, TypeTable},
    traits::Record,
    value::{StorageType, Value},
};
use serde::Serialize;
use std::slice;
use thiserror::Error as ThisError;

/// Reserved column name for the synthetic surrogate key.
pub const SYNTHETIC_KEY: &str = "__id__";

///
/// KeyError
///
/// A caller-supplied key that does not fit the record type's resolved
/// primary-key shape. Recoverable: the caller owns the malformed input.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum KeyError {
    #[error(
        "key component {position} ({field}) expects {expected} storage, found {found}"
    )]
    ComponentMismatch {
        position: usize,
        field: String,
        expected: StorageType,
        found: StorageType,
    },

    #[error("record supplies no value for declared key field {field}")]
    MissingComponent { field: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("key has {found} components, primary key expects {expected}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("instance has no stored rowid; create it before update or delete")]
    TransientInstance,
}

///
/// PrimaryKey
///
/// The ordered, non-empty set of fields addressing one row.
///
/// `Declared` holds exactly the primary-marked fields, in declaration order.
/// `Synthetic` is the fallback when no field is marked: a single reserved
/// auto-incrementing INTEGER column that is not part of the declared fields.
/// Resolution is pure and is re-derived from field metadata on every call,
/// never cached.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum PrimaryKey {
    Synthetic(FieldDef),
    Declared(Vec<FieldDef>),
}

impl PrimaryKey {
    /// Derive the primary key for a set of declared fields.
    #[must_use]
    pub fn resolve(fields: &[FieldDef]) -> Self {
        let declared: Vec<FieldDef> = fields
            .iter()
            .filter(|f| f.constraints().primary)
            .cloned()
            .collect();

        if declared.is_empty() {
            Self::Synthetic(FieldDef::new(SYNTHETIC_KEY, TypeRef::Integer))
        } else {
            Self::Declared(declared)
        }
    }

    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }

    /// Key fields in key order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        match self {
            Self::Synthetic(field) => slice::from_ref(field),
            Self::Declared(fields) => fields,
        }
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.fields().len()
    }

    /// Check a key tuple against this key's shape: exact arity, and per
    /// position the component's storage class must equal the key column's
    /// storage type. `Null` is never a valid key component.
    pub fn validate(&self, key: &[Value], types: &TypeTable) -> Result<(), KeyError> {
        let fields = self.fields();

        if key.len() != fields.len() {
            return Err(KeyError::ShapeMismatch {
                expected: fields.len(),
                found: key.len(),
            });
        }

        for (position, (field, value)) in fields.iter().zip(key).enumerate() {
            let expected = types.resolve(field.type_ref())?.storage();
            let found = value.storage_type();

            if found != expected || value.is_null() {
                return Err(KeyError::ComponentMismatch {
                    position,
                    field: field.name().to_string(),
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }
}

/// Read a record instance's current key value off its live field values.
///
/// Synthetic-key instances read the stored rowid; an instance that was never
/// created has none and fails with [`KeyError::TransientInstance`].
pub fn instance_key<R: Record>(record: &R) -> Result<Vec<Value>, KeyError> {
    match PrimaryKey::resolve(&R::fields()) {
        PrimaryKey::Synthetic(_) => record
            .rowid()
            .map(|id| vec![Value::Integer(id)])
            .ok_or(KeyError::TransientInstance),

        PrimaryKey::Declared(fields) => fields
            .iter()
            .map(|f| {
                record
                    .value(f.name())
                    .ok_or_else(|| KeyError::MissingComponent {
                        field: f.name().to_string(),
                    })
            })
            .collect(),
    }
}
