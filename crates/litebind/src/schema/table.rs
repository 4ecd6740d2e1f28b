use crate::{
    schema::SchemaError,
    value::{StorageType, Value},
};
use derive_more::Display;
use serde::Serialize;
use std::collections::BTreeMap;

///
/// TypeRef
///
/// A field's declared type: one of the five storage primitives, or a named
/// custom type that an override table must map. Exact-key lookup only: a
/// `Named` type with no table entry is an error, never a fallback.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum TypeRef {
    #[display("NULL")]
    Null,
    #[display("INTEGER")]
    Integer,
    #[display("REAL")]
    Real,
    #[display("TEXT")]
    Text,
    #[display("BLOB")]
    Blob,
    #[display("{_0}")]
    Named(&'static str),
}

///
/// ColumnType
///
/// The storage side of a type-table entry: the column's storage class plus
/// any extra column attributes (`NOT NULL`, collation, …) rendered after the
/// type keyword in DDL.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ColumnType {
    storage: StorageType,
    attributes: String,
}

impl ColumnType {
    #[must_use]
    pub fn new(storage: StorageType) -> Self {
        Self {
            storage,
            attributes: String::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(storage: StorageType, attributes: impl Into<String>) -> Self {
        Self {
            storage,
            attributes: attributes.into(),
        }
    }

    #[must_use]
    pub const fn storage(&self) -> StorageType {
        self.storage
    }

    #[must_use]
    pub fn attributes(&self) -> &str {
        &self.attributes
    }
}

///
/// TypeTable
///
/// Mapping from declared types to column types. `defaults()` seeds the five
/// primitive rows; a per-registration override table is merged on top of (not
/// replacing) the defaults at bind. The table is an explicit immutable value
/// threaded through every schema derivation; there is no process-wide state.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TypeTable {
    entries: BTreeMap<TypeRef, ColumnType>,
}

impl TypeTable {
    /// An empty table, the starting point for override sets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The default table: the five primitive mappings.
    #[must_use]
    pub fn defaults() -> Self {
        Self::new()
            .with(TypeRef::Null, ColumnType::new(StorageType::Null))
            .with(TypeRef::Integer, ColumnType::new(StorageType::Integer))
            .with(TypeRef::Real, ColumnType::new(StorageType::Real))
            .with(TypeRef::Text, ColumnType::new(StorageType::Text))
            .with(TypeRef::Blob, ColumnType::new(StorageType::Blob))
    }

    /// Add or replace one entry.
    #[must_use]
    pub fn with(mut self, type_ref: TypeRef, column_type: ColumnType) -> Self {
        self.entries.insert(type_ref, column_type);
        self
    }

    /// Merge `overrides` on top of this table. Overridden keys win; every
    /// other entry is left in place.
    #[must_use]
    pub fn overlay(mut self, overrides: Self) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    /// Resolve one declared type. Exact-key lookup, no coercion.
    pub fn resolve(&self, type_ref: &TypeRef) -> Result<&ColumnType, SchemaError> {
        self.entries
            .get(type_ref)
            .ok_or_else(|| SchemaError::UnmappedType {
                type_ref: type_ref.clone(),
            })
    }

    /// Whether a runtime value's storage class is mapped by this table.
    /// Declared defaults are checked against the primitive rows this way,
    /// never against named entries.
    #[must_use]
    pub fn maps_storage(&self, value: &Value) -> bool {
        let type_ref = match value.storage_type() {
            StorageType::Null => TypeRef::Null,
            StorageType::Integer => TypeRef::Integer,
            StorageType::Real => TypeRef::Real,
            StorageType::Text => TypeRef::Text,
            StorageType::Blob => TypeRef::Blob,
        };

        self.entries.contains_key(&type_ref)
    }
}
