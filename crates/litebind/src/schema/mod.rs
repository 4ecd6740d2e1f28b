//! Schema derivation: field descriptors, the declared-type → storage-type
//! table, primary-key resolution, and table DDL generation.

mod ddl;
mod field;
mod key;
mod table;

pub use ddl::{ColumnDef, TableSchema, literal};
pub use field::{FieldConstraints, FieldDef};
pub use key::{KeyError, PrimaryKey, SYNTHETIC_KEY, instance_key};
pub use table::{ColumnType, TypeRef, TypeTable};

use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Registration-time failures. An unmapped declared type aborts the bind;
/// there is no implicit coercion or fallback mapping.
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("no storage mapping for declared type {type_ref}")]
    UnmappedType { type_ref: TypeRef },
}
