//! Core runtime for litebind: record traits, values, schema derivation, and
//! the SQLite-backed store handle exported via the `prelude`.
//!
//! A [`traits::Record`] describes a fixed set of named, typed fields.
//! [`db::Store::bind`] derives the table schema and primary key from that
//! shape, creates the table if absent, and returns a typed handle exposing
//! create/update/delete, batch insert, load, and migration operations. All
//! runtime values travel to the driver as bound parameters; statement text
//! never embeds field values.
#![warn(unreachable_pub)]

pub mod db;
pub mod error;
pub mod schema;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, or statement builders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{Row, Store, StoreLocator},
        schema::{ColumnType, FieldConstraints, FieldDef, TypeRef, TypeTable},
        traits::Record,
        value::{StorageType, Value},
    };
}
