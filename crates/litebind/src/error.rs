use crate::{
    db::{
        RowError,
        executor::{BatchError, MigrateError},
        store::StoreError,
    },
    schema::{KeyError, SchemaError},
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for every store operation. Each variant carries a
/// module-local error unchanged; nothing is reclassified or suppressed on the
/// way up. The only failure treated as recoverable by design is
/// [`StoreError::ConstraintViolation`]; every other driver error propagates
/// exactly as the driver raised it.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Migrate(#[from] MigrateError),

    #[error(transparent)]
    Row(#[from] RowError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
