use crate::{
    db::{Row, RowError},
    schema::FieldDef,
    value::Value,
};

///
/// Record
///
/// The declaration boundary: a fixed set of named, typed fields describing
/// one persisted entity kind. How a type produces this metadata (hand-written,
/// generated, reflected) is outside this crate; the store only consumes it.
///
/// ## Contract
/// - `fields()` is static metadata: the same list, in declaration order, on
///   every call. Operations re-derive schema and key information from it each
///   time and never cache query fragments.
/// - `value(name)` returns `Some` for every declared field name.
/// - Types with no primary-marked field carry the synthetic rowid; such types
///   must store the id handed to `set_rowid` and report it from `rowid`.
///

pub trait Record: Sized {
    /// Record type name. The bound table name is its lower-cased form.
    const NAME: &'static str;

    /// Declared fields, in declaration order.
    fn fields() -> Vec<FieldDef>;

    /// Current value of one declared field, by name.
    fn value(&self, field: &str) -> Option<Value>;

    /// Rebuild an instance from one stored row.
    fn from_row(row: &Row) -> Result<Self, RowError>;

    /// Store-assigned rowid, when this type carries the synthetic key.
    ///
    /// `None` both for types with a declared primary key and for
    /// synthetic-key instances that have not been created yet.
    fn rowid(&self) -> Option<i64> {
        None
    }

    /// Writeback of the store-assigned rowid after a successful create.
    /// No-op for types with a declared primary key.
    fn set_rowid(&mut self, rowid: i64) {
        let _ = rowid;
    }
}
