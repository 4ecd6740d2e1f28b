use crate::{schema::table::TypeRef, value::Value};
use serde::Serialize;

///
/// FieldConstraints
///
/// Explicit per-field schema role. This replaces type-level constraint
/// wrappers: a field is marked primary or unique by its descriptor, not by
/// the identity of its declared type.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FieldConstraints {
    pub primary: bool,
    pub unique: bool,
}

///
/// FieldDef
///
/// One declared field of a record type: name, declared type, constraint
/// descriptor, and an optional default value. Built fluently:
///
/// `FieldDef::new("tag", TypeRef::Text).primary()`
/// `FieldDef::new("rating", TypeRef::Real).default_value(1.0)`
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDef {
    name: &'static str,
    type_ref: TypeRef,
    constraints: FieldConstraints,
    default: Option<Value>,
}

impl FieldDef {
    #[must_use]
    pub const fn new(name: &'static str, type_ref: TypeRef) -> Self {
        Self {
            name,
            type_ref,
            constraints: FieldConstraints {
                primary: false,
                unique: false,
            },
            default: None,
        }
    }

    /// Mark this field as part of the declared primary key.
    #[must_use]
    pub const fn primary(mut self) -> Self {
        self.constraints.primary = true;
        self
    }

    /// Require values of this field to be present and distinct.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.constraints.unique = true;
        self
    }

    /// Declare a default value, emitted as a `DEFAULT` clause in the DDL and
    /// used to fill unmapped fields during migration.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    #[must_use]
    pub const fn constraints(&self) -> FieldConstraints {
        self.constraints
    }

    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}
