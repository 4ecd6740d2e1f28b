//! Shared sample record types for in-tree tests, covering every primary-key
//! shape: synthetic, single declared, composite, unique-constrained, and a
//! custom declared type needing an override table.

use crate::{
    db::{Row, RowError},
    schema::{FieldDef, TypeRef},
    traits::Record,
    value::Value,
};

/// Synthetic key, one declared default.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Note {
    pub body: String,
    pub rating: f64,
    pub id: Option<i64>,
}

impl Record for Note {
    const NAME: &'static str = "Note";

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("body", TypeRef::Text),
            FieldDef::new("rating", TypeRef::Real).default_value(0.5),
        ]
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "body" => Some(self.body.as_str().into()),
            "rating" => Some(self.rating.into()),
            _ => None,
        }
    }

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            body: row.text("body")?,
            rating: row.real("rating")?,
            id: row.rowid(),
        })
    }

    fn rowid(&self) -> Option<i64> {
        self.id
    }

    fn set_rowid(&mut self, rowid: i64) {
        self.id = Some(rowid);
    }
}

/// Single declared text primary key.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Tag {
    pub name: String,
    pub weight: i64,
}

impl Record for Tag {
    const NAME: &'static str = "Tag";

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("name", TypeRef::Text).primary(),
            FieldDef::new("weight", TypeRef::Integer),
        ]
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "name" => Some(self.name.as_str().into()),
            "weight" => Some(self.weight.into()),
            _ => None,
        }
    }

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            name: row.text("name")?,
            weight: row.integer("weight")?,
        })
    }
}

/// Composite declared key, one declared default.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Waypoint {
    pub x: i64,
    pub y: i64,
    pub label: String,
}

impl Record for Waypoint {
    const NAME: &'static str = "Waypoint";

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("x", TypeRef::Integer).primary(),
            FieldDef::new("y", TypeRef::Integer).primary(),
            FieldDef::new("label", TypeRef::Text).default_value("origin"),
        ]
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "x" => Some(self.x.into()),
            "y" => Some(self.y.into()),
            "label" => Some(self.label.as_str().into()),
            _ => None,
        }
    }

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            x: row.integer("x")?,
            y: row.integer("y")?,
            label: row.text("label")?,
        })
    }
}

/// Unique-constrained field on a synthetic-key type.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Login {
    pub email: String,
    pub attempts: i64,
    pub id: Option<i64>,
}

impl Record for Login {
    const NAME: &'static str = "Login";

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("email", TypeRef::Text).unique(),
            FieldDef::new("attempts", TypeRef::Integer),
        ]
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "email" => Some(self.email.as_str().into()),
            "attempts" => Some(self.attempts.into()),
            _ => None,
        }
    }

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            email: row.text("email")?,
            attempts: row.integer("attempts")?,
            id: row.rowid(),
        })
    }

    fn rowid(&self) -> Option<i64> {
        self.id
    }

    fn set_rowid(&mut self, rowid: i64) {
        self.id = Some(rowid);
    }
}

/// Migration source shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Ledger {
    pub ordinal: i64,
    pub conventional: String,
    pub id: Option<i64>,
}

impl Record for Ledger {
    const NAME: &'static str = "Ledger";

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("ordinal", TypeRef::Integer),
            FieldDef::new("conventional", TypeRef::Text),
        ]
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "ordinal" => Some(self.ordinal.into()),
            "conventional" => Some(self.conventional.as_str().into()),
            _ => None,
        }
    }

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            ordinal: row.integer("ordinal")?,
            conventional: row.text("conventional")?,
            id: row.rowid(),
        })
    }

    fn rowid(&self) -> Option<i64> {
        self.id
    }

    fn set_rowid(&mut self, rowid: i64) {
        self.id = Some(rowid);
    }
}

/// Migration target shape: declared key with defaults on every field.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct LedgerV2 {
    pub cardinal: i64,
    pub str_: String,
}

impl Record for LedgerV2 {
    const NAME: &'static str = "LedgerV2";

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("cardinal", TypeRef::Integer)
                .primary()
                .default_value(1),
            FieldDef::new("str_", TypeRef::Text).default_value("default"),
        ]
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "cardinal" => Some(self.cardinal.into()),
            "str_" => Some(self.str_.as_str().into()),
            _ => None,
        }
    }

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            cardinal: row.integer("cardinal")?,
            str_: row.text("str_")?,
        })
    }
}

/// Declared type outside the default table; binding needs an override.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Device {
    pub serial: String,
    pub id: Option<i64>,
}

impl Record for Device {
    const NAME: &'static str = "Device";

    fn fields() -> Vec<FieldDef> {
        vec![FieldDef::new("serial", TypeRef::Named("uuid"))]
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "serial" => Some(self.serial.as_str().into()),
            _ => None,
        }
    }

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            serial: row.text("serial")?,
            id: row.rowid(),
        })
    }

    fn rowid(&self) -> Option<i64> {
        self.id
    }

    fn set_rowid(&mut self, rowid: i64) {
        self.id = Some(rowid);
    }
}
