use crate::{
    schema::{PrimaryKey, SYNTHETIC_KEY, SchemaError, TypeTable},
    traits::Record,
    value::{StorageType, Value},
};
use serde::Serialize;
use std::fmt::Write;

///
/// ColumnDef
///
/// One resolved column: name, storage type, rendered attributes, and the
/// declared default. Produced by resolving a field against the active type
/// table; unique-constrained fields pick up `NOT NULL UNIQUE` here.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnDef {
    name: String,
    storage: StorageType,
    attributes: String,
    default: Option<Value>,
}

impl ColumnDef {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn storage(&self) -> StorageType {
        self.storage
    }

    #[must_use]
    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

///
/// TableSchema
///
/// A record type resolved against a type table: derived table name, declared
/// columns in deterministic order (sorted by name), and the primary-key
/// decision. The synthetic key column is not part of `columns`; it is
/// store-assigned and appears only in the DDL and in select lists.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableSchema {
    table: String,
    columns: Vec<ColumnDef>,
    key: PrimaryKey,
}

impl TableSchema {
    /// Resolve a record type. Fails on the first declared type the table
    /// cannot map.
    pub fn of<R: Record>(types: &TypeTable) -> Result<Self, SchemaError> {
        let fields = R::fields();
        let key = PrimaryKey::resolve(&fields);

        let mut columns = fields
            .iter()
            .map(|field| {
                let column_type = types.resolve(field.type_ref())?;
                let mut attributes = column_type.attributes().to_string();

                if field.constraints().unique {
                    if !attributes.is_empty() {
                        attributes.push(' ');
                    }
                    attributes.push_str("NOT NULL UNIQUE");
                }

                // A default survives resolution only when its own storage
                // class is mapped by the active table.
                let default = field
                    .default()
                    .filter(|d| types.maps_storage(d))
                    .cloned();

                Ok(ColumnDef {
                    name: field.name().to_string(),
                    storage: column_type.storage(),
                    attributes,
                    default,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        columns.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            table: R::NAME.to_lowercase(),
            columns,
            key,
        })
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Declared columns, sorted by name.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub const fn key(&self) -> &PrimaryKey {
        &self.key
    }

    /// Column order for INSERT statements: the declared columns only. The
    /// synthetic key is never named in an insert; the store assigns it.
    #[must_use]
    pub fn insert_columns(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Column order for SELECT statements: the declared columns, then the
    /// synthetic key column when this type carries one.
    #[must_use]
    pub fn select_columns(&self) -> Vec<&str> {
        let mut cols = self.insert_columns();
        if self.key.is_synthetic() {
            cols.push(SYNTHETIC_KEY);
        }

        cols
    }

    /// The create-if-absent statement for this schema.
    ///
    /// A synthetic key renders as a trailing
    /// `__id__ INTEGER PRIMARY KEY AUTOINCREMENT` column and no separate key
    /// clause; a declared key renders as a trailing `PRIMARY KEY(...)` clause
    /// over exactly the key fields, in declaration order.
    #[must_use]
    pub fn create_statement(&self) -> String {
        let mut parts: Vec<String> = self
            .columns
            .iter()
            .map(|column| {
                let mut def = format!("{} {}", column.name, column.storage);

                if !column.attributes.is_empty() {
                    def.push(' ');
                    def.push_str(&column.attributes);
                }
                if let Some(default) = &column.default {
                    def.push_str(" DEFAULT ");
                    def.push_str(&literal(default));
                }

                def
            })
            .collect();

        if self.key.is_synthetic() {
            parts.push(format!("{SYNTHETIC_KEY} INTEGER PRIMARY KEY AUTOINCREMENT"));
        } else {
            let key_columns: Vec<&str> =
                self.key.fields().iter().map(|f| f.name()).collect();
            parts.push(format!("PRIMARY KEY({})", key_columns.join(", ")));
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {}({});",
            self.table,
            parts.join(", ")
        )
    }
}

/// Render a value as a DDL literal.
///
/// Only `DEFAULT` clauses go through here; every other value reaches the
/// driver as a bound parameter. Text is single-quoted with embedded quotes
/// doubled; blobs render in hex form.
#[must_use]
pub fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(v) => v.to_string(),
        Value::Real(v) => v.to_string(),
        Value::Text(v) => format!("'{}'", v.replace('\'', "''")),
        Value::Blob(v) => {
            let mut out = String::with_capacity(v.len() * 2 + 3);
            out.push_str("X'");
            for byte in v {
                let _ = write!(out, "{byte:02X}");
            }
            out.push('\'');

            out
        }
    }
}
