use crate::{
    schema::{FieldDef, TableSchema},
    value::Value,
};

///
/// Statement
///
/// One executable statement: SQL text with `?` placeholders, plus the bound
/// parameters in placeholder order. Values never appear in the text itself.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }
}

/// Zip resolved key fields with a key tuple into a `field=?` predicate joined
/// with ` AND `, plus the parameters in key order.
///
/// The key must already have passed [`crate::schema::PrimaryKey::validate`].
pub(crate) fn key_condition(fields: &[FieldDef], key: &[Value]) -> (String, Vec<Value>) {
    debug_assert_eq!(fields.len(), key.len());

    let predicate = fields
        .iter()
        .map(|field| format!("{}=?", field.name()))
        .collect::<Vec<_>>()
        .join(" AND ");

    (predicate, key.to_vec())
}

/// Single- or multi-row INSERT over the declared columns in deterministic
/// order. One statement regardless of row count; a batch commits or fails
/// atomically.
pub(crate) fn insert(schema: &TableSchema, rows: &[Vec<Value>]) -> Statement {
    let columns = schema.insert_columns();
    let tuple = format!("({})", vec!["?"; columns.len()].join(", "));
    let tuples = vec![tuple; rows.len()].join(", ");

    Statement {
        sql: format!(
            "INSERT INTO {}({}) VALUES {};",
            schema.table(),
            columns.join(", "),
            tuples
        ),
        params: rows.iter().flatten().cloned().collect(),
    }
}

/// UPDATE setting every declared column, addressed by key.
pub(crate) fn update(schema: &TableSchema, values: Vec<Value>, key: &[Value]) -> Statement {
    let set = schema
        .insert_columns()
        .iter()
        .map(|column| format!("{column}=?"))
        .collect::<Vec<_>>()
        .join(", ");
    let (predicate, key_params) = key_condition(schema.key().fields(), key);

    let mut params = values;
    params.extend(key_params);

    Statement {
        sql: format!("UPDATE {} SET {} WHERE {};", schema.table(), set, predicate),
        params,
    }
}

/// DELETE addressed by key.
pub(crate) fn delete(schema: &TableSchema, key: &[Value]) -> Statement {
    let (predicate, params) = key_condition(schema.key().fields(), key);

    Statement {
        sql: format!("DELETE FROM {} WHERE {};", schema.table(), predicate),
        params,
    }
}

/// SELECT over the deterministic column list, optionally filtered, optionally
/// windowed. Windowed selects are ordered by the primary key so that page
/// boundaries are stable across calls.
pub(crate) fn select(
    schema: &TableSchema,
    filter: Option<(String, Vec<Value>)>,
    window: Option<(u64, u64)>,
) -> Statement {
    let mut sql = format!(
        "SELECT {} FROM {}",
        schema.select_columns().join(", "),
        schema.table()
    );
    let mut params = Vec::new();

    if let Some((predicate, filter_params)) = filter {
        sql.push_str(" WHERE ");
        sql.push_str(&predicate);
        params.extend(filter_params);
    }

    if let Some((limit, offset)) = window {
        let order = schema
            .key()
            .fields()
            .iter()
            .map(FieldDef::name)
            .collect::<Vec<_>>()
            .join(", ");

        sql.push_str(&format!(" ORDER BY {order} LIMIT ? OFFSET ?"));
        params.push(Value::Integer(i64::try_from(limit).unwrap_or(i64::MAX)));
        params.push(Value::Integer(i64::try_from(offset).unwrap_or(i64::MAX)));
    }

    sql.push(';');

    Statement { sql, params }
}
