use crate::{coerce, Primitive, Result};

use lightorm_core::{
    driver::{Column, Row},
    stmt::Value,
};

/// A type that can be materialized from one result row.
///
/// Scalar types read the first column. Structs deriving `FromRow` read each
/// field from the column of the same name, compared case-insensitively.
/// Fields with no matching column keep their default value.
pub trait FromRow: Sized {
    /// Field names in declaration order. Empty for scalar targets.
    fn fields() -> &'static [&'static str];

    fn from_row(row: Row, map: &RowMap) -> Result<Self>;
}

/// Resolved mapping from target fields to column ordinals for one result
/// schema.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMap {
    /// Column names the map was built against
    columns: Vec<String>,

    /// For each field, the column it reads from
    ordinals: Vec<Option<usize>>,
}

impl RowMap {
    pub fn build(fields: &[&str], columns: &[Column]) -> RowMap {
        let ordinals = if fields.is_empty() {
            vec![if columns.is_empty() { None } else { Some(0) }]
        } else {
            fields
                .iter()
                .map(|field| resolve(field, columns))
                .collect()
        };

        RowMap {
            columns: columns.iter().map(|column| column.name.clone()).collect(),
            ordinals,
        }
    }

    /// Returns `true` if the map was built for a result with these columns.
    pub fn matches(&self, columns: &[Column]) -> bool {
        self.columns.len() == columns.len()
            && self
                .columns
                .iter()
                .zip(columns)
                .all(|(name, column)| *name == column.name)
    }

    pub fn ordinal(&self, field: usize) -> Option<usize> {
        self.ordinals.get(field).copied().flatten()
    }

    /// Moves the value for `field` out of `row`. Unmapped fields read null.
    pub fn take(&self, row: &mut Row, field: usize) -> Value {
        match self.ordinal(field) {
            Some(ordinal) => row.take(ordinal),
            None => Value::Null,
        }
    }
}

fn resolve(field: &str, columns: &[Column]) -> Option<usize> {
    columns
        .iter()
        .position(|column| column.name == field)
        .or_else(|| {
            columns
                .iter()
                .position(|column| column.name.eq_ignore_ascii_case(field))
        })
}

impl<T: Primitive + Default> FromRow for T {
    fn fields() -> &'static [&'static str] {
        &[]
    }

    fn from_row(mut row: Row, map: &RowMap) -> Result<Self> {
        Ok(coerce(map.take(&mut row, 0)))
    }
}
