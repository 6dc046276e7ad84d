use crate::Result;

use lightorm_core::{
    driver::{Column, Cursor, Row},
    stmt::Value,
};

/// A fully materialized result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub(crate) fn load(cursor: &mut dyn Cursor) -> Result<Table> {
        let columns = cursor.columns().to_vec();
        let mut rows = vec![];

        while let Some(row) = cursor.next()? {
            rows.push(row);
        }

        Ok(Table { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ordinal of the named column, matched case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// Value at `row` in the named column.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let ordinal = self.column_index(column)?;
        self.rows.get(row)?.get(ordinal)
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}
