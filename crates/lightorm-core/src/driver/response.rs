use super::Cursor;
use crate::{stmt::Value, Error, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// A single scalar, the first column of the first row
    Value(Value),

    /// Operation result, as a read cursor
    Cursor(Box<dyn Cursor>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn value(value: Value) -> Self {
        Self {
            rows: Rows::Value(value),
        }
    }

    pub fn cursor(cursor: impl Cursor + 'static) -> Self {
        Self {
            rows: Rows::Cursor(Box::new(cursor)),
        }
    }
}

impl Rows {
    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            rows => Err(Error::invalid_result(format!(
                "expected Count, got {}",
                rows.name()
            ))),
        }
    }

    pub fn into_value(self) -> Result<Value> {
        match self {
            Rows::Value(value) => Ok(value),
            rows => Err(Error::invalid_result(format!(
                "expected Value, got {}",
                rows.name()
            ))),
        }
    }

    pub fn into_cursor(self) -> Result<Box<dyn Cursor>> {
        match self {
            Rows::Cursor(cursor) => Ok(cursor),
            rows => Err(Error::invalid_result(format!(
                "expected Cursor, got {}",
                rows.name()
            ))),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Rows::Count(_) => "Count",
            Rows::Value(_) => "Value",
            Rows::Cursor(_) => "Cursor",
        }
    }
}
