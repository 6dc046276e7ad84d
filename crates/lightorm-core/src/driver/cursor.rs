use crate::{
    stmt::{Type, Value},
    Result,
};

use std::fmt::Debug;

/// Read cursor over the rows of a result set.
///
/// A cursor owns everything it needs to produce rows, so it can outlive the
/// call that executed the command.
pub trait Cursor: Debug + Send {
    /// Schema of the result set
    fn columns(&self) -> &[Column];

    /// Advances to the next row. Returns `None` once the result set is
    /// exhausted, after which the cursor reports itself closed.
    fn next(&mut self) -> Result<Option<Row>>;

    fn is_closed(&self) -> bool;

    /// Cancels the in-flight command that produced this cursor. Best effort.
    fn cancel(&mut self) -> Result<()>;
}

/// One column of a result set schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ordinal: usize,
    pub ty: Option<Type>,
}

/// One row of a result set, indexed by column ordinal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            ordinal,
            ty: None,
        }
    }
}

impl Row {
    pub fn from_vec(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, ordinal: usize) -> Option<&Value> {
        self.values.get(ordinal)
    }

    /// Moves the value at `ordinal` out of the row, leaving null behind.
    pub fn take(&mut self, ordinal: usize) -> Value {
        self.values
            .get_mut(ordinal)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
