use lightorm_core::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,

    /// One entry per inserted row, each as wide as `columns`
    pub rows: Vec<Vec<Value>>,
}

impl Insert {
    pub fn into_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            rows: vec![],
        }
    }

    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn values<I>(mut self, row: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }
}
