use lightorm_core::stmt::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub filter: Option<Expr>,
}

impl Delete {
    pub fn from_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filter: None,
        }
    }

    /// Adds a filter. Repeated calls are combined with AND.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }
}
