use lightorm_core::stmt::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub filter: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub expr: Expr,
}

impl Update {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            assignments: vec![],
            filter: None,
        }
    }

    pub fn set(mut self, column: impl Into<String>, expr: impl Into<Expr>) -> Self {
        self.assignments.push(Assignment {
            column: column.into(),
            expr: expr.into(),
        });
        self
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
