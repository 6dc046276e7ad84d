use lightorm_core::stmt::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    /// Selected columns; empty selects `*`
    pub columns: Vec<String>,

    pub filter: Option<Expr>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Select {
    pub fn from_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            filter: None,
            order_by: vec![],
            limit: None,
            offset: None,
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

    /// Adds a filter. Repeated calls are combined with AND.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order_by.push(OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}
