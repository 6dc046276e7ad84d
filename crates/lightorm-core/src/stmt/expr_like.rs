use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,
}

impl Expr {
    pub fn like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        ExprLike {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
        }
        .into()
    }

    /// Matches strings starting with `prefix`. The prefix itself is bound as
    /// a parameter.
    pub fn begins_with(expr: impl Into<Self>, prefix: &str) -> Self {
        Expr::like(expr, format!("{prefix}%"))
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Self::Like(value)
    }
}
