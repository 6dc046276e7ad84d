use super::*;

/// A node of the restricted expression language translated into SQL.
///
/// Each variant has exactly one translation rule in `lightorm-sql`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// An argument of the enclosing lambda that was never bound to a column
    /// or a value
    Arg(ExprArg),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a column
    Column(ExprColumn),

    /// In list
    InList(ExprInList),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// Pattern match with `LIKE`
    Like(ExprLike),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of expressions
    Or(ExprOr),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Returns true if the expression is the `true` boolean expression
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    /// Returns true if the expression combines operands with AND or OR
    pub fn is_logical(&self) -> bool {
        matches!(self, Self::And(..) | Self::Or(..))
    }

    /// Name of the node kind, used to identify nodes in errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::And(_) => "and",
            Self::Arg(_) => "arg",
            Self::BinaryOp(_) => "binary_op",
            Self::Column(_) => "column",
            Self::InList(_) => "in_list",
            Self::IsNull(_) => "is_null",
            Self::Like(_) => "like",
            Self::Not(_) => "not",
            Self::Or(_) => "or",
            Self::Value(_) => "value",
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(Value::I32(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(Value::I64(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Value(Value::F64(value))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}
