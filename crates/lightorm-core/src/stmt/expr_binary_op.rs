use super::{BinaryOp, Expr};

/// `lhs <op> rhs`, for comparisons and arithmetic. Rendered as
/// `(lhs <op> rhs)` when nested inside another operator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    /// The left-hand side expression.
    pub lhs: Box<Expr>,

    /// The operator to apply.
    pub op: BinaryOp,

    /// The right-hand side expression.
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }
}

macro_rules! binary_ops {
    ($($name:ident => $op:ident,)*) => {
        impl Expr {
            $(
                #[doc = concat!("`lhs` [`BinaryOp::", stringify!($op), "`] `rhs`")]
                pub fn $name(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
                    Expr::binary_op(lhs, BinaryOp::$op, rhs)
                }
            )*
        }
    };
}

binary_ops! {
    eq => Eq,
    ne => Ne,
    ge => Ge,
    gt => Gt,
    le => Le,
    lt => Lt,
    add => Add,
    sub => Sub,
    mul => Mul,
    div => Div,
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
