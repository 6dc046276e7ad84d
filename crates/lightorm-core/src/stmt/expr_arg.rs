use super::Expr;

/// Position of an argument in the enclosing lambda. SQL has no equivalent;
/// the argument must be rewritten into a column or a value before
/// translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprArg {
    pub position: usize,
}

impl Expr {
    pub fn arg(position: usize) -> Self {
        ExprArg { position }.into()
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
