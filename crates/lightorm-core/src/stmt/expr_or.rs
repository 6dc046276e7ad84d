use super::*;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Disjunction of `lhs` and `rhs`, flattening nested disjunctions.
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let operands = [lhs.into(), rhs.into()]
            .into_iter()
            .flat_map(|expr| match expr {
                Self::Or(or) => or.operands,
                expr => vec![expr],
            })
            .collect();

        ExprOr { operands }.into()
    }
}

impl ops::Deref for ExprOr {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a ExprOr {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
