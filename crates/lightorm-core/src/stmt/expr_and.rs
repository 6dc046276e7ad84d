use super::*;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Conjunction of `lhs` and `rhs`. Nested conjunctions are flattened
    /// and `true` operands are dropped.
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut operands = vec![];

        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Self::And(and) => operands.extend(and.operands),
                expr if expr.is_true() => {}
                expr => operands.push(expr),
            }
        }

        Self::and_from_vec(operands)
    }

    pub fn and_from_vec(operands: Vec<Self>) -> Self {
        let mut operands = operands.into_iter();

        match (operands.next(), operands.len()) {
            (None, _) => true.into(),
            (Some(first), 0) => first,
            (Some(first), _) => ExprAnd {
                operands: std::iter::once(first).chain(operands).collect(),
            }
            .into(),
        }
    }
}

impl ops::Deref for ExprAnd {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a ExprAnd {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
