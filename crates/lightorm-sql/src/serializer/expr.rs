use super::{Comma, Delimited, Ident, Translate};
use crate::SqlClause;

use lightorm_core::{
    stmt::{self, Expr},
    Error, Result,
};

/// An operand of a binary operator or predicate. Compound operands are
/// parenthesized so the rendered SQL keeps the tree's grouping.
pub(super) struct Operand<'a>(pub(super) &'a Expr);

/// An operand of AND / OR. Only nested logical expressions need grouping.
pub(super) struct Grouped<'a>(pub(super) &'a Expr);

impl Translate for &Expr {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        match self {
            Expr::And(expr) => and(expr, clause),
            Expr::Arg(_) => Err(Error::unsupported_expression(self.kind_name())),
            Expr::BinaryOp(expr) => binary_op(expr, clause),
            Expr::Column(expr) => column(expr, clause),
            Expr::InList(expr) => in_list(expr, clause),
            Expr::IsNull(expr) => is_null(expr, clause),
            Expr::Like(expr) => like(expr, clause),
            Expr::Not(expr) => not(expr, clause),
            Expr::Or(expr) => or(expr, clause),
            Expr::Value(value) => value.translate(clause),
        }
    }
}

impl Translate for &stmt::Value {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        clause.push_param(self.clone(), None);
        Ok(())
    }
}

impl Translate for stmt::BinaryOp {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        clause.push_sql(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Ne => "<>",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Add => "+",
            stmt::BinaryOp::Sub => "-",
            stmt::BinaryOp::Mul => "*",
            stmt::BinaryOp::Div => "/",
        });
        Ok(())
    }
}

impl Translate for Operand<'_> {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        match self.0 {
            Expr::Column(_) | Expr::Value(_) | Expr::Arg(_) => self.0.translate(clause),
            expr => {
                fmt!(clause, "(", expr, ")");
                Ok(())
            }
        }
    }
}

impl Translate for Grouped<'_> {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        if self.0.is_logical() {
            fmt!(clause, "(", self.0, ")");
            Ok(())
        } else {
            self.0.translate(clause)
        }
    }
}

fn and(expr: &stmt::ExprAnd, clause: &mut SqlClause) -> Result<()> {
    if expr.operands.is_empty() {
        return "1 = 1".translate(clause);
    }

    Delimited(expr.iter().map(Grouped), " AND ").translate(clause)
}

fn or(expr: &stmt::ExprOr, clause: &mut SqlClause) -> Result<()> {
    if expr.operands.is_empty() {
        return "1 = 0".translate(clause);
    }

    Delimited(expr.iter().map(Grouped), " OR ").translate(clause)
}

fn binary_op(expr: &stmt::ExprBinaryOp, clause: &mut SqlClause) -> Result<()> {
    fmt!(clause, Operand(&expr.lhs), " ", expr.op, " ", Operand(&expr.rhs));
    Ok(())
}

fn column(expr: &stmt::ExprColumn, clause: &mut SqlClause) -> Result<()> {
    if let Some(table) = &expr.table {
        fmt!(clause, Ident(table), ".");
    }

    Ident(&expr.name).translate(clause)
}

fn in_list(expr: &stmt::ExprInList, clause: &mut SqlClause) -> Result<()> {
    // `x IN ()` is not valid SQL; an empty list matches nothing.
    if expr.list.is_empty() {
        return "1 = 0".translate(clause);
    }

    fmt!(clause, Operand(&expr.expr), " IN (", Comma(&expr.list), ")");
    Ok(())
}

fn is_null(expr: &stmt::ExprIsNull, clause: &mut SqlClause) -> Result<()> {
    if expr.negate {
        fmt!(clause, Operand(&expr.expr), " IS NOT NULL");
    } else {
        fmt!(clause, Operand(&expr.expr), " IS NULL");
    }
    Ok(())
}

fn like(expr: &stmt::ExprLike, clause: &mut SqlClause) -> Result<()> {
    fmt!(clause, Operand(&expr.expr), " LIKE ", Operand(&expr.pattern));
    Ok(())
}

fn not(expr: &stmt::ExprNot, clause: &mut SqlClause) -> Result<()> {
    fmt!(clause, "NOT (", &*expr.expr, ")");
    Ok(())
}
