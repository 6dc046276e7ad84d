#[macro_use]
mod fmt;
use fmt::Translate;

mod delim;
use delim::{Comma, Delimited};

mod expr;

mod ident;
use ident::Ident;

mod statement;

use crate::{SqlClause, Statement};

use lightorm_core::{stmt::Expr, Result};

/// Translates an expression into a parameterized clause.
///
/// Constants are always bound as parameters; their values never appear in
/// the clause text. On error no clause is returned.
pub fn translate(expr: &Expr) -> Result<SqlClause> {
    let mut clause = SqlClause::empty();
    expr.translate(&mut clause)?;
    Ok(clause)
}

impl Statement {
    /// Translates the statement into a parameterized clause.
    pub fn to_clause(&self) -> Result<SqlClause> {
        let mut clause = SqlClause::empty();
        self.translate(&mut clause)?;
        Ok(clause)
    }
}
