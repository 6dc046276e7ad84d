use super::{Comma, Ident, Translate};
use crate::{
    stmt::{Assignment, Delete, Direction, Insert, OrderBy, Select, Update},
    SqlClause, Statement,
};

use lightorm_core::{stmt::Value, Error, Result};

impl Translate for &Statement {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        match self {
            Statement::Select(stmt) => stmt.translate(clause),
            Statement::Insert(stmt) => stmt.translate(clause),
            Statement::Update(stmt) => stmt.translate(clause),
            Statement::Delete(stmt) => stmt.translate(clause),
        }
    }
}

impl Translate for &Select {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        if self.columns.is_empty() {
            fmt!(clause, "SELECT *");
        } else {
            fmt!(clause, "SELECT ", Comma(self.columns.iter().map(Ident)));
        }

        fmt!(clause, " FROM ", Ident(&self.table));

        if let Some(filter) = &self.filter {
            fmt!(clause, " WHERE ", filter);
        }

        if !self.order_by.is_empty() {
            fmt!(clause, " ORDER BY ", Comma(&self.order_by));
        }

        if let Some(limit) = self.limit {
            fmt!(clause, " LIMIT ", &Value::I64(limit));
        }

        if let Some(offset) = self.offset {
            // SQLite and MySQL reject OFFSET without LIMIT
            if self.limit.is_none() {
                fmt!(clause, " LIMIT -1");
            }
            fmt!(clause, " OFFSET ", &Value::I64(offset));
        }

        Ok(())
    }
}

impl Translate for &OrderBy {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        let direction = match self.direction {
            Direction::Asc => " ASC",
            Direction::Desc => " DESC",
        };
        fmt!(clause, Ident(&self.column), direction);
        Ok(())
    }
}

impl Translate for &Insert {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        if self.rows.is_empty() {
            return Err(Error::invalid_statement(format!(
                "insert into `{}` has no rows",
                self.table
            )));
        }

        if let Some(row) = self.rows.iter().find(|row| row.len() != self.columns.len()) {
            return Err(Error::invalid_statement(format!(
                "insert into `{}` has {} columns but a row of {} values",
                self.table,
                self.columns.len(),
                row.len()
            )));
        }

        fmt!(
            clause,
            "INSERT INTO ",
            Ident(&self.table),
            " (",
            Comma(self.columns.iter().map(Ident)),
            ") VALUES ",
            Comma(self.rows.iter().map(InsertRow)),
        );
        Ok(())
    }
}

struct InsertRow<'a>(&'a Vec<Value>);

impl Translate for InsertRow<'_> {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        fmt!(clause, "(", Comma(self.0), ")");
        Ok(())
    }
}

impl Translate for &Update {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        if self.assignments.is_empty() {
            return Err(Error::invalid_statement(format!(
                "update of `{}` assigns no columns",
                self.table
            )));
        }

        fmt!(
            clause,
            "UPDATE ",
            Ident(&self.table),
            " SET ",
            Comma(&self.assignments)
        );

        if let Some(filter) = &self.filter {
            fmt!(clause, " WHERE ", filter);
        }

        Ok(())
    }
}

impl Translate for &Assignment {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        fmt!(clause, Ident(&self.column), " = ", &self.expr);
        Ok(())
    }
}

impl Translate for &Delete {
    fn translate(self, clause: &mut SqlClause) -> Result<()> {
        fmt!(clause, "DELETE FROM ", Ident(&self.table));

        if let Some(filter) = &self.filter {
            fmt!(clause, " WHERE ", filter);
        }

        Ok(())
    }
}
