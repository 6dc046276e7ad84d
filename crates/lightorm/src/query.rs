use crate::{
    scope::{ConnectionScope, CursorGuard},
    FromRow, Plan, Result, RowMap,
};

use lightorm_core::{
    driver::{Command, Operation},
    Connection,
};

use std::{fmt, iter::FusedIterator, marker::PhantomData, sync::Arc};

/// Lazy sequence of rows materialized as `T`.
///
/// Nothing touches the database until the first call to `next`. At that
/// point the connection is opened if needed and the command runs. The
/// connection is released once the rows are exhausted, when an error ends the
/// sequence, or when the query is dropped early. Dropping early also cancels
/// the command.
pub struct Query<'a, C: Connection + ?Sized, T> {
    state: State<'a, C>,
    plan: Arc<Plan>,
    _p: PhantomData<fn() -> T>,
}

enum State<'a, C: Connection + ?Sized> {
    Pending {
        conn: &'a mut C,
        command: Command,
    },
    Running {
        // Field order is drop order: the cursor goes before the connection.
        cursor: CursorGuard,
        scope: ConnectionScope<'a, C>,
        map: Arc<RowMap>,
    },
    Done,
}

impl<'a, C: Connection + ?Sized, T: FromRow> Query<'a, C, T> {
    pub(crate) fn new(conn: &'a mut C, command: Command, plan: Arc<Plan>) -> Self {
        Query {
            state: State::Pending { conn, command },
            plan,
            _p: PhantomData,
        }
    }

    /// Returns `true` once the command has been sent to the database.
    pub fn is_started(&self) -> bool {
        !matches!(self.state, State::Pending { .. })
    }

    fn start(&self, conn: &'a mut C, command: Command) -> Result<State<'a, C>> {
        let mut scope = ConnectionScope::acquire(conn)?;
        let cursor = CursorGuard::new(scope.exec(Operation::Query(command))?.rows.into_cursor()?);
        let map = self.plan.row_map(T::fields(), cursor.columns());

        Ok(State::Running {
            cursor,
            scope,
            map,
        })
    }
}

impl<C: Connection + ?Sized, T: FromRow> Iterator for Query<'_, C, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Pending { conn, command } => match self.start(conn, command) {
                    Ok(running) => self.state = running,
                    Err(err) => return Some(Err(err)),
                },
                State::Running {
                    mut cursor,
                    scope,
                    map,
                } => match cursor.next() {
                    Ok(Some(row)) => {
                        let item = T::from_row(row, &map);
                        self.state = State::Running {
                            cursor,
                            scope,
                            map,
                        };
                        return Some(item);
                    }
                    Ok(None) => {
                        drop(cursor);
                        drop(scope);
                        return None;
                    }
                    Err(err) => {
                        drop(cursor);
                        drop(scope);
                        return Some(Err(err));
                    }
                },
                State::Done => return None,
            }
        }
    }
}

impl<C: Connection + ?Sized, T: FromRow> FusedIterator for Query<'_, C, T> {}

impl<C: Connection + ?Sized, T> fmt::Debug for Query<'_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Pending { .. } => "Pending",
            State::Running { .. } => "Running",
            State::Done => "Done",
        };

        f.debug_struct("Query")
            .field("state", &state)
            .field("plan", &self.plan)
            .finish()
    }
}
