use crate::{
    cache,
    scope::{ConnectionScope, CursorGuard},
    CommandDefinition, Error, FromRow, Params, Plan, Query, Result, Signature, Table,
};

use lightorm_core::{
    driver::{Command, Operation, Transaction},
    stmt::Value,
    Connection,
};

use std::{any::TypeId, sync::Arc};

/// Execution entry points, available on every [`Connection`].
///
/// Each call looks up (or builds) the cached plan for its signature, binds
/// the parameter object, and runs the command. A connection that is closed
/// on entry is opened for the call and closed again before it returns. A
/// connection that is already open is left open.
pub trait ConnectionExt: Connection {
    /// Runs a command and returns the number of affected rows.
    fn execute<'c>(
        &mut self,
        command: impl Into<CommandDefinition<'c>>,
        params: &dyn Params,
    ) -> Result<u64> {
        let command = command.into();
        let plan = plan_for(&*self, command, TypeId::of::<()>(), params);
        let mut scope = ConnectionScope::acquire(self)?;
        scope
            .exec(Operation::Execute(bind(command, &plan, params)))?
            .rows
            .into_count()
    }

    /// Runs a command and returns the first column of the first row, or null
    /// when there are no rows.
    fn execute_scalar<'c>(
        &mut self,
        command: impl Into<CommandDefinition<'c>>,
        params: &dyn Params,
    ) -> Result<Value> {
        let command = command.into();
        let plan = plan_for(&*self, command, TypeId::of::<Value>(), params);
        let mut scope = ConnectionScope::acquire(self)?;
        scope
            .exec(Operation::QueryScalar(bind(command, &plan, params)))?
            .rows
            .into_value()
    }

    /// Runs a command and loads every row into memory.
    fn execute_reader<'c>(
        &mut self,
        command: impl Into<CommandDefinition<'c>>,
        params: &dyn Params,
    ) -> Result<Table> {
        let command = command.into();
        let plan = plan_for(&*self, command, TypeId::of::<Table>(), params);
        let mut scope = ConnectionScope::acquire(self)?;
        let mut cursor = CursorGuard::new(
            scope
                .exec(Operation::Query(bind(command, &plan, params)))?
                .rows
                .into_cursor()?,
        );
        Table::load(&mut *cursor)
    }

    /// Returns a lazy iterator over the rows of a command, materialized as
    /// `T`. The command does not run until the iterator is first advanced.
    fn query<'a, 'c, T: FromRow + 'static>(
        &'a mut self,
        command: impl Into<CommandDefinition<'c>>,
        params: &dyn Params,
    ) -> Query<'a, Self, T> {
        let command = command.into();
        let plan = plan_for(&*self, command, TypeId::of::<T>(), params);
        let bound = bind(command, &plan, params);
        Query::new(self, bound, plan)
    }

    /// Returns the first row materialized as `T`, or `T::default()` when the
    /// command returns no rows. Remaining rows are not read.
    fn query_single<'c, T: FromRow + Default + 'static>(
        &mut self,
        command: impl Into<CommandDefinition<'c>>,
        params: &dyn Params,
    ) -> Result<T> {
        let command = command.into();
        let plan = plan_for(&*self, command, TypeId::of::<T>(), params);
        let mut scope = ConnectionScope::acquire(self)?;
        let mut cursor = CursorGuard::new(
            scope
                .exec(Operation::Query(bind(command, &plan, params)))?
                .rows
                .into_cursor()?,
        );

        match cursor.next()? {
            Some(row) => {
                let map = plan.row_map(T::fields(), cursor.columns());
                T::from_row(row, &map)
            }
            None => Ok(T::default()),
        }
    }

    /// Runs each statement with its parameter object inside one transaction.
    ///
    /// `statements` and `params` must have the same length; otherwise nothing
    /// runs. On any failure the transaction is rolled back and the original
    /// error is returned. The connection is closed when the call returns,
    /// whatever the outcome.
    fn execute_trans(&mut self, statements: &[&str], params: &[&dyn Params]) -> Result<()> {
        if statements.len() != params.len() {
            return Err(Error::argument_mismatch(statements.len(), params.len()));
        }

        if !self.is_open() {
            log::debug!("opening connection; provider={}", self.provider());
            self.open()?;
        }

        let result = match self.exec(Transaction::Begin.into()) {
            Ok(_) => {
                let result = run_batch(self, statements, params)
                    .and_then(|()| self.exec(Transaction::Commit.into()).map(drop));

                if let Err(err) = &result {
                    log::debug!("rolling back transaction; error={err}");
                    if let Err(rollback) = self.exec(Transaction::Rollback.into()) {
                        log::error!("failed to roll back transaction; error={rollback}");
                    }
                }

                result
            }
            Err(err) => Err(err),
        };

        log::debug!("closing connection; provider={}", self.provider());
        if let Err(err) = self.close() {
            log::warn!("failed to close connection; error={err}");
        }

        result
    }
}

impl<C: Connection + ?Sized> ConnectionExt for C {}

fn run_batch<C: Connection + ?Sized>(
    conn: &mut C,
    statements: &[&str],
    params: &[&dyn Params],
) -> Result<()> {
    for (statement, params) in statements.iter().zip(params) {
        conn.execute(*statement, *params)?;
    }

    Ok(())
}

fn plan_for<C: Connection + ?Sized>(
    conn: &C,
    command: CommandDefinition<'_>,
    result: TypeId,
    params: &dyn Params,
) -> Arc<Plan> {
    let signature = Signature::new(
        command.text,
        command.kind,
        conn.provider(),
        result,
        params.shape(),
    );

    cache::global().get_or_build(signature, || {
        Plan::new(crate::Binder::build(
            command.text,
            command.kind,
            &params.names(),
        ))
    })
}

fn bind(command: CommandDefinition<'_>, plan: &Plan, params: &dyn Params) -> Command {
    Command::new(command.text, command.kind).with_params(plan.binder().bind(params.values()))
}
