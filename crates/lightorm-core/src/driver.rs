mod command;
pub use command::{Command, CommandKind, Param};

mod cursor;
pub use cursor::{Column, Cursor, Row};

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::{Operation, Transaction};

use std::fmt::Debug;

/// Creates connections for one kind of database.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Name identifying the provider, e.g. `"sqlite"`.
    fn provider(&self) -> &'static str;

    /// Returns a new connection in the closed state.
    fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// A single database connection.
///
/// A connection starts closed. Callers either manage the open/close bracket
/// themselves or let the execution pipeline open the connection for the
/// duration of one call. A connection is never shared across concurrent
/// calls.
pub trait Connection: Debug + Send {
    /// Name identifying the provider. Connections of the same provider share
    /// cached execution plans.
    fn provider(&self) -> &'static str;

    fn is_open(&self) -> bool;

    fn open(&mut self) -> crate::Result<()>;

    fn close(&mut self) -> crate::Result<()>;

    /// Execute a database operation
    fn exec(&mut self, op: Operation) -> crate::Result<Response>;
}

impl<T: Connection + ?Sized> Connection for Box<T> {
    fn provider(&self) -> &'static str {
        (**self).provider()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn open(&mut self) -> crate::Result<()> {
        (**self).open()
    }

    fn close(&mut self) -> crate::Result<()> {
        (**self).close()
    }

    fn exec(&mut self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op)
    }
}
