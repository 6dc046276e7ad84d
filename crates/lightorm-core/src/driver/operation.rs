use super::Command;

/// An operation handed to [`Connection::exec`](super::Connection::exec).
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Run a command and report the number of affected rows
    Execute(Command),

    /// Run a command and return the first column of the first row
    QueryScalar(Command),

    /// Run a command and return a cursor over its rows
    Query(Command),

    /// Transaction control
    Transaction(Transaction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Begin,
    Commit,
    Rollback,
}

impl Operation {
    /// The command carried by the operation, if any.
    pub fn command(&self) -> Option<&Command> {
        match self {
            Self::Execute(cmd) | Self::QueryScalar(cmd) | Self::Query(cmd) => Some(cmd),
            Self::Transaction(_) => None,
        }
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, Self::Transaction(_))
    }
}

impl From<Transaction> for Operation {
    fn from(value: Transaction) -> Self {
        Self::Transaction(value)
    }
}
