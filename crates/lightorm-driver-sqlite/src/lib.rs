mod cursor;
use cursor::BufferedCursor;

mod value;
pub(crate) use value::Value;

use lightorm_core::{
    bail,
    driver::{Column, Command, CommandKind, Driver, Operation, Response, Row, Transaction},
    err,
    stmt::Type,
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Clone)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL, either
    /// `sqlite::memory:` or `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Returns a new, closed connection.
    pub fn connection(&self) -> Connection {
        Connection {
            target: self.clone(),
            db: None,
            open: false,
        }
    }
}

impl Driver for Sqlite {
    fn provider(&self) -> &'static str {
        "sqlite"
    }

    fn connect(&self) -> Result<Box<dyn lightorm_core::Connection>> {
        Ok(Box::new(self.connection()))
    }
}

/// A SQLite connection.
///
/// File databases release their handle on close. An in-memory database only
/// lives as long as its handle, so an in-memory connection keeps the handle
/// across close and reopen and only drops it with the connection.
#[derive(Debug)]
pub struct Connection {
    target: Sqlite,
    db: Option<RusqliteConnection>,
    open: bool,
}

impl Connection {
    fn db(&self) -> Result<&RusqliteConnection> {
        match &self.db {
            Some(db) if self.open => Ok(db),
            _ => bail!("connection is closed"),
        }
    }

    fn prepare<'a>(
        db: &'a RusqliteConnection,
        command: &Command,
    ) -> Result<rusqlite::CachedStatement<'a>> {
        if command.kind == CommandKind::StoredProcedure {
            return Err(Error::unsupported_feature(
                "SQLite does not support stored procedures",
            ));
        }

        db.prepare_cached(&command.text).map_err(Error::driver)
    }

    fn exec_count(&self, command: Command) -> Result<Response> {
        let db = self.db()?;
        let mut stmt = Self::prepare(db, &command)?;
        bind(&mut stmt, command)?;

        if stmt.column_count() == 0 {
            let count = stmt.raw_execute().map_err(Error::driver)?;
            return Ok(Response::count(count as u64));
        }

        // Row-returning statements (`SELECT`, `... RETURNING`) run to
        // completion; their rows are discarded.
        let mut rows = stmt.raw_query();
        while rows.next().map_err(Error::driver)?.is_some() {}
        drop(rows);

        let count = if stmt.readonly() { 0 } else { db.changes() };
        Ok(Response::count(count as u64))
    }

    fn exec_scalar(&self, command: Command) -> Result<Response> {
        let db = self.db()?;
        let mut stmt = Self::prepare(db, &command)?;
        bind(&mut stmt, command)?;

        let ty = column_types(&stmt).first().copied().flatten();
        let mut rows = stmt.raw_query();

        let value = match rows.next().map_err(Error::driver)? {
            Some(row) => Value::from_sql(row.get_ref(0).map_err(Error::driver)?, ty).into_inner(),
            None => lightorm_core::stmt::Value::Null,
        };

        Ok(Response::value(value))
    }

    fn exec_query(&self, command: Command) -> Result<Response> {
        let db = self.db()?;
        let mut stmt = Self::prepare(db, &command)?;
        bind(&mut stmt, command)?;

        let types = column_types(&stmt);
        let columns: Vec<Column> = stmt
            .column_names()
            .into_iter()
            .enumerate()
            .map(|(ordinal, name)| Column {
                name: name.to_string(),
                ordinal,
                ty: types[ordinal],
            })
            .collect();

        let mut rows = stmt.raw_query();
        let mut buffered = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut values = Vec::with_capacity(columns.len());

            for column in &columns {
                let value = row.get_ref(column.ordinal).map_err(Error::driver)?;
                values.push(Value::from_sql(value, column.ty).into_inner());
            }

            buffered.push(Row::from_vec(values));
        }

        Ok(Response::cursor(BufferedCursor::new(columns, buffered)))
    }

    fn exec_transaction(&self, op: Transaction) -> Result<Response> {
        let sql = match op {
            Transaction::Begin => "BEGIN",
            Transaction::Commit => "COMMIT",
            Transaction::Rollback => "ROLLBACK",
        };

        self.db()?.execute_batch(sql).map_err(Error::driver)?;
        Ok(Response::count(0))
    }
}

impl lightorm_core::Connection for Connection {
    fn provider(&self) -> &'static str {
        "sqlite"
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) -> Result<()> {
        if self.open {
            return Ok(());
        }

        if self.db.is_none() {
            let db = match &self.target {
                Sqlite::File(path) => RusqliteConnection::open(path).map_err(|e| {
                    Error::driver(e).context(err!("failed to open {}", path.display()))
                }),
                Sqlite::InMemory => RusqliteConnection::open_in_memory().map_err(Error::driver),
            }?;

            self.db = Some(db);
        }

        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.open = false;

        if let Sqlite::InMemory = self.target {
            return Ok(());
        }

        match self.db.take() {
            Some(db) => db.close().map_err(|(_, err)| Error::driver(err)),
            None => Ok(()),
        }
    }

    fn exec(&mut self, op: Operation) -> Result<Response> {
        if let Some(command) = op.command() {
            log::trace!("executing command; text={:?}", command.text);
        }

        match op {
            Operation::Execute(command) => self.exec_count(command),
            Operation::QueryScalar(command) => self.exec_scalar(command),
            Operation::Query(command) => self.exec_query(command),
            Operation::Transaction(op) => self.exec_transaction(op),
        }
    }
}

/// Binds named parameters by placeholder token and the rest by position.
/// Every placeholder in the statement must receive a value.
fn bind(stmt: &mut rusqlite::Statement<'_>, command: Command) -> Result<()> {
    let mut position = 0;
    let mut bound = vec![false; stmt.parameter_count()];

    for param in command.params {
        let index = match &param.name {
            Some(name) => stmt
                .parameter_index(name)
                .map_err(Error::driver)?
                .ok_or_else(|| Error::invalid_statement(format!("no placeholder named `{name}`")))?,
            None => {
                position += 1;
                position
            }
        };

        stmt.raw_bind_parameter(index, Value::from(param.value))
            .map_err(Error::driver)?;

        if let Some(slot) = bound.get_mut(index - 1) {
            *slot = true;
        }
    }

    match bound.iter().position(|bound| !bound) {
        Some(missing) => {
            let index = missing + 1;
            let name = match stmt.parameter_name(index) {
                Some(name) => name.to_string(),
                None => format!("?{index}"),
            };
            Err(Error::invalid_statement(format!(
                "no value for placeholder `{name}`"
            )))
        }
        None => Ok(()),
    }
}

fn column_types(stmt: &rusqlite::Statement<'_>) -> Vec<Option<Type>> {
    stmt.columns()
        .iter()
        .map(|column| column.decl_type().and_then(Type::from_decl))
        .collect()
}
