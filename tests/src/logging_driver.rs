use crate::{Event, ExecLog};

use lightorm::{
    driver::{Column, Cursor, Operation, Response, Row, Rows},
    err, Connection, Driver, Result,
};
use std::{fmt, sync::Arc};

type FailWhen = Arc<dyn Fn(&Operation) -> bool + Send + Sync>;

/// A driver wrapper that records every connection event, and can be told to
/// fail chosen operations.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,
    log: ExecLog,
    fail_when: Option<Failure>,
}

/// A connection wrapper that records every event into an [`ExecLog`].
#[derive(Debug)]
pub struct LoggingConnection {
    inner: Box<dyn Connection>,
    log: ExecLog,
    fail_when: Option<Failure>,
}

#[derive(Clone)]
struct Failure(FailWhen);

#[derive(Debug)]
struct LoggingCursor {
    inner: Box<dyn Cursor>,
    log: ExecLog,
}

impl LoggingDriver {
    pub fn new(driver: impl Driver) -> Self {
        Self {
            inner: Box::new(driver),
            log: ExecLog::default(),
            fail_when: None,
        }
    }

    /// Makes connections fail every operation matching `predicate` before it
    /// reaches the wrapped driver.
    pub fn fail_when(
        mut self,
        predicate: impl Fn(&Operation) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.fail_when = Some(Failure(Arc::new(predicate)));
        self
    }

    pub fn log(&self) -> ExecLog {
        self.log.clone()
    }

    pub fn logging_connection(&self) -> Result<LoggingConnection> {
        Ok(LoggingConnection {
            inner: self.inner.connect()?,
            log: self.log.clone(),
            fail_when: self.fail_when.clone(),
        })
    }
}

impl Driver for LoggingDriver {
    fn provider(&self) -> &'static str {
        self.inner.provider()
    }

    fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(self.logging_connection()?))
    }
}

impl Connection for LoggingConnection {
    fn provider(&self) -> &'static str {
        self.inner.provider()
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn open(&mut self) -> Result<()> {
        self.log.push(Event::Open);
        self.inner.open()
    }

    fn close(&mut self) -> Result<()> {
        self.log.push(Event::Close);
        self.inner.close()
    }

    fn exec(&mut self, operation: Operation) -> Result<Response> {
        self.log.push(Event::Exec(operation.clone()));

        if let Some(Failure(fail_when)) = &self.fail_when {
            if fail_when(&operation) {
                return Err(err!("injected failure"));
            }
        }

        let response = self.inner.exec(operation)?;

        let rows = match response.rows {
            Rows::Cursor(inner) => Rows::Cursor(Box::new(LoggingCursor {
                inner,
                log: self.log.clone(),
            })),
            rows => rows,
        };

        Ok(Response { rows })
    }
}

impl Cursor for LoggingCursor {
    fn columns(&self) -> &[Column] {
        self.inner.columns()
    }

    fn next(&mut self) -> Result<Option<Row>> {
        self.inner.next()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn cancel(&mut self) -> Result<()> {
        self.log.push(Event::Cancel);
        self.inner.cancel()
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Failure(..)")
    }
}
